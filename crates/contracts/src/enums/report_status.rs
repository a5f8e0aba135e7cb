use serde::{Deserialize, Serialize};

/// Статус отчёта о неисправности
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    #[default]
    Open,
    Closed,
    OutOfOrder,
}

impl ReportStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ReportStatus::Open => "open",
            ReportStatus::Closed => "closed",
            ReportStatus::OutOfOrder => "out_of_order",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Open => "مفتوح",
            ReportStatus::Closed => "مغلق",
            ReportStatus::OutOfOrder => "خارج الخدمة",
        }
    }

    pub fn all() -> Vec<ReportStatus> {
        vec![ReportStatus::Open, ReportStatus::Closed, ReportStatus::OutOfOrder]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "open" => Some(ReportStatus::Open),
            "closed" => Some(ReportStatus::Closed),
            "out_of_order" => Some(ReportStatus::OutOfOrder),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
