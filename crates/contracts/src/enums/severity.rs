use serde::{Deserialize, Serialize};

/// Степень серьёзности неисправности
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn code(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "منخفضة",
            Severity::Medium => "متوسطة",
            Severity::High => "عالية",
            Severity::Critical => "حرجة",
        }
    }

    pub fn all() -> Vec<Severity> {
        vec![Severity::Low, Severity::Medium, Severity::High, Severity::Critical]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "low" => Some(Severity::Low),
            "medium" => Some(Severity::Medium),
            "high" => Some(Severity::High),
            "critical" => Some(Severity::Critical),
            _ => None,
        }
    }
}
