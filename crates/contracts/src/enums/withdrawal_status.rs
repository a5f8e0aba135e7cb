use serde::{Deserialize, Serialize};

/// Статус заявки на выдачу со склада
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WithdrawalStatus {
    #[default]
    Pending,
    Approved,
    Issued,
    Rejected,
}

impl WithdrawalStatus {
    pub fn code(&self) -> &'static str {
        match self {
            WithdrawalStatus::Pending => "pending",
            WithdrawalStatus::Approved => "approved",
            WithdrawalStatus::Issued => "issued",
            WithdrawalStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WithdrawalStatus::Pending => "قيد الانتظار",
            WithdrawalStatus::Approved => "تمت الموافقة",
            WithdrawalStatus::Issued => "تم الصرف",
            WithdrawalStatus::Rejected => "مرفوض",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(WithdrawalStatus::Pending),
            "approved" => Some(WithdrawalStatus::Approved),
            "issued" => Some(WithdrawalStatus::Issued),
            "rejected" => Some(WithdrawalStatus::Rejected),
            _ => None,
        }
    }
}
