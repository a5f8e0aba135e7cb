use serde::{Deserialize, Serialize};

/// Статус административной транзакции (входящего документа)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    #[default]
    Pending,
    Completed,
    Rejected,
}

impl TransactionStatus {
    pub fn code(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "قيد الانتظار",
            TransactionStatus::Completed => "مكتملة",
            TransactionStatus::Rejected => "مرفوضة",
        }
    }

    pub fn all() -> Vec<TransactionStatus> {
        vec![
            TransactionStatus::Pending,
            TransactionStatus::Completed,
            TransactionStatus::Rejected,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(TransactionStatus::Pending),
            "completed" => Some(TransactionStatus::Completed),
            "rejected" => Some(TransactionStatus::Rejected),
            _ => None,
        }
    }

    /// Закрыть можно только ожидающую транзакцию; повтор того же статуса не ошибка
    pub fn transition_to(&self, target: TransactionStatus) -> Result<TransactionStatus, String> {
        if *self == target || *self == TransactionStatus::Pending {
            Ok(target)
        } else {
            Err(format!(
                "لا يمكن تغيير حالة المعاملة من \"{}\" إلى \"{}\"",
                self.label(),
                target.label()
            ))
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_can_close() {
        assert!(TransactionStatus::Pending
            .transition_to(TransactionStatus::Completed)
            .is_ok());
        assert!(TransactionStatus::Pending
            .transition_to(TransactionStatus::Rejected)
            .is_ok());
    }

    #[test]
    fn test_closed_is_terminal() {
        assert!(TransactionStatus::Completed
            .transition_to(TransactionStatus::Pending)
            .is_err());
        assert!(TransactionStatus::Rejected
            .transition_to(TransactionStatus::Completed)
            .is_err());
    }
}
