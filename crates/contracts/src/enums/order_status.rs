use serde::{Deserialize, Serialize};

/// Статус заказа прямой закупки и договора на стоматологическое оборудование
///
/// Жизненный цикл: new → approved → contracted → delivered; отклонить можно
/// до заключения договора.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    New,
    Approved,
    Contracted,
    Delivered,
    Rejected,
}

impl OrderStatus {
    /// Код статуса (хранится в БД и передаётся в API)
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Approved => "approved",
            OrderStatus::Contracted => "contracted",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Rejected => "rejected",
        }
    }

    /// Подпись для UI
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::New => "جديد",
            OrderStatus::Approved => "تمت الموافقة",
            OrderStatus::Contracted => "تم التعاقد",
            OrderStatus::Delivered => "تم التسليم",
            OrderStatus::Rejected => "مرفوض",
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::New,
            OrderStatus::Approved,
            OrderStatus::Contracted,
            OrderStatus::Delivered,
            OrderStatus::Rejected,
        ]
    }

    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "new" => Some(OrderStatus::New),
            "approved" => Some(OrderStatus::Approved),
            "contracted" => Some(OrderStatus::Contracted),
            "delivered" => Some(OrderStatus::Delivered),
            "rejected" => Some(OrderStatus::Rejected),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Rejected)
    }

    /// Статусы, в которые можно перевести заказ из текущего
    pub fn next_statuses(&self) -> &'static [OrderStatus] {
        match self {
            OrderStatus::New => &[OrderStatus::Approved, OrderStatus::Rejected],
            OrderStatus::Approved => &[OrderStatus::Contracted, OrderStatus::Rejected],
            OrderStatus::Contracted => &[OrderStatus::Delivered],
            OrderStatus::Delivered | OrderStatus::Rejected => &[],
        }
    }

    /// Проверка перехода; повторная установка того же статуса допускается
    pub fn can_transition_to(&self, target: OrderStatus) -> bool {
        *self == target || self.next_statuses().contains(&target)
    }

    /// Цепочка переходов от `New` до этого статуса
    pub fn path_from_new(&self) -> Vec<OrderStatus> {
        match self {
            OrderStatus::New => vec![],
            OrderStatus::Approved => vec![OrderStatus::Approved],
            OrderStatus::Contracted => vec![OrderStatus::Approved, OrderStatus::Contracted],
            OrderStatus::Delivered => vec![
                OrderStatus::Approved,
                OrderStatus::Contracted,
                OrderStatus::Delivered,
            ],
            OrderStatus::Rejected => vec![OrderStatus::Rejected],
        }
    }

    /// Проверка перехода с локализованным сообщением об ошибке
    pub fn transition_to(&self, target: OrderStatus) -> Result<OrderStatus, String> {
        if self.can_transition_to(target) {
            Ok(target)
        } else {
            Err(format!(
                "لا يمكن تغيير الحالة من \"{}\" إلى \"{}\"",
                self.label(),
                target.label()
            ))
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_forward() {
        assert!(OrderStatus::New.can_transition_to(OrderStatus::Approved));
        assert!(OrderStatus::Approved.can_transition_to(OrderStatus::Contracted));
        assert!(OrderStatus::Contracted.can_transition_to(OrderStatus::Delivered));
    }

    #[test]
    fn test_no_skipping_or_reopening() {
        assert!(!OrderStatus::New.can_transition_to(OrderStatus::Delivered));
        assert!(!OrderStatus::Contracted.can_transition_to(OrderStatus::Rejected));
        assert!(!OrderStatus::Rejected.can_transition_to(OrderStatus::New));
        assert!(!OrderStatus::Delivered.can_transition_to(OrderStatus::Approved));
    }

    #[test]
    fn test_same_status_is_allowed() {
        assert_eq!(
            OrderStatus::Delivered.transition_to(OrderStatus::Delivered),
            Ok(OrderStatus::Delivered)
        );
    }

    #[test]
    fn test_path_from_new_is_walkable() {
        for target in OrderStatus::all() {
            let mut current = OrderStatus::New;
            for step in target.path_from_new() {
                current = current.transition_to(step).unwrap();
            }
            assert_eq!(current, target);
        }
    }

    #[test]
    fn test_codes_roundtrip() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(OrderStatus::from_code("unknown"), None);
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&OrderStatus::Contracted).unwrap();
        assert_eq!(json, "\"contracted\"");
    }
}
