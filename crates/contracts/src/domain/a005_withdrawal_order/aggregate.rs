use crate::domain::a004_inventory_item::aggregate::InventoryItem;
use crate::domain::common::validation::{non_empty, require_positive, require_text};
use crate::domain::common::{generate_code, AggregateId, BaseAggregate};
use crate::enums::WithdrawalStatus;
use crate::shared::analytics::Filterable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор заявки на выдачу
    WithdrawalOrderId
);

/// Заявка на выдачу позиции со склада учреждению
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalOrder {
    /// code — номер заявки, description — наименование позиции, comment — заметки
    #[serde(flatten)]
    pub base: BaseAggregate<WithdrawalOrderId>,

    /// ID складской позиции (a004)
    pub item_ref: String,
    pub beneficiary_facility: String,
    pub requested_quantity: i64,
    pub status: WithdrawalStatus,
    pub recipient_name: String,
    pub recipient_contact: Option<String>,
    pub withdrawal_date: NaiveDate,
}

impl WithdrawalOrder {
    /// Заявка по позиции склада. Количество проверяется по доступному остатку,
    /// сама выдача фиксируется через `InventoryItem::issue`.
    pub fn new_for_item(
        dto: &WithdrawalOrderDto,
        item: &InventoryItem,
        today: NaiveDate,
    ) -> Result<Self, String> {
        let order = Self {
            base: {
                let mut base = BaseAggregate::new(
                    WithdrawalOrderId::new_v4(),
                    generate_code("WD"),
                    item.item_name().to_string(),
                );
                base.set_comment(dto.comment.clone());
                base
            },
            item_ref: item.base.id.as_string(),
            beneficiary_facility: dto.beneficiary_facility.trim().to_string(),
            requested_quantity: dto.requested_quantity,
            status: WithdrawalStatus::Issued,
            recipient_name: dto.recipient_name.trim().to_string(),
            recipient_contact: non_empty(dto.recipient_contact.clone()),
            withdrawal_date: dto.withdrawal_date.unwrap_or(today),
        };
        order.validate_against(item)?;
        Ok(order)
    }

    pub fn item_name(&self) -> &str {
        &self.base.description
    }

    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.item_ref, "الصنف")?;
        require_text(&self.beneficiary_facility, "الجهة المستفيدة")?;
        require_text(&self.recipient_name, "اسم المستلم")?;
        require_positive(self.requested_quantity, "الكمية المطلوبة")?;
        Ok(())
    }

    /// Проверка заявки относительно остатка позиции
    pub fn validate_against(&self, item: &InventoryItem) -> Result<(), String> {
        self.validate()?;
        let available = item.available_quantity();
        if self.requested_quantity > available {
            return Err(format!(
                "الكمية المطلوبة ({}) أكبر من الكمية المتاحة ({})",
                self.requested_quantity, available
            ));
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

crate::impl_aggregate_root!(
    WithdrawalOrder,
    WithdrawalOrderId,
    "a005",
    "withdrawal_order",
    "أمر صرف",
    "أوامر الصرف"
);

impl Filterable for WithdrawalOrder {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.base.code.as_str(),
            self.base.description.as_str(),
            self.recipient_name.as_str(),
        ]
    }

    fn category(&self) -> Option<&str> {
        Some(self.status.code())
    }

    fn facilities(&self) -> Vec<&str> {
        vec![self.beneficiary_facility.as_str()]
    }
}

/// DTO для создания заявки на выдачу
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WithdrawalOrderDto {
    pub item_ref: String,
    pub beneficiary_facility: String,
    pub requested_quantity: i64,
    pub recipient_name: String,
    pub recipient_contact: Option<String>,
    pub withdrawal_date: Option<NaiveDate>,
    pub comment: Option<String>,
}

/// Результат выдачи: заявка и позиция с обновлённым остатком
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalResult {
    pub order: WithdrawalOrder,
    pub item: InventoryItem,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_inventory_item::aggregate::InventoryItemDto;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 2).unwrap()
    }

    fn stock(received: i64, issued: i64) -> InventoryItem {
        InventoryItem::new_for_insert(&InventoryItemDto {
            item_number: "INV-9".into(),
            item_name: "محاليل وريدية".into(),
            received_quantity: received,
            issued_quantity: issued,
            ..Default::default()
        })
    }

    fn dto(quantity: i64) -> WithdrawalOrderDto {
        WithdrawalOrderDto {
            item_ref: String::new(),
            beneficiary_facility: "مركز النور".into(),
            requested_quantity: quantity,
            recipient_name: "أحمد علي".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_withdrawal_within_available() {
        let item = stock(100, 30);
        let order = WithdrawalOrder::new_for_item(&dto(70), &item, today()).unwrap();
        assert_eq!(order.item_ref, item.base.id.as_string());
        assert_eq!(order.item_name(), "محاليل وريدية");
        assert_eq!(order.withdrawal_date, today());
    }

    #[test]
    fn test_withdrawal_above_available_rejected() {
        let item = stock(100, 30);
        assert!(WithdrawalOrder::new_for_item(&dto(71), &item, today()).is_err());
    }

    #[test]
    fn test_withdrawal_requires_recipient() {
        let item = stock(10, 0);
        let mut d = dto(1);
        d.recipient_name = "".into();
        assert!(WithdrawalOrder::new_for_item(&d, &item, today()).is_err());
    }
}
