use crate::domain::common::validation::{
    non_empty, require_amount, require_non_negative, require_positive, require_text,
};
use crate::domain::common::BaseAggregate;
use crate::shared::analytics::Filterable;
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор складской позиции
    InventoryItemId
);

/// Складская позиция
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// code — номер позиции, description — наименование, comment — заметки
    #[serde(flatten)]
    pub base: BaseAggregate<InventoryItemId>,

    pub category: String,
    pub received_quantity: i64,
    pub issued_quantity: i64,
    /// Порог, при котором позиция считается дефицитной
    pub minimum_quantity: i64,
    pub purchase_value: f64,
    pub supplier_name: String,
    pub beneficiary_facility: Option<String>,
}

/// Доступный остаток: получено минус выдано, но не меньше нуля
pub fn available_quantity(received: i64, issued: i64) -> i64 {
    received.saturating_sub(issued).max(0)
}

impl InventoryItem {
    pub fn new_for_insert(dto: &InventoryItemDto) -> Self {
        let base = BaseAggregate::new(
            InventoryItemId::new_v4(),
            dto.item_number.trim().to_string(),
            dto.item_name.trim().to_string(),
        );
        let mut item = Self {
            base,
            category: String::new(),
            received_quantity: 0,
            issued_quantity: 0,
            minimum_quantity: 0,
            purchase_value: 0.0,
            supplier_name: String::new(),
            beneficiary_facility: None,
        };
        item.update(dto);
        item
    }

    pub fn item_number(&self) -> &str {
        &self.base.code
    }

    pub fn item_name(&self) -> &str {
        &self.base.description
    }

    pub fn available_quantity(&self) -> i64 {
        available_quantity(self.received_quantity, self.issued_quantity)
    }

    /// Остаток на уровне минимального порога или ниже
    pub fn is_low_stock(&self) -> bool {
        self.available_quantity() <= self.minimum_quantity
    }

    pub fn update(&mut self, dto: &InventoryItemDto) {
        self.base.code = dto.item_number.trim().to_string();
        self.base.description = dto.item_name.trim().to_string();
        self.base.set_comment(dto.comment.clone());
        self.category = dto.category.trim().to_string();
        self.received_quantity = dto.received_quantity;
        self.issued_quantity = dto.issued_quantity;
        self.minimum_quantity = dto.minimum_quantity;
        self.purchase_value = dto.purchase_value;
        self.supplier_name = dto.supplier_name.trim().to_string();
        self.beneficiary_facility = non_empty(dto.beneficiary_facility.clone());
    }

    pub fn to_dto(&self) -> InventoryItemDto {
        InventoryItemDto {
            item_number: self.base.code.clone(),
            item_name: self.base.description.clone(),
            category: self.category.clone(),
            received_quantity: self.received_quantity,
            issued_quantity: self.issued_quantity,
            minimum_quantity: self.minimum_quantity,
            purchase_value: self.purchase_value,
            supplier_name: self.supplier_name.clone(),
            beneficiary_facility: self.beneficiary_facility.clone(),
            comment: self.base.comment.clone(),
        }
    }

    /// Списать количество по заявке на выдачу
    pub fn issue(&mut self, quantity: i64) -> Result<(), String> {
        require_positive(quantity, "الكمية المطلوبة")?;
        let available = self.available_quantity();
        if quantity > available {
            return Err(format!(
                "الكمية المطلوبة ({}) أكبر من الكمية المتاحة ({})",
                quantity, available
            ));
        }
        self.issued_quantity += quantity;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.base.code, "رقم الصنف")?;
        require_text(&self.base.description, "اسم الصنف")?;
        require_non_negative(self.received_quantity, "الكمية المستلمة")?;
        require_non_negative(self.issued_quantity, "الكمية المصروفة")?;
        require_non_negative(self.minimum_quantity, "الحد الأدنى")?;
        require_amount(self.purchase_value, "قيمة الشراء")?;
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

crate::impl_aggregate_root!(
    InventoryItem,
    InventoryItemId,
    "a004",
    "inventory_item",
    "صنف مخزني",
    "أصناف المستودع"
);

impl Filterable for InventoryItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.base.code.as_str(),
            self.base.description.as_str(),
            self.supplier_name.as_str(),
        ]
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn facilities(&self) -> Vec<&str> {
        self.beneficiary_facility.as_deref().into_iter().collect()
    }
}

/// DTO для добавления/редактирования складской позиции
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InventoryItemDto {
    pub item_number: String,
    pub item_name: String,
    #[serde(default)]
    pub category: String,
    pub received_quantity: i64,
    #[serde(default)]
    pub issued_quantity: i64,
    #[serde(default)]
    pub minimum_quantity: i64,
    #[serde(default)]
    pub purchase_value: f64,
    #[serde(default)]
    pub supplier_name: String,
    pub beneficiary_facility: Option<String>,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(received: i64, issued: i64) -> InventoryItem {
        InventoryItem::new_for_insert(&InventoryItemDto {
            item_number: "INV-1".into(),
            item_name: "كمامات".into(),
            received_quantity: received,
            issued_quantity: issued,
            minimum_quantity: 10,
            ..Default::default()
        })
    }

    #[test]
    fn test_available_quantity_example() {
        let mut it = item(100, 30);
        assert_eq!(it.available_quantity(), 70);

        it.issued_quantity = 120;
        assert_eq!(it.available_quantity(), 0);
    }

    #[test]
    fn test_available_never_negative() {
        for received in -5..40i64 {
            for issued in -5..60i64 {
                let expected = (received - issued).max(0);
                assert_eq!(available_quantity(received, issued), expected);
            }
        }
        assert_eq!(available_quantity(i64::MIN, i64::MAX), 0);
    }

    #[test]
    fn test_issue_within_available() {
        let mut it = item(100, 30);
        it.issue(70).unwrap();
        assert_eq!(it.issued_quantity, 100);
        assert_eq!(it.available_quantity(), 0);
    }

    #[test]
    fn test_issue_more_than_available_rejected() {
        let mut it = item(100, 30);
        assert!(it.issue(71).is_err());
        assert!(it.issue(0).is_err());
        assert_eq!(it.issued_quantity, 30);
    }

    #[test]
    fn test_low_stock_threshold() {
        assert!(item(15, 5).is_low_stock());
        assert!(!item(15, 4).is_low_stock());
    }

    #[test]
    fn test_negative_received_invalid() {
        assert!(item(-1, 0).validate().is_err());
    }
}
