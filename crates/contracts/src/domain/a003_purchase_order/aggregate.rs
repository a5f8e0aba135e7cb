use crate::domain::common::validation::{
    non_empty, require_amount, require_positive, require_text,
};
use crate::domain::common::{generate_code, BaseAggregate};
use crate::enums::OrderStatus;
use crate::shared::analytics::Filterable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор заказа прямой закупки
    PurchaseOrderId
);

/// Заказ прямой закупки для учреждения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    /// code — номер заказа, description — наименование позиции, comment — заметки
    #[serde(flatten)]
    pub base: BaseAggregate<PurchaseOrderId>,

    pub order_date: NaiveDate,
    pub item_number: String,
    pub quantity: i64,
    /// Учреждение-получатель
    pub beneficiary_facility: String,
    /// Номер и дата финансового согласования
    pub financial_approval_number: Option<String>,
    pub financial_approval_date: Option<NaiveDate>,
    pub total_cost: f64,
    pub supplier_name: String,
    pub supplier_contact: Option<String>,
    pub status: OrderStatus,
    pub expected_delivery_date: Option<NaiveDate>,
    pub actual_delivery_date: Option<NaiveDate>,
}

impl PurchaseOrder {
    pub fn new_for_insert(dto: &PurchaseOrderDto, today: NaiveDate) -> Self {
        let code = non_empty(dto.order_number.clone()).unwrap_or_else(|| generate_code("PO"));
        let base = BaseAggregate::new(
            PurchaseOrderId::new_v4(),
            code,
            dto.item_name.trim().to_string(),
        );
        let mut order = Self {
            base,
            order_date: dto.order_date.unwrap_or(today),
            item_number: String::new(),
            quantity: 0,
            beneficiary_facility: String::new(),
            financial_approval_number: None,
            financial_approval_date: None,
            total_cost: 0.0,
            supplier_name: String::new(),
            supplier_contact: None,
            status: OrderStatus::New,
            expected_delivery_date: None,
            actual_delivery_date: None,
        };
        order.update(dto);
        order
    }

    pub fn order_number(&self) -> &str {
        &self.base.code
    }

    pub fn item_name(&self) -> &str {
        &self.base.description
    }

    /// Обновить данные из формы редактирования. Статус меняется отдельно.
    pub fn update(&mut self, dto: &PurchaseOrderDto) {
        if let Some(number) = non_empty(dto.order_number.clone()) {
            self.base.code = number;
        }
        self.base.description = dto.item_name.trim().to_string();
        self.base.set_comment(dto.comment.clone());
        if let Some(order_date) = dto.order_date {
            self.order_date = order_date;
        }
        self.item_number = dto.item_number.trim().to_string();
        self.quantity = dto.quantity;
        self.beneficiary_facility = dto.beneficiary_facility.trim().to_string();
        self.financial_approval_number = non_empty(dto.financial_approval_number.clone());
        self.financial_approval_date = dto.financial_approval_date;
        self.total_cost = dto.total_cost;
        self.supplier_name = dto.supplier_name.trim().to_string();
        self.supplier_contact = non_empty(dto.supplier_contact.clone());
        self.expected_delivery_date = dto.expected_delivery_date;
        self.actual_delivery_date = dto.actual_delivery_date;
    }

    /// Форма редактирования без статуса
    pub fn to_dto(&self) -> PurchaseOrderDto {
        PurchaseOrderDto {
            order_number: Some(self.base.code.clone()),
            order_date: Some(self.order_date),
            item_number: self.item_number.clone(),
            item_name: self.base.description.clone(),
            quantity: self.quantity,
            beneficiary_facility: self.beneficiary_facility.clone(),
            financial_approval_number: self.financial_approval_number.clone(),
            financial_approval_date: self.financial_approval_date,
            total_cost: self.total_cost,
            supplier_name: self.supplier_name.clone(),
            supplier_contact: self.supplier_contact.clone(),
            expected_delivery_date: self.expected_delivery_date,
            actual_delivery_date: self.actual_delivery_date,
            comment: self.base.comment.clone(),
        }
    }

    /// Перевести заказ в новый статус по жизненному циклу
    pub fn change_status(&mut self, target: OrderStatus, today: NaiveDate) -> Result<(), String> {
        self.status = self.status.transition_to(target)?;
        if self.status == OrderStatus::Delivered {
            self.actual_delivery_date.get_or_insert(today);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.base.code, "رقم الطلب")?;
        require_text(&self.base.description, "اسم الصنف")?;
        require_text(&self.item_number, "رقم الصنف")?;
        require_text(&self.beneficiary_facility, "الجهة المستفيدة")?;
        require_text(&self.supplier_name, "اسم المورد")?;
        require_positive(self.quantity, "الكمية")?;
        require_amount(self.total_cost, "التكلفة الإجمالية")?;
        if let Some(expected) = self.expected_delivery_date {
            if expected < self.order_date {
                return Err("تاريخ التسليم المتوقع قبل تاريخ الطلب".into());
            }
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

crate::impl_aggregate_root!(
    PurchaseOrder,
    PurchaseOrderId,
    "a003",
    "purchase_order",
    "طلب شراء مباشر",
    "طلبات الشراء المباشر"
);

impl Filterable for PurchaseOrder {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.base.code.as_str(),
            self.base.description.as_str(),
            self.item_number.as_str(),
            self.supplier_name.as_str(),
        ]
    }

    fn category(&self) -> Option<&str> {
        Some(self.status.code())
    }

    fn facilities(&self) -> Vec<&str> {
        vec![self.beneficiary_facility.as_str()]
    }
}

/// DTO для создания/редактирования заказа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PurchaseOrderDto {
    pub order_number: Option<String>,
    pub order_date: Option<NaiveDate>,
    pub item_number: String,
    pub item_name: String,
    pub quantity: i64,
    pub beneficiary_facility: String,
    pub financial_approval_number: Option<String>,
    pub financial_approval_date: Option<NaiveDate>,
    pub total_cost: f64,
    pub supplier_name: String,
    pub supplier_contact: Option<String>,
    pub expected_delivery_date: Option<NaiveDate>,
    pub actual_delivery_date: Option<NaiveDate>,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn dto() -> PurchaseOrderDto {
        PurchaseOrderDto {
            item_number: "ITM-100".into(),
            item_name: "قفازات طبية".into(),
            quantity: 500,
            beneficiary_facility: "مستشفى الملك فهد".into(),
            total_cost: 2500.0,
            supplier_name: "شركة الإمداد الطبي".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_order_is_new_and_valid() {
        let order = PurchaseOrder::new_for_insert(&dto(), today());
        assert_eq!(order.status, OrderStatus::New);
        assert_eq!(order.order_date, today());
        assert!(order.order_number().starts_with("PO-"));
        assert!(order.validate().is_ok());
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut d = dto();
        d.quantity = 0;
        assert!(PurchaseOrder::new_for_insert(&d, today()).validate().is_err());
    }

    #[test]
    fn test_delivery_sets_actual_date() {
        let mut order = PurchaseOrder::new_for_insert(&dto(), today());
        order.change_status(OrderStatus::Approved, today()).unwrap();
        order.change_status(OrderStatus::Contracted, today()).unwrap();
        order.change_status(OrderStatus::Delivered, today()).unwrap();
        assert_eq!(order.actual_delivery_date, Some(today()));
    }

    #[test]
    fn test_invalid_transition_keeps_status() {
        let mut order = PurchaseOrder::new_for_insert(&dto(), today());
        assert!(order.change_status(OrderStatus::Delivered, today()).is_err());
        assert_eq!(order.status, OrderStatus::New);
    }

    #[test]
    fn test_edit_does_not_touch_status() {
        let mut order = PurchaseOrder::new_for_insert(&dto(), today());
        order.change_status(OrderStatus::Approved, today()).unwrap();
        let mut d = dto();
        d.quantity = 600;
        order.update(&d);
        assert_eq!(order.status, OrderStatus::Approved);
        assert_eq!(order.quantity, 600);
    }

    #[test]
    fn test_edit_form_keeps_order_number_and_dates() {
        let mut d = dto();
        d.expected_delivery_date = NaiveDate::from_ymd_opt(2025, 4, 1);
        let order = PurchaseOrder::new_for_insert(&d, today());

        let form = order.to_dto();
        assert_eq!(form.order_number.as_deref(), Some(order.order_number()));
        assert_eq!(form.order_date, Some(today()));

        let mut edited = order.clone();
        edited.update(&form);
        assert_eq!(edited, order);
    }
}
