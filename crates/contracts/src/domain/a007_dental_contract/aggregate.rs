use crate::domain::common::validation::{
    non_empty, require_amount, require_positive, require_text,
};
use crate::domain::common::{generate_code, BaseAggregate};
use crate::enums::OrderStatus;
use crate::shared::analytics::Filterable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор договора на стоматологическое оборудование
    DentalContractId
);

/// Договор на поставку стоматологического оборудования
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DentalContract {
    /// code — номер договора, description — наименование оборудования, comment — заметки
    #[serde(flatten)]
    pub base: BaseAggregate<DentalContractId>,

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

impl DentalContract {
    pub fn new_for_insert(dto: &DentalContractDto, today: NaiveDate) -> Self {
        let code = non_empty(dto.contract_number.clone()).unwrap_or_else(|| generate_code("DC"));
        let base = BaseAggregate::new(
            DentalContractId::new_v4(),
            code,
            dto.item_name.trim().to_string(),
        );
        let mut contract = Self {
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
        contract.update(dto);
        contract
    }

    pub fn contract_number(&self) -> &str {
        &self.base.code
    }

    pub fn item_name(&self) -> &str {
        &self.base.description
    }

    /// Обновить данные из формы редактирования
    pub fn update(&mut self, dto: &DentalContractDto) {
        if let Some(number) = non_empty(dto.contract_number.clone()) {
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
    pub fn to_dto(&self) -> DentalContractDto {
        DentalContractDto {
            contract_number: Some(self.base.code.clone()),
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

    /// Смена статуса по тому же циклу, что и у заказов прямой закупки
    pub fn change_status(&mut self, target: OrderStatus, today: NaiveDate) -> Result<(), String> {
        self.status = self.status.transition_to(target)?;
        if self.status == OrderStatus::Delivered {
            self.actual_delivery_date.get_or_insert(today);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.base.code, "رقم العقد")?;
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
    DentalContract,
    DentalContractId,
    "a007",
    "dental_contract",
    "عقد أجهزة أسنان",
    "عقود أجهزة الأسنان"
);

impl Filterable for DentalContract {
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

/// DTO для создания/редактирования договора
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DentalContractDto {
    pub contract_number: Option<String>,
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
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    fn dto() -> DentalContractDto {
        DentalContractDto {
            item_number: "DNT-7".into(),
            item_name: "كرسي أسنان متكامل".into(),
            quantity: 2,
            beneficiary_facility: "مركز طب الأسنان التخصصي".into(),
            total_cost: 84000.0,
            supplier_name: "مؤسسة الابتسامة للتجهيزات".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_contract_is_new_and_valid() {
        let contract = DentalContract::new_for_insert(&dto(), today());
        assert_eq!(contract.status, OrderStatus::New);
        assert_eq!(contract.order_date, today());
        assert!(contract.contract_number().starts_with("DC-"));
        assert!(contract.validate().is_ok());
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut d = dto();
        d.quantity = 0;
        assert!(DentalContract::new_for_insert(&d, today()).validate().is_err());
    }

    #[test]
    fn test_delivery_sets_actual_date() {
        let mut contract = DentalContract::new_for_insert(&dto(), today());
        contract.change_status(OrderStatus::Approved, today()).unwrap();
        contract.change_status(OrderStatus::Contracted, today()).unwrap();
        contract.change_status(OrderStatus::Delivered, today()).unwrap();
        assert_eq!(contract.actual_delivery_date, Some(today()));
    }

    #[test]
    fn test_invalid_transition_keeps_status() {
        let mut contract = DentalContract::new_for_insert(&dto(), today());
        assert!(contract.change_status(OrderStatus::Delivered, today()).is_err());
        assert_eq!(contract.status, OrderStatus::New);
    }

    #[test]
    fn test_edit_does_not_touch_status() {
        let mut contract = DentalContract::new_for_insert(&dto(), today());
        contract.change_status(OrderStatus::Approved, today()).unwrap();
        let mut d = dto();
        d.quantity = 3;
        contract.update(&d);
        assert_eq!(contract.status, OrderStatus::Approved);
        assert_eq!(contract.quantity, 3);
    }
}
