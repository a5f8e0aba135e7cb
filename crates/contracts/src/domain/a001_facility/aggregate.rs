use crate::domain::common::validation::{non_empty, require_non_negative, require_text};
use crate::domain::common::{generate_code, BaseAggregate};
use crate::shared::analytics::Filterable;
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор учреждения
    FacilityId
);

/// Медицинское учреждение (больница, клиника, центр здоровья)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    /// code — код учреждения, description — наименование, comment — заметки
    #[serde(flatten)]
    pub base: BaseAggregate<FacilityId>,

    /// Сектор (район) здравоохранения
    pub sector: String,
    /// Тип учреждения: больница, центр первичной помощи, ...
    pub facility_type: String,
    pub manager_name: String,
    pub manager_phone: String,
    pub email: Option<String>,
    /// Количество клиник (кабинетов) в учреждении
    pub clinics_count: i64,
    pub is_active: bool,
}

impl Facility {
    /// Создать новое учреждение для вставки в БД
    pub fn new_for_insert(dto: &FacilityDto) -> Self {
        let code = non_empty(dto.code.clone()).unwrap_or_else(|| generate_code("FAC"));
        let base = BaseAggregate::new(FacilityId::new_v4(), code, dto.name.trim().to_string());
        let mut facility = Self {
            base,
            sector: String::new(),
            facility_type: String::new(),
            manager_name: String::new(),
            manager_phone: String::new(),
            email: None,
            clinics_count: 0,
            is_active: true,
        };
        facility.update(dto);
        facility
    }

    pub fn name(&self) -> &str {
        &self.base.description
    }

    /// Обновить данные из DTO (код меняется, только если передан)
    pub fn update(&mut self, dto: &FacilityDto) {
        if let Some(code) = non_empty(dto.code.clone()) {
            self.base.code = code;
        }
        self.base.description = dto.name.trim().to_string();
        self.base.set_comment(dto.comment.clone());
        self.sector = dto.sector.trim().to_string();
        self.facility_type = dto.facility_type.trim().to_string();
        self.manager_name = dto.manager_name.trim().to_string();
        self.manager_phone = dto.manager_phone.trim().to_string();
        self.email = non_empty(dto.email.clone());
        self.clinics_count = dto.clinics_count;
        self.is_active = dto.is_active;
    }

    /// Данные для формы редактирования
    pub fn to_dto(&self) -> FacilityDto {
        FacilityDto {
            code: Some(self.base.code.clone()),
            name: self.base.description.clone(),
            sector: self.sector.clone(),
            facility_type: self.facility_type.clone(),
            manager_name: self.manager_name.clone(),
            manager_phone: self.manager_phone.clone(),
            email: self.email.clone(),
            clinics_count: self.clinics_count,
            is_active: self.is_active,
            comment: self.base.comment.clone(),
        }
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.base.description, "اسم المنشأة")?;
        require_text(&self.base.code, "رمز المنشأة")?;
        require_text(&self.sector, "القطاع")?;
        require_text(&self.facility_type, "نوع المنشأة")?;
        require_non_negative(self.clinics_count, "عدد العيادات")?;
        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err("البريد الإلكتروني غير صالح".into());
            }
        }
        Ok(())
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

crate::impl_aggregate_root!(Facility, FacilityId, "a001", "facility", "منشأة", "المنشآت");

impl Filterable for Facility {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.base.description.as_str(),
            self.base.code.as_str(),
            self.manager_name.as_str(),
        ]
    }

    fn category(&self) -> Option<&str> {
        Some(&self.facility_type)
    }

    fn facilities(&self) -> Vec<&str> {
        vec![self.base.description.as_str()]
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для регистрации/изменения учреждения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityDto {
    pub code: Option<String>,
    pub name: String,
    pub sector: String,
    pub facility_type: String,
    #[serde(default)]
    pub manager_name: String,
    #[serde(default)]
    pub manager_phone: String,
    pub email: Option<String>,
    #[serde(default)]
    pub clinics_count: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub comment: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for FacilityDto {
    fn default() -> Self {
        Self {
            code: None,
            name: String::new(),
            sector: String::new(),
            facility_type: String::new(),
            manager_name: String::new(),
            manager_phone: String::new(),
            email: None,
            clinics_count: 0,
            is_active: true,
            comment: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> FacilityDto {
        FacilityDto {
            name: "مستشفى الملك فهد".into(),
            sector: "القطاع الشمالي".into(),
            facility_type: "مستشفى".into(),
            clinics_count: 12,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_facility_gets_generated_code() {
        let facility = Facility::new_for_insert(&dto());
        assert!(facility.base.code.starts_with("FAC-"));
        assert_eq!(facility.name(), "مستشفى الملك فهد");
        assert!(facility.is_active);
        assert!(facility.validate().is_ok());
    }

    #[test]
    fn test_validation_requires_sector() {
        let mut d = dto();
        d.sector = " ".into();
        assert!(Facility::new_for_insert(&d).validate().is_err());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut d = dto();
        d.email = Some("not-an-email".into());
        assert!(Facility::new_for_insert(&d).validate().is_err());
    }

    #[test]
    fn test_update_keeps_code_when_absent() {
        let mut facility = Facility::new_for_insert(&dto());
        let code = facility.base.code.clone();
        let mut d = dto();
        d.name = "مستشفى الملك فهد العام".into();
        facility.update(&d);
        assert_eq!(facility.base.code, code);
        assert_eq!(facility.name(), "مستشفى الملك فهد العام");
    }
}
