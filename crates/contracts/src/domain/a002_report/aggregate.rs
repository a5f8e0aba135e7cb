use crate::domain::common::validation::{non_empty, require_text};
use crate::domain::common::{generate_code, BaseAggregate};
use crate::enums::{ReportStatus, Severity};
use crate::shared::analytics::Filterable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор отчёта
    ReportId
);

/// Отчёт о неисправности / инциденте с оборудованием
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// code — номер отчёта, description — заголовок, comment — заметки
    #[serde(flatten)]
    pub base: BaseAggregate<ReportId>,

    /// Вид отчёта: صيانة، عطل، ...
    pub report_type: String,
    /// Категория оборудования
    pub category: String,
    pub details: String,
    pub status: ReportStatus,
    pub severity: Severity,
    /// ID учреждения (a001), если отчёт привязан к справочнику
    pub facility_ref: Option<String>,
    pub facility_name: String,
    pub reporter: String,
    pub reported_at: NaiveDate,
    pub resolved_at: Option<NaiveDate>,
}

impl Report {
    pub fn new_for_insert(dto: &ReportDto, today: NaiveDate) -> Self {
        let code = non_empty(dto.code.clone()).unwrap_or_else(|| generate_code("RPT"));
        let base = BaseAggregate::new(ReportId::new_v4(), code, dto.title.trim().to_string());
        let mut report = Self {
            base,
            report_type: String::new(),
            category: String::new(),
            details: String::new(),
            status: dto.status,
            severity: dto.severity,
            facility_ref: None,
            facility_name: String::new(),
            reporter: String::new(),
            reported_at: dto.reported_at.unwrap_or(today),
            resolved_at: None,
        };
        report.update(dto);
        report
    }

    pub fn title(&self) -> &str {
        &self.base.description
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &ReportDto) {
        if let Some(code) = non_empty(dto.code.clone()) {
            self.base.code = code;
        }
        self.base.description = dto.title.trim().to_string();
        self.base.set_comment(dto.comment.clone());
        self.report_type = dto.report_type.trim().to_string();
        self.category = dto.category.trim().to_string();
        self.details = dto.details.trim().to_string();
        self.status = dto.status;
        self.severity = dto.severity;
        self.facility_ref = non_empty(dto.facility_ref.clone());
        self.facility_name = dto.facility_name.trim().to_string();
        self.reporter = dto.reporter.trim().to_string();
        if let Some(reported_at) = dto.reported_at {
            self.reported_at = reported_at;
        }
        self.resolved_at = dto.resolved_at;
    }

    pub fn to_dto(&self) -> ReportDto {
        ReportDto {
            code: Some(self.base.code.clone()),
            title: self.base.description.clone(),
            report_type: self.report_type.clone(),
            category: self.category.clone(),
            details: self.details.clone(),
            status: self.status,
            severity: self.severity,
            facility_ref: self.facility_ref.clone(),
            facility_name: self.facility_name.clone(),
            reporter: self.reporter.clone(),
            reported_at: Some(self.reported_at),
            resolved_at: self.resolved_at,
            comment: self.base.comment.clone(),
        }
    }

    /// Смена статуса: при закрытии фиксируется дата решения
    pub fn change_status(&mut self, status: ReportStatus, today: NaiveDate) {
        self.status = status;
        match status {
            ReportStatus::Closed => {
                self.resolved_at.get_or_insert(today);
            }
            ReportStatus::Open | ReportStatus::OutOfOrder => self.resolved_at = None,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.base.description, "عنوان البلاغ")?;
        require_text(&self.report_type, "نوع البلاغ")?;
        require_text(&self.facility_name, "المنشأة")?;
        if let Some(resolved) = self.resolved_at {
            if resolved < self.reported_at {
                return Err("تاريخ الإغلاق قبل تاريخ البلاغ".into());
            }
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

crate::impl_aggregate_root!(Report, ReportId, "a002", "report", "بلاغ", "البلاغات");

impl Filterable for Report {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.base.description.as_str(),
            self.base.code.as_str(),
            self.details.as_str(),
            self.reporter.as_str(),
            self.facility_name.as_str(),
        ]
    }

    fn category(&self) -> Option<&str> {
        Some(&self.report_type)
    }

    fn facilities(&self) -> Vec<&str> {
        vec![self.facility_name.as_str()]
    }
}

/// DTO для создания/редактирования отчёта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ReportDto {
    pub code: Option<String>,
    pub title: String,
    pub report_type: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub status: ReportStatus,
    #[serde(default)]
    pub severity: Severity,
    pub facility_ref: Option<String>,
    pub facility_name: String,
    #[serde(default)]
    pub reporter: String,
    pub reported_at: Option<NaiveDate>,
    pub resolved_at: Option<NaiveDate>,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    fn dto() -> ReportDto {
        ReportDto {
            title: "عطل في جهاز الأشعة".into(),
            report_type: "عطل".into(),
            facility_name: "مركز النور".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_report_defaults() {
        let report = Report::new_for_insert(&dto(), today());
        assert_eq!(report.status, ReportStatus::Open);
        assert_eq!(report.reported_at, today());
        assert!(report.base.code.starts_with("RPT-"));
        assert!(report.validate().is_ok());
    }

    #[test]
    fn test_edit_form_carries_status_and_resolution() {
        let mut report = Report::new_for_insert(&dto(), today());
        report.change_status(ReportStatus::Closed, today());

        let mut form = report.to_dto();
        assert_eq!(form.status, ReportStatus::Closed);
        form.details = "تم استبدال اللوحة".into();
        report.update(&form);

        assert_eq!(report.status, ReportStatus::Closed);
        assert_eq!(report.resolved_at, Some(today()));
        assert_eq!(report.details, "تم استبدال اللوحة");
    }

    #[test]
    fn test_closing_sets_resolved_date_once() {
        let mut report = Report::new_for_insert(&dto(), today());
        report.change_status(ReportStatus::Closed, today());
        assert_eq!(report.resolved_at, Some(today()));

        let later = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        report.change_status(ReportStatus::Closed, later);
        assert_eq!(report.resolved_at, Some(today()));

        report.change_status(ReportStatus::Open, later);
        assert_eq!(report.resolved_at, None);
    }

    #[test]
    fn test_resolved_before_reported_is_invalid() {
        let mut d = dto();
        d.reported_at = Some(today());
        d.resolved_at = NaiveDate::from_ymd_opt(2025, 1, 1);
        assert!(Report::new_for_insert(&d, today()).validate().is_err());
    }
}
