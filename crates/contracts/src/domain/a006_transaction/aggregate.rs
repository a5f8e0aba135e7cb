use crate::domain::common::validation::{non_empty, require_text};
use crate::domain::common::{AggregateId, BaseAggregate};
use crate::enums::TransactionStatus;
use crate::shared::analytics::Filterable;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Сколько дней транзакция может ждать, прежде чем считаться просроченной
pub const OVERDUE_DAYS: i64 = 21;

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор административной транзакции
    TransactionId
);

/// Административная транзакция (входящий документ между учреждениями)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// code — номер транзакции, description — тема, comment — заметки
    #[serde(flatten)]
    pub base: BaseAggregate<TransactionId>,

    pub receive_date: NaiveDate,
    pub transaction_type: String,
    pub sender_facility: String,
    pub receiver_facility: String,
    pub status: TransactionStatus,
}

impl Transaction {
    pub fn new_for_insert(dto: &TransactionDto, today: NaiveDate) -> Self {
        let base = BaseAggregate::new(
            TransactionId::new_v4(),
            dto.transaction_number.trim().to_string(),
            dto.subject.trim().to_string(),
        );
        let mut transaction = Self {
            base,
            receive_date: dto.receive_date.unwrap_or(today),
            transaction_type: String::new(),
            sender_facility: String::new(),
            receiver_facility: String::new(),
            status: TransactionStatus::Pending,
        };
        transaction.update(dto);
        transaction
    }

    pub fn transaction_number(&self) -> &str {
        &self.base.code
    }

    pub fn subject(&self) -> &str {
        &self.base.description
    }

    pub fn update(&mut self, dto: &TransactionDto) {
        self.base.code = dto.transaction_number.trim().to_string();
        self.base.description = dto.subject.trim().to_string();
        self.base.set_comment(dto.comment.clone());
        if let Some(receive_date) = dto.receive_date {
            self.receive_date = receive_date;
        }
        self.transaction_type = dto.transaction_type.trim().to_string();
        self.sender_facility = dto.sender_facility.trim().to_string();
        self.receiver_facility = dto.receiver_facility.trim().to_string();
    }

    pub fn to_dto(&self) -> TransactionDto {
        TransactionDto {
            transaction_number: self.base.code.clone(),
            receive_date: Some(self.receive_date),
            subject: self.base.description.clone(),
            transaction_type: self.transaction_type.clone(),
            sender_facility: self.sender_facility.clone(),
            receiver_facility: self.receiver_facility.clone(),
            comment: self.base.comment.clone(),
        }
    }

    /// Дней с момента получения (0 для даты в будущем)
    pub fn days_since_received(&self, today: NaiveDate) -> i64 {
        (today - self.receive_date).num_days().max(0)
    }

    /// Просрочена: всё ещё ожидает и получена больше `OVERDUE_DAYS` дней назад
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_overdue_after(today, OVERDUE_DAYS)
    }

    pub fn is_overdue_after(&self, today: NaiveDate, days: i64) -> bool {
        self.status == TransactionStatus::Pending && self.days_since_received(today) > days
    }

    /// Сменить статус и вернуть запись для истории
    pub fn change_status(
        &mut self,
        target: TransactionStatus,
        note: Option<String>,
    ) -> Result<TransactionHistoryEntry, String> {
        let from = self.status;
        self.status = from.transition_to(target)?;
        Ok(TransactionHistoryEntry {
            transaction_id: self.base.id.as_string(),
            from_status: from,
            to_status: target,
            changed_at: Utc::now(),
            note: non_empty(note),
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.base.code, "رقم المعاملة")?;
        require_text(&self.base.description, "الموضوع")?;
        require_text(&self.transaction_type, "نوع المعاملة")?;
        require_text(&self.sender_facility, "الجهة المرسلة")?;
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

crate::impl_aggregate_root!(
    Transaction,
    TransactionId,
    "a006",
    "transaction",
    "معاملة",
    "المعاملات الإدارية"
);

impl Filterable for Transaction {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.base.code.as_str(),
            self.base.description.as_str(),
            self.sender_facility.as_str(),
            self.receiver_facility.as_str(),
        ]
    }

    fn category(&self) -> Option<&str> {
        Some(&self.transaction_type)
    }

    fn facilities(&self) -> Vec<&str> {
        vec![self.sender_facility.as_str(), self.receiver_facility.as_str()]
    }
}

/// Запись истории изменения статуса транзакции
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionHistoryEntry {
    pub transaction_id: String,
    pub from_status: TransactionStatus,
    pub to_status: TransactionStatus,
    pub changed_at: DateTime<Utc>,
    pub note: Option<String>,
}

/// DTO для создания/редактирования транзакции
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TransactionDto {
    pub transaction_number: String,
    pub receive_date: Option<NaiveDate>,
    pub subject: String,
    pub transaction_type: String,
    pub sender_facility: String,
    #[serde(default)]
    pub receiver_facility: String,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn received_on(day: NaiveDate) -> Transaction {
        Transaction::new_for_insert(
            &TransactionDto {
                transaction_number: "TR-2025-014".into(),
                receive_date: Some(day),
                subject: "طلب صيانة مولد كهربائي".into(),
                transaction_type: "صادر".into(),
                sender_facility: "مستشفى الملك فهد".into(),
                ..Default::default()
            },
            day,
        )
    }

    #[test]
    fn test_overdue_only_after_21_days() {
        let tr = received_on(date(2025, 1, 1));
        assert!(!tr.is_overdue(date(2025, 1, 22))); // ровно 21 день
        assert!(tr.is_overdue(date(2025, 1, 23)));
    }

    #[test]
    fn test_completed_transaction_never_overdue() {
        let mut tr = received_on(date(2025, 1, 1));
        tr.change_status(TransactionStatus::Completed, None).unwrap();
        assert!(!tr.is_overdue(date(2025, 6, 1)));
    }

    #[test]
    fn test_future_receive_date() {
        let tr = received_on(date(2025, 2, 1));
        assert_eq!(tr.days_since_received(date(2025, 1, 1)), 0);
    }

    #[test]
    fn test_status_change_produces_history() {
        let mut tr = received_on(date(2025, 1, 1));
        let entry = tr
            .change_status(TransactionStatus::Rejected, Some(" ناقصة المرفقات ".into()))
            .unwrap();
        assert_eq!(entry.from_status, TransactionStatus::Pending);
        assert_eq!(entry.to_status, TransactionStatus::Rejected);
        assert_eq!(entry.note.as_deref(), Some("ناقصة المرفقات"));
        assert_eq!(entry.transaction_id, tr.base.id.as_string());
        assert!(tr.change_status(TransactionStatus::Completed, None).is_err());
    }
}
