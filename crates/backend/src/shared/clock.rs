use chrono::NaiveDate;

/// Текущая дата сервера (локальное время)
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
