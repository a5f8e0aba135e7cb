use chrono::NaiveDate;

/// Текущая дата браузера
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
