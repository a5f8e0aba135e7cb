//! Чистые функции агрегации для дашбордов и списков: разбивка по статусам и
//! категориям, помесячный тренд, топ-N по сумме, фильтрация списков.

pub mod counts;
pub mod filter;
pub mod monthly;
pub mod ranking;

pub use counts::{count_by, count_of, total_of, CategoryCount};
pub use filter::{Filterable, ListFilter, ALL_SELECTOR, ALL_SELECTOR_AR};
pub use monthly::{month_label, monthly_trend, trailing_months, MonthlyBucket, DEFAULT_TREND_MONTHS};
pub use ranking::{top_n, RankedEntry, DEFAULT_TOP_N};
