use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Глубина тренда на дашборде, месяцев
pub const DEFAULT_TREND_MONTHS: u32 = 4;

const MONTH_NAMES_AR: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

/// Один месяц тренда
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    pub year: i32,
    /// 1..=12
    pub month: u32,
    /// Название месяца для подписи на графике
    pub label: String,
    pub count: usize,
    pub total: f64,
}

/// Название месяца (1..=12); вне диапазона возвращает пустую строку
pub fn month_label(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_NAMES_AR[(month - 1) as usize],
        _ => "",
    }
}

/// Последние `months` календарных месяцев, заканчивая месяцем `reference`,
/// от старого к новому. Переход через год учитывается.
pub fn trailing_months(reference: NaiveDate, months: u32) -> Vec<(i32, u32)> {
    let anchor = reference.year() as i64 * 12 + reference.month0() as i64;
    (0..months as i64)
        .rev()
        .map(|offset| {
            let idx = anchor - offset;
            (idx.div_euclid(12) as i32, idx.rem_euclid(12) as u32 + 1)
        })
        .collect()
}

/// Помесячный тренд: количество записей и сумма `value` по месяцам окна.
///
/// Записи без даты или вне окна игнорируются.
pub fn monthly_trend<T, D, V>(
    records: &[T],
    date: D,
    value: V,
    reference: NaiveDate,
    months: u32,
) -> Vec<MonthlyBucket>
where
    D: Fn(&T) -> Option<NaiveDate>,
    V: Fn(&T) -> f64,
{
    let mut buckets: Vec<MonthlyBucket> = trailing_months(reference, months)
        .into_iter()
        .map(|(year, month)| MonthlyBucket {
            year,
            month,
            label: month_label(month).to_string(),
            count: 0,
            total: 0.0,
        })
        .collect();

    for record in records {
        let Some(d) = date(record) else {
            continue;
        };
        if let Some(bucket) = buckets
            .iter_mut()
            .find(|b| b.year == d.year() && b.month == d.month())
        {
            bucket.count += 1;
            bucket.total += value(record);
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_trailing_months_within_year() {
        assert_eq!(
            trailing_months(date(2025, 6, 15), 4),
            vec![(2025, 3), (2025, 4), (2025, 5), (2025, 6)]
        );
    }

    #[test]
    fn test_trailing_months_across_year_boundary() {
        assert_eq!(
            trailing_months(date(2025, 2, 1), 4),
            vec![(2024, 11), (2024, 12), (2025, 1), (2025, 2)]
        );
    }

    #[test]
    fn test_monthly_trend_counts_and_sums() {
        let records = vec![
            (Some(date(2025, 1, 10)), 100.0),
            (Some(date(2025, 1, 31)), 50.0),
            (Some(date(2024, 12, 5)), 10.0),
            (Some(date(2024, 1, 10)), 999.0), // тот же месяц, другой год
            (None, 7.0),
            (Some(date(2025, 3, 1)), 1.0), // после опорного месяца
        ];

        let trend = monthly_trend(&records, |r| r.0, |r| r.1, date(2025, 2, 20), 4);

        assert_eq!(trend.len(), 4);
        assert_eq!((trend[0].year, trend[0].month), (2024, 11));
        assert_eq!(trend[1].count, 1);
        assert_eq!(trend[1].total, 10.0);
        assert_eq!(trend[1].label, "ديسمبر");
        assert_eq!(trend[2].count, 2);
        assert_eq!(trend[2].total, 150.0);
        assert_eq!(trend[3].count, 0);
    }

    #[test]
    fn test_month_label_bounds() {
        assert_eq!(month_label(1), "يناير");
        assert_eq!(month_label(12), "ديسمبر");
        assert_eq!(month_label(0), "");
        assert_eq!(month_label(13), "");
    }
}
