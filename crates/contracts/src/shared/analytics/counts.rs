use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Количество записей с одним значением поля
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub key: String,
    pub count: usize,
}

/// Подсчёт записей по различным значениям поля.
///
/// `None` и пустые строки отбрасываются до группировки. Близкие по написанию
/// значения не нормализуются. Порядок результата — порядок первого появления.
pub fn count_by<T, F>(records: &[T], selector: F) -> Vec<CategoryCount>
where
    F: Fn(&T) -> Option<String>,
{
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for record in records {
        let Some(key) = selector(record) else {
            continue;
        };
        if key.trim().is_empty() {
            continue;
        }
        match positions.get(&key) {
            Some(&idx) => counts[idx].count += 1,
            None => {
                positions.insert(key.clone(), counts.len());
                counts.push(CategoryCount { key, count: 1 });
            }
        }
    }

    counts
}

/// Сумма всех счётчиков
pub fn total_of(counts: &[CategoryCount]) -> usize {
    counts.iter().map(|c| c.count).sum()
}

/// Счётчик для конкретного значения (0, если значение не встречалось)
pub fn count_of(counts: &[CategoryCount], key: &str) -> usize {
    counts
        .iter()
        .find(|c| c.key == key)
        .map(|c| c.count)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_statuses_example() {
        let statuses = vec!["جديد", "جديد", "تم التسليم"];
        let counts = count_by(&statuses, |s| Some(s.to_string()));

        assert_eq!(counts.len(), 2);
        assert_eq!(count_of(&counts, "جديد"), 2);
        assert_eq!(count_of(&counts, "تم التسليم"), 1);
        assert_eq!(total_of(&counts), 3);
    }

    #[test]
    fn test_sum_equals_len_for_total_selector() {
        let labels = ["a", "b", "c", "a", "d"];
        for len in 0..40usize {
            let records: Vec<String> = (0..len)
                .map(|i| labels[(i * 7 + len) % labels.len()].to_string())
                .collect();
            let counts = count_by(&records, |r| Some(r.clone()));
            assert_eq!(total_of(&counts), records.len());
        }
    }

    #[test]
    fn test_missing_values_are_dropped() {
        let records = vec![Some("x"), None, Some(""), Some("  "), Some("x"), Some("y")];
        let counts = count_by(&records, |r| r.map(str::to_string));
        assert_eq!(
            counts,
            vec![
                CategoryCount { key: "x".into(), count: 2 },
                CategoryCount { key: "y".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_near_duplicates_stay_separate() {
        let records = vec!["أجهزة", "اجهزة", "أجهزة "];
        let counts = count_by(&records, |r| Some(r.to_string()));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn test_count_of_unknown_key() {
        assert_eq!(count_of(&[], "nothing"), 0);
    }
}
