use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Размер рейтинга поставщиков на дашборде
pub const DEFAULT_TOP_N: usize = 4;

/// Позиция рейтинга
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub key: String,
    pub total: f64,
    pub count: usize,
}

/// Топ-N ключей по сумме `value`.
///
/// Сортировка по убыванию суммы устойчивая: при равных суммах сохраняется
/// порядок первого появления ключа. Пустые ключи пропускаются.
pub fn top_n<T, K, V>(records: &[T], key: K, value: V, n: usize) -> Vec<RankedEntry>
where
    K: Fn(&T) -> Option<String>,
    V: Fn(&T) -> f64,
{
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<RankedEntry> = Vec::new();

    for record in records {
        let Some(k) = key(record) else {
            continue;
        };
        if k.trim().is_empty() {
            continue;
        }
        let v = value(record);
        match positions.get(&k) {
            Some(&idx) => {
                entries[idx].total += v;
                entries[idx].count += 1;
            }
            None => {
                positions.insert(k.clone(), entries.len());
                entries.push(RankedEntry {
                    key: k,
                    total: v,
                    count: 1,
                });
            }
        }
    }

    entries.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));
    entries.truncate(n);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suppliers_ranked_by_sum() {
        let orders = vec![
            ("شركة أ", 100.0),
            ("شركة ب", 300.0),
            ("شركة أ", 250.0),
            ("شركة ج", 50.0),
        ];
        let top = top_n(&orders, |o| Some(o.0.to_string()), |o| o.1, 4);

        assert_eq!(top.len(), 3);
        assert_eq!(top[0].key, "شركة أ");
        assert_eq!(top[0].total, 350.0);
        assert_eq!(top[0].count, 2);
        assert_eq!(top[1].key, "شركة ب");
        assert_eq!(top[2].key, "شركة ج");
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let orders = vec![("z", 10.0), ("a", 10.0), ("m", 10.0)];
        let top = top_n(&orders, |o| Some(o.0.to_string()), |o| o.1, 2);
        let keys: Vec<&str> = top.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_never_more_than_n_and_non_increasing() {
        for size in 0..30usize {
            let records: Vec<(String, f64)> = (0..size)
                .map(|i| (format!("s{}", i % 9), ((i * 37) % 11) as f64))
                .collect();
            for n in 0..6 {
                let top = top_n(&records, |r| Some(r.0.clone()), |r| r.1, n);
                assert!(top.len() <= n);
                for pair in top.windows(2) {
                    assert!(pair[0].total >= pair[1].total);
                }
            }
        }
    }

    #[test]
    fn test_blank_keys_skipped() {
        let orders = vec![("", 1000.0), ("x", 1.0)];
        let top = top_n(&orders, |o| Some(o.0.to_string()), |o| o.1, 4);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].key, "x");
    }
}
