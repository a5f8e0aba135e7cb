use serde::{Deserialize, Serialize};

/// Значение селектора «все» в выпадающих списках
pub const ALL_SELECTOR: &str = "all";
/// Локализованная подпись того же селектора
pub const ALL_SELECTOR_AR: &str = "الكل";

/// Запись, которую можно фильтровать на экране списка
pub trait Filterable {
    /// Строковые поля для текстового поиска
    fn search_fields(&self) -> Vec<&str>;

    /// Значение для фильтра по категории (тип, статус и т.п.)
    fn category(&self) -> Option<&str> {
        None
    }

    /// Учреждения, с которыми связана запись
    fn facilities(&self) -> Vec<&str> {
        Vec::new()
    }
}

/// Состояние панели фильтров: конъюнкция независимых условий
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilter {
    pub search: String,
    pub category: String,
    pub facility: String,
}

fn is_all(selector: &str) -> bool {
    let s = selector.trim();
    s.is_empty() || s.eq_ignore_ascii_case(ALL_SELECTOR) || s == ALL_SELECTOR_AR
}

impl ListFilter {
    pub fn new(search: impl Into<String>, category: impl Into<String>, facility: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            category: category.into(),
            facility: facility.into(),
        }
    }

    /// Ни одно условие не активно. «Все» относится только к селекторам, не к поиску
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && is_all(&self.category) && is_all(&self.facility)
    }

    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        if !self.search.trim().is_empty() {
            let needle = self.search.trim().to_lowercase();
            let found = item
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !found {
                return false;
            }
        }

        if !is_all(&self.category) {
            let category = self.category.trim();
            if item.category().map(str::trim) != Some(category) {
                return false;
            }
        }

        if !is_all(&self.facility) {
            let facility = self.facility.trim();
            if !item.facilities().iter().any(|f| f.trim() == facility) {
                return false;
            }
        }

        true
    }

    /// Отфильтрованная копия списка; пустой фильтр возвращает список без изменений
    pub fn apply<T: Filterable + Clone>(&self, items: &[T]) -> Vec<T> {
        if self.is_empty() {
            return items.to_vec();
        }
        items.iter().filter(|i| self.matches(*i)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: String,
        kind: String,
        facility: String,
    }

    impl Filterable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name.as_str()]
        }

        fn category(&self) -> Option<&str> {
            Some(&self.kind)
        }

        fn facilities(&self) -> Vec<&str> {
            vec![self.facility.as_str()]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Dental Chair".into(), kind: "dental".into(), facility: "مستشفى الملك".into() },
            Row { name: "X-Ray Film".into(), kind: "radiology".into(), facility: "مركز النور".into() },
            Row { name: "Dental Drill".into(), kind: "dental".into(), facility: "مركز النور".into() },
        ]
    }

    #[test]
    fn test_empty_and_all_filters_are_identity() {
        let data = rows();
        assert_eq!(ListFilter::default().apply(&data), data);
        assert_eq!(ListFilter::new("", "all", "الكل").apply(&data), data);
        assert_eq!(ListFilter::new("  ", "ALL", "").apply(&data), data);
    }

    #[test]
    fn test_text_search_is_case_insensitive() {
        let result = ListFilter::new("dental", "", "").apply(&rows());
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_search_text_all_is_not_a_selector() {
        let data = vec![
            Row { name: "Ball valve".into(), kind: "spare".into(), facility: "مركز النور".into() },
            Row { name: "Syringe".into(), kind: "consumable".into(), facility: "مركز النور".into() },
        ];

        let filter = ListFilter::new("all", "", "");
        assert!(!filter.is_empty());
        let result = filter.apply(&data);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Ball valve");

        assert!(ListFilter::new("الكل", "", "").apply(&data).is_empty());
    }

    #[test]
    fn test_conjunction_of_predicates() {
        let result = ListFilter::new("dental", "dental", "مركز النور").apply(&rows());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Dental Drill");

        let none = ListFilter::new("film", "dental", "").apply(&rows());
        assert!(none.is_empty());
    }
}
