use contracts::shared::analytics::{ListFilter, ALL_SELECTOR};
use leptos::prelude::*;

/// Состояние панели фильтров списка
#[derive(Debug, Clone, Copy)]
pub struct FilterState {
    pub search: RwSignal<String>,
    pub category: RwSignal<String>,
    pub facility: RwSignal<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            search: RwSignal::new(String::new()),
            category: RwSignal::new(ALL_SELECTOR.to_string()),
            facility: RwSignal::new(ALL_SELECTOR.to_string()),
        }
    }

    /// Текущий фильтр (реактивно)
    pub fn current(&self) -> ListFilter {
        ListFilter::new(self.search.get(), self.category.get(), self.facility.get())
    }

    pub fn reset(&self) {
        self.search.set(String::new());
        self.category.set(ALL_SELECTOR.to_string());
        self.facility.set(ALL_SELECTOR.to_string());
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

/// Поиск + выбор категории + выбор учреждения
#[component]
pub fn FilterBar(
    state: FilterState,
    /// Пары (значение, подпись) для фильтра по категории
    #[prop(into)]
    categories: Signal<Vec<(String, String)>>,
    #[prop(into)]
    category_label: String,
    /// Список учреждений; пустой список скрывает фильтр
    #[prop(into)]
    facilities: Signal<Vec<String>>,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <input
                class="filter-panel__search"
                type="search"
                placeholder="بحث..."
                prop:value=move || state.search.get()
                on:input=move |ev| state.search.set(event_target_value(&ev))
            />
            <label class="filter-panel__field">
                <span>{category_label}</span>
                <select
                    prop:value=move || state.category.get()
                    on:change=move |ev| state.category.set(event_target_value(&ev))
                >
                    <option value=ALL_SELECTOR>"الكل"</option>
                    {move || {
                        categories
                            .get()
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()
                    }}
                </select>
            </label>
            {move || {
                let list = facilities.get();
                (!list.is_empty())
                    .then(|| {
                        view! {
                            <label class="filter-panel__field">
                                <span>"المنشأة"</span>
                                <select
                                    prop:value=move || state.facility.get()
                                    on:change=move |ev| state.facility.set(event_target_value(&ev))
                                >
                                    <option value=ALL_SELECTOR>"الكل"</option>
                                    {list
                                        .into_iter()
                                        .map(|f| view! { <option value=f.clone()>{f.clone()}</option> })
                                        .collect_view()}
                                </select>
                            </label>
                        }
                    })
            }}
            <button class="button button--secondary" on:click=move |_| state.reset()>
                "مسح الفلاتر"
            </button>
        </div>
    }
}

/// Уникальные значения в порядке первого появления (для выпадающих списков)
pub fn distinct_values<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        let value = value.trim();
        if !value.is_empty() && !out.iter().any(|v| v == value) {
            out.push(value.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_values() {
        let values = distinct_values(["ب", "أ", "ب", " ", "أ"]);
        assert_eq!(values, vec!["ب".to_string(), "أ".to_string()]);
    }
}
