use crate::shared::data_source::{error_text, use_data_source};
use contracts::domain::a001_facility::aggregate::Facility;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Элемент для выбора учреждения
#[derive(Clone, Debug, PartialEq)]
pub struct FacilityPickerItem {
    pub id: String,
    pub code: String,
    pub name: String,
}

impl From<Facility> for FacilityPickerItem {
    fn from(f: Facility) -> Self {
        Self {
            id: f.base.id.as_string(),
            code: f.base.code,
            name: f.base.description,
        }
    }
}

/// Выпадающий список активных учреждений; значение = название
#[component]
pub fn FacilityPicker(
    #[prop(into)]
    label: String,
    /// Название выбранного учреждения
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<Option<FacilityPickerItem>>,
) -> impl IntoView {
    let source = use_data_source();
    let (items, set_items) = signal::<Vec<FacilityPickerItem>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let ds = source.get_value();
    spawn_local(async move {
        match ds.list_facilities().await {
            Ok(list) => {
                let picker_items = list
                    .into_iter()
                    .filter(|f| f.is_active)
                    .map(FacilityPickerItem::from)
                    .collect();
                set_items.set(picker_items);
                set_error.set(None);
            }
            Err(e) => set_error.set(Some(error_text(&e))),
        }
    });

    let select = move |name: String| {
        let picked = items.get_untracked().into_iter().find(|i| i.name == name);
        on_change.run(picked);
    };

    view! {
        <div class="form__group">
            <label class="form__label">{label}<span class="form__required">" *"</span></label>
            <select
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| select(event_target_value(&ev))
            >
                <option value="">"اختر المنشأة"</option>
                {move || {
                    items
                        .get()
                        .into_iter()
                        .map(|i| {
                            let title = format!("{} ({})", i.name, i.code);
                            view! { <option value=i.name>{title}</option> }
                        })
                        .collect_view()
                }}
            </select>
            {move || error.get().map(|e| view! { <div class="form__hint form__hint--error">{e}</div> })}
        </div>
    }
}
