use crate::domain::a001_facility::ui::details::FacilityDetails;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::filter_bar::{distinct_values, FilterBar, FilterState};
use crate::shared::components::row_actions::{delete_prompt, find_record, RowActions};
use crate::shared::confirm::confirm;
use crate::shared::data_source::{error_text, use_data_source};
use contracts::domain::a001_facility::aggregate::Facility;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug, PartialEq)]
pub struct FacilityRow {
    pub id: String,
    pub version: i32,
    pub code: String,
    pub name: String,
    pub sector: String,
    pub facility_type: String,
    pub manager: String,
    pub phone: String,
    pub clinics_count: i64,
    pub is_active: bool,
}

impl From<Facility> for FacilityRow {
    fn from(f: Facility) -> Self {
        Self {
            id: f.base.id.as_string(),
            version: f.base.metadata.version,
            code: f.base.code,
            name: f.base.description,
            sector: f.sector,
            facility_type: f.facility_type,
            manager: f.manager_name,
            phone: f.manager_phone,
            clinics_count: f.clinics_count,
            is_active: f.is_active,
        }
    }
}

#[component]
pub fn FacilityList() -> impl IntoView {
    let source = use_data_source();
    let (items, set_items) = signal::<Vec<Facility>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_form, set_show_form) = signal(false);
    let editing = RwSignal::new(None::<Facility>);
    let filter = FilterState::new();

    let fetch = move || {
        let ds = source.get_value();
        spawn_local(async move {
            match ds.list_facilities().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(error_text(&e))),
            }
        });
    };

    let open_edit = move |id: String| {
        editing.set(items.with_untracked(|list| find_record(list, &id)));
        set_show_form.set(true);
    };

    let delete = move |id: String, name: String| {
        if !confirm(&delete_prompt::<Facility>(&name)) {
            return;
        }
        let ds = source.get_value();
        spawn_local(async move {
            match ds.delete_facility(&id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(error_text(&e))),
            }
        });
    };

    let types = Signal::derive(move || {
        let list = items.get();
        distinct_values(list.iter().map(|f| f.facility_type.as_str()))
            .into_iter()
            .map(|t| (t.clone(), t))
            .collect::<Vec<_>>()
    });

    let rows = Memo::new(move |_| {
        filter
            .current()
            .apply(&items.get())
            .into_iter()
            .map(FacilityRow::from)
            .collect::<Vec<_>>()
    });

    let on_saved = Callback::new(move |_: ()| {
        set_show_form.set(false);
        editing.set(None);
        fetch();
    });
    let on_cancel = Callback::new(move |_: ()| {
        set_show_form.set(false);
        editing.set(None);
    });

    fetch();

    view! {
        <div class="page" id="a001_facility--list">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"المنشآت"</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| {
                            editing.set(None);
                            set_show_form.set(true);
                        }
                    >
                        "تسجيل منشأة"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        "تحديث"
                    </button>
                </div>
            </div>

            <ErrorBanner error=error />

            {move || {
                let existing = editing.get();
                show_form.get().then(|| view! {
                    <FacilityDetails existing=existing on_saved=on_saved on_cancel=on_cancel />
                })
            }}

            <FilterBar
                state=filter
                categories=types
                category_label="نوع المنشأة"
                facilities=Signal::derive(Vec::new)
            />

            <table class="table">
                <thead>
                    <tr>
                        <th>"الرمز"</th>
                        <th>"الاسم"</th>
                        <th>"القطاع"</th>
                        <th>"النوع"</th>
                        <th>"المدير"</th>
                        <th>"الهاتف"</th>
                        <th>"العيادات"</th>
                        <th>"الحالة"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|row| (row.id.clone(), row.version)
                        children=move |row: FacilityRow| {
                            let edit_id = row.id.clone();
                            let id = row.id.clone();
                            let name = row.name.clone();
                            let (active_class, active_label) = if row.is_active {
                                ("badge badge--success", "نشطة")
                            } else {
                                ("badge badge--neutral", "غير نشطة")
                            };
                            view! {
                                <tr>
                                    <td>{row.code}</td>
                                    <td>{row.name}</td>
                                    <td>{row.sector}</td>
                                    <td>{row.facility_type}</td>
                                    <td>{row.manager}</td>
                                    <td>{row.phone}</td>
                                    <td class="table__cell--number">{row.clinics_count}</td>
                                    <td>
                                        <span class=active_class>{active_label}</span>
                                    </td>
                                    <td>
                                        <div class="button-group">
                                            <RowActions
                                                on_edit=Callback::new(move |_: ()| open_edit(edit_id.clone()))
                                                on_delete=Callback::new(move |_: ()| delete(id.clone(), name.clone()))
                                            />
                                        </div>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            {move || rows.get().is_empty().then(|| view! { <div class="empty-state">"لا توجد بيانات"</div> })}
        </div>
    }
}
