use crate::domain::a002_report::ui::details::ReportDetails;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::filter_bar::{distinct_values, FilterBar, FilterState};
use crate::shared::components::row_actions::{delete_prompt, find_record, RowActions};
use crate::shared::confirm::confirm;
use crate::shared::data_source::{error_text, use_data_source};
use crate::shared::format::{format_date, format_opt_date};
use contracts::domain::a002_report::aggregate::Report;
use contracts::domain::common::{AggregateId, StatusChangeDto};
use contracts::enums::ReportStatus;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug, PartialEq)]
pub struct ReportRow {
    pub id: String,
    pub version: i32,
    pub code: String,
    pub title: String,
    pub report_type: String,
    pub facility: String,
    pub severity: String,
    pub severity_code: &'static str,
    pub status: ReportStatus,
    pub reporter: String,
    pub reported_at: String,
    pub resolved_at: String,
}

impl From<Report> for ReportRow {
    fn from(r: Report) -> Self {
        Self {
            id: r.base.id.as_string(),
            version: r.base.metadata.version,
            code: r.base.code,
            title: r.base.description,
            report_type: r.report_type,
            facility: r.facility_name,
            severity: r.severity.label().to_string(),
            severity_code: r.severity.code(),
            status: r.status,
            reporter: r.reporter,
            reported_at: format_date(r.reported_at),
            resolved_at: format_opt_date(r.resolved_at),
        }
    }
}

#[component]
pub fn ReportList() -> impl IntoView {
    let source = use_data_source();
    let (items, set_items) = signal::<Vec<Report>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_form, set_show_form) = signal(false);
    let editing = RwSignal::new(None::<Report>);
    let filter = FilterState::new();

    let fetch = move || {
        let ds = source.get_value();
        spawn_local(async move {
            match ds.list_reports().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(error_text(&e))),
            }
        });
    };

    let change_status = move |id: String, code: String| {
        let Some(status) = ReportStatus::from_code(&code) else {
            return;
        };
        let ds = source.get_value();
        spawn_local(async move {
            match ds
                .change_report_status(&id, StatusChangeDto { status, note: None })
                .await
            {
                Ok(_) => fetch(),
                Err(e) => set_error.set(Some(error_text(&e))),
            }
        });
    };

    let open_edit = move |id: String| {
        editing.set(items.with_untracked(|list| find_record(list, &id)));
        set_show_form.set(true);
    };

    let delete = move |id: String, title: String| {
        if !confirm(&delete_prompt::<Report>(&title)) {
            return;
        }
        let ds = source.get_value();
        spawn_local(async move {
            match ds.delete_report(&id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(error_text(&e))),
            }
        });
    };

    let types = Signal::derive(move || {
        let list = items.get();
        distinct_values(list.iter().map(|r| r.report_type.as_str()))
            .into_iter()
            .map(|t| (t.clone(), t))
            .collect::<Vec<_>>()
    });
    let facilities = Signal::derive(move || {
        let list = items.get();
        distinct_values(list.iter().map(|r| r.facility_name.as_str()))
    });

    let rows = Memo::new(move |_| {
        filter
            .current()
            .apply(&items.get())
            .into_iter()
            .map(ReportRow::from)
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
        <div class="page" id="a002_report--list">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"البلاغات"</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| {
                            editing.set(None);
                            set_show_form.set(true);
                        }
                    >
                        "بلاغ جديد"
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
                    <ReportDetails existing=existing on_saved=on_saved on_cancel=on_cancel />
                })
            }}

            <FilterBar
                state=filter
                categories=types
                category_label="نوع البلاغ"
                facilities=facilities
            />

            <table class="table">
                <thead>
                    <tr>
                        <th>"الرقم"</th>
                        <th>"العنوان"</th>
                        <th>"النوع"</th>
                        <th>"المنشأة"</th>
                        <th>"الأولوية"</th>
                        <th>"المبلّغ"</th>
                        <th>"تاريخ البلاغ"</th>
                        <th>"تاريخ الإغلاق"</th>
                        <th>"الحالة"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|row| (row.id.clone(), row.version)
                        children=move |row: ReportRow| {
                            let id = row.id.clone();
                            let edit_id = row.id.clone();
                            let delete_id = row.id.clone();
                            let title = row.title.clone();
                            let current = row.status.code();
                            view! {
                                <tr>
                                    <td>{row.code}</td>
                                    <td>{row.title}</td>
                                    <td>{row.report_type}</td>
                                    <td>{row.facility}</td>
                                    <td><span class=format!("badge badge--{}", row.severity_code)>{row.severity}</span></td>
                                    <td>{row.reporter}</td>
                                    <td>{row.reported_at}</td>
                                    <td>{row.resolved_at}</td>
                                    <td>
                                        <select
                                            class="form__select form__select--inline"
                                            prop:value=current
                                            on:change=move |ev| change_status(id.clone(), event_target_value(&ev))
                                        >
                                            {ReportStatus::all()
                                                .into_iter()
                                                .map(|s| view! {
                                                    <option value=s.code() selected=s.code() == current>{s.label()}</option>
                                                })
                                                .collect_view()}
                                        </select>
                                    </td>
                                    <td>
                                        <div class="button-group">
                                            <RowActions
                                                on_edit=Callback::new(move |_: ()| open_edit(edit_id.clone()))
                                                on_delete=Callback::new(move |_: ()| delete(delete_id.clone(), title.clone()))
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
