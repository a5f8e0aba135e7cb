use crate::domain::a006_transaction::ui::details::TransactionDetails;
use crate::domain::a006_transaction::ui::history::TransactionHistory;
use crate::shared::clock::today;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::filter_bar::{distinct_values, FilterBar, FilterState};
use crate::shared::components::row_actions::{delete_prompt, find_record, RowActions};
use crate::shared::confirm::confirm;
use crate::shared::data_source::{error_text, use_data_source};
use crate::shared::format::format_date;
use chrono::NaiveDate;
use contracts::domain::a006_transaction::aggregate::Transaction;
use contracts::domain::common::{AggregateId, StatusChangeDto};
use contracts::enums::TransactionStatus;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug, PartialEq)]
pub struct TransactionRow {
    pub id: String,
    pub version: i32,
    pub number: String,
    pub receive_date: String,
    pub subject: String,
    pub transaction_type: String,
    pub sender: String,
    pub receiver: String,
    pub status: TransactionStatus,
    pub days_open: i64,
    pub overdue: bool,
}

impl TransactionRow {
    pub fn new(t: Transaction, today: NaiveDate) -> Self {
        Self {
            id: t.base.id.as_string(),
            version: t.base.metadata.version,
            number: t.transaction_number().to_string(),
            subject: t.subject().to_string(),
            receive_date: format_date(t.receive_date),
            days_open: t.days_since_received(today),
            overdue: t.is_overdue(today),
            transaction_type: t.transaction_type,
            sender: t.sender_facility,
            receiver: t.receiver_facility,
            status: t.status,
        }
    }
}

fn transaction_status_options() -> Vec<(String, String)> {
    TransactionStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.label().to_string()))
        .collect()
}

#[component]
pub fn TransactionList() -> impl IntoView {
    let source = use_data_source();
    let (items, set_items) = signal::<Vec<Transaction>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_form, set_show_form) = signal(false);
    let editing = RwSignal::new(None::<Transaction>);
    let (history_for, set_history_for) = signal::<Option<(String, String)>>(None);
    let (status_filter, set_status_filter) = signal(String::new());
    let (only_overdue, set_only_overdue) = signal(false);
    let filter = FilterState::new();

    let fetch = move || {
        let ds = source.get_value();
        spawn_local(async move {
            match ds.list_transactions().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(error_text(&e))),
            }
        });
    };

    let change_status = move |id: String, status: TransactionStatus| {
        let ds = source.get_value();
        spawn_local(async move {
            match ds
                .change_transaction_status(&id, StatusChangeDto { status, note: None })
                .await
            {
                Ok(updated) => {
                    log::info!("Transaction {} -> {}", updated.transaction_number(), status);
                    fetch();
                }
                Err(e) => set_error.set(Some(error_text(&e))),
            }
        });
    };

    let open_edit = move |id: String| {
        editing.set(items.with_untracked(|list| find_record(list, &id)));
        set_show_form.set(true);
    };

    let delete = move |id: String, number: String| {
        if !confirm(&delete_prompt::<Transaction>(&number)) {
            return;
        }
        let ds = source.get_value();
        spawn_local(async move {
            match ds.delete_transaction(&id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(error_text(&e))),
            }
        });
    };

    let types = Signal::derive(move || {
        let list = items.get();
        distinct_values(list.iter().map(|t| t.transaction_type.as_str()))
            .into_iter()
            .map(|t| (t.clone(), t))
            .collect::<Vec<_>>()
    });
    let facilities = Signal::derive(move || {
        let list = items.get();
        distinct_values(
            list.iter()
                .flat_map(|t| [t.sender_facility.as_str(), t.receiver_facility.as_str()]),
        )
    });

    let rows = Memo::new(move |_| {
        let today = today();
        let status = TransactionStatus::from_code(&status_filter.get());
        let overdue_only = only_overdue.get();
        filter
            .current()
            .apply(&items.get())
            .into_iter()
            .filter(|t| status.map_or(true, |s| t.status == s))
            .map(|t| TransactionRow::new(t, today))
            .filter(|row| !overdue_only || row.overdue)
            .collect::<Vec<_>>()
    });
    let overdue_count = Memo::new(move |_| {
        let today = today();
        items.get().iter().filter(|t| t.is_overdue(today)).count()
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
    let on_history_close = Callback::new(move |_: ()| set_history_for.set(None));

    fetch();

    view! {
        <div class="page" id="a006_transaction--list">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"المعاملات"</h1>
                    {move || {
                        let n = overdue_count.get();
                        (n > 0).then(|| view! {
                            <span class="badge badge--error">{format!("متأخرة: {}", n)}</span>
                        })
                    }}
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| {
                            editing.set(None);
                            set_show_form.set(true);
                        }
                    >
                        "معاملة جديدة"
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
                    <TransactionDetails existing=existing on_saved=on_saved on_cancel=on_cancel />
                })
            }}

            {move || history_for.get().map(|(id, number)| view! {
                <TransactionHistory id=id title=number on_close=on_history_close />
            })}

            <FilterBar
                state=filter
                categories=types
                category_label="نوع المعاملة"
                facilities=facilities
            />
            <div class="filter-panel">
                <label class="filter-panel__field">
                    <span>"الحالة"</span>
                    <select
                        prop:value=move || status_filter.get()
                        on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                    >
                        <option value="">"الكل"</option>
                        {transaction_status_options()
                            .into_iter()
                            .map(|(code, label)| view! { <option value=code>{label}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="filter-panel__field">
                    <input
                        type="checkbox"
                        prop:checked=move || only_overdue.get()
                        on:change=move |ev| set_only_overdue.set(event_target_checked(&ev))
                    />
                    " المتأخرة فقط"
                </label>
            </div>

            <table class="table">
                <thead>
                    <tr>
                        <th>"رقم المعاملة"</th>
                        <th>"تاريخ الاستلام"</th>
                        <th>"الموضوع"</th>
                        <th>"النوع"</th>
                        <th>"المرسل"</th>
                        <th>"المستلم"</th>
                        <th>"المدة (يوم)"</th>
                        <th>"الحالة"</th>
                        <th>"الإجراءات"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|row| (row.id.clone(), row.version)
                        children=move |row: TransactionRow| {
                            let complete_id = row.id.clone();
                            let reject_id = row.id.clone();
                            let history = (row.id.clone(), row.number.clone());
                            let edit_id = row.id.clone();
                            let delete_id = row.id.clone();
                            let number = row.number.clone();
                            let pending = row.status == TransactionStatus::Pending;
                            let row_class = if row.overdue { "table__row--error" } else { "" };
                            view! {
                                <tr class=row_class>
                                    <td>{row.number}</td>
                                    <td>{row.receive_date}</td>
                                    <td>{row.subject}</td>
                                    <td>{row.transaction_type}</td>
                                    <td>{row.sender}</td>
                                    <td>{row.receiver}</td>
                                    <td class="table__cell--number">
                                        {row.days_open}
                                        {row.overdue.then(|| view! { <span class="badge badge--error">" متأخرة"</span> })}
                                    </td>
                                    <td>
                                        <span class=format!("badge badge--{}", row.status.code())>
                                            {row.status.label()}
                                        </span>
                                    </td>
                                    <td>
                                        <div class="button-group">
                                            {pending.then(|| view! {
                                                <button
                                                    class="button button--secondary button--small"
                                                    on:click=move |_| change_status(complete_id.clone(), TransactionStatus::Completed)
                                                >
                                                    {TransactionStatus::Completed.label()}
                                                </button>
                                                <button
                                                    class="button button--danger button--small"
                                                    on:click=move |_| change_status(reject_id.clone(), TransactionStatus::Rejected)
                                                >
                                                    {TransactionStatus::Rejected.label()}
                                                </button>
                                            })}
                                            <button
                                                class="button button--ghost button--small"
                                                on:click=move |_| set_history_for.set(Some(history.clone()))
                                            >
                                                "السجل"
                                            </button>
                                            <RowActions
                                                on_edit=Callback::new(move |_: ()| open_edit(edit_id.clone()))
                                                on_delete=Callback::new(move |_: ()| delete(delete_id.clone(), number.clone()))
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

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_transaction::aggregate::TransactionDto;

    #[test]
    fn test_row_overdue_flag() {
        let received = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let transaction = Transaction::new_for_insert(
            &TransactionDto {
                transaction_number: "TR-1".into(),
                receive_date: Some(received),
                subject: "طلب صيانة".into(),
                transaction_type: "وارد".into(),
                sender_facility: "مركز النور".into(),
                ..Default::default()
            },
            received,
        );

        let row = TransactionRow::new(transaction.clone(), NaiveDate::from_ymd_opt(2025, 3, 22).unwrap());
        assert_eq!(row.days_open, 21);
        assert!(!row.overdue);

        let row = TransactionRow::new(transaction, NaiveDate::from_ymd_opt(2025, 3, 23).unwrap());
        assert!(row.overdue);
    }
}
