use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::data_source::{error_text, use_data_source};
use contracts::domain::a006_transaction::aggregate::TransactionHistoryEntry;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// История смены статусов транзакции, от старых к новым
#[component]
pub fn TransactionHistory(
    id: String,
    #[prop(into)]
    title: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let source = use_data_source();
    let (entries, set_entries) = signal::<Vec<TransactionHistoryEntry>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    let ds = source.get_value();
    spawn_local(async move {
        match ds.transaction_history(&id).await {
            Ok(list) => set_entries.set(list),
            Err(e) => set_error.set(Some(error_text(&e))),
        }
        set_loading.set(false);
    });

    view! {
        <div class="details-container transaction-history">
            <div class="details-header">
                <h3>{format!("سجل المعاملة {}", title)}</h3>
                <button class="button button--ghost button--small" on:click=move |_| on_close.run(())>
                    "إغلاق"
                </button>
            </div>

            <ErrorBanner error=error />

            {move || {
                if loading.get() {
                    view! { <div class="loading">"جاري التحميل..."</div> }.into_any()
                } else if entries.get().is_empty() {
                    view! { <div class="empty-state">"لا توجد تغييرات على الحالة"</div> }.into_any()
                } else {
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"التاريخ"</th>
                                    <th>"من"</th>
                                    <th>"إلى"</th>
                                    <th>"ملاحظة"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {entries
                                    .get()
                                    .into_iter()
                                    .map(|e| view! {
                                        <tr>
                                            <td>{format_timestamp(e.changed_at)}</td>
                                            <td>{e.from_status.label()}</td>
                                            <td>{e.to_status.label()}</td>
                                            <td>{e.note.unwrap_or_else(|| "-".to_string())}</td>
                                        </tr>
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
