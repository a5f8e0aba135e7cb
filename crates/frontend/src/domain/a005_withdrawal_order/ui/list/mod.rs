use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::data_source::{error_text, use_data_source};
use crate::shared::format::format_date;
use contracts::domain::a005_withdrawal_order::aggregate::WithdrawalOrder;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug, PartialEq)]
pub struct WithdrawalRow {
    pub id: String,
    pub code: String,
    pub item: String,
    pub facility: String,
    pub quantity: i64,
    pub recipient: String,
    pub date: String,
    pub status: String,
}

impl From<WithdrawalOrder> for WithdrawalRow {
    fn from(w: WithdrawalOrder) -> Self {
        Self {
            id: w.base.id.as_string(),
            code: w.base.code.clone(),
            item: w.item_name().to_string(),
            facility: w.beneficiary_facility,
            quantity: w.requested_quantity,
            recipient: w.recipient_name,
            date: format_date(w.withdrawal_date),
            status: w.status.label().to_string(),
        }
    }
}

/// Журнал выдач; перечитывается при каждом изменении `reload`
#[component]
pub fn WithdrawalOrderList(#[prop(into)] reload: Signal<u32>) -> impl IntoView {
    let source = use_data_source();
    let (rows, set_rows) = signal::<Vec<WithdrawalRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        reload.track();
        let ds = source.get_value();
        spawn_local(async move {
            match ds.list_withdrawal_orders().await {
                Ok(v) => {
                    set_rows.set(v.into_iter().map(WithdrawalRow::from).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(error_text(&e))),
            }
        });
    });

    view! {
        <div class="card">
            <h3 class="card__title">"أوامر الصرف"</h3>
            <ErrorBanner error=error />
            <table class="table">
                <thead>
                    <tr>
                        <th>"الرقم"</th>
                        <th>"الصنف"</th>
                        <th>"الجهة المستفيدة"</th>
                        <th>"الكمية"</th>
                        <th>"المستلم"</th>
                        <th>"التاريخ"</th>
                        <th>"الحالة"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|row| row.id.clone()
                        children=move |row: WithdrawalRow| view! {
                            <tr>
                                <td>{row.code}</td>
                                <td>{row.item}</td>
                                <td>{row.facility}</td>
                                <td class="table__cell--number">{row.quantity}</td>
                                <td>{row.recipient}</td>
                                <td>{row.date}</td>
                                <td>{row.status}</td>
                            </tr>
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
