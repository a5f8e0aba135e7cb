use crate::domain::a007_dental_contract::ui::details::DentalContractDetails;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::filter_bar::{distinct_values, FilterBar, FilterState};
use crate::shared::components::order_status_actions::{order_status_options, OrderStatusActions};
use crate::shared::components::row_actions::{delete_prompt, find_record, RowActions};
use crate::shared::confirm::confirm;
use crate::shared::data_source::{error_text, use_data_source};
use crate::shared::format::{format_amount, format_date, format_opt_date};
use contracts::domain::a007_dental_contract::aggregate::DentalContract;
use contracts::domain::common::{AggregateId, StatusChangeDto};
use contracts::enums::OrderStatus;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug, PartialEq)]
pub struct DentalContractRow {
    pub id: String,
    pub version: i32,
    pub contract_number: String,
    pub order_date: String,
    pub item: String,
    pub quantity: i64,
    pub facility: String,
    pub supplier: String,
    pub total_cost: String,
    pub expected_delivery: String,
    pub status: OrderStatus,
}

impl From<DentalContract> for DentalContractRow {
    fn from(o: DentalContract) -> Self {
        Self {
            id: o.base.id.as_string(),
            version: o.base.metadata.version,
            contract_number: o.contract_number().to_string(),
            order_date: format_date(o.order_date),
            item: format!("{} ({})", o.item_name(), o.item_number),
            quantity: o.quantity,
            facility: o.beneficiary_facility,
            supplier: o.supplier_name,
            total_cost: format_amount(o.total_cost),
            expected_delivery: format_opt_date(o.expected_delivery_date),
            status: o.status,
        }
    }
}

#[component]
pub fn DentalContractList() -> impl IntoView {
    let source = use_data_source();
    let (items, set_items) = signal::<Vec<DentalContract>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_form, set_show_form) = signal(false);
    let editing = RwSignal::new(None::<DentalContract>);
    let filter = FilterState::new();

    let fetch = move || {
        let ds = source.get_value();
        spawn_local(async move {
            match ds.list_dental_contracts().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(error_text(&e))),
            }
        });
    };

    let change_status = move |id: String, status: OrderStatus| {
        let ds = source.get_value();
        spawn_local(async move {
            match ds
                .change_dental_contract_status(&id, StatusChangeDto { status, note: None })
                .await
            {
                Ok(updated) => {
                    log::info!("Dental contract {} -> {}", updated.contract_number(), status);
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
        if !confirm(&delete_prompt::<DentalContract>(&number)) {
            return;
        }
        let ds = source.get_value();
        spawn_local(async move {
            match ds.delete_dental_contract(&id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(error_text(&e))),
            }
        });
    };

    let facilities = Signal::derive(move || {
        let list = items.get();
        distinct_values(list.iter().map(|o| o.beneficiary_facility.as_str()))
    });

    let rows = Memo::new(move |_| {
        filter
            .current()
            .apply(&items.get())
            .into_iter()
            .map(DentalContractRow::from)
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
        <div class="page" id="a007_dental_contract--list">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"عقود الأسنان"</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| {
                            editing.set(None);
                            set_show_form.set(true);
                        }
                    >
                        "عقد أسنان جديد"
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
                    <DentalContractDetails existing=existing on_saved=on_saved on_cancel=on_cancel />
                })
            }}

            <FilterBar
                state=filter
                categories=order_status_options()
                category_label="الحالة"
                facilities=facilities
            />

            <table class="table">
                <thead>
                    <tr>
                        <th>"رقم العقد"</th>
                        <th>"التاريخ"</th>
                        <th>"الصنف"</th>
                        <th>"الكمية"</th>
                        <th>"المنشأة المستفيدة"</th>
                        <th>"المورد"</th>
                        <th>"التكلفة"</th>
                        <th>"التسليم المتوقع"</th>
                        <th>"الحالة"</th>
                        <th>"الإجراءات"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|row| (row.id.clone(), row.version)
                        children=move |row: DentalContractRow| {
                            let id = row.id.clone();
                            let edit_id = row.id.clone();
                            let delete_id = row.id.clone();
                            let number = row.contract_number.clone();
                            view! {
                                <tr>
                                    <td>{row.contract_number}</td>
                                    <td>{row.order_date}</td>
                                    <td>{row.item}</td>
                                    <td class="table__cell--number">{row.quantity}</td>
                                    <td>{row.facility}</td>
                                    <td>{row.supplier}</td>
                                    <td class="table__cell--number">{row.total_cost}</td>
                                    <td>{row.expected_delivery}</td>
                                    <td>
                                        <span class=format!("badge badge--{}", row.status.code())>
                                            {row.status.label()}
                                        </span>
                                    </td>
                                    <td>
                                        <div class="button-group">
                                            <OrderStatusActions
                                                status=row.status
                                                on_change=Callback::new(move |target: OrderStatus| {
                                                    change_status(id.clone(), target)
                                                })
                                            />
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
