use crate::domain::a004_inventory_item::ui::details::InventoryItemDetails;
use crate::domain::a005_withdrawal_order::ui::details::WithdrawalForm;
use crate::domain::a005_withdrawal_order::ui::list::WithdrawalOrderList;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::filter_bar::{distinct_values, FilterBar, FilterState};
use crate::shared::components::row_actions::{delete_prompt, find_record, RowActions};
use crate::shared::confirm::confirm;
use crate::shared::data_source::{error_text, use_data_source};
use crate::shared::format::format_amount;
use contracts::domain::a004_inventory_item::aggregate::InventoryItem;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug, PartialEq)]
pub struct InventoryRow {
    pub id: String,
    pub version: i32,
    pub item_number: String,
    pub item_name: String,
    pub category: String,
    pub received: i64,
    pub issued: i64,
    pub available: i64,
    pub minimum: i64,
    pub value: String,
    pub supplier: String,
    pub low_stock: bool,
}

impl From<InventoryItem> for InventoryRow {
    fn from(i: InventoryItem) -> Self {
        Self {
            id: i.base.id.as_string(),
            version: i.base.metadata.version,
            item_number: i.item_number().to_string(),
            item_name: i.item_name().to_string(),
            available: i.available_quantity(),
            low_stock: i.is_low_stock(),
            category: i.category,
            received: i.received_quantity,
            issued: i.issued_quantity,
            minimum: i.minimum_quantity,
            value: format_amount(i.purchase_value),
            supplier: i.supplier_name,
        }
    }
}

/// Экран склада: остатки, приход новой позиции и выдача
#[component]
pub fn WarehousePage() -> impl IntoView {
    let source = use_data_source();
    let (items, set_items) = signal::<Vec<InventoryItem>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_form, set_show_form) = signal(false);
    let editing = RwSignal::new(None::<InventoryItem>);
    let (withdrawing, set_withdrawing) = signal::<Option<InventoryItem>>(None);
    // Счётчик для перезагрузки журнала выдач
    let (reload, set_reload) = signal(0u32);
    let filter = FilterState::new();

    let fetch = move || {
        let ds = source.get_value();
        spawn_local(async move {
            match ds.list_inventory().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(error_text(&e))),
            }
        });
    };

    let open_withdrawal = move |id: String| {
        set_withdrawing.set(items.with_untracked(|list| find_record(list, &id)));
    };

    let open_edit = move |id: String| {
        editing.set(items.with_untracked(|list| find_record(list, &id)));
        set_show_form.set(true);
    };

    let delete = move |id: String, number: String| {
        if !confirm(&delete_prompt::<InventoryItem>(&number)) {
            return;
        }
        let ds = source.get_value();
        spawn_local(async move {
            match ds.delete_inventory_item(&id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(error_text(&e))),
            }
        });
    };

    let categories = Signal::derive(move || {
        let list = items.get();
        distinct_values(list.iter().map(|i| i.category.as_str()))
            .into_iter()
            .map(|c| (c.clone(), c))
            .collect::<Vec<_>>()
    });
    let facilities = Signal::derive(move || {
        let list = items.get();
        distinct_values(list.iter().filter_map(|i| i.beneficiary_facility.as_deref()))
    });

    let rows = Memo::new(move |_| {
        filter
            .current()
            .apply(&items.get())
            .into_iter()
            .map(InventoryRow::from)
            .collect::<Vec<_>>()
    });

    let on_item_saved = Callback::new(move |_: ()| {
        set_show_form.set(false);
        editing.set(None);
        fetch();
    });
    let on_item_cancel = Callback::new(move |_: ()| {
        set_show_form.set(false);
        editing.set(None);
    });
    let on_withdrawn = Callback::new(move |_: ()| {
        set_withdrawing.set(None);
        set_reload.update(|n| *n += 1);
        fetch();
    });
    let on_withdraw_cancel = Callback::new(move |_: ()| set_withdrawing.set(None));

    fetch();

    view! {
        <div class="page" id="a004_inventory_item--list">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"المستودع"</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| {
                            editing.set(None);
                            set_show_form.set(true);
                        }
                    >
                        "إضافة صنف"
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
                    <InventoryItemDetails existing=existing on_saved=on_item_saved on_cancel=on_item_cancel />
                })
            }}

            {move || withdrawing.get().map(|item| view! {
                <WithdrawalForm item=item on_saved=on_withdrawn on_cancel=on_withdraw_cancel />
            })}

            <FilterBar
                state=filter
                categories=categories
                category_label="الفئة"
                facilities=facilities
            />

            <table class="table">
                <thead>
                    <tr>
                        <th>"رقم الصنف"</th>
                        <th>"اسم الصنف"</th>
                        <th>"الفئة"</th>
                        <th>"المستلم"</th>
                        <th>"المصروف"</th>
                        <th>"المتاح"</th>
                        <th>"الحد الأدنى"</th>
                        <th>"القيمة"</th>
                        <th>"المورد"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|row| (row.id.clone(), row.version)
                        children=move |row: InventoryRow| {
                            let id = row.id.clone();
                            let edit_id = row.id.clone();
                            let delete_id = row.id.clone();
                            let number = row.item_number.clone();
                            let row_class = if row.low_stock { "table__row--warning" } else { "" };
                            let can_issue = row.available > 0;
                            view! {
                                <tr class=row_class>
                                    <td>{row.item_number}</td>
                                    <td>{row.item_name}</td>
                                    <td>{row.category}</td>
                                    <td class="table__cell--number">{row.received}</td>
                                    <td class="table__cell--number">{row.issued}</td>
                                    <td class="table__cell--number"><strong>{row.available}</strong></td>
                                    <td class="table__cell--number">{row.minimum}</td>
                                    <td class="table__cell--number">{row.value}</td>
                                    <td>{row.supplier}</td>
                                    <td>
                                        <div class="button-group">
                                            <button
                                                class="button button--secondary button--small"
                                                disabled=!can_issue
                                                on:click=move |_| open_withdrawal(id.clone())
                                            >
                                                "صرف"
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

            <WithdrawalOrderList reload=reload />
        </div>
    }
}
