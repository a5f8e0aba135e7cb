use crate::domain::a001_facility::ui::picker::{FacilityPicker, FacilityPickerItem};
use crate::shared::clock::today;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::form_field::FormField;
use crate::shared::data_source::{error_text, use_data_source};
use crate::shared::format::{date_input_value, opt_text, parse_date, parse_i64};
use contracts::domain::a004_inventory_item::aggregate::InventoryItem;
use contracts::domain::a005_withdrawal_order::aggregate::{WithdrawalOrder, WithdrawalOrderDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Форма выдачи со склада для одной позиции
#[component]
pub fn WithdrawalForm(
    item: InventoryItem,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let source = use_data_source();
    let form = RwSignal::new(WithdrawalOrderDto {
        item_ref: item.base.id.as_string(),
        beneficiary_facility: item.beneficiary_facility.clone().unwrap_or_default(),
        requested_quantity: 1,
        withdrawal_date: Some(today()),
        ..Default::default()
    });
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let available = item.available_quantity();
    let title = format!("صرف: {} ({})", item.item_name(), item.item_number());
    let item = StoredValue::new(item);

    let submit = move || {
        let current = form.get_untracked();
        // Та же проверка остатка, что и на сервере
        if let Err(e) = WithdrawalOrder::new_for_item(&current, &item.get_value(), today()) {
            error.set(Some(e));
            return;
        }

        saving.set(true);
        let ds = source.get_value();
        spawn_local(async move {
            match ds.create_withdrawal_order(current).await {
                Ok(result) => {
                    log::info!(
                        "Withdrawal {} issued, {} left for {}",
                        result.order.base.code,
                        result.item.available_quantity(),
                        result.item.item_number()
                    );
                    error.set(None);
                    on_saved.run(());
                }
                Err(e) => error.set(Some(error_text(&e))),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="details-container withdrawal-details">
            <div class="details-header">
                <h3>{title}</h3>
                <span class="badge badge--neutral">{format!("المتاح: {}", available)}</span>
            </div>

            <ErrorBanner error=error />

            <div class="details-form">
                <FormField
                    label="الكمية المطلوبة"
                    input_type="number"
                    required=true
                    value=Signal::derive(move || form.get().requested_quantity.to_string())
                    on_input=Callback::new(move |v: String| form.update(|f| f.requested_quantity = parse_i64(&v)))
                />
                <FacilityPicker
                    label="الجهة المستفيدة"
                    value=Signal::derive(move || form.get().beneficiary_facility)
                    on_change=Callback::new(move |picked: Option<FacilityPickerItem>| {
                        form.update(|f| f.beneficiary_facility = picked.map(|i| i.name).unwrap_or_default())
                    })
                />
                <FormField
                    label="اسم المستلم"
                    required=true
                    value=Signal::derive(move || form.get().recipient_name)
                    on_input=Callback::new(move |v: String| form.update(|f| f.recipient_name = v))
                />
                <FormField
                    label="رقم التواصل"
                    input_type="tel"
                    value=Signal::derive(move || form.get().recipient_contact.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.recipient_contact = opt_text(v)))
                />
                <FormField
                    label="تاريخ الصرف"
                    input_type="date"
                    value=Signal::derive(move || date_input_value(form.get().withdrawal_date))
                    on_input=Callback::new(move |v: String| form.update(|f| f.withdrawal_date = parse_date(&v)))
                />
                <FormField
                    label="ملاحظات"
                    value=Signal::derive(move || form.get().comment.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.comment = opt_text(v)))
                />
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    disabled=move || saving.get() || available <= 0
                    on:click=move |_| submit()
                >
                    "صرف"
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "إلغاء"
                </button>
            </div>
        </div>
    }
}
