use super::view_model::InventoryItemDetailsViewModel;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::form_field::FormField;
use crate::shared::data_source::use_data_source;
use crate::shared::format::{opt_text, parse_f64, parse_i64};
use contracts::domain::a004_inventory_item::aggregate::InventoryItem;
use leptos::prelude::*;

#[component]
pub fn InventoryItemDetails(
    /// Запись для редактирования; None — новая
    existing: Option<InventoryItem>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let source = use_data_source();
    let vm = InventoryItemDetailsViewModel::new();
    vm.load_if_needed(existing);
    let form = vm.form;

    view! {
        <div class="details-container inventory-item-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "تعديل صنف المستودع" } else { "إضافة صنف للمستودع" }}</h3>
            </div>

            <ErrorBanner error=vm.error />

            <div class="details-form">
                <FormField
                    label="رقم الصنف"
                    required=true
                    value=Signal::derive(move || form.get().item_number)
                    on_input=Callback::new(move |v: String| form.update(|f| f.item_number = v))
                />
                <FormField
                    label="اسم الصنف"
                    required=true
                    value=Signal::derive(move || form.get().item_name)
                    on_input=Callback::new(move |v: String| form.update(|f| f.item_name = v))
                />
                <FormField
                    label="الفئة"
                    value=Signal::derive(move || form.get().category)
                    on_input=Callback::new(move |v: String| form.update(|f| f.category = v))
                />
                <FormField
                    label="الكمية المستلمة"
                    input_type="number"
                    required=true
                    value=Signal::derive(move || form.get().received_quantity.to_string())
                    on_input=Callback::new(move |v: String| form.update(|f| f.received_quantity = parse_i64(&v)))
                />
                <FormField
                    label="الكمية المصروفة"
                    input_type="number"
                    value=Signal::derive(move || form.get().issued_quantity.to_string())
                    on_input=Callback::new(move |v: String| form.update(|f| f.issued_quantity = parse_i64(&v)))
                />
                <FormField
                    label="الحد الأدنى"
                    input_type="number"
                    value=Signal::derive(move || form.get().minimum_quantity.to_string())
                    on_input=Callback::new(move |v: String| form.update(|f| f.minimum_quantity = parse_i64(&v)))
                />
                <FormField
                    label="قيمة الشراء"
                    input_type="number"
                    value=Signal::derive(move || form.get().purchase_value.to_string())
                    on_input=Callback::new(move |v: String| form.update(|f| f.purchase_value = parse_f64(&v)))
                />
                <FormField
                    label="المورد"
                    value=Signal::derive(move || form.get().supplier_name)
                    on_input=Callback::new(move |v: String| form.update(|f| f.supplier_name = v))
                />
                <FormField
                    label="الجهة المستفيدة"
                    value=Signal::derive(move || form.get().beneficiary_facility.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.beneficiary_facility = opt_text(v)))
                />
                <div class="form__group">
                    <span class="form__label">"الكمية المتاحة"</span>
                    <strong>{move || vm.available_preview()}</strong>
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    disabled=move || vm.saving.get()
                    on:click=move |_| vm.save_command(source, on_saved)
                >
                    "حفظ"
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "إلغاء"
                </button>
            </div>
        </div>
    }
}
