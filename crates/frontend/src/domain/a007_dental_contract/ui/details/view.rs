use super::view_model::DentalContractDetailsViewModel;
use crate::domain::a001_facility::ui::picker::{FacilityPicker, FacilityPickerItem};
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::form_field::FormField;
use crate::shared::data_source::use_data_source;
use crate::shared::format::{date_input_value, opt_text, parse_date, parse_f64, parse_i64};
use contracts::domain::a007_dental_contract::aggregate::DentalContract;
use leptos::prelude::*;

#[component]
pub fn DentalContractDetails(
    /// Запись для редактирования; None — новая
    existing: Option<DentalContract>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let source = use_data_source();
    let vm = DentalContractDetailsViewModel::new();
    vm.load_if_needed(existing);
    let form = vm.form;

    view! {
        <div class="details-container dental-contract-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "تعديل عقد الأسنان" } else { "عقد أسنان جديد" }}</h3>
            </div>

            <ErrorBanner error=vm.error />

            <div class="details-form">
                <FormField
                    label="رقم العقد"
                    placeholder="يُولَّد تلقائياً إذا تُرك فارغاً"
                    value=Signal::derive(move || form.get().contract_number.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.contract_number = opt_text(v)))
                />
                <FormField
                    label="تاريخ الطلب"
                    input_type="date"
                    value=Signal::derive(move || date_input_value(form.get().order_date))
                    on_input=Callback::new(move |v: String| form.update(|f| f.order_date = parse_date(&v)))
                />
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
                    label="الكمية"
                    input_type="number"
                    required=true
                    value=Signal::derive(move || form.get().quantity.to_string())
                    on_input=Callback::new(move |v: String| form.update(|f| f.quantity = parse_i64(&v)))
                />
                <FacilityPicker
                    label="المنشأة المستفيدة"
                    value=Signal::derive(move || form.get().beneficiary_facility)
                    on_change=Callback::new(move |picked: Option<FacilityPickerItem>| {
                        form.update(|f| f.beneficiary_facility = picked.map(|i| i.name).unwrap_or_default())
                    })
                />
                <FormField
                    label="رقم الاعتماد المالي"
                    value=Signal::derive(move || form.get().financial_approval_number.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.financial_approval_number = opt_text(v)))
                />
                <FormField
                    label="تاريخ الاعتماد المالي"
                    input_type="date"
                    value=Signal::derive(move || date_input_value(form.get().financial_approval_date))
                    on_input=Callback::new(move |v: String| form.update(|f| f.financial_approval_date = parse_date(&v)))
                />
                <FormField
                    label="التكلفة الإجمالية"
                    input_type="number"
                    required=true
                    value=Signal::derive(move || form.get().total_cost.to_string())
                    on_input=Callback::new(move |v: String| form.update(|f| f.total_cost = parse_f64(&v)))
                />
                <FormField
                    label="المورد"
                    required=true
                    value=Signal::derive(move || form.get().supplier_name)
                    on_input=Callback::new(move |v: String| form.update(|f| f.supplier_name = v))
                />
                <FormField
                    label="التواصل مع المورد"
                    value=Signal::derive(move || form.get().supplier_contact.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.supplier_contact = opt_text(v)))
                />
                <FormField
                    label="تاريخ التسليم المتوقع"
                    input_type="date"
                    value=Signal::derive(move || date_input_value(form.get().expected_delivery_date))
                    on_input=Callback::new(move |v: String| form.update(|f| f.expected_delivery_date = parse_date(&v)))
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
