use super::view_model::TransactionDetailsViewModel;
use crate::domain::a001_facility::ui::picker::{FacilityPicker, FacilityPickerItem};
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::form_field::FormField;
use crate::shared::data_source::use_data_source;
use crate::shared::format::{date_input_value, opt_text, parse_date};
use contracts::domain::a006_transaction::aggregate::Transaction;
use leptos::prelude::*;

#[component]
pub fn TransactionDetails(
    /// Запись для редактирования; None — новая
    existing: Option<Transaction>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let source = use_data_source();
    let vm = TransactionDetailsViewModel::new();
    vm.load_if_needed(existing);
    let form = vm.form;

    view! {
        <div class="details-container transaction-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "تعديل المعاملة" } else { "معاملة جديدة" }}</h3>
            </div>

            <ErrorBanner error=vm.error />

            <div class="details-form">
                <FormField
                    label="رقم المعاملة"
                    required=true
                    value=Signal::derive(move || form.get().transaction_number)
                    on_input=Callback::new(move |v: String| form.update(|f| f.transaction_number = v))
                />
                <FormField
                    label="تاريخ الاستلام"
                    input_type="date"
                    value=Signal::derive(move || date_input_value(form.get().receive_date))
                    on_input=Callback::new(move |v: String| form.update(|f| f.receive_date = parse_date(&v)))
                />
                <FormField
                    label="الموضوع"
                    required=true
                    value=Signal::derive(move || form.get().subject)
                    on_input=Callback::new(move |v: String| form.update(|f| f.subject = v))
                />
                <FormField
                    label="نوع المعاملة"
                    required=true
                    value=Signal::derive(move || form.get().transaction_type)
                    on_input=Callback::new(move |v: String| form.update(|f| f.transaction_type = v))
                />
                <FacilityPicker
                    label="الجهة المرسلة"
                    value=Signal::derive(move || form.get().sender_facility)
                    on_change=Callback::new(move |picked: Option<FacilityPickerItem>| {
                        form.update(|f| f.sender_facility = picked.map(|i| i.name).unwrap_or_default())
                    })
                />
                <FormField
                    label="الجهة المستلمة"
                    value=Signal::derive(move || form.get().receiver_facility)
                    on_input=Callback::new(move |v: String| form.update(|f| f.receiver_facility = v))
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
