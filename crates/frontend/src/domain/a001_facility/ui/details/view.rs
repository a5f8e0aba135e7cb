use super::view_model::FacilityDetailsViewModel;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::form_field::FormField;
use crate::shared::data_source::use_data_source;
use crate::shared::format::{opt_text, parse_i64};
use contracts::domain::a001_facility::aggregate::Facility;
use leptos::prelude::*;

#[component]
pub fn FacilityDetails(
    /// Запись для редактирования; None — новая
    existing: Option<Facility>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let source = use_data_source();
    let vm = FacilityDetailsViewModel::new();
    vm.load_if_needed(existing);
    let form = vm.form;

    view! {
        <div class="details-container facility-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "تعديل بيانات المنشأة" } else { "تسجيل منشأة جديدة" }}</h3>
            </div>

            <ErrorBanner error=vm.error />

            <div class="details-form">
                <FormField
                    label="اسم المنشأة"
                    required=true
                    value=Signal::derive(move || form.get().name)
                    on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                />
                <FormField
                    label="الرمز"
                    placeholder="يُولَّد تلقائياً إذا تُرك فارغاً"
                    value=Signal::derive(move || form.get().code.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.code = opt_text(v)))
                />
                <FormField
                    label="القطاع"
                    required=true
                    value=Signal::derive(move || form.get().sector)
                    on_input=Callback::new(move |v: String| form.update(|f| f.sector = v))
                />
                <FormField
                    label="نوع المنشأة"
                    required=true
                    value=Signal::derive(move || form.get().facility_type)
                    on_input=Callback::new(move |v: String| form.update(|f| f.facility_type = v))
                />
                <FormField
                    label="اسم المدير"
                    value=Signal::derive(move || form.get().manager_name)
                    on_input=Callback::new(move |v: String| form.update(|f| f.manager_name = v))
                />
                <FormField
                    label="هاتف المدير"
                    input_type="tel"
                    value=Signal::derive(move || form.get().manager_phone)
                    on_input=Callback::new(move |v: String| form.update(|f| f.manager_phone = v))
                />
                <FormField
                    label="البريد الإلكتروني"
                    input_type="email"
                    value=Signal::derive(move || form.get().email.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.email = opt_text(v)))
                />
                <FormField
                    label="عدد العيادات"
                    input_type="number"
                    value=Signal::derive(move || form.get().clinics_count.to_string())
                    on_input=Callback::new(move |v: String| form.update(|f| f.clinics_count = parse_i64(&v)))
                />
                <div class="form__group">
                    <label class="form__label">
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().is_active
                            on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                        />
                        " نشطة"
                    </label>
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
