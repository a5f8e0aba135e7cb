use super::view_model::ReportDetailsViewModel;
use crate::domain::a001_facility::ui::picker::{FacilityPicker, FacilityPickerItem};
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::form_field::{FormField, SelectField};
use crate::shared::data_source::use_data_source;
use crate::shared::format::{date_input_value, parse_date};
use contracts::enums::Severity;
use contracts::domain::a002_report::aggregate::Report;
use leptos::prelude::*;

#[component]
pub fn ReportDetails(
    /// Запись для редактирования; None — новая
    existing: Option<Report>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let source = use_data_source();
    let vm = ReportDetailsViewModel::new();
    vm.load_if_needed(existing);
    let form = vm.form;

    let severities: Vec<(String, String)> = Severity::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.label().to_string()))
        .collect();

    view! {
        <div class="details-container report-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "تعديل البلاغ" } else { "بلاغ جديد" }}</h3>
            </div>

            <ErrorBanner error=vm.error />

            <div class="details-form">
                <FormField
                    label="عنوان البلاغ"
                    required=true
                    value=Signal::derive(move || form.get().title)
                    on_input=Callback::new(move |v: String| form.update(|f| f.title = v))
                />
                <FormField
                    label="نوع البلاغ"
                    required=true
                    placeholder="صيانة، أعطال أجهزة، ..."
                    value=Signal::derive(move || form.get().report_type)
                    on_input=Callback::new(move |v: String| form.update(|f| f.report_type = v))
                />
                <FormField
                    label="التصنيف"
                    value=Signal::derive(move || form.get().category)
                    on_input=Callback::new(move |v: String| form.update(|f| f.category = v))
                />
                <SelectField
                    label="الأولوية"
                    value=Signal::derive(move || form.get().severity.code().to_string())
                    options=severities
                    on_change=Callback::new(move |v: String| {
                        if let Some(s) = Severity::from_code(&v) {
                            form.update(|f| f.severity = s);
                        }
                    })
                />
                <FacilityPicker
                    label="المنشأة"
                    value=Signal::derive(move || form.get().facility_name)
                    on_change=Callback::new(move |picked: Option<FacilityPickerItem>| {
                        form.update(|f| match picked {
                            Some(item) => {
                                f.facility_ref = Some(item.id);
                                f.facility_name = item.name;
                            }
                            None => {
                                f.facility_ref = None;
                                f.facility_name.clear();
                            }
                        })
                    })
                />
                <FormField
                    label="المبلّغ"
                    value=Signal::derive(move || form.get().reporter)
                    on_input=Callback::new(move |v: String| form.update(|f| f.reporter = v))
                />
                <FormField
                    label="تاريخ البلاغ"
                    input_type="date"
                    value=Signal::derive(move || date_input_value(form.get().reported_at))
                    on_input=Callback::new(move |v: String| form.update(|f| f.reported_at = parse_date(&v)))
                />
                <div class="form__group form__group--wide">
                    <label class="form__label">"التفاصيل"</label>
                    <textarea
                        class="form__textarea"
                        prop:value=move || form.get().details
                        on:input=move |ev| form.update(|f| f.details = event_target_value(&ev))
                    />
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
