use crate::shared::clock::today;
use crate::shared::data_source::{error_text, SourceHandle};
use contracts::domain::a002_report::aggregate::{Report, ReportDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel формы нового или редактируемого отчёта
#[derive(Clone, Copy)]
pub struct ReportDetailsViewModel {
    pub form: RwSignal<ReportDto>,
    /// id редактируемой записи; None для новой
    pub editing_id: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ReportDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ReportDto {
                reported_at: Some(today()),
                ..Default::default()
            }),
            editing_id: RwSignal::new(None),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.with(Option::is_some)
    }

    /// Открыть существующую запись на редактирование
    pub fn load_if_needed(&self, existing: Option<Report>) {
        if let Some(record) = existing {
            self.editing_id.set(Some(record.base.id.as_string()));
            self.form.set(record.to_dto());
        }
    }

    pub fn save_command(&self, source: SourceHandle, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        let editing = self.editing_id.get_untracked();

        if let Err(e) = Report::new_for_insert(&current, today()).validate() {
            self.error.set(Some(e));
            return;
        }

        let vm = *self;
        vm.saving.set(true);
        let ds = source.get_value();
        spawn_local(async move {
            let result = match editing.as_deref() {
                Some(id) => ds.update_report(id, current).await,
                None => ds.create_report(current).await,
            };
            match result {
                Ok(saved) => {
                    log::info!("Report saved: {}", saved.base.code);
                    vm.editing_id.set(None);
                    vm.form.set(ReportDto {
                        reported_at: Some(today()),
                        ..Default::default()
                    });
                    vm.error.set(None);
                    on_saved.run(());
                }
                Err(e) => vm.error.set(Some(error_text(&e))),
            }
            vm.saving.set(false);
        });
    }
}

impl Default for ReportDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
