use crate::shared::data_source::{error_text, SourceHandle};
use contracts::domain::a001_facility::aggregate::{Facility, FacilityDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel формы регистрации учреждения
#[derive(Clone, Copy)]
pub struct FacilityDetailsViewModel {
    pub form: RwSignal<FacilityDto>,
    /// id редактируемой записи; None для новой
    pub editing_id: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl FacilityDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(FacilityDto::default()),
            editing_id: RwSignal::new(None),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.with(Option::is_some)
    }

    /// Открыть существующую запись на редактирование
    pub fn load_if_needed(&self, existing: Option<Facility>) {
        if let Some(record) = existing {
            self.editing_id.set(Some(record.base.id.as_string()));
            self.form.set(record.to_dto());
        }
    }

    /// Сохранить; при ошибке форма остаётся заполненной
    pub fn save_command(&self, source: SourceHandle, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        let editing = self.editing_id.get_untracked();

        if let Err(e) = Facility::new_for_insert(&current).validate() {
            self.error.set(Some(e));
            return;
        }

        let vm = *self;
        vm.saving.set(true);
        let ds = source.get_value();
        spawn_local(async move {
            let result = match editing.as_deref() {
                Some(id) => ds.update_facility(id, current).await,
                None => ds.create_facility(current).await,
            };
            match result {
                Ok(saved) => {
                    log::info!("Facility saved: {}", saved.base.code);
                    vm.editing_id.set(None);
                    vm.form.set(FacilityDto::default());
                    vm.error.set(None);
                    on_saved.run(());
                }
                Err(e) => vm.error.set(Some(error_text(&e))),
            }
            vm.saving.set(false);
        });
    }
}

impl Default for FacilityDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
