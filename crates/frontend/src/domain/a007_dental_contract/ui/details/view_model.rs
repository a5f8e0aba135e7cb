use crate::shared::clock::today;
use crate::shared::data_source::{error_text, SourceHandle};
use crate::shared::format::format_amount;
use contracts::domain::a007_dental_contract::aggregate::{DentalContract, DentalContractDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

fn empty_form() -> DentalContractDto {
    DentalContractDto {
        order_date: Some(today()),
        ..Default::default()
    }
}

/// ViewModel формы договора на стоматологическое оборудование
#[derive(Clone, Copy)]
pub struct DentalContractDetailsViewModel {
    pub form: RwSignal<DentalContractDto>,
    /// id редактируемой записи; None для новой
    pub editing_id: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl DentalContractDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(empty_form()),
            editing_id: RwSignal::new(None),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.with(Option::is_some)
    }

    /// Открыть существующую запись на редактирование
    pub fn load_if_needed(&self, existing: Option<DentalContract>) {
        if let Some(record) = existing {
            self.editing_id.set(Some(record.base.id.as_string()));
            self.form.set(record.to_dto());
        }
    }

    pub fn save_command(&self, source: SourceHandle, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        let editing = self.editing_id.get_untracked();

        if let Err(e) = DentalContract::new_for_insert(&current, today()).validate() {
            self.error.set(Some(e));
            return;
        }

        let vm = *self;
        vm.saving.set(true);
        let ds = source.get_value();
        spawn_local(async move {
            let result = match editing.as_deref() {
                Some(id) => ds.update_dental_contract(id, current).await,
                None => ds.create_dental_contract(current).await,
            };
            match result {
                Ok(saved) => {
                    log::info!(
                        "Dental contract {} saved, total {}",
                        saved.contract_number(),
                        format_amount(saved.total_cost)
                    );
                    vm.editing_id.set(None);
                    vm.form.set(empty_form());
                    vm.error.set(None);
                    on_saved.run(());
                }
                Err(e) => vm.error.set(Some(error_text(&e))),
            }
            vm.saving.set(false);
        });
    }
}

impl Default for DentalContractDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
