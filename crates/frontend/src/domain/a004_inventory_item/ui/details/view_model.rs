use crate::shared::data_source::{error_text, SourceHandle};
use contracts::domain::a004_inventory_item::aggregate::{InventoryItem, InventoryItemDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel формы новой складской позиции
#[derive(Clone, Copy)]
pub struct InventoryItemDetailsViewModel {
    pub form: RwSignal<InventoryItemDto>,
    /// id редактируемой записи; None для новой
    pub editing_id: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl InventoryItemDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(InventoryItemDto::default()),
            editing_id: RwSignal::new(None),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.with(Option::is_some)
    }

    /// Открыть существующую запись на редактирование
    pub fn load_if_needed(&self, existing: Option<InventoryItem>) {
        if let Some(record) = existing {
            self.editing_id.set(Some(record.base.id.as_string()));
            self.form.set(record.to_dto());
        }
    }

    /// Остаток, который получится после сохранения
    pub fn available_preview(&self) -> i64 {
        let f = self.form.get();
        contracts::domain::a004_inventory_item::aggregate::available_quantity(
            f.received_quantity,
            f.issued_quantity,
        )
    }

    pub fn save_command(&self, source: SourceHandle, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        let editing = self.editing_id.get_untracked();

        if let Err(e) = InventoryItem::new_for_insert(&current).validate() {
            self.error.set(Some(e));
            return;
        }

        let vm = *self;
        vm.saving.set(true);
        let ds = source.get_value();
        spawn_local(async move {
            let result = match editing.as_deref() {
                Some(id) => ds.update_inventory_item(id, current).await,
                None => ds.create_inventory_item(current).await,
            };
            match result {
                Ok(saved) => {
                    log::info!(
                        "Inventory item {} saved, available {}",
                        saved.item_number(),
                        saved.available_quantity()
                    );
                    vm.editing_id.set(None);
                    vm.form.set(InventoryItemDto::default());
                    vm.error.set(None);
                    on_saved.run(());
                }
                Err(e) => vm.error.set(Some(error_text(&e))),
            }
            vm.saving.set(false);
        });
    }
}

impl Default for InventoryItemDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
