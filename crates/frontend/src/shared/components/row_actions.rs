use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;

/// Кнопки «تعديل» / «حذف» в строке списка
#[component]
pub fn RowActions(on_edit: Callback<()>, on_delete: Callback<()>) -> impl IntoView {
    view! {
        <button class="button button--ghost button--small" on:click=move |_| on_edit.run(())>
            "تعديل"
        </button>
        <button class="button button--ghost button--small" on:click=move |_| on_delete.run(())>
            "حذف"
        </button>
    }
}

/// Запись списка по строковому id (для открытия формы редактирования)
pub fn find_record<T>(items: &[T], id: &str) -> Option<T>
where
    T: AggregateRoot + Clone,
    T::Id: AggregateId,
{
    items.iter().find(|r| r.id().as_string() == id).cloned()
}

/// Текст подтверждения удаления: «حذف <элемент> "<подпись>"؟»
pub fn delete_prompt<T: AggregateRoot>(label: &str) -> String {
    format!("حذف {} \"{}\"؟", T::element_name(), label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_inventory_item::aggregate::{InventoryItem, InventoryItemDto};

    fn item(number: &str) -> InventoryItem {
        InventoryItem::new_for_insert(&InventoryItemDto {
            item_number: number.into(),
            item_name: "قفازات".into(),
            received_quantity: 10,
            ..Default::default()
        })
    }

    #[test]
    fn test_find_record_opens_the_clicked_row() {
        let items = vec![item("INV-1"), item("INV-2")];
        let id = items[1].base.id.as_string();

        let found = find_record(&items, &id).unwrap();
        assert_eq!(found.item_number(), "INV-2");
        assert_eq!(found.to_dto().item_number, "INV-2");

        assert!(find_record(&items, "missing").is_none());
    }

    #[test]
    fn test_delete_prompt_names_the_record_kind() {
        assert_eq!(delete_prompt::<InventoryItem>("INV-2"), "حذف صنف مخزني \"INV-2\"؟");
    }
}
