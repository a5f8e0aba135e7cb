use contracts::enums::OrderStatus;
use leptos::prelude::*;

/// Кнопки допустимых переходов заказа из текущего статуса
#[component]
pub fn OrderStatusActions(status: OrderStatus, on_change: Callback<OrderStatus>) -> impl IntoView {
    let next = status.next_statuses();
    if next.is_empty() {
        return view! { <span class="text-muted">"-"</span> }.into_any();
    }

    view! {
        <div class="button-group">
            {next
                .iter()
                .copied()
                .map(|target| {
                    let class = if target == OrderStatus::Rejected {
                        "button button--danger button--small"
                    } else {
                        "button button--secondary button--small"
                    };
                    view! {
                        <button class=class on:click=move |_| on_change.run(target)>
                            {target.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

/// Пары (код, подпись) для фильтра по статусу
pub fn order_status_options() -> Vec<(String, String)> {
    OrderStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.label().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_options_cover_lifecycle() {
        let options = order_status_options();
        assert_eq!(options.len(), OrderStatus::all().len());
        assert_eq!(options[0].0, "new");
    }
}
