use contracts::shared::analytics::{total_of, CategoryCount};
use leptos::prelude::*;

/// Таблица «значение → количество» с итоговой строкой
#[component]
pub fn CountTable(#[prop(into)] title: String, counts: Vec<CategoryCount>) -> impl IntoView {
    let total = total_of(&counts);
    view! {
        <div class="card">
            <h3 class="card__title">{title}</h3>
            <table class="table">
                <tbody>
                    {counts
                        .into_iter()
                        .map(|c| view! {
                            <tr>
                                <td>{c.key}</td>
                                <td class="table__cell--number">{c.count}</td>
                            </tr>
                        })
                        .collect_view()}
                    <tr class="table__totals">
                        <td>"الإجمالي"</td>
                        <td class="table__cell--number">{total}</td>
                    </tr>
                </tbody>
            </table>
        </div>
    }
}
