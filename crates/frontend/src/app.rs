use crate::dashboards::d100_overview::OverviewDashboard;
use crate::domain::a001_facility::ui::list::FacilityList;
use crate::domain::a002_report::ui::list::ReportList;
use crate::domain::a003_purchase_order::ui::list::PurchaseOrderList;
use crate::domain::a004_inventory_item::ui::list::WarehousePage;
use crate::domain::a006_transaction::ui::list::TransactionList;
use crate::domain::a007_dental_contract::ui::list::DentalContractList;
use crate::shared::api_utils::location_query;
use crate::shared::data_source::{is_demo_query, provide_data_source, select_source};
use crate::shared::page::{initial_page, Page};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let query = location_query();
    let demo = is_demo_query(&query);

    // Один источник данных на всё приложение
    provide_data_source(select_source());

    let (page, set_page) = signal(initial_page(&query));

    view! {
        <div class="app" dir="rtl" lang="ar">
            <nav class="app-nav">
                <div class="app-nav__brand">
                    "إدارة الإمداد والصيانة"
                    {demo.then(|| view! { <span class="badge badge--warning">"وضع تجريبي"</span> })}
                </div>
                {Page::all()
                    .into_iter()
                    .map(|p| {
                        view! {
                            <button
                                class=move || if page.get() == p { "app-nav__item app-nav__item--active" } else { "app-nav__item" }
                                on:click=move |_| set_page.set(p)
                            >
                                {p.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <main class="app-content">
                {move || match page.get() {
                    Page::Dashboard => view! { <OverviewDashboard /> }.into_any(),
                    Page::Facilities => view! { <FacilityList /> }.into_any(),
                    Page::Reports => view! { <ReportList /> }.into_any(),
                    Page::PurchaseOrders => view! { <PurchaseOrderList /> }.into_any(),
                    Page::DentalContracts => view! { <DentalContractList /> }.into_any(),
                    Page::Warehouse => view! { <WarehousePage /> }.into_any(),
                    Page::Transactions => view! { <TransactionList /> }.into_any(),
                }}
            </main>
        </div>
    }
}
