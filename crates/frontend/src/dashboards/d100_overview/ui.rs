use contracts::dashboards::d100_overview::DashboardStats;
use contracts::domain::a003_purchase_order::aggregate::PurchaseOrder;
use contracts::domain::a006_transaction::aggregate::Transaction;
use contracts::shared::analytics::MonthlyBucket;
use contracts::shared::data_source::DataResult;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::components::count_table::CountTable;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::stat_card::{CardTone, StatCard};
use crate::shared::data_source::{error_text, use_data_source};
use crate::shared::format::{format_amount, format_date};

const RECENT_ORDERS: usize = 5;

/// Всё, что нужно экрану; загружается одним блоком
#[derive(Debug, Clone)]
struct OverviewData {
    stats: DashboardStats,
    orders: Vec<PurchaseOrder>,
    transactions: Vec<Transaction>,
}

/// Ширина столбика тренда в процентах от максимального месяца
fn bar_percent(bucket: &MonthlyBucket, max_total: f64) -> f64 {
    if max_total <= 0.0 {
        0.0
    } else {
        (bucket.total / max_total * 100.0).clamp(0.0, 100.0)
    }
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let source = use_data_source();
    let (data, set_data) = signal(None::<OverviewData>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        let ds = source.get_value();
        spawn_local(async move {
            // Три запроса параллельно: либо все данные, либо ошибка целиком
            let result: DataResult<_> = futures::try_join!(
                ds.dashboard_stats(),
                ds.list_purchase_orders(),
                ds.list_transactions(),
            );
            match result {
                Ok((stats, orders, transactions)) => {
                    set_data.set(Some(OverviewData {
                        stats,
                        orders,
                        transactions,
                    }));
                }
                Err(e) => {
                    set_data.set(None);
                    set_error.set(Some(error_text(&e)));
                }
            }
            set_loading.set(false);
        });
    };

    load();

    view! {
        <div class="page" id="d100_overview--dashboard">
            <div class="header">
                <h1 class="header__title">"لوحة المعلومات"</h1>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| load() disabled=move || loading.get()>
                        "تحديث"
                    </button>
                </div>
            </div>

            <ErrorBanner error=error />

            {move || loading.get().then(|| view! { <div class="loading">"جاري التحميل..."</div> })}

            {move || data.get().map(|d| view! { <OverviewBody data=d /> })}
        </div>
    }
}

#[component]
fn OverviewBody(data: OverviewData) -> impl IntoView {
    let OverviewData {
        stats,
        orders,
        transactions,
    } = data;

    let today = stats.generated_on;
    let overdue_days = stats.overdue_days;
    let overdue: Vec<Transaction> = transactions
        .into_iter()
        .filter(|t| t.is_overdue_after(today, overdue_days))
        .collect();
    let recent_orders: Vec<PurchaseOrder> = orders.into_iter().take(RECENT_ORDERS).collect();
    let max_total = stats
        .orders_trend
        .iter()
        .map(|b| b.total)
        .fold(0.0_f64, f64::max);

    let overdue_tone = if stats.overdue_transactions > 0 {
        CardTone::Bad
    } else {
        CardTone::Good
    };
    let low_stock_tone = if stats.low_stock.is_empty() {
        CardTone::Good
    } else {
        CardTone::Warning
    };

    view! {
        <div class="stat-grid">
            <StatCard
                label="المنشآت"
                value=Signal::derive({
                    let v = stats.facilities_total.to_string();
                    move || Some(v.clone())
                })
                subtitle=Signal::derive({
                    let s = format!("النشطة: {}", stats.facilities_active);
                    move || Some(s.clone())
                })
            />
            <StatCard
                label="البلاغات"
                value=Signal::derive({
                    let v = stats.reports_total.to_string();
                    move || Some(v.clone())
                })
            />
            <StatCard
                label="أوامر الشراء"
                value=Signal::derive({
                    let v = stats.orders_total.to_string();
                    move || Some(v.clone())
                })
                subtitle=Signal::derive({
                    let s = format!("الإجمالي: {}", format_amount(stats.orders_total_cost));
                    move || Some(s.clone())
                })
            />
            <StatCard
                label="قيمة المخزون"
                value=Signal::derive({
                    let v = format_amount(stats.inventory_value);
                    move || Some(v.clone())
                })
                tone=low_stock_tone
                subtitle=Signal::derive({
                    let s = format!("أصناف منخفضة: {}", stats.low_stock.len());
                    move || Some(s.clone())
                })
            />
            <StatCard
                label="معاملات متأخرة"
                value=Signal::derive({
                    let v = stats.overdue_transactions.to_string();
                    move || Some(v.clone())
                })
                tone=overdue_tone
                subtitle=Signal::derive({
                    let s = format!("من أصل {}", stats.transactions_total);
                    move || Some(s.clone())
                })
            />
            <StatCard
                label="عقود الأسنان"
                value=Signal::derive({
                    let v = stats.dental_contracts_total.to_string();
                    move || Some(v.clone())
                })
            />
        </div>

        <div class="card-grid">
            <CountTable title="البلاغات حسب الحالة" counts=stats.reports_by_status.clone() />
            <CountTable title="البلاغات حسب الفئة" counts=stats.reports_by_category.clone() />
            <CountTable title="أوامر الشراء حسب الحالة" counts=stats.orders_by_status.clone() />
            <CountTable title="المعاملات حسب الحالة" counts=stats.transactions_by_status.clone() />
            <CountTable title="عقود الأسنان حسب الحالة" counts=stats.dental_contracts_by_status.clone() />
        </div>

        <div class="card">
            <h3 class="card__title">"اتجاه أوامر الشراء الشهري"</h3>
            <table class="table">
                <thead>
                    <tr><th>"الشهر"</th><th>"العدد"</th><th>"التكلفة"</th><th></th></tr>
                </thead>
                <tbody>
                    {stats
                        .orders_trend
                        .iter()
                        .map(|b| {
                            let width = format!("width: {:.0}%", bar_percent(b, max_total));
                            view! {
                                <tr>
                                    <td>{format!("{} {}", b.label, b.year)}</td>
                                    <td class="table__cell--number">{b.count}</td>
                                    <td class="table__cell--number">{format_amount(b.total)}</td>
                                    <td class="trend-bar"><div class="trend-bar__fill" style=width></div></td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>

        <div class="card-grid">
            <div class="card">
                <h3 class="card__title">"أعلى الموردين"</h3>
                <table class="table">
                    <tbody>
                        {stats
                            .top_suppliers
                            .iter()
                            .enumerate()
                            .map(|(i, s)| view! {
                                <tr>
                                    <td>{i + 1}</td>
                                    <td>{s.key.clone()}</td>
                                    <td class="table__cell--number">{s.count}</td>
                                    <td class="table__cell--number">{format_amount(s.total)}</td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>

            <div class="card">
                <h3 class="card__title">"أصناف منخفضة المخزون"</h3>
                <table class="table">
                    <thead>
                        <tr><th>"رقم الصنف"</th><th>"الصنف"</th><th>"المتاح"</th><th>"الحد الأدنى"</th></tr>
                    </thead>
                    <tbody>
                        {stats
                            .low_stock
                            .iter()
                            .map(|item| view! {
                                <tr class="table__row--warning">
                                    <td>{item.item_number.clone()}</td>
                                    <td>{item.item_name.clone()}</td>
                                    <td class="table__cell--number">{item.available_quantity}</td>
                                    <td class="table__cell--number">{item.minimum_quantity}</td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>

        <div class="card-grid">
            <div class="card">
                <h3 class="card__title">"أحدث أوامر الشراء"</h3>
                <table class="table">
                    <tbody>
                        {recent_orders
                            .into_iter()
                            .map(|o| view! {
                                <tr>
                                    <td>{o.order_number().to_string()}</td>
                                    <td>{o.item_name().to_string()}</td>
                                    <td>{format_date(o.order_date)}</td>
                                    <td><span class=format!("badge badge--{}", o.status.code())>{o.status.label()}</span></td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>

            <div class="card">
                <h3 class="card__title">"المعاملات المتأخرة"</h3>
                <table class="table">
                    <tbody>
                        {overdue
                            .into_iter()
                            .map(|t| {
                                let days = t.days_since_received(today);
                                view! {
                                    <tr class="table__row--error">
                                        <td>{t.transaction_number().to_string()}</td>
                                        <td>{t.subject().to_string()}</td>
                                        <td>{t.sender_facility.clone()}</td>
                                        <td class="table__cell--number">{format!("{} يوم", days)}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(total: f64) -> MonthlyBucket {
        MonthlyBucket {
            year: 2025,
            month: 1,
            label: "يناير".into(),
            count: 1,
            total,
        }
    }

    #[test]
    fn test_bar_percent() {
        assert_eq!(bar_percent(&bucket(50.0), 200.0), 25.0);
        assert_eq!(bar_percent(&bucket(50.0), 0.0), 0.0);
        assert_eq!(bar_percent(&bucket(300.0), 200.0), 100.0);
    }
}
