use anyhow::Result;
use contracts::dashboards::d100_overview::{build_overview, DashboardStats, OverviewInput};

use crate::domain::{
    a001_facility, a002_report, a003_purchase_order, a004_inventory_item, a006_transaction,
    a007_dental_contract,
};
use crate::shared::clock::today;
use crate::shared::config;

/// Сводка для главного дашборда по всем живым записям
pub async fn get_stats() -> Result<DashboardStats> {
    let (facilities, reports, orders, inventory, transactions, dental_contracts) = tokio::try_join!(
        a001_facility::service::list_all(),
        a002_report::service::list_all(),
        a003_purchase_order::service::list_all(),
        a004_inventory_item::service::list_all(),
        a006_transaction::service::list_all(),
        a007_dental_contract::service::list_all(),
    )?;

    let settings = config::global().dashboard.settings();
    let stats = build_overview(
        &OverviewInput {
            facilities: &facilities,
            reports: &reports,
            orders: &orders,
            inventory: &inventory,
            transactions: &transactions,
            dental_contracts: &dental_contracts,
        },
        today(),
        &settings,
    );

    tracing::debug!(
        "Dashboard stats: {} orders, {} low stock, {} overdue",
        stats.orders_total,
        stats.low_stock.len(),
        stats.overdue_transactions
    );
    Ok(stats)
}
