use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::{
    a001_facility, a002_report, a003_purchase_order, a004_inventory_item, a006_transaction,
    a007_dental_contract,
};

/// Сколько демонстрационных записей добавлено по каждому справочнику
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub facilities: usize,
    pub reports: usize,
    pub purchase_orders: usize,
    pub inventory_items: usize,
    pub transactions: usize,
    pub dental_contracts: usize,
}

impl SeedSummary {
    pub fn total(&self) -> usize {
        self.facilities
            + self.reports
            + self.purchase_orders
            + self.inventory_items
            + self.transactions
            + self.dental_contracts
    }
}

/// Заполнить пустые таблицы демонстрационными данными
///
/// Справочники с уже существующими записями не трогаются, поэтому повторный
/// вызов безопасен.
pub async fn seed_sample_data() -> Result<SeedSummary> {
    let summary = SeedSummary {
        facilities: a001_facility::service::insert_test_data()
            .await
            .context("seeding facilities")?,
        reports: a002_report::service::insert_test_data()
            .await
            .context("seeding reports")?,
        purchase_orders: a003_purchase_order::service::insert_test_data()
            .await
            .context("seeding purchase orders")?,
        inventory_items: a004_inventory_item::service::insert_test_data()
            .await
            .context("seeding inventory")?,
        transactions: a006_transaction::service::insert_test_data()
            .await
            .context("seeding transactions")?,
        dental_contracts: a007_dental_contract::service::insert_test_data()
            .await
            .context("seeding dental contracts")?,
    };
    tracing::info!("Sample data inserted: {} records ({:?})", summary.total(), summary);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_total() {
        let summary = SeedSummary {
            facilities: 4,
            reports: 5,
            ..Default::default()
        };
        assert_eq!(summary.total(), 9);
    }
}
