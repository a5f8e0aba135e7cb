use super::dto::{DashboardStats, LowStockItem, OverviewSettings};
use crate::domain::a001_facility::aggregate::Facility;
use crate::domain::a002_report::aggregate::Report;
use crate::domain::a003_purchase_order::aggregate::PurchaseOrder;
use crate::domain::a004_inventory_item::aggregate::InventoryItem;
use crate::domain::a006_transaction::aggregate::Transaction;
use crate::domain::a007_dental_contract::aggregate::DentalContract;
use crate::domain::common::AggregateId;
use crate::shared::analytics::{count_by, monthly_trend, top_n};
use chrono::NaiveDate;

/// Списки записей, по которым считается дашборд
#[derive(Debug, Clone, Copy, Default)]
pub struct OverviewInput<'a> {
    pub facilities: &'a [Facility],
    pub reports: &'a [Report],
    pub orders: &'a [PurchaseOrder],
    pub inventory: &'a [InventoryItem],
    pub transactions: &'a [Transaction],
    pub dental_contracts: &'a [DentalContract],
}

/// Рассчитать сводную статистику по спискам записей
pub fn build_overview(
    input: &OverviewInput<'_>,
    today: NaiveDate,
    settings: &OverviewSettings,
) -> DashboardStats {
    let low_stock = input
        .inventory
        .iter()
        .filter(|i| i.is_low_stock())
        .map(|i| LowStockItem {
            item_id: i.base.id.as_string(),
            item_number: i.item_number().to_string(),
            item_name: i.item_name().to_string(),
            available_quantity: i.available_quantity(),
            minimum_quantity: i.minimum_quantity,
        })
        .collect();

    DashboardStats {
        generated_on: today,
        facilities_total: input.facilities.len(),
        facilities_active: input.facilities.iter().filter(|f| f.is_active).count(),

        reports_total: input.reports.len(),
        reports_by_status: count_by(input.reports, |r| Some(r.status.label().to_string())),
        reports_by_category: count_by(input.reports, |r| Some(r.report_type.clone())),

        orders_total: input.orders.len(),
        orders_by_status: count_by(input.orders, |o| Some(o.status.label().to_string())),
        orders_total_cost: input.orders.iter().map(|o| o.total_cost).sum(),
        orders_trend: monthly_trend(
            input.orders,
            |o| Some(o.order_date),
            |o| o.total_cost,
            today,
            settings.trend_months,
        ),
        top_suppliers: top_n(
            input.orders,
            |o| Some(o.supplier_name.clone()),
            |o| o.total_cost,
            settings.top_suppliers,
        ),

        inventory_items: input.inventory.len(),
        inventory_value: input.inventory.iter().map(|i| i.purchase_value).sum(),
        low_stock,

        transactions_total: input.transactions.len(),
        transactions_by_status: count_by(input.transactions, |t| {
            Some(t.status.label().to_string())
        }),
        overdue_days: settings.overdue_days,
        overdue_transactions: input
            .transactions
            .iter()
            .filter(|t| t.is_overdue_after(today, settings.overdue_days))
            .count(),

        dental_contracts_total: input.dental_contracts.len(),
        dental_contracts_by_status: count_by(input.dental_contracts, |c| {
            Some(c.status.label().to_string())
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_purchase_order::aggregate::PurchaseOrderDto;
    use crate::domain::a004_inventory_item::aggregate::InventoryItemDto;
    use crate::domain::a006_transaction::aggregate::TransactionDto;
    use crate::enums::OrderStatus;
    use crate::shared::analytics::{count_of, total_of};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn order(supplier: &str, cost: f64, on: NaiveDate) -> PurchaseOrder {
        PurchaseOrder::new_for_insert(
            &PurchaseOrderDto {
                order_date: Some(on),
                item_number: "ITM-1".into(),
                item_name: "شاش طبي".into(),
                quantity: 1,
                beneficiary_facility: "مركز النور".into(),
                total_cost: cost,
                supplier_name: supplier.into(),
                ..Default::default()
            },
            on,
        )
    }

    #[test]
    fn test_order_status_breakdown() {
        let today = date(2025, 5, 15);
        let mut delivered = order("أ", 10.0, today);
        delivered.status = OrderStatus::Delivered;
        let orders = vec![order("أ", 10.0, today), order("ب", 20.0, today), delivered];

        let stats = build_overview(
            &OverviewInput {
                orders: &orders,
                ..Default::default()
            },
            today,
            &OverviewSettings::default(),
        );

        assert_eq!(count_of(&stats.orders_by_status, "جديد"), 2);
        assert_eq!(count_of(&stats.orders_by_status, "تم التسليم"), 1);
        assert_eq!(total_of(&stats.orders_by_status), 3);
        assert_eq!(stats.orders_total_cost, 40.0);
    }

    #[test]
    fn test_trend_and_suppliers() {
        let today = date(2025, 1, 10);
        let orders = vec![
            order("شركة أ", 100.0, date(2024, 11, 3)),
            order("شركة ب", 500.0, date(2025, 1, 2)),
            order("شركة أ", 100.0, date(2025, 1, 5)),
            order("شركة ج", 50.0, date(2024, 6, 1)),
        ];
        let stats = build_overview(
            &OverviewInput {
                orders: &orders,
                ..Default::default()
            },
            today,
            &OverviewSettings::default(),
        );

        let months: Vec<(i32, u32)> = stats.orders_trend.iter().map(|b| (b.year, b.month)).collect();
        assert_eq!(months, vec![(2024, 10), (2024, 11), (2024, 12), (2025, 1)]);
        assert_eq!(stats.orders_trend[3].count, 2);
        assert_eq!(stats.orders_trend[3].total, 600.0);
        assert_eq!(stats.top_suppliers[0].key, "شركة ب");
        assert_eq!(stats.top_suppliers[1].total, 200.0);
    }

    #[test]
    fn test_low_stock_and_overdue() {
        let today = date(2025, 3, 31);
        let inventory = vec![
            InventoryItem::new_for_insert(&InventoryItemDto {
                item_number: "A".into(),
                item_name: "أ".into(),
                received_quantity: 100,
                issued_quantity: 120,
                minimum_quantity: 5,
                ..Default::default()
            }),
            InventoryItem::new_for_insert(&InventoryItemDto {
                item_number: "B".into(),
                item_name: "ب".into(),
                received_quantity: 100,
                issued_quantity: 30,
                minimum_quantity: 5,
                ..Default::default()
            }),
        ];
        let transactions = vec![
            Transaction::new_for_insert(
                &TransactionDto {
                    transaction_number: "T-1".into(),
                    receive_date: Some(date(2025, 3, 1)),
                    subject: "س".into(),
                    transaction_type: "وارد".into(),
                    sender_facility: "ج".into(),
                    ..Default::default()
                },
                today,
            ),
            Transaction::new_for_insert(
                &TransactionDto {
                    transaction_number: "T-2".into(),
                    receive_date: Some(date(2025, 3, 20)),
                    subject: "س".into(),
                    transaction_type: "وارد".into(),
                    sender_facility: "ج".into(),
                    ..Default::default()
                },
                today,
            ),
        ];

        let stats = build_overview(
            &OverviewInput {
                inventory: &inventory,
                transactions: &transactions,
                ..Default::default()
            },
            today,
            &OverviewSettings::default(),
        );

        assert_eq!(stats.low_stock.len(), 1);
        assert_eq!(stats.low_stock[0].item_number, "A");
        assert_eq!(stats.low_stock[0].available_quantity, 0);
        assert_eq!(stats.overdue_transactions, 1);
        assert_eq!(count_of(&stats.transactions_by_status, "قيد الانتظار"), 2);
    }
}
