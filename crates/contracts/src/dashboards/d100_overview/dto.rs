use crate::shared::analytics::{CategoryCount, MonthlyBucket, RankedEntry};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Параметры расчёта дашборда
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverviewSettings {
    /// Глубина помесячного тренда заказов
    pub trend_months: u32,
    /// Размер рейтинга поставщиков
    pub top_suppliers: usize,
    /// Порог просрочки транзакций, дней
    pub overdue_days: i64,
}

impl Default for OverviewSettings {
    fn default() -> Self {
        Self {
            trend_months: crate::shared::analytics::DEFAULT_TREND_MONTHS,
            top_suppliers: crate::shared::analytics::DEFAULT_TOP_N,
            overdue_days: crate::domain::a006_transaction::aggregate::OVERDUE_DAYS,
        }
    }
}

/// Сводная статистика главного дашборда
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Дата, на которую рассчитаны просрочка и тренд
    pub generated_on: NaiveDate,
    pub facilities_total: usize,
    pub facilities_active: usize,

    pub reports_total: usize,
    pub reports_by_status: Vec<CategoryCount>,
    pub reports_by_category: Vec<CategoryCount>,

    pub orders_total: usize,
    pub orders_by_status: Vec<CategoryCount>,
    pub orders_total_cost: f64,
    /// Помесячно по дате заказа, сумма — total_cost
    pub orders_trend: Vec<MonthlyBucket>,
    pub top_suppliers: Vec<RankedEntry>,

    pub inventory_items: usize,
    pub inventory_value: f64,
    pub low_stock: Vec<LowStockItem>,

    pub transactions_total: usize,
    pub transactions_by_status: Vec<CategoryCount>,
    /// Порог, по которому посчитана просрочка
    pub overdue_days: i64,
    pub overdue_transactions: usize,

    pub dental_contracts_total: usize,
    pub dental_contracts_by_status: Vec<CategoryCount>,
}

/// Дефицитная позиция склада
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowStockItem {
    pub item_id: String,
    pub item_number: String,
    pub item_name: String,
    pub available_quantity: i64,
    pub minimum_quantity: i64,
}
