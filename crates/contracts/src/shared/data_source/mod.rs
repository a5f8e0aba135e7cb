//! Источник данных для экранов.
//!
//! Экраны работают только через трейт `DataSource`. Настоящая реализация ходит
//! в REST API (см. frontend), `InMemoryDataSource` держит данные в памяти и
//! подставляется явно: в тестах и в демо-режиме.

pub mod memory;

use crate::dashboards::d100_overview::DashboardStats;
use crate::domain::a001_facility::aggregate::{Facility, FacilityDto};
use crate::domain::a002_report::aggregate::{Report, ReportDto};
use crate::domain::a003_purchase_order::aggregate::{PurchaseOrder, PurchaseOrderDto};
use crate::domain::a004_inventory_item::aggregate::{InventoryItem, InventoryItemDto};
use crate::domain::a005_withdrawal_order::aggregate::{
    WithdrawalOrder, WithdrawalOrderDto, WithdrawalResult,
};
use crate::domain::a006_transaction::aggregate::{
    Transaction, TransactionDto, TransactionHistoryEntry,
};
use crate::domain::a007_dental_contract::aggregate::{DentalContract, DentalContractDto};
use crate::domain::common::StatusChangeDto;
use crate::enums::{OrderStatus, ReportStatus, TransactionStatus};
use async_trait::async_trait;
use thiserror::Error;

pub use memory::InMemoryDataSource;

/// Ошибки источника данных
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataSourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("{0}")]
    Validation(String),

    #[error("Not found")]
    NotFound,
}

pub type DataResult<T> = Result<T, DataSourceError>;

/// Операции REST API, которые используют экраны
#[async_trait(?Send)]
pub trait DataSource {
    // d100 — дашборд
    async fn dashboard_stats(&self) -> DataResult<DashboardStats>;

    // a001 — учреждения
    async fn list_facilities(&self) -> DataResult<Vec<Facility>>;
    async fn create_facility(&self, dto: FacilityDto) -> DataResult<Facility>;
    async fn update_facility(&self, id: &str, dto: FacilityDto) -> DataResult<Facility>;
    async fn delete_facility(&self, id: &str) -> DataResult<()>;

    // a002 — отчёты о неисправностях
    async fn list_reports(&self) -> DataResult<Vec<Report>>;
    async fn create_report(&self, dto: ReportDto) -> DataResult<Report>;
    async fn update_report(&self, id: &str, dto: ReportDto) -> DataResult<Report>;
    async fn change_report_status(
        &self,
        id: &str,
        change: StatusChangeDto<ReportStatus>,
    ) -> DataResult<Report>;
    async fn delete_report(&self, id: &str) -> DataResult<()>;

    // a003 — заказы прямой закупки
    async fn list_purchase_orders(&self) -> DataResult<Vec<PurchaseOrder>>;
    async fn create_purchase_order(&self, dto: PurchaseOrderDto) -> DataResult<PurchaseOrder>;
    async fn update_purchase_order(
        &self,
        id: &str,
        dto: PurchaseOrderDto,
    ) -> DataResult<PurchaseOrder>;
    async fn change_purchase_order_status(
        &self,
        id: &str,
        change: StatusChangeDto<OrderStatus>,
    ) -> DataResult<PurchaseOrder>;
    async fn delete_purchase_order(&self, id: &str) -> DataResult<()>;

    // a004/a005 — склад и выдача
    async fn list_inventory(&self) -> DataResult<Vec<InventoryItem>>;
    async fn create_inventory_item(&self, dto: InventoryItemDto) -> DataResult<InventoryItem>;
    async fn update_inventory_item(
        &self,
        id: &str,
        dto: InventoryItemDto,
    ) -> DataResult<InventoryItem>;
    async fn delete_inventory_item(&self, id: &str) -> DataResult<()>;
    async fn list_withdrawal_orders(&self) -> DataResult<Vec<WithdrawalOrder>>;
    async fn create_withdrawal_order(
        &self,
        dto: WithdrawalOrderDto,
    ) -> DataResult<WithdrawalResult>;

    // a006 — административные транзакции
    async fn list_transactions(&self) -> DataResult<Vec<Transaction>>;
    async fn create_transaction(&self, dto: TransactionDto) -> DataResult<Transaction>;
    async fn update_transaction(&self, id: &str, dto: TransactionDto) -> DataResult<Transaction>;
    async fn change_transaction_status(
        &self,
        id: &str,
        change: StatusChangeDto<TransactionStatus>,
    ) -> DataResult<Transaction>;
    async fn delete_transaction(&self, id: &str) -> DataResult<()>;
    async fn transaction_history(&self, id: &str) -> DataResult<Vec<TransactionHistoryEntry>>;

    // a007 — договоры на стоматологическое оборудование
    async fn list_dental_contracts(&self) -> DataResult<Vec<DentalContract>>;
    async fn create_dental_contract(&self, dto: DentalContractDto) -> DataResult<DentalContract>;
    async fn update_dental_contract(
        &self,
        id: &str,
        dto: DentalContractDto,
    ) -> DataResult<DentalContract>;
    async fn change_dental_contract_status(
        &self,
        id: &str,
        change: StatusChangeDto<OrderStatus>,
    ) -> DataResult<DentalContract>;
    async fn delete_dental_contract(&self, id: &str) -> DataResult<()>;
}
