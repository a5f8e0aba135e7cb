use async_trait::async_trait;
use contracts::dashboards::d100_overview::DashboardStats;
use contracts::domain::a001_facility::aggregate::{Facility, FacilityDto};
use contracts::domain::a002_report::aggregate::{Report, ReportDto};
use contracts::domain::a003_purchase_order::aggregate::{PurchaseOrder, PurchaseOrderDto};
use contracts::domain::a004_inventory_item::aggregate::{InventoryItem, InventoryItemDto};
use contracts::domain::a005_withdrawal_order::aggregate::{
    WithdrawalOrder, WithdrawalOrderDto, WithdrawalResult,
};
use contracts::domain::a006_transaction::aggregate::{
    Transaction, TransactionDto, TransactionHistoryEntry,
};
use contracts::domain::a007_dental_contract::aggregate::{DentalContract, DentalContractDto};
use contracts::domain::common::StatusChangeDto;
use contracts::enums::{OrderStatus, ReportStatus, TransactionStatus};
use contracts::shared::api_response::ApiResponse;
use contracts::shared::data_source::{DataResult, DataSource, DataSourceError};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_base;

/// Источник данных поверх REST API backend-а
#[derive(Debug, Clone)]
pub struct HttpDataSource {
    base: String,
}

/// Классификация неуспешного ответа по HTTP-статусу
pub fn classify_failure(status: u16, message: Option<String>) -> DataSourceError {
    let message = message.unwrap_or_else(|| format!("HTTP error: {}", status));
    match status {
        404 => DataSourceError::NotFound,
        400 | 422 => DataSourceError::Validation(message),
        _ => DataSourceError::Server(message),
    }
}

fn network(e: gloo_net::Error) -> DataSourceError {
    DataSourceError::Network(format!("Request failed: {}", e))
}

async fn decode<T: DeserializeOwned>(response: Response) -> DataResult<T> {
    let status = response.status();
    let envelope: ApiResponse<T> = match response.json().await {
        Ok(envelope) => envelope,
        Err(e) if response_failed(status) => {
            log::warn!("Non-envelope error body ({}): {}", status, e);
            return Err(classify_failure(status, None));
        }
        Err(e) => {
            return Err(DataSourceError::Server(format!(
                "Failed to parse response: {}",
                e
            )))
        }
    };

    if !envelope.success || response_failed(status) {
        return Err(classify_failure(status, envelope.message));
    }
    envelope.into_result().map_err(DataSourceError::Server)
}

/// Для ответов без полезной нагрузки важен только флаг успеха
async fn decode_unit(response: Response) -> DataResult<()> {
    let status = response.status();
    let envelope: ApiResponse<serde_json::Value> = response
        .json()
        .await
        .map_err(|_| classify_failure(status, None))?;
    if envelope.success && !response_failed(status) {
        Ok(())
    } else {
        Err(classify_failure(status, envelope.message))
    }
}

fn response_failed(status: u16) -> bool {
    !(200..300).contains(&status)
}

impl HttpDataSource {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Backend на том же хосте, что и страница
    pub fn from_location() -> Self {
        Self::new(api_base())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> DataResult<T> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(network)?;
        decode(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> DataResult<T> {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        decode(response).await
    }

    async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> DataResult<T> {
        let response = Request::put(&self.url(path))
            .json(body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        decode(response).await
    }

    async fn delete(&self, path: &str) -> DataResult<()> {
        let response = Request::delete(&self.url(path))
            .send()
            .await
            .map_err(network)?;
        decode_unit(response).await
    }
}

#[async_trait(?Send)]
impl DataSource for HttpDataSource {
    async fn dashboard_stats(&self) -> DataResult<DashboardStats> {
        self.get("/api/dashboard/stats").await
    }

    async fn list_facilities(&self) -> DataResult<Vec<Facility>> {
        self.get("/api/facility").await
    }

    async fn create_facility(&self, dto: FacilityDto) -> DataResult<Facility> {
        self.post("/api/facility", &dto).await
    }

    async fn update_facility(&self, id: &str, dto: FacilityDto) -> DataResult<Facility> {
        self.put(&format!("/api/facility/{}", id), &dto).await
    }

    async fn delete_facility(&self, id: &str) -> DataResult<()> {
        self.delete(&format!("/api/facility/{}", id)).await
    }

    async fn list_reports(&self) -> DataResult<Vec<Report>> {
        self.get("/api/report").await
    }

    async fn create_report(&self, dto: ReportDto) -> DataResult<Report> {
        self.post("/api/report", &dto).await
    }

    async fn update_report(&self, id: &str, dto: ReportDto) -> DataResult<Report> {
        self.put(&format!("/api/report/{}", id), &dto).await
    }

    async fn change_report_status(
        &self,
        id: &str,
        change: StatusChangeDto<ReportStatus>,
    ) -> DataResult<Report> {
        self.put(&format!("/api/report/{}/status", id), &change).await
    }

    async fn delete_report(&self, id: &str) -> DataResult<()> {
        self.delete(&format!("/api/report/{}", id)).await
    }

    async fn list_purchase_orders(&self) -> DataResult<Vec<PurchaseOrder>> {
        self.get("/api/purchase_order").await
    }

    async fn create_purchase_order(&self, dto: PurchaseOrderDto) -> DataResult<PurchaseOrder> {
        self.post("/api/purchase_order", &dto).await
    }

    async fn update_purchase_order(
        &self,
        id: &str,
        dto: PurchaseOrderDto,
    ) -> DataResult<PurchaseOrder> {
        self.put(&format!("/api/purchase_order/{}", id), &dto).await
    }

    async fn change_purchase_order_status(
        &self,
        id: &str,
        change: StatusChangeDto<OrderStatus>,
    ) -> DataResult<PurchaseOrder> {
        self.put(&format!("/api/purchase_order/{}/status", id), &change)
            .await
    }

    async fn delete_purchase_order(&self, id: &str) -> DataResult<()> {
        self.delete(&format!("/api/purchase_order/{}", id)).await
    }

    async fn list_inventory(&self) -> DataResult<Vec<InventoryItem>> {
        self.get("/api/inventory_item").await
    }

    async fn create_inventory_item(&self, dto: InventoryItemDto) -> DataResult<InventoryItem> {
        self.post("/api/inventory_item", &dto).await
    }

    async fn update_inventory_item(
        &self,
        id: &str,
        dto: InventoryItemDto,
    ) -> DataResult<InventoryItem> {
        self.put(&format!("/api/inventory_item/{}", id), &dto).await
    }

    async fn delete_inventory_item(&self, id: &str) -> DataResult<()> {
        self.delete(&format!("/api/inventory_item/{}", id)).await
    }

    async fn list_withdrawal_orders(&self) -> DataResult<Vec<WithdrawalOrder>> {
        self.get("/api/withdrawal_order").await
    }

    async fn create_withdrawal_order(
        &self,
        dto: WithdrawalOrderDto,
    ) -> DataResult<WithdrawalResult> {
        self.post("/api/withdrawal_order", &dto).await
    }

    async fn list_transactions(&self) -> DataResult<Vec<Transaction>> {
        self.get("/api/transaction").await
    }

    async fn create_transaction(&self, dto: TransactionDto) -> DataResult<Transaction> {
        self.post("/api/transaction", &dto).await
    }

    async fn update_transaction(&self, id: &str, dto: TransactionDto) -> DataResult<Transaction> {
        self.put(&format!("/api/transaction/{}", id), &dto).await
    }

    async fn change_transaction_status(
        &self,
        id: &str,
        change: StatusChangeDto<TransactionStatus>,
    ) -> DataResult<Transaction> {
        self.put(&format!("/api/transaction/{}/status", id), &change)
            .await
    }

    async fn delete_transaction(&self, id: &str) -> DataResult<()> {
        self.delete(&format!("/api/transaction/{}", id)).await
    }

    async fn transaction_history(&self, id: &str) -> DataResult<Vec<TransactionHistoryEntry>> {
        self.get(&format!("/api/transaction/{}/history", id)).await
    }

    async fn list_dental_contracts(&self) -> DataResult<Vec<DentalContract>> {
        self.get("/api/dental_contract").await
    }

    async fn create_dental_contract(&self, dto: DentalContractDto) -> DataResult<DentalContract> {
        self.post("/api/dental_contract", &dto).await
    }

    async fn update_dental_contract(
        &self,
        id: &str,
        dto: DentalContractDto,
    ) -> DataResult<DentalContract> {
        self.put(&format!("/api/dental_contract/{}", id), &dto).await
    }

    async fn change_dental_contract_status(
        &self,
        id: &str,
        change: StatusChangeDto<OrderStatus>,
    ) -> DataResult<DentalContract> {
        self.put(&format!("/api/dental_contract/{}/status", id), &change)
            .await
    }

    async fn delete_dental_contract(&self, id: &str) -> DataResult<()> {
        self.delete(&format!("/api/dental_contract/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_failure() {
        assert_eq!(classify_failure(404, None), DataSourceError::NotFound);
        assert_eq!(
            classify_failure(400, Some("الكمية مطلوبة".into())),
            DataSourceError::Validation("الكمية مطلوبة".into())
        );
        assert_eq!(
            classify_failure(500, None),
            DataSourceError::Server("HTTP error: 500".into())
        );
    }

    #[test]
    fn test_url_join() {
        let source = HttpDataSource::new("http://localhost:3000");
        assert_eq!(source.url("/api/report"), "http://localhost:3000/api/report");
    }
}
