use super::{DataResult, DataSource, DataSourceError};
use crate::dashboards::d100_overview::{
    build_overview, DashboardStats, OverviewInput, OverviewSettings,
};
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
use crate::domain::common::{AggregateId, AggregateRoot, StatusChangeDto};
use crate::enums::{OrderStatus, ReportStatus, TransactionStatus};
use crate::shared::sample_data;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::cell::RefCell;

#[derive(Default)]
struct Store {
    facilities: Vec<Facility>,
    reports: Vec<Report>,
    purchase_orders: Vec<PurchaseOrder>,
    inventory: Vec<InventoryItem>,
    withdrawals: Vec<WithdrawalOrder>,
    transactions: Vec<Transaction>,
    history: Vec<TransactionHistoryEntry>,
    dental_contracts: Vec<DentalContract>,
}

/// Источник данных в памяти с теми же правилами валидации, что и у сервера
pub struct InMemoryDataSource {
    store: RefCell<Store>,
    today: NaiveDate,
    settings: OverviewSettings,
}

fn live<T: AggregateRoot + Clone>(items: &[T]) -> Vec<T> {
    items
        .iter()
        .filter(|i| i.metadata().is_live())
        .cloned()
        .collect()
}

fn find_mut<'a, T>(items: &'a mut [T], id: &str) -> DataResult<&'a mut T>
where
    T: AggregateRoot,
    T::Id: AggregateId,
{
    items
        .iter_mut()
        .find(|i| i.metadata().is_live() && i.id().as_string() == id)
        .ok_or(DataSourceError::NotFound)
}

fn soft_delete<T>(items: &mut [T], id: &str) -> DataResult<()>
where
    T: AggregateRoot,
    T::Id: AggregateId,
{
    let item = find_mut(items, id)?;
    item.metadata_mut().mark_deleted();
    Ok(())
}

/// Код занят другой живой записью (`except` — id редактируемой)
fn code_taken<T>(items: &[T], code: &str, except: Option<&str>) -> bool
where
    T: AggregateRoot,
    T::Id: AggregateId,
{
    items.iter().any(|i| {
        i.metadata().is_live()
            && i.code() == code
            && except.map_or(true, |id| i.id().as_string() != id)
    })
}

fn validation(message: String) -> DataSourceError {
    DataSourceError::Validation(message)
}

impl InMemoryDataSource {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            store: RefCell::new(Store::default()),
            today,
            settings: OverviewSettings::default(),
        }
    }

    /// Источник, заполненный демонстрационными данными
    pub fn with_sample_data(today: NaiveDate) -> Self {
        let source = Self::new(today);
        {
            let mut store = source.store.borrow_mut();

            store.facilities = sample_data::facilities()
                .iter()
                .map(Facility::new_for_insert)
                .collect();

            store.reports = sample_data::reports(today)
                .iter()
                .map(|dto| Report::new_for_insert(dto, today))
                .collect();

            for (dto, status) in sample_data::purchase_orders(today) {
                let mut order = PurchaseOrder::new_for_insert(&dto, today);
                for step in status.path_from_new() {
                    let moved = order.change_status(step, today);
                    debug_assert!(moved.is_ok(), "sample order path: {:?}", moved);
                }
                store.purchase_orders.push(order);
            }

            store.inventory = sample_data::inventory_items()
                .iter()
                .map(InventoryItem::new_for_insert)
                .collect();

            for (dto, status) in sample_data::transactions(today) {
                let mut transaction = Transaction::new_for_insert(&dto, today);
                if status != TransactionStatus::Pending {
                    if let Ok(entry) = transaction.change_status(status, None) {
                        store.history.push(entry);
                    }
                }
                store.transactions.push(transaction);
            }

            for (dto, status) in sample_data::dental_contracts(today) {
                let mut contract = DentalContract::new_for_insert(&dto, today);
                for step in status.path_from_new() {
                    let moved = contract.change_status(step, today);
                    debug_assert!(moved.is_ok(), "sample contract path: {:?}", moved);
                }
                store.dental_contracts.push(contract);
            }
        }
        source
    }

    pub fn with_settings(mut self, settings: OverviewSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }
}

#[async_trait(?Send)]
impl DataSource for InMemoryDataSource {
    async fn dashboard_stats(&self) -> DataResult<DashboardStats> {
        let store = self.store.borrow();
        let facilities = live(&store.facilities);
        let reports = live(&store.reports);
        let orders = live(&store.purchase_orders);
        let inventory = live(&store.inventory);
        let transactions = live(&store.transactions);
        let dental_contracts = live(&store.dental_contracts);

        Ok(build_overview(
            &OverviewInput {
                facilities: &facilities,
                reports: &reports,
                orders: &orders,
                inventory: &inventory,
                transactions: &transactions,
                dental_contracts: &dental_contracts,
            },
            self.today,
            &self.settings,
        ))
    }

    // ------------------------------------------------------------------ a001

    async fn list_facilities(&self) -> DataResult<Vec<Facility>> {
        Ok(live(&self.store.borrow().facilities))
    }

    async fn create_facility(&self, dto: FacilityDto) -> DataResult<Facility> {
        let mut facility = Facility::new_for_insert(&dto);
        facility.validate().map_err(validation)?;
        let mut store = self.store.borrow_mut();
        if code_taken(&store.facilities, &facility.base.code, None) {
            return Err(validation(format!(
                "رمز المنشأة \"{}\" مستخدم مسبقاً",
                facility.base.code
            )));
        }
        facility.before_write();
        store.facilities.push(facility.clone());
        Ok(facility)
    }

    async fn update_facility(&self, id: &str, dto: FacilityDto) -> DataResult<Facility> {
        let mut store = self.store.borrow_mut();
        let mut updated = find_mut(&mut store.facilities, id)?.clone();
        updated.update(&dto);
        updated.validate().map_err(validation)?;
        if code_taken(&store.facilities, &updated.base.code, Some(id)) {
            return Err(validation(format!(
                "رمز المنشأة \"{}\" مستخدم مسبقاً",
                updated.base.code
            )));
        }
        let facility = find_mut(&mut store.facilities, id)?;
        updated.before_write();
        *facility = updated.clone();
        Ok(updated)
    }

    async fn delete_facility(&self, id: &str) -> DataResult<()> {
        soft_delete(&mut self.store.borrow_mut().facilities, id)
    }

    // ------------------------------------------------------------------ a002

    async fn list_reports(&self) -> DataResult<Vec<Report>> {
        Ok(live(&self.store.borrow().reports))
    }

    async fn create_report(&self, dto: ReportDto) -> DataResult<Report> {
        let mut report = Report::new_for_insert(&dto, self.today);
        report.validate().map_err(validation)?;
        report.before_write();
        self.store.borrow_mut().reports.push(report.clone());
        Ok(report)
    }

    async fn update_report(&self, id: &str, dto: ReportDto) -> DataResult<Report> {
        let mut store = self.store.borrow_mut();
        let report = find_mut(&mut store.reports, id)?;
        let mut updated = report.clone();
        updated.update(&dto);
        updated.validate().map_err(validation)?;
        updated.before_write();
        *report = updated.clone();
        Ok(updated)
    }

    async fn change_report_status(
        &self,
        id: &str,
        change: StatusChangeDto<ReportStatus>,
    ) -> DataResult<Report> {
        let mut store = self.store.borrow_mut();
        let report = find_mut(&mut store.reports, id)?;
        report.change_status(change.status, self.today);
        report.before_write();
        Ok(report.clone())
    }

    async fn delete_report(&self, id: &str) -> DataResult<()> {
        soft_delete(&mut self.store.borrow_mut().reports, id)
    }

    // ------------------------------------------------------------------ a003

    async fn list_purchase_orders(&self) -> DataResult<Vec<PurchaseOrder>> {
        Ok(live(&self.store.borrow().purchase_orders))
    }

    async fn create_purchase_order(&self, dto: PurchaseOrderDto) -> DataResult<PurchaseOrder> {
        let mut order = PurchaseOrder::new_for_insert(&dto, self.today);
        order.validate().map_err(validation)?;
        order.before_write();
        self.store.borrow_mut().purchase_orders.push(order.clone());
        Ok(order)
    }

    async fn update_purchase_order(
        &self,
        id: &str,
        dto: PurchaseOrderDto,
    ) -> DataResult<PurchaseOrder> {
        let mut store = self.store.borrow_mut();
        let order = find_mut(&mut store.purchase_orders, id)?;
        let mut updated = order.clone();
        updated.update(&dto);
        updated.validate().map_err(validation)?;
        updated.before_write();
        *order = updated.clone();
        Ok(updated)
    }

    async fn change_purchase_order_status(
        &self,
        id: &str,
        change: StatusChangeDto<OrderStatus>,
    ) -> DataResult<PurchaseOrder> {
        let mut store = self.store.borrow_mut();
        let order = find_mut(&mut store.purchase_orders, id)?;
        order
            .change_status(change.status, self.today)
            .map_err(validation)?;
        order.before_write();
        Ok(order.clone())
    }

    async fn delete_purchase_order(&self, id: &str) -> DataResult<()> {
        soft_delete(&mut self.store.borrow_mut().purchase_orders, id)
    }

    // ------------------------------------------------------------- a004/a005

    async fn list_inventory(&self) -> DataResult<Vec<InventoryItem>> {
        Ok(live(&self.store.borrow().inventory))
    }

    async fn create_inventory_item(&self, dto: InventoryItemDto) -> DataResult<InventoryItem> {
        let mut item = InventoryItem::new_for_insert(&dto);
        item.validate().map_err(validation)?;
        let mut store = self.store.borrow_mut();
        if code_taken(&store.inventory, item.item_number(), None) {
            return Err(validation(format!(
                "رقم الصنف \"{}\" مسجل مسبقاً",
                item.item_number()
            )));
        }
        item.before_write();
        store.inventory.push(item.clone());
        Ok(item)
    }

    async fn update_inventory_item(
        &self,
        id: &str,
        dto: InventoryItemDto,
    ) -> DataResult<InventoryItem> {
        let mut store = self.store.borrow_mut();
        let mut updated = find_mut(&mut store.inventory, id)?.clone();
        updated.update(&dto);
        updated.validate().map_err(validation)?;
        if code_taken(&store.inventory, updated.item_number(), Some(id)) {
            return Err(validation(format!(
                "رقم الصنف \"{}\" مسجل مسبقاً",
                updated.item_number()
            )));
        }
        let item = find_mut(&mut store.inventory, id)?;
        updated.before_write();
        *item = updated.clone();
        Ok(updated)
    }

    async fn delete_inventory_item(&self, id: &str) -> DataResult<()> {
        soft_delete(&mut self.store.borrow_mut().inventory, id)
    }

    async fn list_withdrawal_orders(&self) -> DataResult<Vec<WithdrawalOrder>> {
        Ok(live(&self.store.borrow().withdrawals))
    }

    async fn create_withdrawal_order(
        &self,
        dto: WithdrawalOrderDto,
    ) -> DataResult<WithdrawalResult> {
        let mut store = self.store.borrow_mut();
        let item = find_mut(&mut store.inventory, &dto.item_ref)?;

        let mut order =
            WithdrawalOrder::new_for_item(&dto, item, self.today).map_err(validation)?;
        item.issue(order.requested_quantity).map_err(validation)?;
        item.before_write();
        order.before_write();

        let result = WithdrawalResult {
            order: order.clone(),
            item: item.clone(),
        };
        store.withdrawals.push(order);
        Ok(result)
    }

    // ------------------------------------------------------------------ a006

    async fn list_transactions(&self) -> DataResult<Vec<Transaction>> {
        Ok(live(&self.store.borrow().transactions))
    }

    async fn create_transaction(&self, dto: TransactionDto) -> DataResult<Transaction> {
        let mut transaction = Transaction::new_for_insert(&dto, self.today);
        transaction.validate().map_err(validation)?;
        transaction.before_write();
        self.store.borrow_mut().transactions.push(transaction.clone());
        Ok(transaction)
    }

    async fn update_transaction(&self, id: &str, dto: TransactionDto) -> DataResult<Transaction> {
        let mut store = self.store.borrow_mut();
        let transaction = find_mut(&mut store.transactions, id)?;
        let mut updated = transaction.clone();
        updated.update(&dto);
        updated.validate().map_err(validation)?;
        updated.before_write();
        *transaction = updated.clone();
        Ok(updated)
    }

    async fn change_transaction_status(
        &self,
        id: &str,
        change: StatusChangeDto<TransactionStatus>,
    ) -> DataResult<Transaction> {
        let mut store = self.store.borrow_mut();
        let transaction = find_mut(&mut store.transactions, id)?;
        let entry = transaction
            .change_status(change.status, change.note)
            .map_err(validation)?;
        if entry.from_status == entry.to_status {
            return Ok(transaction.clone());
        }
        transaction.before_write();
        let result = transaction.clone();
        store.history.push(entry);
        Ok(result)
    }

    async fn delete_transaction(&self, id: &str) -> DataResult<()> {
        soft_delete(&mut self.store.borrow_mut().transactions, id)
    }

    async fn transaction_history(&self, id: &str) -> DataResult<Vec<TransactionHistoryEntry>> {
        let store = self.store.borrow();
        if !store
            .transactions
            .iter()
            .any(|t| t.base.id.as_string() == id)
        {
            return Err(DataSourceError::NotFound);
        }
        Ok(store
            .history
            .iter()
            .filter(|h| h.transaction_id == id)
            .cloned()
            .collect())
    }

    // ------------------------------------------------------------------ a007

    async fn list_dental_contracts(&self) -> DataResult<Vec<DentalContract>> {
        Ok(live(&self.store.borrow().dental_contracts))
    }

    async fn create_dental_contract(&self, dto: DentalContractDto) -> DataResult<DentalContract> {
        let mut contract = DentalContract::new_for_insert(&dto, self.today);
        contract.validate().map_err(validation)?;
        contract.before_write();
        self.store.borrow_mut().dental_contracts.push(contract.clone());
        Ok(contract)
    }

    async fn update_dental_contract(
        &self,
        id: &str,
        dto: DentalContractDto,
    ) -> DataResult<DentalContract> {
        let mut store = self.store.borrow_mut();
        let contract = find_mut(&mut store.dental_contracts, id)?;
        let mut updated = contract.clone();
        updated.update(&dto);
        updated.validate().map_err(validation)?;
        updated.before_write();
        *contract = updated.clone();
        Ok(updated)
    }

    async fn change_dental_contract_status(
        &self,
        id: &str,
        change: StatusChangeDto<OrderStatus>,
    ) -> DataResult<DentalContract> {
        let mut store = self.store.borrow_mut();
        let contract = find_mut(&mut store.dental_contracts, id)?;
        contract
            .change_status(change.status, self.today)
            .map_err(validation)?;
        contract.before_write();
        Ok(contract.clone())
    }

    async fn delete_dental_contract(&self, id: &str) -> DataResult<()> {
        soft_delete(&mut self.store.borrow_mut().dental_contracts, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::{count_of, total_of, ListFilter};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    #[tokio::test]
    async fn test_sample_dashboard_totals() {
        let source = InMemoryDataSource::with_sample_data(today());
        let stats = source.dashboard_stats().await.unwrap();

        assert_eq!(stats.facilities_total, 4);
        assert_eq!(stats.facilities_active, 3);
        assert_eq!(total_of(&stats.orders_by_status), stats.orders_total);
        assert_eq!(count_of(&stats.orders_by_status, "تم التسليم"), 2);
        assert!(stats.top_suppliers.len() <= 4);
        assert_eq!(stats.top_suppliers[0].key, "شركة التجهيزات الحديثة");
        assert_eq!(stats.orders_trend.len(), 4);
        // TR-0101 ждёт 40 дней
        assert_eq!(stats.overdue_transactions, 1);
        // INV-004: 40 получено, 40 выдано
        assert!(stats.low_stock.iter().any(|i| i.item_number == "INV-004"));
    }

    #[tokio::test]
    async fn test_withdrawal_updates_available_quantity() {
        let source = InMemoryDataSource::with_sample_data(today());
        let item = source
            .list_inventory()
            .await
            .unwrap()
            .into_iter()
            .find(|i| i.item_number() == "INV-001")
            .unwrap();
        assert_eq!(item.available_quantity(), 1800);

        let result = source
            .create_withdrawal_order(WithdrawalOrderDto {
                item_ref: item.base.id.as_string(),
                beneficiary_facility: "مركز النور الصحي".into(),
                requested_quantity: 800,
                recipient_name: "أمين المستودع".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(result.item.available_quantity(), 1000);
        assert_eq!(source.list_withdrawal_orders().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_withdrawal_over_available_keeps_stock() {
        let source = InMemoryDataSource::with_sample_data(today());
        let item = source
            .list_inventory()
            .await
            .unwrap()
            .into_iter()
            .find(|i| i.item_number() == "INV-002")
            .unwrap();

        let err = source
            .create_withdrawal_order(WithdrawalOrderDto {
                item_ref: item.base.id.as_string(),
                beneficiary_facility: "مركز النور الصحي".into(),
                requested_quantity: 51,
                recipient_name: "أمين المستودع".into(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DataSourceError::Validation(_)));

        let after = source.list_inventory().await.unwrap();
        let same = after.iter().find(|i| i.item_number() == "INV-002").unwrap();
        assert_eq!(same.available_quantity(), 50);
        assert!(source.list_withdrawal_orders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_order_status_flow_and_filter() {
        let source = InMemoryDataSource::new(today());
        let order = source
            .create_purchase_order(PurchaseOrderDto {
                item_number: "ITM-9".into(),
                item_name: "أنابيب أكسجين".into(),
                quantity: 10,
                beneficiary_facility: "مركز النور الصحي".into(),
                total_cost: 700.0,
                supplier_name: "شركة الغازات الطبية".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        let id = order.base.id.as_string();

        let skipped = source
            .change_purchase_order_status(
                &id,
                StatusChangeDto {
                    status: OrderStatus::Delivered,
                    note: None,
                },
            )
            .await;
        assert!(skipped.is_err());

        let approved = source
            .change_purchase_order_status(
                &id,
                StatusChangeDto {
                    status: OrderStatus::Approved,
                    note: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(approved.status, OrderStatus::Approved);

        let all = source.list_purchase_orders().await.unwrap();
        let filtered = ListFilter::new("أكسجين", "approved", "مركز النور الصحي").apply(&all);
        assert_eq!(filtered.len(), 1);
    }

    #[tokio::test]
    async fn test_transaction_history_and_delete() {
        let source = InMemoryDataSource::new(today());
        let tr = source
            .create_transaction(TransactionDto {
                transaction_number: "TR-1".into(),
                subject: "طلب توريد".into(),
                transaction_type: "وارد".into(),
                sender_facility: "مركز النور الصحي".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        let id = tr.base.id.as_string();

        source
            .change_transaction_status(
                &id,
                StatusChangeDto {
                    status: TransactionStatus::Completed,
                    note: Some("تم".into()),
                },
            )
            .await
            .unwrap();

        let history = source.transaction_history(&id).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].to_status, TransactionStatus::Completed);

        source.delete_transaction(&id).await.unwrap();
        assert!(source.list_transactions().await.unwrap().is_empty());
        assert_eq!(
            source.delete_transaction(&id).await,
            Err(DataSourceError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_facility_code_stays_unique_on_update() {
        let source = InMemoryDataSource::with_sample_data(today());
        let facilities = source.list_facilities().await.unwrap();
        let taken = facilities[0].base.code.clone();
        let other = &facilities[1];

        let mut dto = other.to_dto();
        dto.code = Some(taken.clone());
        let result = source
            .update_facility(&other.base.id.as_string(), dto)
            .await;
        assert!(matches!(result, Err(DataSourceError::Validation(_))));

        let codes: Vec<String> = source
            .list_facilities()
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.base.code)
            .collect();
        assert_eq!(codes.iter().filter(|c| **c == taken).count(), 1);

        // свой же код при редактировании допустим
        let mut own = other.to_dto();
        own.manager_name = "د. سلمان".into();
        let saved = source
            .update_facility(&other.base.id.as_string(), own)
            .await
            .unwrap();
        assert_eq!(saved.base.code, other.base.code);
        assert_eq!(saved.manager_name, "د. سلمان");
    }

    #[tokio::test]
    async fn test_inventory_item_number_is_unique() {
        let source = InMemoryDataSource::with_sample_data(today());
        let items = source.list_inventory().await.unwrap();

        let duplicate = source.create_inventory_item(items[0].to_dto()).await;
        assert!(matches!(duplicate, Err(DataSourceError::Validation(_))));

        let mut dto = items[1].to_dto();
        dto.item_number = items[0].item_number().to_string();
        let renamed = source
            .update_inventory_item(&items[1].base.id.as_string(), dto)
            .await;
        assert!(matches!(renamed, Err(DataSourceError::Validation(_))));
        assert_eq!(source.list_inventory().await.unwrap().len(), items.len());
    }

    #[tokio::test]
    async fn test_edit_form_round_trip_keeps_status() {
        let source = InMemoryDataSource::with_sample_data(today());
        let order = source
            .list_purchase_orders()
            .await
            .unwrap()
            .into_iter()
            .find(|o| o.status == OrderStatus::Delivered)
            .unwrap();

        let mut form = order.to_dto();
        form.supplier_contact = Some("0501234567".into());
        let saved = source
            .update_purchase_order(&order.base.id.as_string(), form)
            .await
            .unwrap();

        assert_eq!(saved.status, OrderStatus::Delivered);
        assert_eq!(saved.supplier_contact.as_deref(), Some("0501234567"));
        assert_eq!(saved.base.metadata.version, order.base.metadata.version + 1);
    }

    #[tokio::test]
    async fn test_invalid_facility_not_stored() {
        let source = InMemoryDataSource::new(today());
        let result = source.create_facility(FacilityDto::default()).await;
        assert!(matches!(result, Err(DataSourceError::Validation(_))));
        assert!(source.list_facilities().await.unwrap().is_empty());
    }
}
