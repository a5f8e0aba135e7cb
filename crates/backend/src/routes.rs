use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Facilities
        .route(
            "/api/facility",
            get(handlers::a001_facility::list_all).post(handlers::a001_facility::create),
        )
        .route(
            "/api/facility/:id",
            get(handlers::a001_facility::get_by_id)
                .put(handlers::a001_facility::update)
                .delete(handlers::a001_facility::delete),
        )
        // A002 Reports
        .route(
            "/api/report",
            get(handlers::a002_report::list_all).post(handlers::a002_report::create),
        )
        .route(
            "/api/report/:id",
            get(handlers::a002_report::get_by_id)
                .put(handlers::a002_report::update)
                .delete(handlers::a002_report::delete),
        )
        .route(
            "/api/report/:id/status",
            put(handlers::a002_report::change_status),
        )
        // A003 Purchase orders
        .route(
            "/api/purchase_order",
            get(handlers::a003_purchase_order::list_all)
                .post(handlers::a003_purchase_order::create),
        )
        .route(
            "/api/purchase_order/:id",
            get(handlers::a003_purchase_order::get_by_id)
                .put(handlers::a003_purchase_order::update)
                .delete(handlers::a003_purchase_order::delete),
        )
        .route(
            "/api/purchase_order/:id/status",
            put(handlers::a003_purchase_order::change_status),
        )
        // A004 Inventory
        .route(
            "/api/inventory_item",
            get(handlers::a004_inventory_item::list_all)
                .post(handlers::a004_inventory_item::create),
        )
        .route(
            "/api/inventory_item/:id",
            get(handlers::a004_inventory_item::get_by_id)
                .put(handlers::a004_inventory_item::update)
                .delete(handlers::a004_inventory_item::delete),
        )
        // A005 Withdrawal orders
        .route(
            "/api/withdrawal_order",
            get(handlers::a005_withdrawal_order::list_all)
                .post(handlers::a005_withdrawal_order::create),
        )
        // A006 Transactions
        .route(
            "/api/transaction",
            get(handlers::a006_transaction::list_all).post(handlers::a006_transaction::create),
        )
        .route(
            "/api/transaction/:id",
            get(handlers::a006_transaction::get_by_id)
                .put(handlers::a006_transaction::update)
                .delete(handlers::a006_transaction::delete),
        )
        .route(
            "/api/transaction/:id/status",
            put(handlers::a006_transaction::change_status),
        )
        .route(
            "/api/transaction/:id/history",
            get(handlers::a006_transaction::history),
        )
        // A007 Dental contracts
        .route(
            "/api/dental_contract",
            get(handlers::a007_dental_contract::list_all)
                .post(handlers::a007_dental_contract::create),
        )
        .route(
            "/api/dental_contract/:id",
            get(handlers::a007_dental_contract::get_by_id)
                .put(handlers::a007_dental_contract::update)
                .delete(handlers::a007_dental_contract::delete),
        )
        .route(
            "/api/dental_contract/:id/status",
            put(handlers::a007_dental_contract::change_status),
        )
        // D100 Overview dashboard
        .route(
            "/api/dashboard/stats",
            get(handlers::d100_overview::get_stats),
        )
        .route("/api/testdata", post(handlers::testdata::insert_test_data))
}
