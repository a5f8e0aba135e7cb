pub mod common;

pub mod a001_facility;
pub mod a002_report;
pub mod a003_purchase_order;
pub mod a004_inventory_item;
pub mod a005_withdrawal_order;
pub mod a006_transaction;
pub mod a007_dental_contract;
