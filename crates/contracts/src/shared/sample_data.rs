//! Демонстрационный набор записей: используется `POST /api/testdata`
//! и демо-режимом фронтенда. Даты считаются от переданного `today`,
//! чтобы тренд и просрочка на дашборде были заполнены.

use crate::domain::a001_facility::aggregate::FacilityDto;
use crate::domain::a002_report::aggregate::ReportDto;
use crate::domain::a003_purchase_order::aggregate::PurchaseOrderDto;
use crate::domain::a004_inventory_item::aggregate::InventoryItemDto;
use crate::domain::a006_transaction::aggregate::TransactionDto;
use crate::domain::a007_dental_contract::aggregate::DentalContractDto;
use crate::enums::{OrderStatus, ReportStatus, Severity, TransactionStatus};
use chrono::{Duration, NaiveDate};

fn days_ago(today: NaiveDate, days: i64) -> NaiveDate {
    today - Duration::days(days)
}

pub fn facilities() -> Vec<FacilityDto> {
    vec![
        FacilityDto {
            code: Some("FAC-001".into()),
            name: "مستشفى الملك فهد العام".into(),
            sector: "القطاع الشمالي".into(),
            facility_type: "مستشفى".into(),
            manager_name: "د. خالد الزهراني".into(),
            manager_phone: "0126650000".into(),
            email: Some("kfh@health.example".into()),
            clinics_count: 42,
            is_active: true,
            comment: None,
        },
        FacilityDto {
            code: Some("FAC-002".into()),
            name: "مركز النور الصحي".into(),
            sector: "القطاع الشمالي".into(),
            facility_type: "مركز رعاية أولية".into(),
            manager_name: "أ. سارة القحطاني".into(),
            manager_phone: "0126651111".into(),
            email: None,
            clinics_count: 6,
            is_active: true,
            comment: None,
        },
        FacilityDto {
            code: Some("FAC-003".into()),
            name: "مركز طب الأسنان التخصصي".into(),
            sector: "القطاع الجنوبي".into(),
            facility_type: "مركز تخصصي".into(),
            manager_name: "د. فهد العتيبي".into(),
            manager_phone: "0126652222".into(),
            email: Some("dental@health.example".into()),
            clinics_count: 18,
            is_active: true,
            comment: None,
        },
        FacilityDto {
            code: Some("FAC-004".into()),
            name: "مركز الروضة الصحي".into(),
            sector: "القطاع الجنوبي".into(),
            facility_type: "مركز رعاية أولية".into(),
            manager_name: "أ. منى الحربي".into(),
            manager_phone: "0126653333".into(),
            email: None,
            clinics_count: 4,
            is_active: false,
            comment: Some("مغلق مؤقتاً للترميم".into()),
        },
    ]
}

pub fn reports(today: NaiveDate) -> Vec<ReportDto> {
    let report = |title: &str,
                  report_type: &str,
                  category: &str,
                  facility: &str,
                  status: ReportStatus,
                  severity: Severity,
                  age: i64| ReportDto {
        code: None,
        title: title.into(),
        report_type: report_type.into(),
        category: category.into(),
        details: String::new(),
        status,
        severity,
        facility_ref: None,
        facility_name: facility.into(),
        reporter: "قسم الصيانة".into(),
        reported_at: Some(days_ago(today, age)),
        resolved_at: match status {
            ReportStatus::Closed => Some(days_ago(today, age / 2)),
            _ => None,
        },
        comment: None,
    };

    vec![
        report(
            "عطل في جهاز الأشعة المقطعية",
            "عطل",
            "أجهزة أشعة",
            "مستشفى الملك فهد العام",
            ReportStatus::OutOfOrder,
            Severity::Critical,
            3,
        ),
        report(
            "صيانة دورية للمكيفات",
            "صيانة وقائية",
            "تكييف",
            "مركز النور الصحي",
            ReportStatus::Closed,
            Severity::Low,
            20,
        ),
        report(
            "تسرب مياه في غرفة التعقيم",
            "عطل",
            "سباكة",
            "مركز طب الأسنان التخصصي",
            ReportStatus::Open,
            Severity::High,
            1,
        ),
        report(
            "توقف وحدة كرسي الأسنان رقم 4",
            "عطل",
            "أجهزة أسنان",
            "مركز طب الأسنان التخصصي",
            ReportStatus::Open,
            Severity::Medium,
            9,
        ),
    ]
}

/// Заказы и статус, до которого их нужно довести после создания
pub fn purchase_orders(today: NaiveDate) -> Vec<(PurchaseOrderDto, OrderStatus)> {
    let order = |number: &str,
                 item_number: &str,
                 item_name: &str,
                 quantity: i64,
                 facility: &str,
                 cost: f64,
                 supplier: &str,
                 age: i64| PurchaseOrderDto {
        order_number: Some(number.into()),
        order_date: Some(days_ago(today, age)),
        item_number: item_number.into(),
        item_name: item_name.into(),
        quantity,
        beneficiary_facility: facility.into(),
        financial_approval_number: None,
        financial_approval_date: None,
        total_cost: cost,
        supplier_name: supplier.into(),
        supplier_contact: None,
        expected_delivery_date: Some(days_ago(today, age - 30)),
        actual_delivery_date: None,
        comment: None,
    };

    vec![
        (
            order("PO-0001", "ITM-100", "قفازات طبية", 5000, "مستشفى الملك فهد العام", 12500.0, "شركة الإمداد الطبي", 95),
            OrderStatus::Delivered,
        ),
        (
            order("PO-0002", "ITM-205", "محاليل وريدية", 1200, "مركز النور الصحي", 8400.0, "شركة الدواء المتحدة", 60),
            OrderStatus::Delivered,
        ),
        (
            order("PO-0003", "ITM-310", "أجهزة قياس ضغط", 40, "مركز الروضة الصحي", 6000.0, "شركة الإمداد الطبي", 35),
            OrderStatus::Contracted,
        ),
        (
            order("PO-0004", "ITM-412", "كمامات N95", 3000, "مستشفى الملك فهد العام", 9000.0, "مؤسسة الوقاية", 12),
            OrderStatus::Approved,
        ),
        (
            order("PO-0005", "ITM-515", "أسرة مرضى كهربائية", 6, "مستشفى الملك فهد العام", 54000.0, "شركة التجهيزات الحديثة", 4),
            OrderStatus::New,
        ),
        (
            order("PO-0006", "ITM-100", "قفازات طبية", 2000, "مركز النور الصحي", 5000.0, "شركة الإمداد الطبي", 2),
            OrderStatus::Rejected,
        ),
    ]
}

pub fn inventory_items() -> Vec<InventoryItemDto> {
    let item = |number: &str,
                name: &str,
                category: &str,
                received: i64,
                issued: i64,
                minimum: i64,
                value: f64,
                supplier: &str| InventoryItemDto {
        item_number: number.into(),
        item_name: name.into(),
        category: category.into(),
        received_quantity: received,
        issued_quantity: issued,
        minimum_quantity: minimum,
        purchase_value: value,
        supplier_name: supplier.into(),
        beneficiary_facility: None,
        comment: None,
    };

    vec![
        item("INV-001", "قفازات طبية", "مستهلكات", 5000, 3200, 500, 12500.0, "شركة الإمداد الطبي"),
        item("INV-002", "محاليل وريدية", "أدوية", 1200, 1150, 100, 8400.0, "شركة الدواء المتحدة"),
        item("INV-003", "كمامات N95", "مستهلكات", 3000, 400, 300, 9000.0, "مؤسسة الوقاية"),
        item("INV-004", "أجهزة قياس ضغط", "أجهزة", 40, 40, 5, 6000.0, "شركة الإمداد الطبي"),
    ]
}

pub fn transactions(today: NaiveDate) -> Vec<(TransactionDto, TransactionStatus)> {
    let tr = |number: &str, subject: &str, tr_type: &str, sender: &str, receiver: &str, age: i64| {
        TransactionDto {
            transaction_number: number.into(),
            receive_date: Some(days_ago(today, age)),
            subject: subject.into(),
            transaction_type: tr_type.into(),
            sender_facility: sender.into(),
            receiver_facility: receiver.into(),
            comment: None,
        }
    };

    vec![
        (
            tr("TR-0101", "طلب اعتماد ميزانية الصيانة", "وارد", "مستشفى الملك فهد العام", "الإدارة العامة", 40),
            TransactionStatus::Pending,
        ),
        (
            tr("TR-0102", "تقرير الجرد الربع سنوي", "وارد", "مركز النور الصحي", "الإدارة العامة", 10),
            TransactionStatus::Pending,
        ),
        (
            tr("TR-0103", "طلب نقل أجهزة", "صادر", "الإدارة العامة", "مركز الروضة الصحي", 30),
            TransactionStatus::Completed,
        ),
        (
            tr("TR-0104", "اعتراض على توريد", "وارد", "مركز طب الأسنان التخصصي", "الإدارة العامة", 15),
            TransactionStatus::Rejected,
        ),
    ]
}

pub fn dental_contracts(today: NaiveDate) -> Vec<(DentalContractDto, OrderStatus)> {
    let contract = |number: &str,
                    item_number: &str,
                    item_name: &str,
                    quantity: i64,
                    cost: f64,
                    supplier: &str,
                    age: i64| DentalContractDto {
        contract_number: Some(number.into()),
        order_date: Some(days_ago(today, age)),
        item_number: item_number.into(),
        item_name: item_name.into(),
        quantity,
        beneficiary_facility: "مركز طب الأسنان التخصصي".into(),
        financial_approval_number: Some(format!("FA-{}", number)),
        financial_approval_date: Some(days_ago(today, age)),
        total_cost: cost,
        supplier_name: supplier.into(),
        supplier_contact: None,
        expected_delivery_date: Some(days_ago(today, age - 45)),
        actual_delivery_date: None,
        comment: None,
    };

    vec![
        (
            contract("DC-0001", "DNT-7", "كرسي أسنان متكامل", 2, 84000.0, "مؤسسة الابتسامة للتجهيزات", 70),
            OrderStatus::Delivered,
        ),
        (
            contract("DC-0002", "DNT-12", "جهاز أشعة بانورامية", 1, 120000.0, "شركة التجهيزات الحديثة", 25),
            OrderStatus::Contracted,
        ),
        (
            contract("DC-0003", "DNT-3", "جهاز تعقيم أوتوكلاف", 3, 45000.0, "مؤسسة الابتسامة للتجهيزات", 5),
            OrderStatus::New,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_facility::aggregate::Facility;
    use crate::domain::a003_purchase_order::aggregate::PurchaseOrder;
    use crate::domain::a004_inventory_item::aggregate::InventoryItem;

    #[test]
    fn test_sample_records_are_valid() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        for dto in facilities() {
            Facility::new_for_insert(&dto).validate().unwrap();
        }
        for (dto, _) in purchase_orders(today) {
            PurchaseOrder::new_for_insert(&dto, today).validate().unwrap();
        }
        for dto in inventory_items() {
            InventoryItem::new_for_insert(&dto).validate().unwrap();
        }
    }
}
