use serde::Deserialize;

/// Экраны приложения (простой переключатель вместо маршрутизатора)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Facilities,
    Reports,
    PurchaseOrders,
    DentalContracts,
    Warehouse,
    Transactions,
}

impl Page {
    pub fn all() -> [Page; 7] {
        [
            Page::Dashboard,
            Page::Facilities,
            Page::Reports,
            Page::PurchaseOrders,
            Page::DentalContracts,
            Page::Warehouse,
            Page::Transactions,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Facilities => "facilities",
            Page::Reports => "reports",
            Page::PurchaseOrders => "purchase_orders",
            Page::DentalContracts => "dental_contracts",
            Page::Warehouse => "warehouse",
            Page::Transactions => "transactions",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "لوحة المعلومات",
            Page::Facilities => "المنشآت",
            Page::Reports => "البلاغات",
            Page::PurchaseOrders => "الشراء المباشر",
            Page::DentalContracts => "عقود الأسنان",
            Page::Warehouse => "المستودع",
            Page::Transactions => "المعاملات",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        Page::all().into_iter().find(|p| p.key() == key)
    }
}

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    #[serde(default)]
    page: Option<String>,
}

/// Стартовый экран из `?page=...`
pub fn initial_page(query: &str) -> Page {
    serde_qs::from_str::<PageQuery>(query)
        .ok()
        .and_then(|q| q.page)
        .and_then(|key| Page::from_key(&key))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_page() {
        assert_eq!(initial_page("page=warehouse&demo=1"), Page::Warehouse);
        assert_eq!(initial_page("page=unknown"), Page::Dashboard);
        assert_eq!(initial_page(""), Page::Dashboard);
    }

    #[test]
    fn test_keys_round_trip() {
        for page in Page::all() {
            assert_eq!(Page::from_key(page.key()), Some(page));
        }
    }
}
