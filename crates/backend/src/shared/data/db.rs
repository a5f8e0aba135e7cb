use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

const META_COLUMNS: &str = r#"
    is_deleted INTEGER NOT NULL DEFAULT 0,
    created_at TEXT,
    updated_at TEXT,
    version INTEGER NOT NULL DEFAULT 0
"#;

/// Схема: таблица и её собственные колонки (служебные добавляются из `META_COLUMNS`)
const AGGREGATE_TABLES: &[(&str, &str)] = &[
    (
        "a001_facility",
        r#"
        sector TEXT NOT NULL DEFAULT '',
        facility_type TEXT NOT NULL DEFAULT '',
        manager_name TEXT NOT NULL DEFAULT '',
        manager_phone TEXT NOT NULL DEFAULT '',
        email TEXT,
        clinics_count INTEGER NOT NULL DEFAULT 0,
        is_active INTEGER NOT NULL DEFAULT 1,
        "#,
    ),
    (
        "a002_report",
        r#"
        report_type TEXT NOT NULL DEFAULT '',
        category TEXT NOT NULL DEFAULT '',
        details TEXT NOT NULL DEFAULT '',
        status TEXT NOT NULL DEFAULT 'open',
        severity TEXT NOT NULL DEFAULT 'medium',
        facility_ref TEXT,
        facility_name TEXT NOT NULL DEFAULT '',
        reporter TEXT NOT NULL DEFAULT '',
        reported_at TEXT NOT NULL,
        resolved_at TEXT,
        "#,
    ),
    (
        "a003_purchase_order",
        r#"
        order_date TEXT NOT NULL,
        item_number TEXT NOT NULL DEFAULT '',
        quantity INTEGER NOT NULL DEFAULT 0,
        beneficiary_facility TEXT NOT NULL DEFAULT '',
        financial_approval_number TEXT,
        financial_approval_date TEXT,
        total_cost REAL NOT NULL DEFAULT 0,
        supplier_name TEXT NOT NULL DEFAULT '',
        supplier_contact TEXT,
        status TEXT NOT NULL DEFAULT 'new',
        expected_delivery_date TEXT,
        actual_delivery_date TEXT,
        "#,
    ),
    (
        "a004_inventory_item",
        r#"
        category TEXT NOT NULL DEFAULT '',
        received_quantity INTEGER NOT NULL DEFAULT 0,
        issued_quantity INTEGER NOT NULL DEFAULT 0,
        minimum_quantity INTEGER NOT NULL DEFAULT 0,
        purchase_value REAL NOT NULL DEFAULT 0,
        supplier_name TEXT NOT NULL DEFAULT '',
        beneficiary_facility TEXT,
        "#,
    ),
    (
        "a005_withdrawal_order",
        r#"
        item_ref TEXT NOT NULL,
        beneficiary_facility TEXT NOT NULL DEFAULT '',
        requested_quantity INTEGER NOT NULL DEFAULT 0,
        status TEXT NOT NULL DEFAULT 'pending',
        recipient_name TEXT NOT NULL DEFAULT '',
        recipient_contact TEXT,
        withdrawal_date TEXT NOT NULL,
        "#,
    ),
    (
        "a006_transaction",
        r#"
        receive_date TEXT NOT NULL,
        transaction_type TEXT NOT NULL DEFAULT '',
        sender_facility TEXT NOT NULL DEFAULT '',
        receiver_facility TEXT NOT NULL DEFAULT '',
        status TEXT NOT NULL DEFAULT 'pending',
        "#,
    ),
    (
        "a007_dental_contract",
        r#"
        order_date TEXT NOT NULL,
        item_number TEXT NOT NULL DEFAULT '',
        quantity INTEGER NOT NULL DEFAULT 0,
        beneficiary_facility TEXT NOT NULL DEFAULT '',
        financial_approval_number TEXT,
        financial_approval_date TEXT,
        total_cost REAL NOT NULL DEFAULT 0,
        supplier_name TEXT NOT NULL DEFAULT '',
        supplier_contact TEXT,
        status TEXT NOT NULL DEFAULT 'new',
        expected_delivery_date TEXT,
        actual_delivery_date TEXT,
        "#,
    ),
];

const TRANSACTION_HISTORY_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS a006_transaction_history (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        transaction_id TEXT NOT NULL,
        from_status TEXT NOT NULL,
        to_status TEXT NOT NULL,
        changed_at TEXT NOT NULL,
        note TEXT
    );
"#;

const TRANSACTION_HISTORY_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_a006_transaction_history_transaction_id
    ON a006_transaction_history (transaction_id);
"#;

fn create_table_sql(table: &str, columns: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {table} (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            {columns}
            {META_COLUMNS}
        );"
    )
}

/// Полный список DDL-операторов начальной схемы
pub fn schema_statements() -> Vec<String> {
    let mut statements: Vec<String> = AGGREGATE_TABLES
        .iter()
        .map(|(table, columns)| create_table_sql(table, columns))
        .collect();
    statements.push(TRANSACTION_HISTORY_TABLE.to_string());
    statements.push(TRANSACTION_HISTORY_INDEX.to_string());
    statements
}

fn database_url(db_file: &Path) -> anyhow::Result<String> {
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let db_url = database_url(db_file)?;
    tracing::info!("Connecting to database: {}", db_url);
    let conn = Database::connect(&db_url).await?;

    for sql in schema_statements() {
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql))
            .await?;
    }
    tracing::info!("Database schema is ready ({} tables)", AGGREGATE_TABLES.len() + 1);

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> anyhow::Result<&'static DatabaseConnection> {
    DB_CONN
        .get()
        .ok_or_else(|| anyhow::anyhow!("Database connection has not been initialized"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_covers_all_tables() {
        let statements = schema_statements();
        for (table, _) in AGGREGATE_TABLES {
            assert!(statements
                .iter()
                .any(|s| s.contains(&format!("CREATE TABLE IF NOT EXISTS {table} ("))));
        }
        assert!(statements
            .iter()
            .any(|s| s.contains("a006_transaction_history")));
        assert!(statements[..AGGREGATE_TABLES.len()]
            .iter()
            .all(|s| s.contains("version INTEGER NOT NULL DEFAULT 0")));
    }

    #[test]
    fn test_database_url_for_absolute_path() {
        let url = database_url(Path::new("/tmp/app.db")).unwrap();
        assert_eq!(url, "sqlite:///tmp/app.db?mode=rwc");
    }
}
