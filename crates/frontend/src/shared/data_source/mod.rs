//! Выбор и внедрение источника данных для экранов.
//!
//! По умолчанию экраны работают с backend-ом через `HttpDataSource`.
//! Демо-режим (`?demo=1`) явно подменяет его на `InMemoryDataSource`
//! с демонстрационными данными.

pub mod http;

use contracts::shared::data_source::{DataSource, DataSourceError, InMemoryDataSource};
use leptos::prelude::*;
use serde::Deserialize;
use std::rc::Rc;

pub use http::HttpDataSource;

use crate::shared::api_utils::location_query;
use crate::shared::clock::today;

/// Общий источник данных в контексте приложения
pub type SourceHandle = StoredValue<Rc<dyn DataSource>, LocalStorage>;

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    #[serde(default)]
    demo: Option<String>,
}

/// `demo=1` / `demo=true` в строке запроса включает демо-режим
pub fn is_demo_query(query: &str) -> bool {
    serde_qs::from_str::<PageQuery>(query)
        .ok()
        .and_then(|q| q.demo)
        .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Источник по адресу страницы
pub fn select_source() -> Rc<dyn DataSource> {
    if is_demo_query(&location_query()) {
        log::info!("Demo mode: using in-memory data source");
        Rc::new(InMemoryDataSource::with_sample_data(today()))
    } else {
        Rc::new(HttpDataSource::from_location())
    }
}

pub fn provide_data_source(source: Rc<dyn DataSource>) {
    provide_context::<SourceHandle>(StoredValue::new_local(source));
}

pub fn use_data_source() -> SourceHandle {
    use_context::<SourceHandle>().expect("DataSource not found in context")
}

/// Текст для баннера ошибки: один и тот же заголовок для всех видов ошибок
pub fn error_text(err: &DataSourceError) -> String {
    log::error!("Data source error: {:?}", err);
    match err {
        DataSourceError::Validation(message) => {
            format!("تعذر تنفيذ العملية: {}", message)
        }
        _ => "تعذر تنفيذ العملية، يرجى المحاولة مرة أخرى".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_query() {
        assert!(is_demo_query("demo=1"));
        assert!(is_demo_query("page=reports&demo=true"));
        assert!(!is_demo_query("demo=0"));
        assert!(!is_demo_query(""));
        assert!(!is_demo_query("page=reports"));
    }
}
