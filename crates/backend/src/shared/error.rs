use axum::http::StatusCode;
use axum::Json;
use contracts::shared::api_response::ApiResponse;
use thiserror::Error;
use uuid::Uuid;

/// Классификация ошибок сервисного слоя
///
/// Сервисы возвращают `anyhow::Result`; всё, что не является `ServiceError`,
/// считается ошибкой хранилища.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("السجل غير موجود")]
    NotFound,

    #[error("خطأ في قاعدة البيانات: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Привести произвольную ошибку сервиса к одной из трёх категорий
    pub fn classify(err: &anyhow::Error) -> ServiceError {
        match err.downcast_ref::<ServiceError>() {
            Some(e) => e.clone(),
            None => ServiceError::Storage(err.to_string()),
        }
    }
}

pub fn validation(message: impl Into<String>) -> anyhow::Error {
    ServiceError::Validation(message.into()).into()
}

pub fn not_found() -> anyhow::Error {
    ServiceError::NotFound.into()
}

pub fn parse_id(id: &str) -> anyhow::Result<Uuid> {
    Uuid::parse_str(id).map_err(|_| validation(format!("معرّف غير صالح: {}", id)))
}

pub type ApiResult<T> = (StatusCode, Json<ApiResponse<T>>);

/// Упаковать результат сервиса в конверт ответа с нужным HTTP-статусом
pub fn respond<T>(result: anyhow::Result<T>) -> ApiResult<T> {
    match result {
        Ok(data) => (StatusCode::OK, Json(ApiResponse::ok(data))),
        Err(err) => {
            let classified = ServiceError::classify(&err);
            match &classified {
                ServiceError::Storage(_) => tracing::error!("Storage error: {:#}", err),
                _ => tracing::warn!("Request rejected: {}", classified),
            }
            (
                classified.status_code(),
                Json(ApiResponse::error(classified.to_string())),
            )
        }
    }
}

/// Как `respond`, но с сообщением об успехе
pub fn respond_with_message<T>(result: anyhow::Result<T>, message: &str) -> ApiResult<T> {
    match result {
        Ok(data) => (
            StatusCode::OK,
            Json(ApiResponse::ok_with_message(data, message)),
        ),
        Err(err) => respond(Err(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let (status, Json(body)) = respond::<()>(Err(validation("الكمية مطلوبة")));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.success);
        assert_eq!(body.message.as_deref(), Some("الكمية مطلوبة"));

        let (status, _) = respond::<()>(Err(not_found()));
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, Json(body)) = respond::<()>(Err(anyhow::anyhow!("disk I/O error")));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.message.unwrap().contains("disk I/O error"));
    }

    #[test]
    fn test_context_keeps_classification() {
        let err = validation("bad").context("while saving report");
        assert_eq!(
            ServiceError::classify(&err),
            ServiceError::Validation("bad".into())
        );
    }

    #[test]
    fn test_ok_envelope() {
        let (status, Json(body)) = respond(Ok(5));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.data, Some(5));
    }

    #[test]
    fn test_parse_id() {
        assert!(parse_id("not-a-uuid").is_err());
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }
}
