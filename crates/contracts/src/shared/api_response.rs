use serde::{Deserialize, Serialize};

/// Конверт ответа REST API: `{ success, data, message }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Распаковать конверт: неуспешный ответ или ответ без данных становится ошибкой
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(self
                .message
                .unwrap_or_else(|| "Response has no data".to_string())),
            (false, _) => Err(self
                .message
                .unwrap_or_else(|| "Request failed".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_serialization() {
        let resp: ApiResponse<Vec<i32>> = ApiResponse::error("خطأ في الخادم");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], false);
        assert!(json["data"].is_null());
        assert_eq!(json["message"], "خطأ في الخادم");
    }

    #[test]
    fn test_parse_envelope_without_message() {
        let resp: ApiResponse<Vec<i32>> =
            serde_json::from_str(r#"{"success":true,"data":[1,2]}"#).unwrap();
        assert_eq!(resp.into_result(), Ok(vec![1, 2]));
    }

    #[test]
    fn test_failed_envelope_into_result() {
        let resp: ApiResponse<i32> =
            serde_json::from_str(r#"{"success":false,"message":"not found"}"#).unwrap();
        assert_eq!(resp.into_result(), Err("not found".to_string()));
    }
}
