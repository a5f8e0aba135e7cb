//! Небольшие проверки, общие для форм всех агрегатов.
//! Сообщения возвращаются уже локализованными, UI показывает их как есть.

/// Поле обязательно и не может состоять из пробелов
pub fn require_text(value: &str, field_label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("الحقل \"{}\" مطلوب", field_label));
    }
    Ok(())
}

/// Количество не может быть отрицательным
pub fn require_non_negative(value: i64, field_label: &str) -> Result<(), String> {
    if value < 0 {
        return Err(format!("الحقل \"{}\" لا يمكن أن يكون سالباً", field_label));
    }
    Ok(())
}

/// Количество должно быть строго больше нуля
pub fn require_positive(value: i64, field_label: &str) -> Result<(), String> {
    if value <= 0 {
        return Err(format!("الحقل \"{}\" يجب أن يكون أكبر من صفر", field_label));
    }
    Ok(())
}

/// Денежная сумма: конечное неотрицательное число
pub fn require_amount(value: f64, field_label: &str) -> Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("الحقل \"{}\" يجب أن يكون مبلغاً صحيحاً", field_label));
    }
    Ok(())
}

/// Пустая строка из формы означает отсутствие значения
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert!(require_text("مستشفى", "الاسم").is_ok());
        assert!(require_text("   ", "الاسم").is_err());
    }

    #[test]
    fn test_quantity_checks() {
        assert!(require_non_negative(0, "الكمية").is_ok());
        assert!(require_non_negative(-1, "الكمية").is_err());
        assert!(require_positive(0, "الكمية").is_err());
        assert!(require_positive(3, "الكمية").is_ok());
    }

    #[test]
    fn test_amount_rejects_nan_and_negative() {
        assert!(require_amount(1500.5, "التكلفة").is_ok());
        assert!(require_amount(f64::NAN, "التكلفة").is_err());
        assert!(require_amount(-0.01, "التكلفة").is_err());
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("  x ".into())), Some("x".to_string()));
        assert_eq!(non_empty(Some("  ".into())), None);
        assert_eq!(non_empty(None), None);
    }
}
