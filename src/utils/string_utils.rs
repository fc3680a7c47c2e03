//! # 문자열 유틸리티
//!
//! 폼 입력값 처리와 관련된 공통 유틸리티 함수들입니다.
//! multipart 텍스트 필드는 모두 문자열로 도착하므로, 검증 전에 여기서 정리하고 변환합니다.

use crate::errors::AppError;

/// 필수 문자열 필드를 검증하고 앞뒤 공백을 제거합니다.
///
/// # Errors
///
/// 공백 제거 후 비어 있으면 `AppError::ValidationError`
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 선택 문자열을 정리합니다. 공백만 있는 값은 `None`이 됩니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택 정수 필드를 파싱합니다.
///
/// # Errors
///
/// 값이 있지만 정수가 아니면 `AppError::ValidationError`
pub fn parse_optional_int(value: Option<&str>, field_name: &str) -> Result<Option<i32>, AppError> {
    value
        .map(|raw| {
            raw.trim().parse::<i32>().map_err(|_| {
                AppError::ValidationError(format!("{}은(는) 정수여야 합니다: '{}'", field_name, raw))
            })
        })
        .transpose()
}
