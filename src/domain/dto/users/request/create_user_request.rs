//! 사용자 생성 요청 DTO
//!
//! multipart 폼의 텍스트 필드로부터 새 사용자 생성 요청을 만듭니다.
//! 아바타 파일 파트는 이 DTO가 아니라 [`AvatarUpload`](crate::domain::models::AvatarUpload)가 담당합니다.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::utils::string_utils::{parse_optional_int, validate_required_string};

/// 새 사용자 생성을 위한 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 사용자 이름 (공백 제거 후 1자 이상)
    #[validate(length(min = 1, message = "이름은 필수입니다"))]
    pub name: String,

    /// 나이 (1-100)
    #[validate(range(min = 1, max = 100, message = "나이는 1에서 100 사이여야 합니다"))]
    pub age: i32,

    /// 사용자 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 메모 (선택)
    pub note: Option<String>,
}

impl CreateUserRequest {
    /// 폼 텍스트 필드에서 요청을 만들고 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 필수 필드 누락, 정수가 아닌 나이, 검증 규칙 위반
    pub fn from_form(fields: &HashMap<String, String>) -> AppResult<Self> {
        let name = validate_required_string(
            fields.get("name").map(String::as_str).unwrap_or_default(),
            "name",
        )?;
        let age = parse_optional_int(fields.get("age").map(String::as_str), "age")?
            .ok_or_else(|| AppError::ValidationError("age은(는) 필수입니다".to_string()))?;
        let email = validate_required_string(
            fields.get("email").map(String::as_str).unwrap_or_default(),
            "email",
        )?;

        let request = Self {
            name,
            age,
            email,
            note: fields.get("note").cloned(),
        };

        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        Ok(request)
    }
}
