//! 사용자 수정 요청 DTO
//!
//! 모든 필드가 선택 사항인 부분 수정 요청입니다.
//! `email` 필드는 수정 대상이 아니므로 보내더라도 무시됩니다.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::{FieldUpdate, UserPatch};
use crate::errors::{AppError, AppResult};
use crate::utils::string_utils::{clean_optional_string, parse_optional_int};

/// 사용자 부분 수정 요청 DTO
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// 새 이름 (비어 있으면 무시)
    pub name: Option<String>,

    /// 새 나이 (1-100)
    #[validate(range(min = 1, max = 100, message = "나이는 1에서 100 사이여야 합니다"))]
    pub age: Option<i32>,

    /// 새 메모. `"clean"`이면 메모를 비웁니다.
    pub note: Option<String>,
}

impl UpdateUserRequest {
    /// 폼 텍스트 필드에서 요청을 만들고 검증합니다.
    ///
    /// 빈 `age` 값은 보내지 않은 것으로 취급합니다.
    pub fn from_form(fields: &HashMap<String, String>) -> AppResult<Self> {
        let age_raw = fields
            .get("age")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty());

        let request = Self {
            name: fields.get("name").cloned(),
            age: parse_optional_int(age_raw, "age")?,
            note: fields.get("note").cloned(),
        };

        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        Ok(request)
    }

    /// 검증된 요청을 도메인 수정 내용으로 변환합니다.
    pub fn into_patch(self) -> UserPatch {
        UserPatch {
            name: clean_optional_string(self.name),
            age: self.age,
            note: FieldUpdate::from_form_value(self.note),
        }
    }
}
