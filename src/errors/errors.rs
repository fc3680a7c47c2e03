//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 사용자 프로필 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 에러 종류는 닫힌 집합(closed set)이며, 호출자는 메시지 문자열이 아닌
//! 변형(variant)으로 분기합니다. 모든 실패 응답 본문은 `{"message": "..."}` 형태입니다.
//!
//! ## 상태 코드 매핑
//!
//! | 변형 | 상태 코드 |
//! |------|-----------|
//! | `ValidationError` | 401 |
//! | `InvalidAvatarType` | 401 |
//! | `ConflictError` | 401 |
//! | `Unauthorized` | 401 |
//! | `MissingAvatar` | 400 |
//! | `BadRequest` | 400 |
//! | `NotFound` | 404 |
//! | `DatabaseError` / `FileStoreError` / `InternalError` | 500 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn find_one(&self, id: &str) -> Result<User, AppError> {
//!     self.users
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 사용자 프로필 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 아바타 파일 저장소 에러 (500 Internal Server Error)
    #[error("File store error: {0}")]
    FileStoreError(String),

    /// 입력값 검증 에러 (401 Unauthorized)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 생성 요청에 아바타 파일이 없음 (400 Bad Request)
    #[error("Avatar file is required!")]
    MissingAvatar,

    /// 요청 본문이나 쿼리를 해석할 수 없음 (400 Bad Request)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 허용되지 않는 아바타 형식 (401 Unauthorized)
    #[error("Invalid avatar type: {0}")]
    InvalidAvatarType(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 이메일 중복 에러 (401 Unauthorized)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 라우트 정책에 따라 401로 재분류된 에러
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_)
            | AppError::InvalidAvatarType(_)
            | AppError::ConflictError(_)
            | AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::MissingAvatar | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_)
            | AppError::FileStoreError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 `{message}` JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "message": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
