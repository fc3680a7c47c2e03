//! # User Management HTTP Handlers
//!
//! 사용자 레코드 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/user` | 새 사용자 생성 (multipart, `avatar` 필수) | 201 Created |
//! | `GET` | `/users` | 사용자 목록 조회 (`limit`, `page`) | 200 OK |
//! | `GET` | `/user/{id}` | 사용자 조회 | 200 OK |
//! | `PUT` | `/user/{id}` | 사용자 부분 수정 (multipart, `avatar` 선택) | 200 OK |
//! | `DELETE` | `/user/{id}` | 사용자 삭제 | 200 OK |
//!
//! ## 에러 응답
//!
//! 모든 실패는 `{"message": "..."}` 본문과 함께 반환됩니다.
//! 상태 코드는 [`AppError`]의 매핑을 따르며, 존재하지 않는 사용자에 대해서는
//! `PUT`이 401, `DELETE`가 500으로 응답합니다 (`GET`만 404).
//!
//! 업로드 본문이 `PayloadConfig` 한도를 넘으면 400 `{message}`로 응답합니다.

use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse};

use crate::domain::dto::users::{
    request::{CreateUserRequest, ListUsersQuery, UpdateUserRequest},
    response::{DeleteUserResponse, ListUsersResponse, UserResponse},
};
use crate::errors::AppError;
use crate::handlers::multipart::{parse_user_form, read_upload_body};
use crate::services::users::UserService;

/// 사용자 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /user` (multipart/form-data)
///
/// | 필드 | 필수 | 설명 |
/// |------|------|------|
/// | `name` | O | 공백 제외 1자 이상 |
/// | `age` | O | 1-100 정수 |
/// | `email` | O | 유효한 이메일, 전체에서 유일 |
/// | `note` | X | 메모 |
/// | `avatar` | O | jpg/jpeg/png 이미지 파일 |
///
/// # 응답
///
/// - 201: 생성된 사용자
/// - 400: 아바타 누락, 손상된 multipart
/// - 401: 검증 실패, 허용되지 않는 아바타 형식, 이메일 중복
/// - 500: 저장소 오류
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/user \
///   -F name=Alice -F age=30 -F email=alice@example.com \
///   -F avatar=@./alice.png
/// ```
#[post("/user")]
pub async fn create_user(
    service: web::Data<UserService>,
    req: HttpRequest,
    body: Result<web::Bytes, actix_web::Error>,
) -> Result<HttpResponse, AppError> {
    let mut form = parse_user_form(&req, read_upload_body(body)?).await?;

    // 아바타 누락은 필드 검증보다 먼저 확인
    let avatar = form.require_avatar()?;
    let request = CreateUserRequest::from_form(&form.fields)?;

    let user = service.create_user(request, avatar).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// 사용자 목록 조회 핸들러
///
/// `GET /users?limit=10&page=1`
///
/// 최신 생성순으로 정렬된 페이지와 전체 개수를 `{count, data}`로 반환합니다.
#[get("/users")]
pub async fn list_users(
    service: web::Data<UserService>,
    query: web::Query<ListUsersQuery>,
) -> Result<HttpResponse, AppError> {
    let (users, count) = service.find_all(query.limit(), query.page()).await?;

    Ok(HttpResponse::Ok().json(ListUsersResponse::new(users, count)))
}

/// 사용자 조회 핸들러
///
/// `GET /user/{id}` - 없으면 404
#[get("/user/{id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.find_one(&id).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// 사용자 수정 핸들러
///
/// # 엔드포인트
///
/// `PUT /user/{id}` (multipart/form-data, 모든 필드 선택)
///
/// - `name`: 비어 있지 않을 때만 반영
/// - `age`: 반영 시 출생 연도 재계산
/// - `note`: `"clean"`이면 메모 삭제, 그 외 값은 그대로 저장
/// - `email`: 무시됨
/// - `avatar`: 새 파일로 교체, 이전 파일은 정리됨
///
/// # 응답
///
/// - 200: 수정된 사용자
/// - 401: 사용자 없음, 허용되지 않는 아바타 형식, 검증 실패
#[put("/user/{id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    id: web::Path<String>,
    req: HttpRequest,
    body: Result<web::Bytes, actix_web::Error>,
) -> Result<HttpResponse, AppError> {
    let form = parse_user_form(&req, read_upload_body(body)?).await?;
    let patch = UpdateUserRequest::from_form(&form.fields)?.into_patch();

    let user = service
        .update_user(&id, patch, form.avatar)
        .await
        .map_err(|e| match e {
            AppError::NotFound(msg) => AppError::Unauthorized(msg),
            other => other,
        })?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// 사용자 삭제 핸들러
///
/// `DELETE /user/{id}` - 성공 시 `{"success": true}`, 실패는 모두 500
#[delete("/user/{id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service
        .remove_user(&id)
        .await
        .map_err(|e| match e {
            AppError::NotFound(msg) => AppError::InternalError(msg),
            other => other,
        })?;

    Ok(HttpResponse::Ok().json(DeleteUserResponse { success: true }))
}
