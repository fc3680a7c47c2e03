//! multipart/form-data 요청 본문 파싱
//!
//! 사용자 생성/수정 요청은 텍스트 필드와 `avatar` 파일 파트로 구성됩니다.
//! 본문은 actix-web의 `PayloadConfig` 한도 안에서 버퍼링된 뒤 `multer`로 분해됩니다.

use std::collections::HashMap;

use actix_web::{http::header, web::Bytes, HttpRequest};
use futures_util::stream::once;
use multer::Multipart;

use crate::domain::models::AvatarUpload;
use crate::errors::{AppError, AppResult};

/// 아바타 파일 파트 이름
pub const AVATAR_FIELD: &str = "avatar";

/// 파싱된 사용자 폼
#[derive(Debug, Default)]
pub struct UserForm {
    /// 텍스트 필드 (같은 이름이 여러 번 오면 마지막 값)
    pub fields: HashMap<String, String>,
    /// 형식 검증을 통과한 아바타 파일
    pub avatar: Option<AvatarUpload>,
}

impl UserForm {
    /// 아바타가 반드시 필요한 경우 사용합니다.
    pub fn require_avatar(&mut self) -> AppResult<AvatarUpload> {
        self.avatar.take().ok_or(AppError::MissingAvatar)
    }
}

fn bad_request(e: impl std::fmt::Display) -> AppError {
    AppError::BadRequest(format!("multipart 본문을 읽을 수 없습니다: {}", e))
}

/// 본문 추출 결과를 `{message}` 응답 규약으로 옮깁니다.
///
/// `web::Bytes` 추출기는 `PayloadConfig` 한도 초과 시 자체 응답(413)을 만들기 때문에,
/// 핸들러는 `Result<Bytes, actix_web::Error>`로 받아 이 함수로 변환합니다.
///
/// # Errors
///
/// * `AppError::BadRequest` - 본문이 한도를 넘었거나 읽는 중 실패
pub fn read_upload_body(body: Result<Bytes, actix_web::Error>) -> AppResult<Bytes> {
    body.map_err(|e| AppError::BadRequest(format!("요청 본문을 읽을 수 없습니다: {}", e)))
}

/// 요청 본문을 [`UserForm`]으로 파싱합니다.
///
/// # Errors
///
/// * `AppError::BadRequest` - multipart가 아니거나 본문이 손상됨, 예상하지 못한 파일 파트
/// * `AppError::InvalidAvatarType` - 아바타가 jpg/jpeg/png 이미지가 아님
pub async fn parse_user_form(req: &HttpRequest, body: Bytes) -> AppResult<UserForm> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::BadRequest("Content-Type 헤더가 필요합니다".to_string()))?;

    let boundary = multer::parse_boundary(content_type).map_err(bad_request)?;

    // 버퍼링된 본문을 multer가 기대하는 스트림으로 변환
    let stream = once(async move { Ok::<Bytes, std::io::Error>(body) });
    let mut multipart = Multipart::new(stream, boundary);

    let mut form = UserForm::default();

    while let Some(field) = multipart.next_field().await.map_err(bad_request)? {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(|mime| mime.to_string());

        match file_name {
            // 파일을 선택하지 않은 브라우저 폼은 빈 파일 이름을 보냄
            Some(file_name) if !file_name.is_empty() => {
                if name != AVATAR_FIELD {
                    return Err(AppError::BadRequest(format!("예상하지 못한 파일 필드입니다: {}", name)));
                }
                if form.avatar.is_some() {
                    return Err(AppError::BadRequest("아바타 파일은 하나만 보낼 수 있습니다".to_string()));
                }
                let content = field.bytes().await.map_err(bad_request)?;
                form.avatar = Some(AvatarUpload::new(
                    &file_name,
                    content_type.as_deref(),
                    content.to_vec(),
                )?);
            }
            Some(_) => {
                field.bytes().await.map_err(bad_request)?;
            }
            None => {
                let value = field.text().await.map_err(bad_request)?;
                if name != AVATAR_FIELD {
                    form.fields.insert(name, value);
                }
            }
        }
    }

    Ok(form)
}
