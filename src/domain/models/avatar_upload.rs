//! 아바타 업로드 값 객체
//!
//! multipart로 받은 파일 파트를 저장 가능한 형태로 검증합니다.
//! 원본 파일 이름의 확장자는 `jpg`, `jpeg`, `png` 중 하나여야 하고,
//! 선언된 미디어 타입이 있다면 `image/*`여야 합니다.

use std::path::Path;

use crate::errors::{AppError, AppResult};

/// 허용되는 아바타 확장자
pub const ALLOWED_AVATAR_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// 형식 검증을 통과한 아바타 업로드
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarUpload {
    /// 점을 포함한 소문자 확장자 (예: `.png`)
    pub extension: String,
    /// 미디어 타입의 하위 타입 (예: `png`, `jpeg`)
    pub avatar_type: String,
    /// 파일 내용
    pub content: Vec<u8>,
}

impl AvatarUpload {
    /// 업로드된 파일 파트를 검증하여 `AvatarUpload`를 만듭니다.
    ///
    /// # Arguments
    ///
    /// * `file_name` - 클라이언트가 보낸 원본 파일 이름
    /// * `content_type` - 파트에 선언된 미디어 타입 (없을 수 있음)
    /// * `content` - 파일 바이트
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidAvatarType` - 확장자 또는 미디어 타입이 허용되지 않음
    pub fn new(file_name: &str, content_type: Option<&str>, content: Vec<u8>) -> AppResult<Self> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .filter(|ext| ALLOWED_AVATAR_EXTENSIONS.contains(&ext.as_str()))
            .ok_or_else(|| {
                AppError::InvalidAvatarType(format!(
                    "'{}' 파일은 jpg, jpeg, png 형식만 허용됩니다",
                    file_name
                ))
            })?;

        let avatar_type = match content_type {
            Some(mime) => image_subtype(mime).ok_or_else(|| {
                AppError::InvalidAvatarType(format!("이미지가 아닌 미디어 타입입니다: {}", mime))
            })?,
            None => subtype_for_extension(&extension).to_string(),
        };

        Ok(Self {
            extension: format!(".{}", extension),
            avatar_type,
            content,
        })
    }
}

/// `image/png; charset=...` 형태에서 하위 타입을 추출합니다.
fn image_subtype(mime: &str) -> Option<String> {
    let essence = mime.split(';').next()?.trim().to_ascii_lowercase();
    let (kind, subtype) = essence.split_once('/')?;
    if kind != "image" || subtype.is_empty() {
        return None;
    }
    Some(subtype.to_string())
}

fn subtype_for_extension(extension: &str) -> &'static str {
    match extension {
        "png" => "png",
        _ => "jpeg",
    }
}
