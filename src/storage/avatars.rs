//! 아바타 파일 저장소
//!
//! [`AvatarStore`]는 아바타 이미지 파일의 쓰기/삭제/존재 확인을 담당하는 주입 가능한 인터페이스입니다.
//! 서비스 계층은 구체적인 경로를 알지 못하며, 테스트에서는 임시 디렉터리나
//! 실패를 흉내 내는 구현으로 교체할 수 있습니다.
//!
//! # 파일 이름 규칙
//!
//! `<32자리 소문자 16진수><원본 확장자>` (예: `3f2a9c0e...b1.png`)
//!
//! ```rust,ignore
//! let store = LocalAvatarStore::new("./uploads").await?;
//! let name = store.put(&bytes, ".png").await?;
//! assert!(store.exists(&name).await?);
//! store.delete(&name).await?;
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;
use tokio::fs;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// 아바타 파일 저장소 인터페이스
#[async_trait]
pub trait AvatarStore: Send + Sync {
    /// 파일을 새 이름으로 저장하고, 저장된 이름을 반환합니다.
    ///
    /// # Arguments
    ///
    /// * `content` - 파일 내용
    /// * `extension` - 점을 포함한 확장자 (예: `.png`)
    ///
    /// # Errors
    ///
    /// * `AppError::FileStoreError` - 쓰기 실패
    async fn put(&self, content: &[u8], extension: &str) -> AppResult<String>;

    /// 파일을 삭제합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::FileStoreError` - 파일이 없거나 삭제 실패
    async fn delete(&self, name: &str) -> AppResult<()>;

    /// 파일 존재 여부를 확인합니다.
    async fn exists(&self, name: &str) -> AppResult<bool>;
}

/// 로컬 디렉터리 기반 아바타 저장소
#[derive(Debug, Clone)]
pub struct LocalAvatarStore {
    base_path: PathBuf,
}

impl LocalAvatarStore {
    /// 저장 디렉터리를 준비하고 저장소를 생성합니다.
    ///
    /// 디렉터리가 없으면 만들고, 경로가 디렉터리가 아니면 실패합니다.
    pub async fn new(base_path: impl Into<PathBuf>) -> AppResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            AppError::FileStoreError(format!(
                "업로드 디렉터리 생성 실패 ({}): {}",
                base_path.display(),
                e
            ))
        })?;

        let metadata = fs::metadata(&base_path)
            .await
            .map_err(|e| AppError::FileStoreError(e.to_string()))?;
        if !metadata.is_dir() {
            return Err(AppError::FileStoreError(format!(
                "업로드 경로가 디렉터리가 아닙니다: {}",
                base_path.display()
            )));
        }

        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// 저장소 안의 전체 경로. 디렉터리를 벗어나는 이름은 거부합니다.
    fn get_path(&self, name: &str) -> AppResult<PathBuf> {
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return Err(AppError::FileStoreError(format!(
                "허용되지 않는 파일 이름입니다: {}",
                name
            )));
        }
        Ok(self.base_path.join(name))
    }
}

/// 새 아바타 파일 이름 생성
pub fn generate_avatar_name(extension: &str) -> String {
    format!("{}{}", Uuid::new_v4().simple(), extension)
}

#[async_trait]
impl AvatarStore for LocalAvatarStore {
    async fn put(&self, content: &[u8], extension: &str) -> AppResult<String> {
        let name = generate_avatar_name(extension);
        let path = self.get_path(&name)?;

        fs::write(&path, content)
            .await
            .map_err(|e| AppError::FileStoreError(format!("아바타 저장 실패 ({}): {}", name, e)))?;

        debug!("아바타 파일 저장: {} ({} bytes)", name, content.len());
        Ok(name)
    }

    async fn delete(&self, name: &str) -> AppResult<()> {
        let path = self.get_path(name)?;

        fs::remove_file(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                AppError::FileStoreError(format!("아바타 파일이 없습니다: {}", name))
            }
            _ => AppError::FileStoreError(format!("아바타 삭제 실패 ({}): {}", name, e)),
        })?;

        debug!("아바타 파일 삭제: {}", name);
        Ok(())
    }

    async fn exists(&self, name: &str) -> AppResult<bool> {
        let path = self.get_path(name)?;

        match fs::metadata(&path).await {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AppError::FileStoreError(e.to_string())),
        }
    }
}
