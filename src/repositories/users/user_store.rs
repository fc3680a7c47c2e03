//! 사용자 저장소 인터페이스

use async_trait::async_trait;

use crate::domain::entities::users::user::User;
use crate::errors::AppResult;

/// 사용자 레코드 저장소 포트
///
/// 서비스 계층은 이 trait에만 의존하며, 실제 구현(MongoDB, 메모리)은 시작 시 주입됩니다.
/// 이메일 유일성은 구현체가 보장해야 합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 레코드를 저장합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 같은 이메일이 이미 존재
    /// * `AppError::DatabaseError` - 저장소 오류
    async fn insert(&self, user: &User) -> AppResult<()>;

    /// ID로 레코드를 조회합니다.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// `created_at` 내림차순으로 `skip`개를 건너뛰고 최대 `limit`개를 반환합니다.
    async fn find_page(&self, skip: u64, limit: u64) -> AppResult<Vec<User>>;

    /// 전체 레코드 수
    async fn count(&self) -> AppResult<u64>;

    /// 같은 ID의 레코드를 통째로 교체합니다. 레코드가 없으면 `false`.
    async fn replace(&self, user: &User) -> AppResult<bool>;

    /// 레코드를 삭제합니다. 레코드가 없었으면 `false`.
    async fn delete(&self, id: &str) -> AppResult<bool>;
}
