//! 메모리 기반 사용자 리포지토리
//!
//! MongoDB 없이 서비스를 띄우거나(`USER_STORE=memory`) 테스트할 때 사용합니다.
//! MongoDB 구현과 같은 규칙을 따릅니다: 이메일 유일성, `created_at` 내림차순 정렬.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::{
    domain::entities::users::user::User,
    errors::{AppError, AppResult},
    repositories::users::user_store::UserStore,
};

/// 삽입 순번과 함께 보관되는 레코드
///
/// 같은 밀리초에 생성된 레코드는 나중에 삽입된 쪽을 더 최근으로 봅니다.
struct Entry {
    seq: u64,
    user: User,
}

#[derive(Default)]
struct Inner {
    next_seq: u64,
    entries: Vec<Entry>,
}

/// 프로세스 내부 사용자 저장소
#[derive(Default)]
pub struct MemoryUserRepository {
    inner: RwLock<Inner>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::InternalError("메모리 저장소 잠금이 손상되었습니다".to_string())
}

#[async_trait]
impl UserStore for MemoryUserRepository {
    async fn insert(&self, user: &User) -> AppResult<()> {
        let mut inner = self.inner.write().map_err(poisoned)?;

        if inner.entries.iter().any(|e| e.user.email == user.email) {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }
        if inner.entries.iter().any(|e| e.user.id == user.id) {
            return Err(AppError::DatabaseError(format!("중복된 ID입니다: {}", user.id)));
        }

        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.entries.push(Entry {
            seq,
            user: user.clone(),
        });
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let inner = self.inner.read().map_err(poisoned)?;

        Ok(inner
            .entries
            .iter()
            .find(|e| e.user.id == id)
            .map(|e| e.user.clone()))
    }

    async fn find_page(&self, skip: u64, limit: u64) -> AppResult<Vec<User>> {
        let inner = self.inner.read().map_err(poisoned)?;

        let mut ordered: Vec<&Entry> = inner.entries.iter().collect();
        ordered.sort_by(|a, b| {
            b.user
                .created_at
                .cmp(&a.user.created_at)
                .then(b.seq.cmp(&a.seq))
        });

        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(ordered
            .into_iter()
            .skip(skip)
            .take(limit)
            .map(|e| e.user.clone())
            .collect())
    }

    async fn count(&self) -> AppResult<u64> {
        let inner = self.inner.read().map_err(poisoned)?;
        Ok(inner.entries.len() as u64)
    }

    async fn replace(&self, user: &User) -> AppResult<bool> {
        let mut inner = self.inner.write().map_err(poisoned)?;

        if inner
            .entries
            .iter()
            .any(|e| e.user.id != user.id && e.user.email == user.email)
        {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        match inner.entries.iter_mut().find(|e| e.user.id == user.id) {
            Some(entry) => {
                entry.user = user.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let mut inner = self.inner.write().map_err(poisoned)?;

        let before = inner.entries.len();
        inner.entries.retain(|e| e.user.id != id);
        Ok(inner.entries.len() < before)
    }
}
