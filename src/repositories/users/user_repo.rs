//! MongoDB 기반 사용자 리포지토리
//!
//! `users` 컬렉션에 대한 CRUD 연산을 담당합니다.
//!
//! ## 인덱스
//!
//! - `email_unique`: 이메일 유니크 인덱스. 중복 삽입은 드라이버의 duplicate key 에러(11000)로 감지합니다.
//! - `created_at_id_desc`: 목록 조회 정렬용 인덱스 (`created_at`, `_id` 내림차순)
//!
//! ## 에러 처리
//!
//! - **ConflictError**: 이메일 중복
//! - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::{
    bson::{doc, Document},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::Database,
    domain::entities::users::user::User,
    errors::{AppError, AppResult},
    repositories::users::user_store::UserStore,
};

/// 사용자 컬렉션 이름
pub const USERS_COLLECTION: &str = "users";

/// MongoDB duplicate key 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 목록 조회 정렬 기준
///
/// `created_at`은 밀리초 단위라 같은 시각에 생성된 문서가 있을 수 있으므로
/// `_id`로 순서를 고정합니다. 그래야 skip/limit 페이지 경계가 안정적입니다.
fn page_sort() -> Document {
    doc! { "created_at": -1, "_id": -1 }
}

/// 사용자 데이터 액세스 리포지토리 (MongoDB)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let database = Database::new().await?;
/// let repo = MongoUserRepository::new(&database);
/// repo.create_indexes().await?;
///
/// repo.insert(&user).await?;
/// let found = repo.find_by_id(&user.id).await?;
/// ```
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(USERS_COLLECTION),
        }
    }

    /// 컬렉션 인덱스를 생성합니다.
    ///
    /// 이미 같은 정의의 인덱스가 있으면 MongoDB가 그대로 둡니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        // 생성일 인덱스
        let created_at_index = IndexModel::builder()
            .keys(page_sort())
            .options(IndexOptions::builder()
                .name("created_at_id_desc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// duplicate key 에러 여부
fn is_duplicate_key(err: &MongoError) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn insert(&self, user: &User) -> AppResult<()> {
        self.collection
            .insert_one(user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("이미 사용 중인 이메일입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        debug!("사용자 문서 저장: {}", user.id);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_page(&self, skip: u64, limit: u64) -> AppResult<Vec<User>> {
        // MongoDB에서 limit 0은 "제한 없음"이므로 직접 처리
        if limit == 0 {
            return Ok(Vec::new());
        }

        let cursor = self.collection
            .find(doc! {})
            .sort(page_sort())
            .skip(skip)
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn count(&self) -> AppResult<u64> {
        self.collection
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn replace(&self, user: &User) -> AppResult<bool> {
        let result = self.collection
            .replace_one(doc! { "_id": user.id.as_str() }, user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("이미 사용 중인 이메일입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = self.collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_sort_breaks_ties_by_id() {
        let sort = page_sort();
        let keys: Vec<&str> = sort.keys().map(String::as_str).collect();

        assert_eq!(keys, vec!["created_at", "_id"]);
        assert_eq!(sort.get_i32("created_at").unwrap(), -1);
        assert_eq!(sort.get_i32("_id").unwrap(), -1);
    }
}
