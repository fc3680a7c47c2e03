//! 사용자 데이터 액세스 계층
//!
//! [`UserStore`] trait과 두 구현체를 제공합니다.
//!
//! - [`MongoUserRepository`] - MongoDB `users` 컬렉션
//! - [`MemoryUserRepository`] - 프로세스 내부 메모리 (개발/테스트용)
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{MemoryUserRepository, UserStore};
//!
//! let users: Arc<dyn UserStore> = Arc::new(MemoryUserRepository::new());
//! let user = users.find_by_id("6f1c...").await?;
//! ```

pub mod user_store;
pub mod user_repo;
pub mod memory_repo;

pub use user_store::UserStore;
pub use user_repo::MongoUserRepository;
pub use memory_repo::MemoryUserRepository;
