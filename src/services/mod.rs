//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 저장소와 파일 저장소를 조합해 도메인 규칙을 적용합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let service = UserService::new(users, avatars);
//! let user = service.find_one(&id).await?;
//! ```

pub mod users;
