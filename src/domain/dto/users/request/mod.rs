//! 사용자 요청 DTO
//!
//! multipart 폼 필드와 쿼리 문자열을 타입이 있는 구조체로 옮기고 검증합니다.

pub mod create_user_request;
pub mod update_user_request;
pub mod list_users_query;

pub use create_user_request::CreateUserRequest;
pub use update_user_request::UpdateUserRequest;
pub use list_users_query::ListUsersQuery;
