//! # Data Transfer Objects
//!
//! HTTP 경계에서 주고받는 요청/응답 구조체들입니다.
//! 요청 DTO는 `validator`로 검증되고, 응답 DTO는 엔티티로부터 변환됩니다.

pub mod users;

pub use users::*;
