//! # Domain Entities Module
//!
//! 저장소에 영구 저장되는 핵심 엔티티들을 정의합니다.
//!
//! - **BSON 직렬화**: `serde`를 통해 MongoDB 문서와 직접 매핑
//! - **UUID 식별자**: `_id` 필드에 UUID v4 문자열을 저장
//! - **파생 필드**: 출생 연도처럼 다른 필드로부터 계산되는 값은 엔티티가 직접 관리

pub mod users;

pub use users::*;
