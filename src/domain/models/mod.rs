//! # Domain Models
//!
//! 엔티티는 아니지만 도메인 규칙을 담고 있는 값 객체들입니다.
//!
//! - [`FieldUpdate`] - 선택 필드에 대한 세 가지 상태의 수정 지시
//! - [`UserPatch`] - 사용자 부분 수정 내용
//! - [`AvatarUpload`] - 형식 검증을 통과한 아바타 업로드

pub mod field_update;
pub mod user_patch;
pub mod avatar_upload;

pub use field_update::FieldUpdate;
pub use user_patch::UserPatch;
pub use avatar_upload::AvatarUpload;
