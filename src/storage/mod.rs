//! 파일 저장소 모듈
//!
//! 사용자 아바타 이미지 파일을 보관하는 평면 디렉터리 저장소를 제공합니다.

pub mod avatars;

pub use avatars::{AvatarStore, LocalAvatarStore};
