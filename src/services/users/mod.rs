//! 사용자 관리 서비스 모듈
//!
//! 사용자 레코드의 생명주기와 아바타 파일 정합성을 담당하는 [`UserService`]를 제공합니다.
//!
//! # Features
//!
//! - 사용자 생성 (출생 연도 계산, 아바타 저장)
//! - 최신순 페이지 조회
//! - 부분 수정 (메모 비우기, 아바타 교체)
//! - 삭제 (아바타 파일 정리)

pub mod user_service;

pub use user_service::UserService;
