//! 사용자 프로필 서비스 백엔드
//!
//! 사용자 레코드를 생성, 조회, 수정, 삭제하고 각 레코드에 연결된
//! 아바타 이미지 파일을 함께 관리하는 Rust 기반 서비스입니다.
//!
//! # Features
//!
//! - **사용자 관리**: multipart 업로드 기반 생성/수정, 최신순 페이지 조회, 삭제
//! - **파일 정합성**: 새 파일 저장 → 레코드 기록 → 이전 파일 정리 순서 보장
//! - **MongoDB**: 사용자 데이터 영구 저장 (이메일 유니크 인덱스)
//! - **메모리 저장소**: 데이터베이스 없이 실행 및 테스트
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← multipart 파싱, 검증, 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 레코드 생명주기
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┬─────────────────┐
//! │  Repositories   │     Storage     │
//! │ (MongoDB/메모리) │  (아바타 파일)    │
//! └─────────────────┴─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_profile_service::repositories::users::MemoryUserRepository;
//! use user_profile_service::services::users::UserService;
//! use user_profile_service::storage::LocalAvatarStore;
//!
//! let service = UserService::new(
//!     Arc::new(MemoryUserRepository::new()),
//!     Arc::new(LocalAvatarStore::new("./uploads").await?),
//! );
//! let (users, total) = service.find_all(10, 1).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod storage;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
