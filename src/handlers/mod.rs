//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 요청 파싱과 검증, 서비스 호출, 응답 DTO 변환만 담당하고
//! 비즈니스 규칙은 서비스 계층에 둡니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response (multipart, JSON)
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 레코드 생명주기, 파일 정합성             ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories / Storage - 레코드 저장, 아바타 파일   ← Data Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - [`users`] - 사용자 CRUD 엔드포인트
//! - [`multipart`] - multipart/form-data 본문 파싱

pub mod users;
pub mod multipart;
