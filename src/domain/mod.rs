//! # Domain Layer
//!
//! 사용자 프로필 서비스의 도메인 계층입니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 저장되는 사용자 레코드 (MongoDB 문서와 1:1 대응)
//! ├── models/       ← 부분 수정 지시, 아바타 업로드 같은 값 객체
//! └── dto/          ← HTTP 요청/응답 데이터 전송 객체
//! ```
//!
//! 엔티티는 저장 형식(BSON)을, DTO는 전송 형식(JSON)을 담당하며
//! 두 형식 사이의 변환은 DTO 쪽의 `From` 구현이 맡습니다.

pub mod entities;
pub mod dto;
pub mod models;
