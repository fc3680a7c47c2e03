//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리하며,
//! 시작 시 `PROFILE`에 맞는 `.env` 파일이 먼저 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 업로드, 저장소, 페이지네이션 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, UploadConfig};
//!
//! let env = Environment::current();
//! let bind = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
//! let upload_dir = UploadConfig::upload_dir();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # 저장소 설정
//! export USER_STORE="mongo"           # mongo | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_profiles_dev"
//!
//! # 업로드 설정
//! export UPLOAD_DIR="./uploads"
//! export MAX_UPLOAD_BYTES="5242880"
//!
//! # 환경 설정
//! export ENVIRONMENT="production"     # development, test, staging, production
//! ```

pub mod data_config;

pub use data_config::*;
