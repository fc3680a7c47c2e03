//! 데이터 및 서버 설정 관리 모듈
//!
//! 서버, 업로드 저장소, 사용자 저장소, 페이지네이션 관련 설정을 관리합니다.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use log::error;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let env = Environment::current();
    /// match env {
    ///     Environment::Development => println!("개발 환경"),
    ///     Environment::Production => println!("프로덕션 환경"),
    ///     _ => {}
    /// }
    /// ```
    pub fn current() -> Self {
        let raw = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string()));
        Self::from_name(&raw)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 Environment 값. 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 환경별 기본 로그 필터를 반환합니다.
    ///
    /// `RUST_LOG`가 설정되지 않은 경우에만 사용됩니다.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development | Environment::Test => {
                "info,user_profile_service=debug,actix_web=debug"
            }
            Environment::Staging | Environment::Production => "info,actix_web=info",
        }
    }
}

/// 환경 변수를 읽어 파싱하고, 실패 시 기본값을 사용합니다.
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        Err(_) => default,
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 8080
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        parse_env_or("PORT", 8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Returns
    ///
    /// 호스트 주소. 기본값: "0.0.0.0" (모든 인터페이스)
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// HTTP 워커 스레드 수. 기본값: 4
    pub fn workers() -> usize {
        parse_env_or("WORKERS", 4)
    }
}

/// 아바타 업로드 설정
pub struct UploadConfig;

impl UploadConfig {
    /// 업로드 요청 본문의 기본 최대 크기 (5 MiB)
    pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

    /// 아바타 파일이 저장될 디렉터리. 기본값: `./uploads`
    pub fn upload_dir() -> PathBuf {
        env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./uploads"))
    }

    /// multipart 요청 본문의 최대 바이트 수
    ///
    /// # Environment Variables
    ///
    /// - `MAX_UPLOAD_BYTES`: 기본값 5242880
    pub fn max_upload_bytes() -> usize {
        parse_env_or("MAX_UPLOAD_BYTES", Self::DEFAULT_MAX_UPLOAD_BYTES)
    }
}

/// 사용자 레코드 저장소 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStoreKind {
    /// MongoDB `users` 컬렉션
    Mongo,
    /// 프로세스 내부 메모리 (개발/테스트용)
    Memory,
}

/// 저장소 선택 설정
pub struct StorageConfig;

impl StorageConfig {
    /// `USER_STORE` 환경 변수로 저장소를 선택합니다.
    ///
    /// `memory`면 메모리 저장소, 그 외에는 MongoDB를 사용합니다.
    pub fn user_store() -> UserStoreKind {
        Self::user_store_from(&env::var("USER_STORE").unwrap_or_default())
    }

    pub fn user_store_from(raw: &str) -> UserStoreKind {
        match raw.trim().to_lowercase().as_str() {
            "memory" | "mem" | "in-memory" => UserStoreKind::Memory,
            _ => UserStoreKind::Mongo,
        }
    }
}

/// 목록 조회 기본값
pub struct PaginationConfig;

impl PaginationConfig {
    pub const DEFAULT_LIMIT: u64 = 10;
    pub const DEFAULT_PAGE: u64 = 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_name("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_name("test"), Environment::Test);
        assert_eq!(Environment::from_name("production"), Environment::Production);
        assert_eq!(Environment::from_name("unknown"), Environment::Production);
    }

    #[test]
    fn test_default_log_filter_per_environment() {
        assert!(Environment::Development
            .default_log_filter()
            .contains("user_profile_service=debug"));
        assert_eq!(
            Environment::Production.default_log_filter(),
            "info,actix_web=info"
        );
    }

    #[test]
    fn test_user_store_selection() {
        assert_eq!(StorageConfig::user_store_from("memory"), UserStoreKind::Memory);
        assert_eq!(StorageConfig::user_store_from(" Memory "), UserStoreKind::Memory);
        assert_eq!(StorageConfig::user_store_from("mongo"), UserStoreKind::Mongo);
        assert_eq!(StorageConfig::user_store_from(""), UserStoreKind::Mongo);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }

        if env::var("WORKERS").is_err() {
            assert_eq!(ServerConfig::workers(), 4);
        }
    }

    #[test]
    fn test_upload_config_defaults() {
        if env::var("UPLOAD_DIR").is_err() {
            assert_eq!(UploadConfig::upload_dir(), PathBuf::from("./uploads"));
        }

        if env::var("MAX_UPLOAD_BYTES").is_err() {
            assert_eq!(UploadConfig::max_upload_bytes(), 5 * 1024 * 1024);
        }
    }
}
