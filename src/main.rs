//! 사용자 프로필 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! 사용자 저장소(MongoDB 또는 메모리)와 아바타 파일 저장소를 준비한 뒤 REST API를 제공합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_profile_service::config::{
    Environment, ServerConfig, StorageConfig, UploadConfig, UserStoreKind,
};
use user_profile_service::db::Database;
use user_profile_service::errors::AppResult;
use user_profile_service::repositories::users::{
    MemoryUserRepository, MongoUserRepository, UserStore,
};
use user_profile_service::routes::configure_all_routes;
use user_profile_service::services::users::UserService;
use user_profile_service::storage::LocalAvatarStore;

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 프로필 서비스 시작중...");

    let user_service = initialize_user_service().await.map_err(|e| {
        error!("❌ 서비스 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(web::Data::new(user_service)).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate limiting, CORS, 로깅, 경로 정규화 미들웨어와
/// 업로드 크기 제한을 적용합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate limiting 설정 오류, 서버 실행 오류
async fn start_http_server(user_service: web::Data<UserService>) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
    let workers = ServerConfig::workers();
    let max_upload_bytes = UploadConfig::max_upload_bytes();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다 (0 값 불가)"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))

            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 공유 상태
            .app_data(user_service.clone())
            .app_data(web::PayloadConfig::new(max_upload_bytes))

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(workers) // 워커 스레드 수
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 실행되므로 결과는 표준 에러로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let file_name = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            eprintln!("[{}] 기본 .env 파일 로드", profile);
            return;
        }
    };

    match dotenv::from_filename(file_name) {
        Ok(_) => eprintln!("[{}] {} 파일 로드 됨", profile, file_name),
        Err(e) => eprintln!("[{}] {} 파일 로드 실패: {}", profile, file_name, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 설정되지 않은 경우 실행 환경별 기본값을 사용합니다.
///
/// # Examples
///
/// ```bash
/// # 전체 debug 모드
/// RUST_LOG=debug cargo run
///
/// # 서비스 계층만 debug
/// RUST_LOG=info,user_profile_service::services=debug cargo run
/// ```
fn init_logging() {
    let environment = Environment::current();
    env_logger::init_from_env(Env::default().default_filter_or(environment.default_log_filter()));
    info!("실행 환경: {:?}", environment);
}

/// 사용자 저장소와 아바타 저장소를 준비하고 서비스를 조립합니다
///
/// `USER_STORE=memory`면 메모리 저장소를, 그 외에는 MongoDB를 사용합니다.
/// MongoDB 사용 시 컬렉션 인덱스를 함께 생성합니다.
///
/// # Errors
///
/// * `AppError::DatabaseError` - MongoDB 연결 또는 인덱스 생성 실패
/// * `AppError::FileStoreError` - 업로드 디렉터리 준비 실패
async fn initialize_user_service() -> AppResult<UserService> {
    let users: Arc<dyn UserStore> = match StorageConfig::user_store() {
        UserStoreKind::Mongo => {
            info!("📡 데이터베이스 연결 중...");
            let database = Database::new().await?;
            let repository = MongoUserRepository::new(&database);
            repository.create_indexes().await?;
            info!("✅ users 컬렉션 인덱스 준비 완료");
            Arc::new(repository)
        }
        UserStoreKind::Memory => {
            info!("🧪 메모리 사용자 저장소 사용 (데이터는 재시작 시 사라집니다)");
            Arc::new(MemoryUserRepository::new())
        }
    };

    let upload_dir = UploadConfig::upload_dir();
    let avatars = Arc::new(LocalAvatarStore::new(&upload_dir).await?);
    info!("🖼️ 아바타 저장 디렉터리: {}", upload_dir.display());

    Ok(UserService::new(users, avatars))
}

/// CORS 설정을 구성합니다
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")

        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
