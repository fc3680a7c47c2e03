//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층이 의존하는 저장소 trait과 그 구현체들을 제공합니다.
//! 구현체 선택은 시작 시 `USER_STORE` 설정으로 결정됩니다.

pub mod users;
