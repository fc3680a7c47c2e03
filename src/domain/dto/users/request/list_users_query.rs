//! 사용자 목록 조회 쿼리 DTO

use serde::{Deserialize, Serialize};

use crate::config::PaginationConfig;

/// `GET /users?limit=&page=` 쿼리 파라미터
///
/// `page`는 1부터 시작합니다. 0은 1페이지로 취급합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListUsersQuery {
    pub limit: Option<u64>,
    pub page: Option<u64>,
}

impl ListUsersQuery {
    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(PaginationConfig::DEFAULT_LIMIT)
    }

    pub fn page(&self) -> u64 {
        self.page.unwrap_or(PaginationConfig::DEFAULT_PAGE).max(1)
    }
}
