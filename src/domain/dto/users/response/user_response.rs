use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub year_of_birth: i32,
    pub note: Option<String>,
    pub email: String,
    pub avatar_name: String,
    pub avatar_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn to_chrono(value: mongodb::bson::DateTime) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            age,
            year_of_birth,
            note,
            email,
            avatar_name,
            avatar_type,
            created_at,
            updated_at,
        } = user;

        Self {
            id,
            name,
            age,
            year_of_birth,
            note,
            email,
            avatar_name,
            avatar_type,
            created_at: to_chrono(created_at),
            updated_at: to_chrono(updated_at),
        }
    }
}

/// 사용자 목록 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListUsersResponse {
    /// 전체 사용자 수 (페이지와 무관)
    pub count: u64,
    pub data: Vec<UserResponse>,
}

impl ListUsersResponse {
    pub fn new(users: Vec<User>, count: u64) -> Self {
        Self {
            count,
            data: users.into_iter().map(UserResponse::from).collect(),
        }
    }
}

/// 사용자 삭제 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteUserResponse {
    pub success: bool,
}
