//! User Entity Implementation
//!
//! 사용자 레코드 엔티티의 핵심 구현체입니다.
//! 프로필 정보와 현재 아바타 파일에 대한 참조를 함께 보관합니다.

use chrono::{Datelike, Utc};
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 현재 연도 (UTC 기준)
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// 나이로부터 출생 연도를 계산합니다.
///
/// 생일 경과 여부는 고려하지 않고 `현재 연도 - 나이`로 계산합니다.
pub fn year_of_birth_for(age: i32) -> i32 {
    current_year() - age
}

/// 사용자 엔티티
///
/// `users` 컬렉션의 문서 하나에 대응합니다.
/// `avatar_name`은 항상 이 레코드를 위해 파일 저장소에 성공적으로 기록된 파일을 가리킵니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// UUID v4 문자열 식별자 (생성 후 불변)
    #[serde(rename = "_id")]
    pub id: String,
    /// 사용자 이름
    pub name: String,
    /// 나이 (1-100)
    pub age: i32,
    /// 출생 연도, `age`가 바뀔 때마다 다시 계산됨
    pub year_of_birth: i32,
    /// 메모 (없을 수 있음)
    pub note: Option<String>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 파일 저장소에 있는 현재 아바타 파일 이름
    pub avatar_name: String,
    /// 아바타 이미지 하위 타입 (`jpeg`, `png`)
    pub avatar_type: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 레코드를 생성합니다.
    ///
    /// 식별자와 타임스탬프를 발급하고 출생 연도를 계산합니다.
    /// 아바타 파일은 호출 전에 이미 저장되어 있어야 합니다.
    pub fn new(
        name: String,
        age: i32,
        email: String,
        note: Option<String>,
        avatar_name: String,
        avatar_type: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: Uuid::new_v4().to_string(),
            name,
            age,
            year_of_birth: year_of_birth_for(age),
            note,
            email,
            avatar_name,
            avatar_type,
            created_at: now,
            updated_at: now,
        }
    }

    /// 나이를 바꾸고 출생 연도를 함께 갱신합니다.
    pub fn set_age(&mut self, age: i32) {
        self.age = age;
        self.year_of_birth = year_of_birth_for(age);
    }

    /// 아바타 참조를 새 파일로 교체하고 이전 파일 이름을 반환합니다.
    pub fn replace_avatar(&mut self, avatar_name: String, avatar_type: String) -> String {
        self.avatar_type = avatar_type;
        std::mem::replace(&mut self.avatar_name, avatar_name)
    }

    /// 수정 시간 갱신
    pub fn touch(&mut self) {
        self.updated_at = DateTime::now();
    }
}
