//! 사용자 부분 수정 내용

use super::field_update::FieldUpdate;
use crate::domain::entities::users::user::User;

/// 검증을 마친 사용자 부분 수정 내용
///
/// 이메일은 수정 대상이 아니므로 포함되지 않습니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    /// 공백 제거 후 비어 있지 않은 경우에만 `Some`
    pub name: Option<String>,
    /// 변경할 나이 (출생 연도도 함께 갱신됨)
    pub age: Option<i32>,
    /// 메모 수정 지시
    pub note: FieldUpdate<String>,
}

impl UserPatch {
    /// 레코드에 수정 내용을 반영합니다. 아바타와 수정 시간은 다루지 않습니다.
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(age) = self.age {
            user.set_age(age);
        }
        self.note.apply_to(&mut user.note);
    }
}
