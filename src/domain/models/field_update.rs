//! 선택 필드 수정 지시

/// 선택 필드에 대한 세 가지 상태의 수정 지시
///
/// "값이 오지 않음"과 "값을 비우라는 요청"을 구분하기 위해 사용합니다.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldUpdate<T> {
    /// 기존 값을 유지
    #[default]
    Unchanged,
    /// 주어진 값으로 설정
    SetTo(T),
    /// 값을 비움 (`None`)
    Clear,
}

impl<T> FieldUpdate<T> {
    /// 대상 필드에 수정 지시를 적용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let mut note = Some("old".to_string());
    /// FieldUpdate::Clear.apply_to(&mut note);
    /// assert_eq!(note, None);
    /// ```
    pub fn apply_to(self, target: &mut Option<T>) {
        match self {
            FieldUpdate::Unchanged => {}
            FieldUpdate::SetTo(value) => *target = Some(value),
            FieldUpdate::Clear => *target = None,
        }
    }
}

impl FieldUpdate<String> {
    /// 메모 필드를 비우라는 의미의 예약어
    pub const CLEAR_SENTINEL: &'static str = "clean";

    /// 폼 입력값을 수정 지시로 해석합니다.
    ///
    /// - 값 없음 → `Unchanged`
    /// - `"clean"` → `Clear`
    /// - 그 외 (빈 문자열 포함) → `SetTo` 그대로
    pub fn from_form_value(value: Option<String>) -> Self {
        match value {
            None => FieldUpdate::Unchanged,
            Some(v) if v == Self::CLEAR_SENTINEL => FieldUpdate::Clear,
            Some(v) => FieldUpdate::SetTo(v),
        }
    }
}
