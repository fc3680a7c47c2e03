//! 사용자 레코드 생명주기 서비스
//!
//! 사용자 레코드의 생성, 조회, 수정, 삭제와 아바타 파일의 정합성을 함께 관리합니다.
//!
//! ## 파일 정합성 규칙
//!
//! 레코드의 `avatar_name`은 항상 이 서비스가 파일 저장소에 성공적으로 기록한 파일을 가리킵니다.
//! 이를 위해 모든 변경은 다음 순서를 따릅니다.
//!
//! 1. 새 파일을 먼저 저장
//! 2. 레코드를 저장소에 기록
//! 3. 기록이 성공한 뒤에만 이전 파일을 삭제 (실패해도 요청은 성공)
//!
//! 2단계가 실패하면 1단계에서 만든 파일을 지워 고아 파일이 남지 않게 합니다.
//! 파일 시스템과 데이터베이스를 묶는 트랜잭션은 없으며, 정리는 최선 노력(best-effort)입니다.
//!
//! 같은 레코드에 대한 동시 수정은 조정하지 않으며 마지막 기록이 이깁니다.

use std::sync::Arc;

use log::{debug, error, info, warn};

use crate::{
    domain::{
        dto::users::request::CreateUserRequest,
        entities::users::user::User,
        models::{AvatarUpload, UserPatch},
    },
    errors::{AppError, AppResult},
    repositories::users::UserStore,
    storage::AvatarStore,
};

/// 저장소에 넘기는 건너뛸 개수의 상한 (MongoDB는 skip을 i64로 받음)
pub const MAX_SKIP: u64 = i64::MAX as u64;

/// 사용자 관리 비즈니스 로직 서비스
///
/// 사용자 저장소와 아바타 파일 저장소를 주입받아 동작합니다.
/// actix-web의 `web::Data`로 감싸 모든 워커가 공유합니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let service = UserService::new(
///     Arc::new(MemoryUserRepository::new()),
///     Arc::new(LocalAvatarStore::new("./uploads").await?),
/// );
///
/// let user = service.create_user(request, avatar).await?;
/// let (page, total) = service.find_all(10, 1).await?;
/// ```
#[derive(Clone)]
pub struct UserService {
    /// 사용자 레코드 저장소
    users: Arc<dyn UserStore>,
    /// 아바타 파일 저장소
    avatars: Arc<dyn AvatarStore>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, avatars: Arc<dyn AvatarStore>) -> Self {
        Self { users, avatars }
    }

    /// 새 사용자 레코드 생성
    ///
    /// 아바타 파일을 먼저 저장한 뒤 레코드를 기록합니다.
    /// 출생 연도는 `현재 연도 - 나이`로 계산됩니다.
    ///
    /// # 인자
    ///
    /// * `request` - 검증을 마친 생성 요청
    /// * `avatar` - 형식 검증을 마친 아바타 업로드
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 레코드
    /// * `Err(AppError::FileStoreError)` - 아바타 저장 실패 (레코드는 만들어지지 않음)
    /// * `Err(AppError::ConflictError)` - 이메일 중복 (저장한 파일은 삭제됨)
    /// * `Err(AppError::DatabaseError)` - 저장소 오류 (저장한 파일은 삭제됨)
    pub async fn create_user(
        &self,
        request: CreateUserRequest,
        avatar: AvatarUpload,
    ) -> AppResult<User> {
        let avatar_name = self.avatars.put(&avatar.content, &avatar.extension).await?;

        let user = User::new(
            request.name,
            request.age,
            request.email,
            request.note,
            avatar_name.clone(),
            avatar.avatar_type,
        );

        if let Err(e) = self.users.insert(&user).await {
            error!("사용자 생성 실패 ({}): {}", user.email, e);
            self.discard_avatar(&avatar_name).await;
            return Err(e);
        }

        info!("👤 사용자 생성: {} (avatar: {})", user.id, user.avatar_name);
        Ok(user)
    }

    /// 사용자 목록 조회
    ///
    /// `created_at` 내림차순으로 정렬한 뒤 `page`(1부터 시작) 번째 페이지를 반환합니다.
    /// 함께 반환되는 개수는 페이지와 무관한 전체 레코드 수입니다.
    ///
    /// `page`가 0이면 1페이지로 취급하고, `limit`의 상한은 두지 않습니다.
    /// 아주 큰 `page`는 빈 페이지가 됩니다 (건너뛸 개수는 [`MAX_SKIP`]에서 멈춤).
    pub async fn find_all(&self, limit: u64, page: u64) -> AppResult<(Vec<User>, u64)> {
        let skip = page
            .max(1)
            .saturating_sub(1)
            .saturating_mul(limit)
            .min(MAX_SKIP);

        let users = self.users.find_page(skip, limit).await?;
        let count = self.users.count().await?;

        debug!("사용자 목록 조회: page={}, limit={}, 반환 {}건 / 전체 {}건", page, limit, users.len(), count);
        Ok((users, count))
    }

    /// ID로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Err(AppError::NotFound)` - 해당 ID의 레코드가 없음
    pub async fn find_one(&self, id: &str) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    /// 사용자 부분 수정
    ///
    /// # 처리 과정
    ///
    /// 1. 레코드 조회 (없으면 `NotFound`)
    /// 2. 이름/나이/메모 반영 (나이가 바뀌면 출생 연도 재계산)
    /// 3. 새 아바타가 있으면 먼저 저장하고 참조를 교체
    /// 4. 레코드 기록 (`updated_at` 갱신)
    /// 5. 기록 성공 후 이전 아바타 삭제 (실패는 로그만 남김)
    ///
    /// 4단계가 실패하면 3단계에서 저장한 파일을 삭제하고 에러를 반환합니다.
    /// 이전 아바타 파일은 그대로 남습니다.
    pub async fn update_user(
        &self,
        id: &str,
        patch: UserPatch,
        avatar: Option<AvatarUpload>,
    ) -> AppResult<User> {
        let mut user = self.find_one(id).await?;
        patch.apply(&mut user);

        let mut new_avatar = None;
        let mut previous_avatar = None;
        if let Some(upload) = avatar {
            let stored = self.avatars.put(&upload.content, &upload.extension).await?;
            previous_avatar = Some(user.replace_avatar(stored.clone(), upload.avatar_type));
            new_avatar = Some(stored);
        }

        user.touch();

        let outcome = match self.users.replace(&user).await {
            Ok(true) => Ok(()),
            // 조회와 기록 사이에 삭제된 경우
            Ok(false) => Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string())),
            Err(e) => Err(e),
        };

        if let Err(e) = outcome {
            error!("사용자 수정 실패 ({}): {}", id, e);
            if let Some(stored) = &new_avatar {
                self.discard_avatar(stored).await;
            }
            return Err(e);
        }

        if let Some(previous) = &previous_avatar {
            self.discard_avatar(previous).await;
        }

        info!("✏️ 사용자 수정: {}", user.id);
        Ok(user)
    }

    /// 사용자 삭제
    ///
    /// 레코드를 삭제한 뒤 아바타 파일을 최선 노력으로 삭제합니다.
    /// 파일 삭제 실패는 요청 결과에 영향을 주지 않습니다.
    pub async fn remove_user(&self, id: &str) -> AppResult<()> {
        let user = self.find_one(id).await?;

        if !self.users.delete(id).await? {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        self.discard_avatar(&user.avatar_name).await;

        info!("🗑️ 사용자 삭제: {}", id);
        Ok(())
    }

    /// 아바타 파일 최선 노력 삭제
    async fn discard_avatar(&self, name: &str) {
        if let Err(e) = self.avatars.delete(name).await {
            warn!("아바타 파일 정리 실패 ({}): {}", name, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::user::current_year;
    use crate::domain::models::FieldUpdate;
    use crate::repositories::users::MemoryUserRepository;
    use crate::storage::LocalAvatarStore;
    use async_trait::async_trait;
    use tempfile::TempDir;

    /// 쓰기 연산이 항상 실패하는 저장소
    struct BrokenWrites(MemoryUserRepository);

    #[async_trait]
    impl UserStore for BrokenWrites {
        async fn insert(&self, _user: &User) -> AppResult<()> {
            Err(AppError::DatabaseError("write refused".to_string()))
        }
        async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
            self.0.find_by_id(id).await
        }
        async fn find_page(&self, skip: u64, limit: u64) -> AppResult<Vec<User>> {
            self.0.find_page(skip, limit).await
        }
        async fn count(&self) -> AppResult<u64> {
            self.0.count().await
        }
        async fn replace(&self, _user: &User) -> AppResult<bool> {
            Err(AppError::DatabaseError("write refused".to_string()))
        }
        async fn delete(&self, id: &str) -> AppResult<bool> {
            self.0.delete(id).await
        }
    }

    /// 파일 삭제가 항상 실패하는 아바타 저장소
    struct UndeletableAvatars(LocalAvatarStore);

    #[async_trait]
    impl AvatarStore for UndeletableAvatars {
        async fn put(&self, content: &[u8], extension: &str) -> AppResult<String> {
            self.0.put(content, extension).await
        }
        async fn delete(&self, name: &str) -> AppResult<()> {
            Err(AppError::FileStoreError(format!("permission denied: {}", name)))
        }
        async fn exists(&self, name: &str) -> AppResult<bool> {
            self.0.exists(name).await
        }
    }

    struct Fixture {
        _dir: TempDir,
        avatars: Arc<LocalAvatarStore>,
        service: UserService,
    }

    async fn fixture() -> Fixture {
        let dir = TempDir::new().unwrap();
        let avatars = Arc::new(LocalAvatarStore::new(dir.path()).await.unwrap());
        let service = UserService::new(Arc::new(MemoryUserRepository::new()), avatars.clone());
        Fixture {
            _dir: dir,
            avatars,
            service,
        }
    }

    fn request(email: &str, age: i32) -> CreateUserRequest {
        CreateUserRequest {
            name: "Alice".to_string(),
            age,
            email: email.to_string(),
            note: Some("first".to_string()),
        }
    }

    fn png() -> AvatarUpload {
        AvatarUpload::new("avatar.png", Some("image/png"), b"png-bytes".to_vec()).unwrap()
    }

    fn jpg() -> AvatarUpload {
        AvatarUpload::new("avatar.jpg", Some("image/jpeg"), b"jpg-bytes".to_vec()).unwrap()
    }

    fn files_in(dir: &std::path::Path) -> usize {
        std::fs::read_dir(dir).unwrap().count()
    }

    /// 마지막으로 받은 skip 값을 기록하는 저장소
    struct RecordingSkip {
        inner: MemoryUserRepository,
        last_skip: std::sync::Mutex<Option<u64>>,
    }

    #[async_trait]
    impl UserStore for RecordingSkip {
        async fn insert(&self, user: &User) -> AppResult<()> {
            self.inner.insert(user).await
        }
        async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
            self.inner.find_by_id(id).await
        }
        async fn find_page(&self, skip: u64, limit: u64) -> AppResult<Vec<User>> {
            *self.last_skip.lock().unwrap() = Some(skip);
            self.inner.find_page(skip, limit).await
        }
        async fn count(&self) -> AppResult<u64> {
            self.inner.count().await
        }
        async fn replace(&self, user: &User) -> AppResult<bool> {
            self.inner.replace(user).await
        }
        async fn delete(&self, id: &str) -> AppResult<bool> {
            self.inner.delete(id).await
        }
    }

    #[actix_web::test]
    async fn test_huge_page_is_empty_and_skip_fits_i64() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(RecordingSkip {
            inner: MemoryUserRepository::new(),
            last_skip: std::sync::Mutex::new(None),
        });
        let service = UserService::new(
            store.clone(),
            Arc::new(LocalAvatarStore::new(dir.path()).await.unwrap()),
        );
        service.create_user(request("big@example.com", 20), png()).await.unwrap();

        let (users, count) = service.find_all(10, u64::MAX).await.unwrap();

        assert!(users.is_empty());
        assert_eq!(count, 1);
        let skip = store.last_skip.lock().unwrap().unwrap();
        assert_eq!(skip, MAX_SKIP);
        assert!(i64::try_from(skip).is_ok());
    }

    #[actix_web::test]
    async fn test_create_user_computes_derived_fields() {
        let f = fixture().await;
        let user = f.service.create_user(request("a@example.com", 30), png()).await.unwrap();

        assert_eq!(user.year_of_birth, current_year() - 30);
        assert_eq!(user.avatar_type, "png");
        assert!(user.avatar_name.ends_with(".png"));
        assert_eq!(user.avatar_name.len(), 32 + ".png".len());
        assert!(f.avatars.exists(&user.avatar_name).await.unwrap());
        assert_eq!(f.service.find_one(&user.id).await.unwrap(), user);
    }

    #[actix_web::test]
    async fn test_duplicate_email_conflicts_and_leaves_no_orphan() {
        let f = fixture().await;
        let first = f.service.create_user(request("dup@example.com", 20), png()).await.unwrap();

        let second = f.service.create_user(request("dup@example.com", 40), jpg()).await;

        assert!(matches!(second, Err(AppError::ConflictError(_))));
        assert_eq!(f.service.find_one(&first.id).await.unwrap(), first);
        assert_eq!(files_in(f.avatars.base_path()), 1);
    }

    #[actix_web::test]
    async fn test_create_persistence_failure_removes_new_file() {
        let dir = TempDir::new().unwrap();
        let avatars = Arc::new(LocalAvatarStore::new(dir.path()).await.unwrap());
        let service = UserService::new(
            Arc::new(BrokenWrites(MemoryUserRepository::new())),
            avatars.clone(),
        );

        let result = service.create_user(request("x@example.com", 20), png()).await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
        assert_eq!(files_in(dir.path()), 0);
    }

    #[actix_web::test]
    async fn test_find_all_second_page() {
        let f = fixture().await;
        let mut created = Vec::new();
        for i in 0..25 {
            let user = f
                .service
                .create_user(request(&format!("u{}@example.com", i), 20), png())
                .await
                .unwrap();
            created.push(user.id);
        }

        let (page, count) = f.service.find_all(10, 2).await.unwrap();
        let ids: Vec<_> = page.into_iter().map(|u| u.id).collect();

        // 최신순 11~20번째 = 생성 순서상 인덱스 14..=5
        let expected: Vec<_> = created[5..15].iter().rev().cloned().collect();
        assert_eq!(count, 25);
        assert_eq!(ids, expected);
    }

    #[actix_web::test]
    async fn test_find_all_page_zero_and_past_end() {
        let f = fixture().await;
        for i in 0..3 {
            f.service
                .create_user(request(&format!("p{}@example.com", i), 20), png())
                .await
                .unwrap();
        }

        let (first, _) = f.service.find_all(2, 0).await.unwrap();
        let (beyond, count) = f.service.find_all(10, 5).await.unwrap();

        assert_eq!(first.len(), 2);
        assert!(beyond.is_empty());
        assert_eq!(count, 3);
    }

    #[actix_web::test]
    async fn test_missing_id_is_not_found_everywhere() {
        let f = fixture().await;

        assert!(matches!(f.service.find_one("nope").await, Err(AppError::NotFound(_))));
        assert!(matches!(
            f.service.update_user("nope", UserPatch::default(), Some(png())).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(f.service.remove_user("nope").await, Err(AppError::NotFound(_))));
        assert_eq!(files_in(f.avatars.base_path()), 0);
    }

    #[actix_web::test]
    async fn test_update_note_instructions() {
        let f = fixture().await;
        let user = f.service.create_user(request("n@example.com", 20), png()).await.unwrap();

        let unchanged = f
            .service
            .update_user(&user.id, UserPatch::default(), None)
            .await
            .unwrap();
        assert_eq!(unchanged.note.as_deref(), Some("first"));

        let emptied = f
            .service
            .update_user(
                &user.id,
                UserPatch { note: FieldUpdate::SetTo(String::new()), ..Default::default() },
                None,
            )
            .await
            .unwrap();
        assert_eq!(emptied.note.as_deref(), Some(""));

        let cleared = f
            .service
            .update_user(
                &user.id,
                UserPatch { note: FieldUpdate::Clear, ..Default::default() },
                None,
            )
            .await
            .unwrap();
        assert_eq!(cleared.note, None);
        assert_eq!(f.service.find_one(&user.id).await.unwrap().note, None);
    }

    #[actix_web::test]
    async fn test_update_replaces_avatar_and_removes_previous() {
        let f = fixture().await;
        let user = f.service.create_user(request("av@example.com", 20), png()).await.unwrap();

        let updated = f
            .service
            .update_user(&user.id, UserPatch::default(), Some(jpg()))
            .await
            .unwrap();

        assert_ne!(updated.avatar_name, user.avatar_name);
        assert_eq!(updated.avatar_type, "jpeg");
        assert!(f.avatars.exists(&updated.avatar_name).await.unwrap());
        assert!(!f.avatars.exists(&user.avatar_name).await.unwrap());
        assert!(updated.updated_at >= user.updated_at);
    }

    #[actix_web::test]
    async fn test_update_survives_previous_avatar_delete_failure() {
        let dir = TempDir::new().unwrap();
        let local = LocalAvatarStore::new(dir.path()).await.unwrap();
        let service = UserService::new(
            Arc::new(MemoryUserRepository::new()),
            Arc::new(UndeletableAvatars(local.clone())),
        );
        let user = service.create_user(request("keep@example.com", 20), png()).await.unwrap();

        let updated = service
            .update_user(&user.id, UserPatch::default(), Some(jpg()))
            .await
            .unwrap();

        assert!(local.exists(&updated.avatar_name).await.unwrap());
        assert_eq!(service.find_one(&user.id).await.unwrap().avatar_name, updated.avatar_name);
    }

    #[actix_web::test]
    async fn test_update_persistence_failure_keeps_previous_avatar() {
        let dir = TempDir::new().unwrap();
        let avatars = Arc::new(LocalAvatarStore::new(dir.path()).await.unwrap());
        let memory = MemoryUserRepository::new();
        let existing = User::new(
            "Old".to_string(),
            50,
            "old@example.com".to_string(),
            None,
            avatars.put(b"old", ".png").await.unwrap(),
            "png".to_string(),
        );
        memory.insert(&existing).await.unwrap();
        let service = UserService::new(Arc::new(BrokenWrites(memory)), avatars.clone());

        let result = service
            .update_user(&existing.id, UserPatch { age: Some(51), ..Default::default() }, Some(jpg()))
            .await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
        assert!(avatars.exists(&existing.avatar_name).await.unwrap());
        assert_eq!(files_in(dir.path()), 1);
        assert_eq!(service.find_one(&existing.id).await.unwrap().age, 50);
    }

    #[actix_web::test]
    async fn test_remove_survives_avatar_delete_failure() {
        let dir = TempDir::new().unwrap();
        let service = UserService::new(
            Arc::new(MemoryUserRepository::new()),
            Arc::new(UndeletableAvatars(LocalAvatarStore::new(dir.path()).await.unwrap())),
        );
        let user = service.create_user(request("gone@example.com", 20), png()).await.unwrap();

        service.remove_user(&user.id).await.unwrap();

        assert!(matches!(service.find_one(&user.id).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_lifecycle_create_update_delete() {
        let f = fixture().await;
        let user = f.service.create_user(request("life@example.com", 30), png()).await.unwrap();
        assert_eq!(user.year_of_birth, current_year() - 30);

        let updated = f
            .service
            .update_user(&user.id, UserPatch { age: Some(31), ..Default::default() }, None)
            .await
            .unwrap();
        assert_eq!(updated.age, 31);
        assert_eq!(updated.year_of_birth, current_year() - 31);
        assert_eq!(updated.avatar_name, user.avatar_name);

        f.service.remove_user(&user.id).await.unwrap();

        assert!(matches!(f.service.find_one(&user.id).await, Err(AppError::NotFound(_))));
        assert!(!f.avatars.exists(&user.avatar_name).await.unwrap());
    }
}
