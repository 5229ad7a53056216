//! Profiles page controller.
//!
//! Router filter + profile table. Every table render replaces the whole
//! body from a fresh fetch; row actions are bound to profile ids at render
//! time.

use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::services::ConsoleBackend;
use crate::types::{Profile, ProfileQuery};
use crate::ui::{Dialogs, Dropdown, ProfileRow, RowAction, SelectOption, TableBody};

use super::{lock, RequestSequence};

pub const FILTER_PLACEHOLDER: &str = "All Routers";

const LOAD_FAILED_MESSAGE: &str = "Failed to load profiles";

const CONFIRM_SYNC: &str = "Sync this profile to MikroTik?";
const CONFIRM_DELETE: &str = "Are you sure you want to delete this profile?";
const CONFIRM_SYNC_ALL: &str =
    "Sync ALL profiles from MikroTik? This might overwrite local changes.";
const SELECT_ROUTER_FIRST: &str = "Please select a router first to sync all profiles.";

/// 프로필 페이지 view 상태
#[derive(Debug, Clone, PartialEq)]
pub struct ProfilesView {
    pub router_filter: Dropdown,
    pub table: TableBody,
}

impl Default for ProfilesView {
    fn default() -> Self {
        Self {
            router_filter: Dropdown::with_placeholder(FILTER_PLACEHOLDER),
            table: TableBody::Loading,
        }
    }
}

pub struct ProfilesPageController {
    backend: Arc<dyn ConsoleBackend>,
    dialogs: Arc<dyn Dialogs>,
    view: Mutex<ProfilesView>,
    table_requests: RequestSequence,
    page_size: u32,
    price_separator: char,
}

impl ProfilesPageController {
    pub fn new(backend: Arc<dyn ConsoleBackend>, dialogs: Arc<dyn Dialogs>, config: &Config) -> Self {
        Self {
            backend,
            dialogs,
            view: Mutex::new(ProfilesView::default()),
            table_requests: RequestSequence::new(),
            page_size: config.profile_page_size,
            price_separator: config.price_group_separator,
        }
    }

    pub fn view(&self) -> ProfilesView {
        lock(&self.view).clone()
    }

    /// 페이지 로드: 필터 옵션과 테이블을 동시에 요청
    pub async fn initialize(&self) {
        tokio::join!(self.load_router_filter_options(), self.load_profiles());
    }

    /// 필터에 라우터 추가. "All Routers" placeholder 는 유지
    pub async fn load_router_filter_options(&self) {
        match self.backend.list_routers().await {
            Ok(routers) => {
                lock(&self.view)
                    .router_filter
                    .append(routers.iter().map(|r| SelectOption::new(&r.id, &r.name)));
            }
            Err(err) => tracing::error!("Error fetching routers: {}", err),
        }
    }

    /// 테이블 다시 그리기 (현재 필터 기준)
    pub async fn load_profiles(&self) {
        let (token, query) = {
            let mut view = lock(&self.view);
            view.table = TableBody::Loading;
            let query = ProfileQuery::new(Some(view.router_filter.value()), self.page_size);
            (self.table_requests.next(), query)
        };

        let result = self.backend.list_profiles(&query).await;

        let mut view = lock(&self.view);
        if !self.table_requests.is_current(token) {
            tracing::debug!(mikrotik_id = ?query.mikrotik_id, "Discarding stale profile table");
            return;
        }

        view.table = match result {
            Ok(profiles) => self.render_rows(&profiles),
            Err(err) if err.is_transport() => {
                tracing::error!("Error fetching profiles: {}", err);
                TableBody::Error(LOAD_FAILED_MESSAGE.to_string())
            }
            Err(err) => {
                tracing::warn!("Profile listing rejected: {}", err);
                TableBody::Error(format!("Error: {}", err.message_or_unknown()))
            }
        };
    }

    fn render_rows(&self, profiles: &[Profile]) -> TableBody {
        if profiles.is_empty() {
            return TableBody::Empty;
        }
        TableBody::Rows(
            profiles
                .iter()
                .map(|p| ProfileRow::render(p, self.price_separator))
                .collect(),
        )
    }

    /// 필터 변경
    pub async fn on_filter_changed(&self, router_id: &str) {
        lock(&self.view).router_filter.select(router_id);
        self.load_profiles().await;
    }

    /// 행 버튼 클릭
    pub async fn handle_row_action(&self, action: &RowAction) {
        match action {
            RowAction::Sync(id) => self.sync_profile(id).await,
            RowAction::Delete(id) => self.delete_profile(id).await,
        }
    }

    /// 프로필 하나를 MikroTik 에 sync. 성공해도 테이블은 갱신하지 않음
    pub async fn sync_profile(&self, profile_id: &str) {
        if !self.dialogs.confirm(CONFIRM_SYNC) {
            return;
        }

        match self.backend.sync_profile(profile_id).await {
            Ok(()) => {
                tracing::info!(profile_id, "Profile synced");
                self.dialogs.alert("Synced successfully");
            }
            Err(err) if err.is_transport() => {
                tracing::error!(profile_id, "Sync error: {}", err);
                self.dialogs.alert("Sync error");
            }
            Err(err) => {
                tracing::warn!(profile_id, "Sync failed: {}", err);
                self.dialogs
                    .alert(&format!("Sync failed: {}", err.message_or_unknown()));
            }
        }
    }

    /// 프로필 삭제 후 테이블 재조회
    pub async fn delete_profile(&self, profile_id: &str) {
        if !self.dialogs.confirm(CONFIRM_DELETE) {
            return;
        }

        match self.backend.delete_profile(profile_id).await {
            Ok(()) => {
                tracing::info!(profile_id, "Profile deleted");
                self.load_profiles().await;
            }
            Err(err) if err.is_transport() => {
                tracing::error!(profile_id, "Error deleting profile: {}", err);
                self.dialogs.alert("Error deleting");
            }
            Err(err) => {
                tracing::warn!(profile_id, "Delete failed: {}", err);
                self.dialogs.alert("Failed to delete");
            }
        }
    }

    /// 선택된 라우터의 모든 프로필 sync
    ///
    /// 응답 body 와 status 는 보지 않음. HTTP 응답만 오면 완료로 알리고 재조회
    pub async fn sync_all(&self) {
        let mikrotik_id = lock(&self.view).router_filter.value().to_string();
        if mikrotik_id.is_empty() {
            self.dialogs.alert(SELECT_ROUTER_FIRST);
            return;
        }
        if !self.dialogs.confirm(CONFIRM_SYNC_ALL) {
            return;
        }

        match self.backend.sync_all_profiles(&mikrotik_id).await {
            Ok(status) => {
                if !(200..300).contains(&status) {
                    tracing::warn!(%mikrotik_id, status, "Bulk sync returned non-success status");
                }
                self.dialogs.alert("Sync started/completed.");
                self.load_profiles().await;
            }
            Err(err) => {
                tracing::error!(%mikrotik_id, "Bulk sync failed: {}", err);
                self.dialogs.alert("Sync failed");
            }
        }
    }
}
