//! Add Customer page controller.
//!
//! Router dropdown → PPPoE profile dropdown → submit. The profile dropdown
//! only ever lists `pppoe` profiles of the selected router.

use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::services::ConsoleBackend;
use crate::types::{CustomerDetails, NewCustomer, ProfileQuery, ServiceType};
use crate::ui::format::profile_option_label;
use crate::ui::{Dialogs, Dropdown, SelectOption};

use super::{lock, RequestSequence};

pub const ROUTER_PLACEHOLDER: &str = "Select Router";
pub const PROFILE_PLACEHOLDER: &str = "Select Profile";

const CREATED_MESSAGE: &str = "Customer created successfully!";
const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit form";

/// 고객 추가 폼의 view 상태
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerFormView {
    pub router_select: Dropdown,
    pub profile_select: Dropdown,
    pub service_type: ServiceType,
    /// PPPoE 전용 입력 그룹 표시 여부
    pub pppoe_fields_visible: bool,
}

impl Default for CustomerFormView {
    fn default() -> Self {
        Self {
            router_select: Dropdown::with_placeholder(ROUTER_PLACEHOLDER),
            profile_select: Dropdown::with_placeholder(PROFILE_PLACEHOLDER),
            service_type: ServiceType::Pppoe,
            pppoe_fields_visible: true,
        }
    }
}

pub struct CustomerFormController {
    backend: Arc<dyn ConsoleBackend>,
    dialogs: Arc<dyn Dialogs>,
    view: Mutex<CustomerFormView>,
    profile_requests: RequestSequence,
    page_size: u32,
    customer_list_path: String,
}

impl CustomerFormController {
    pub fn new(backend: Arc<dyn ConsoleBackend>, dialogs: Arc<dyn Dialogs>, config: &Config) -> Self {
        Self {
            backend,
            dialogs,
            view: Mutex::new(CustomerFormView::default()),
            profile_requests: RequestSequence::new(),
            page_size: config.profile_page_size,
            customer_list_path: config.customer_list_path.clone(),
        }
    }

    /// 현재 view 상태 스냅샷
    pub fn view(&self) -> CustomerFormView {
        lock(&self.view).clone()
    }

    /// 페이지 로드 시 1회
    pub async fn initialize(&self) {
        self.load_routers().await;
    }

    /// 라우터 드롭다운 채우기. 실패 시 기존 상태 유지, 로그만 남김
    pub async fn load_routers(&self) {
        match self.backend.list_routers().await {
            Ok(routers) => {
                tracing::debug!(count = routers.len(), "Loaded routers");
                lock(&self.view).router_select.replace_options(
                    ROUTER_PLACEHOLDER,
                    routers
                        .iter()
                        .map(|r| SelectOption::new(&r.id, format!("{} ({})", r.name, r.host))),
                );
            }
            Err(err) => tracing::error!("Failed to fetch mikrotiks: {}", err),
        }
    }

    /// 라우터 선택 변경 → PPPoE 프로필 목록 갱신
    pub async fn on_router_changed(&self, router_id: &str) {
        let token = {
            let mut view = lock(&self.view);
            view.router_select.select(router_id);
            let token = self.profile_requests.next();

            if router_id.is_empty() {
                view.profile_select
                    .replace_options(PROFILE_PLACEHOLDER, std::iter::empty());
                return;
            }
            token
        };

        let query = ProfileQuery::new(Some(router_id), self.page_size);
        let result = self.backend.list_profiles(&query).await;

        let mut view = lock(&self.view);
        if !self.profile_requests.is_current(token) {
            tracing::debug!(router_id, "Discarding stale profile list");
            return;
        }

        match result {
            Ok(profiles) => {
                view.profile_select.replace_options(
                    PROFILE_PLACEHOLDER,
                    profiles
                        .iter()
                        .filter(|p| p.profile_type.is_pppoe())
                        .map(|p| SelectOption::new(&p.id, profile_option_label(p))),
                );
            }
            Err(err) => tracing::error!(router_id, "Failed to fetch profiles: {}", err),
        }
    }

    /// 프로필 선택. 목록에 없는 id 면 placeholder 로 돌아가고 false
    pub fn select_profile(&self, profile_id: &str) -> bool {
        lock(&self.view).profile_select.select(profile_id)
    }

    /// PPPoE 가 아니면 입력 그룹을 숨기고 선택된 프로필을 비움
    pub fn on_service_type_changed(&self, service_type: ServiceType) {
        let mut view = lock(&self.view);
        view.service_type = service_type;
        view.pppoe_fields_visible = service_type == ServiceType::Pppoe;
        if !view.pppoe_fields_visible {
            view.profile_select.select("");
        }
    }

    /// 폼 제출. 생성 성공 시 true
    ///
    /// 실패해도 재시도하지 않고 입력값도 보관하지 않음
    pub async fn submit(&self, details: CustomerDetails) -> bool {
        let customer = {
            let view = lock(&self.view);
            NewCustomer::from_form(
                view.router_select.value(),
                view.service_type,
                view.profile_select.value(),
                details,
            )
        };

        match self.backend.create_customer(&customer).await {
            Ok(()) => {
                tracing::info!(username = %customer.username, "Customer created");
                self.dialogs.alert(CREATED_MESSAGE);
                self.dialogs.navigate(&self.customer_list_path);
                true
            }
            Err(err) if err.is_transport() => {
                tracing::error!("Customer submit failed: {}", err);
                self.dialogs.alert(SUBMIT_FAILED_MESSAGE);
                false
            }
            Err(err) => {
                tracing::warn!("Customer rejected: {}", err);
                self.dialogs
                    .alert(&format!("Error: {}", err.message_or_unknown()));
                false
            }
        }
    }
}
