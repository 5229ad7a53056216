//! Backend Interface
//!
//! # Interview Q&A
//!
//! Q: 페이지 컨트롤러가 reqwest 를 직접 쓰지 않는 이유는?
//! A: 백엔드 경계를 trait 로 분리
//!
//!    ```rust,ignore
//!    // 컨트롤러는 trait object 만 안다
//!    let page = ProfilesPageController::new(Arc::new(api_client), dialogs, &config);
//!
//!    // 테스트에서는 Mock 으로 교체
//!    let page = ProfilesPageController::new(Arc::new(MockBackend::new()), dialogs, &config);
//!    ```
//!
//!    - 네트워크 없이 컨트롤러 동작(드롭다운, 테이블, 알림) 검증 가능
//!    - 응답 순서를 테스트에서 직접 조절 (stale 응답 시나리오)

use async_trait::async_trait;

use crate::error::ConsoleError;
use crate::types::{NewCustomer, Profile, ProfileQuery, Router};

/// 백엔드 REST API 인터페이스
#[async_trait]
pub trait ConsoleBackend: Send + Sync {
    /// `GET /api/mikrotiks`
    async fn list_routers(&self) -> Result<Vec<Router>, ConsoleError>;

    /// `GET /api/profiles?mikrotik_id=&limit=`
    async fn list_profiles(&self, query: &ProfileQuery) -> Result<Vec<Profile>, ConsoleError>;

    /// `POST /api/profiles/{id}/sync`
    async fn sync_profile(&self, profile_id: &str) -> Result<(), ConsoleError>;

    /// `DELETE /api/profiles/{id}`
    async fn delete_profile(&self, profile_id: &str) -> Result<(), ConsoleError>;

    /// `POST /api/profiles/sync-all/{mikrotik_id}`
    ///
    /// Body 는 읽지 않음. HTTP status code 만 반환하고, 에러는 transport 실패뿐
    async fn sync_all_profiles(&self, mikrotik_id: &str) -> Result<u16, ConsoleError>;

    /// `POST /api/customers`
    async fn create_customer(&self, customer: &NewCustomer) -> Result<(), ConsoleError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use tokio::sync::oneshot;

    /// Mock 이 기록하는 호출
    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        ListRouters,
        ListProfiles(ProfileQuery),
        SyncProfile(String),
        DeleteProfile(String),
        SyncAllProfiles(String),
        CreateCustomer(NewCustomer),
    }

    /// 미리 정해둔 응답
    #[derive(Debug, Clone)]
    pub enum Reply<T> {
        Ok(T),
        Http(u16, Option<String>),
        Application(Option<String>),
        Transport,
    }

    impl<T: Clone> Reply<T> {
        fn to_result(&self) -> Result<T, ConsoleError> {
            match self {
                Reply::Ok(value) => Ok(value.clone()),
                Reply::Http(status, message) => Err(ConsoleError::Http {
                    status: *status,
                    message: message.clone(),
                }),
                Reply::Application(message) => Err(ConsoleError::Application {
                    status: "error".to_string(),
                    message: message.clone(),
                }),
                Reply::Transport => Err(transport_error()),
            }
        }
    }

    /// 실제 reqwest 에러 (잘못된 URL 로 request 빌드 실패)
    pub fn transport_error() -> ConsoleError {
        let err = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        ConsoleError::Transport(err)
    }

    pub struct MockBackend {
        calls: Mutex<Vec<Call>>,
        routers: Mutex<Reply<Vec<Router>>>,
        /// router id 별 응답 (None = 전체)
        profiles: Mutex<HashMap<Option<String>, Reply<Vec<Profile>>>>,
        /// router id 별 응답 지연 (테스트에서 순서 조절)
        profile_gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
        sync: Mutex<Reply<()>>,
        delete: Mutex<Reply<()>>,
        sync_all: Mutex<Reply<u16>>,
        create_customer: Mutex<Reply<()>>,
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                routers: Mutex::new(Reply::Ok(Vec::new())),
                profiles: Mutex::new(HashMap::new()),
                profile_gates: Mutex::new(HashMap::new()),
                sync: Mutex::new(Reply::Ok(())),
                delete: Mutex::new(Reply::Ok(())),
                sync_all: Mutex::new(Reply::Ok(200)),
                create_customer: Mutex::new(Reply::Ok(())),
            }
        }

        pub fn set_routers(&self, reply: Reply<Vec<Router>>) {
            *self.routers.lock().unwrap() = reply;
        }

        pub fn set_profiles(&self, mikrotik_id: Option<&str>, reply: Reply<Vec<Profile>>) {
            self.profiles
                .lock()
                .unwrap()
                .insert(mikrotik_id.map(str::to_string), reply);
        }

        /// 해당 router 의 프로필 응답을 sender 가 신호를 줄 때까지 보류
        pub fn gate_profiles(&self, mikrotik_id: &str) -> oneshot::Sender<()> {
            let (tx, rx) = oneshot::channel();
            self.profile_gates
                .lock()
                .unwrap()
                .insert(mikrotik_id.to_string(), rx);
            tx
        }

        pub fn set_sync(&self, reply: Reply<()>) {
            *self.sync.lock().unwrap() = reply;
        }

        pub fn set_delete(&self, reply: Reply<()>) {
            *self.delete.lock().unwrap() = reply;
        }

        pub fn set_sync_all(&self, reply: Reply<u16>) {
            *self.sync_all.lock().unwrap() = reply;
        }

        pub fn set_create_customer(&self, reply: Reply<()>) {
            *self.create_customer.lock().unwrap() = reply;
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
            self.calls.lock().unwrap().iter().filter(|c| pred(c)).count()
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl ConsoleBackend for MockBackend {
        async fn list_routers(&self) -> Result<Vec<Router>, ConsoleError> {
            self.record(Call::ListRouters);
            self.routers.lock().unwrap().to_result()
        }

        async fn list_profiles(&self, query: &ProfileQuery) -> Result<Vec<Profile>, ConsoleError> {
            self.record(Call::ListProfiles(query.clone()));

            let gate = query
                .mikrotik_id
                .as_ref()
                .and_then(|id| self.profile_gates.lock().unwrap().remove(id));
            if let Some(gate) = gate {
                let _ = gate.await;
            }

            let profiles = self.profiles.lock().unwrap();
            let result = profiles
                .get(&query.mikrotik_id)
                .map(Reply::to_result)
                .unwrap_or_else(|| Ok(Vec::new()));
            result
        }

        async fn sync_profile(&self, profile_id: &str) -> Result<(), ConsoleError> {
            self.record(Call::SyncProfile(profile_id.to_string()));
            self.sync.lock().unwrap().to_result()
        }

        async fn delete_profile(&self, profile_id: &str) -> Result<(), ConsoleError> {
            self.record(Call::DeleteProfile(profile_id.to_string()));
            self.delete.lock().unwrap().to_result()
        }

        async fn sync_all_profiles(&self, mikrotik_id: &str) -> Result<u16, ConsoleError> {
            self.record(Call::SyncAllProfiles(mikrotik_id.to_string()));
            self.sync_all.lock().unwrap().to_result()
        }

        async fn create_customer(&self, customer: &NewCustomer) -> Result<(), ConsoleError> {
            self.record(Call::CreateCustomer(customer.clone()));
            self.create_customer.lock().unwrap().to_result()
        }
    }
}
