//! Services Module
//!
//! 백엔드 REST API 연동 레이어
//!
//! # Services
//! - `ConsoleBackend`: 페이지 컨트롤러가 의존하는 백엔드 인터페이스
//! - `ApiClient`: reqwest 기반 실제 구현

mod api_client;
mod backend;

pub use api_client::ApiClient;
pub use backend::ConsoleBackend;

#[cfg(test)]
pub use backend::mock;
