//! MikroTik ISP Console Library
//!
//! # Overview
//!
//! ISP 관리 콘솔의 클라이언트 측 페이지 로직.
//! 라우터/프로필 드롭다운, 고객 생성 폼, 프로필 테이블(sync / delete)을
//! 백엔드 REST API 위에서 구동한다.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                        Console                           │
//! │                                                          │
//! │  ┌─────────┐  ┌──────────┐  ┌──────────┐  ┌─────────┐   │
//! │  │  Pages  │─▶│    UI    │  │ Services │  │  Types  │   │
//! │  └────┬────┘  └──────────┘  └────┬─────┘  └─────────┘   │
//! │       │                          │                       │
//! │       └──────── ConsoleBackend ──┘                       │
//! │                                  │                       │
//! └──────────────────────────────────┼───────────────────────┘
//!                                    │ HTTP (JSON envelope)
//!                                    ▼
//!                          ┌──────────────────┐
//!                          │  Backend /api/*  │
//!                          └──────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `config`: 환경 설정 관리
//! - `error`: 에러 타입 및 처리
//! - `types`: wire 타입 (Router, Profile, NewCustomer ...)
//! - `services`: 백엔드 인터페이스와 reqwest 클라이언트
//! - `ui`: view 상태 위젯, 표시 포맷, 터미널 출력
//! - `pages`: 고객 추가 / 프로필 페이지 컨트롤러
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use mikrotik_console::{ApiClient, Config, ProfilesPageController};
//! use mikrotik_console::ui::terminal::TerminalDialogs;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let backend = Arc::new(ApiClient::from_config(&config)?);
//!     let page = ProfilesPageController::new(backend, Arc::new(TerminalDialogs::new(false)), &config);
//!
//!     page.initialize().await;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod pages;
pub mod services;
pub mod types;
pub mod ui;

// Re-exports for convenience
pub use config::Config;
pub use error::ConsoleError;
pub use pages::{CustomerFormController, ProfilesPageController};
pub use services::{ApiClient, ConsoleBackend};
