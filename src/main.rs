//! MikroTik ISP Console CLI
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Terminal (stdin / stdout)                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        CLI (clap)                            │
//! │  ┌─────────────────────────────────────────────────────────┐│
//! │  │                   Page Controllers                       ││
//! │  │  CustomerFormController    ProfilesPageController       ││
//! │  └─────────────────────────────────────────────────────────┘│
//! │  ┌─────────────────────────────────────────────────────────┐│
//! │  │                  ApiClient (reqwest)                     ││
//! │  └─────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                Backend  /api/mikrotiks  /api/profiles        │
//! │                         /api/customers                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mikrotik_console::types::{CustomerDetails, ServiceType};
use mikrotik_console::ui::terminal::{render_dropdown, render_table, TerminalDialogs};
use mikrotik_console::ui::{RowAction, TableBody};
use mikrotik_console::{ApiClient, Config, CustomerFormController, ProfilesPageController};

#[derive(Parser)]
#[command(name = "mikrotik-console", about = "MikroTik ISP console: customers & service profiles")]
struct Cli {
    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true, action = clap::ArgAction::SetTrue)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List routers as shown in the customer form
    Routers,
    /// Show the profiles table
    Profiles {
        #[arg(long)]
        router: Option<String>,
    },
    /// List PPPoE profiles selectable for a router
    PppoeProfiles {
        #[arg(long)]
        router: String,
    },
    /// Sync one profile to its MikroTik
    Sync { profile_id: String },
    /// Delete a profile
    Delete { profile_id: String },
    /// Sync all profiles of a router
    SyncAll { router_id: String },
    /// Create a customer
    CreateCustomer {
        #[arg(long)]
        router: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        username: String,
        #[arg(long, default_value = "pppoe")]
        service_type: ServiceType,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        pppoe_username: String,
        #[arg(long, default_value = "")]
        pppoe_password: String,
        /// PPPoE profile id
        #[arg(long)]
        profile: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // 환경변수 로드
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    // 로깅 초기화 (stdout 은 화면 출력용이므로 stderr 로)
    // RUST_LOG 가 없으면 ENVIRONMENT 에 따라 info / debug
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| config.default_log_filter().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!(api = %config.api_base_url, environment = ?config.environment, "Configuration loaded");

    let backend = Arc::new(ApiClient::from_config(&config).context("Failed to build HTTP client")?);
    let dialogs = Arc::new(TerminalDialogs::new(cli.yes));

    match cli.command {
        Commands::Routers => {
            let form = CustomerFormController::new(backend, dialogs, &config);
            form.initialize().await;
            println!("{}", render_dropdown(&form.view().router_select));
        }

        Commands::Profiles { router } => {
            let page = ProfilesPageController::new(backend, dialogs, &config);
            page.initialize().await;
            if let Some(router) = router {
                ensure_filter_option(&page, &router)?;
                page.on_filter_changed(&router).await;
            }
            println!("{}", render_table(&page.view().table));
        }

        Commands::PppoeProfiles { router } => {
            let form = CustomerFormController::new(backend, dialogs, &config);
            form.on_router_changed(&router).await;
            println!("{}", render_dropdown(&form.view().profile_select));
        }

        Commands::Sync { profile_id } => {
            let page = ProfilesPageController::new(backend, dialogs, &config);
            page.handle_row_action(&RowAction::Sync(profile_id)).await;
        }

        Commands::Delete { profile_id } => {
            let page = ProfilesPageController::new(backend, dialogs, &config);
            page.handle_row_action(&RowAction::Delete(profile_id)).await;
            if page.view().table != TableBody::Loading {
                println!("{}", render_table(&page.view().table));
            }
        }

        Commands::SyncAll { router_id } => {
            let page = ProfilesPageController::new(backend, dialogs, &config);
            page.load_router_filter_options().await;
            ensure_filter_option(&page, &router_id)?;
            page.on_filter_changed(&router_id).await;
            page.sync_all().await;
            println!("{}", render_table(&page.view().table));
        }

        Commands::CreateCustomer {
            router,
            name,
            username,
            service_type,
            phone,
            email,
            pppoe_username,
            pppoe_password,
            profile,
        } => {
            let form = CustomerFormController::new(backend, dialogs, &config);
            form.initialize().await;
            if !form
                .view()
                .router_select
                .options()
                .iter()
                .any(|o| !o.value.is_empty() && o.value == router)
            {
                bail!("Unknown router: {}", router);
            }

            form.on_router_changed(&router).await;
            if let Some(profile) = profile {
                if !form.select_profile(&profile) {
                    bail!("{} is not a PPPoE profile of router {}", profile, router);
                }
            }
            form.on_service_type_changed(service_type);

            let created = form
                .submit(CustomerDetails {
                    name,
                    username,
                    phone,
                    email,
                    pppoe_username,
                    pppoe_password,
                })
                .await;
            if !created {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// 필터에 없는 라우터면 전체 목록이 조회되므로 미리 막음
fn ensure_filter_option(page: &ProfilesPageController, router_id: &str) -> anyhow::Result<()> {
    let known = page
        .view()
        .router_filter
        .options()
        .iter()
        .any(|o| !o.value.is_empty() && o.value == router_id);
    if !known {
        bail!("Unknown router: {}", router_id);
    }
    Ok(())
}
