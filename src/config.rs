//! Configuration Module
//!
//! # Interview Q&A
//!
//! Q: 환경변수 vs 설정 파일, 어떤 방식을 선택했고 왜인가?
//! A: 환경변수를 선택
//!    - 콘솔이 붙을 백엔드 주소만 바뀌면 되므로 설정 항목이 적음
//!    - `.env` 파일(dotenvy)로 로컬 개발 환경도 간단히 구성
//!
//! Q: 설정 검증은 어떻게 하는가?
//! A: from_env()에서 숫자 값 파싱 → 실패하거나 0 이면 즉시 에러 (fail-fast)
//!    - 잘못된 PROFILE_PAGE_SIZE로 요청을 보내는 것보다 시작 실패가 낫다
//!    - 타임아웃 0 은 모든 요청을 transport 에러로 만든다

use std::env;
use std::time::Duration;

use anyhow::{bail, Context, Result};

/// 콘솔 설정
#[derive(Debug, Clone)]
pub struct Config {
    /// 백엔드 REST API base URL (끝의 `/` 제거됨)
    pub api_base_url: String,

    /// 프로필 목록 조회 시 page size (기본값: 100)
    pub profile_page_size: u32,

    /// 요청 타임아웃 (없으면 무제한)
    pub request_timeout: Option<Duration>,

    /// 고객 생성 후 이동할 목록 페이지 경로
    pub customer_list_path: String,

    /// 가격 표시용 천 단위 구분자
    pub price_group_separator: char,

    /// 환경 (development, staging, production)
    pub environment: Environment,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            profile_page_size: 100,
            request_timeout: None,
            customer_list_path: "/".to_string(),
            price_group_separator: ',',
            environment: Environment::Development,
        }
    }
}

impl Config {
    /// 환경변수에서 설정 로드
    ///
    /// # Optional Environment Variables
    ///
    /// - `API_BASE_URL`: 백엔드 주소 (기본값: http://localhost:8080)
    /// - `PROFILE_PAGE_SIZE`: 프로필 목록 limit (기본값: 100, 0 불가)
    /// - `REQUEST_TIMEOUT_SECS`: 요청 타임아웃 (초, 0 불가)
    /// - `CUSTOMER_LIST_PATH`: 고객 목록 경로 (기본값: /)
    /// - `PRICE_GROUP_SEPARATOR`: 가격 구분자 한 글자 (기본값: ,)
    /// - `ENVIRONMENT`: development | staging | production (기본 로그 레벨 결정)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// key → value lookup 으로 설정 로드
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let environment = match lookup("ENVIRONMENT")
            .unwrap_or_else(|| "development".to_string())
            .to_lowercase()
            .as_str()
        {
            "production" => Environment::Production,
            "staging" => Environment::Staging,
            _ => Environment::Development,
        };

        let api_base_url = lookup("API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);

        let profile_page_size = match lookup("PROFILE_PAGE_SIZE") {
            Some(raw) => parse_positive("PROFILE_PAGE_SIZE", &raw)?,
            None => defaults.profile_page_size,
        };

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(parse_positive("REQUEST_TIMEOUT_SECS", &raw)?)),
            None => None,
        };

        let price_group_separator = match lookup("PRICE_GROUP_SEPARATOR") {
            Some(raw) => parse_separator(&raw)?,
            None => defaults.price_group_separator,
        };

        Ok(Config {
            api_base_url,
            profile_page_size,
            request_timeout,
            customer_list_path: lookup("CUSTOMER_LIST_PATH").unwrap_or(defaults.customer_list_path),
            price_group_separator,
            environment,
        })
    }

    /// 프로덕션 환경인지 확인
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// `RUST_LOG` 가 없을 때 사용할 로그 필터
    ///
    /// 프로덕션은 info, 그 외에는 요청 URL 까지 보이도록 debug
    pub fn default_log_filter(&self) -> &'static str {
        if self.is_production() {
            "mikrotik_console=info"
        } else {
            "mikrotik_console=debug"
        }
    }
}

fn parse_positive<T>(key: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr + Default + PartialEq,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value: T = raw
        .parse()
        .with_context(|| format!("{} must be a valid number", key))?;
    if value == T::default() {
        bail!("{} must be greater than zero", key);
    }
    Ok(value)
}

fn parse_separator(raw: &str) -> Result<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => bail!("PRICE_GROUP_SEPARATOR must be a single character"),
    }
}
