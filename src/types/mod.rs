//! Common Types Module
//!
//! 백엔드 REST API와 주고받는 wire 타입 정의
//!
//! 모든 응답은 `{status, data?, message?}` envelope 로 감싸져 있음

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 성공 응답의 status 값
pub const STATUS_SUCCESS: &str = "success";

/// API 응답 envelope
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub status: Option<String>,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(STATUS_SUCCESS)
    }
}

/// MikroTik 라우터 (읽기 전용)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Router {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub host: String,
}

/// 프로필 타입
///
/// 알 수 없는 값은 `Other` 로 그대로 보존
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum ProfileType {
    Pppoe,
    Hotspot,
    StaticIp,
    #[default]
    Unknown,
    Other(String),
}

impl ProfileType {
    pub fn as_str(&self) -> &str {
        match self {
            ProfileType::Pppoe => "pppoe",
            ProfileType::Hotspot => "hotspot",
            ProfileType::StaticIp => "static_ip",
            ProfileType::Unknown => "",
            ProfileType::Other(raw) => raw,
        }
    }

    pub fn is_pppoe(&self) -> bool {
        matches!(self, ProfileType::Pppoe)
    }
}

impl From<String> for ProfileType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pppoe" => ProfileType::Pppoe,
            "hotspot" => ProfileType::Hotspot,
            "static_ip" => ProfileType::StaticIp,
            "" => ProfileType::Unknown,
            _ => ProfileType::Other(raw),
        }
    }
}

impl From<Option<String>> for ProfileType {
    fn from(raw: Option<String>) -> Self {
        raw.map(ProfileType::from).unwrap_or_default()
    }
}

impl From<ProfileType> for String {
    fn from(value: ProfileType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ProfileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// PPPoE 전용 설정
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PppoeDetails {
    #[serde(default)]
    pub local_address: Option<String>,
    #[serde(default)]
    pub remote_address: Option<String>,
    #[serde(default)]
    pub address_pool: Option<String>,
}

/// 서비스 프로필
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    /// 백엔드 원본 필드명 `type` 도 허용
    #[serde(default, alias = "type")]
    pub profile_type: ProfileType,
    #[serde(default)]
    pub rate_limit_up: Option<String>,
    #[serde(default)]
    pub rate_limit_down: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "optional_id_string")]
    pub mikrotik_id: Option<String>,
    /// 백엔드 원본 필드명 `pppoe_details` 도 허용
    #[serde(default, alias = "pppoe_details")]
    pub pppoe: Option<PppoeDetails>,
}

/// 프로필 목록 조회 파라미터
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mikrotik_id: Option<String>,
    pub limit: u32,
}

impl ProfileQuery {
    /// 빈 router id 는 전체 조회로 취급
    pub fn new(mikrotik_id: Option<&str>, limit: u32) -> Self {
        Self {
            mikrotik_id: mikrotik_id
                .filter(|id| !id.is_empty())
                .map(str::to_string),
            limit,
        }
    }
}

/// 고객 서비스 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    #[default]
    Pppoe,
    Hotspot,
    StaticIp,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Pppoe => "pppoe",
            ServiceType::Hotspot => "hotspot",
            ServiceType::StaticIp => "static_ip",
        }
    }
}

impl FromStr for ServiceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pppoe" => Ok(ServiceType::Pppoe),
            "hotspot" => Ok(ServiceType::Hotspot),
            "static_ip" => Ok(ServiceType::StaticIp),
            other => Err(format!("unknown service type: {other}")),
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 고객 생성 폼의 텍스트 입력값
#[derive(Debug, Clone, Default)]
pub struct CustomerDetails {
    pub name: String,
    pub username: String,
    pub phone: String,
    pub email: String,
    pub pppoe_username: String,
    pub pppoe_password: String,
}

/// `POST /api/customers` payload
///
/// 선택 항목은 빈 문자열 대신 `null` 로 전송
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCustomer {
    pub mikrotik_id: String,
    pub name: String,
    pub username: String,
    pub service_type: ServiceType,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub pppoe_username: Option<String>,
    pub pppoe_password: Option<String>,
    pub pppoe_profile_id: Option<String>,
}

impl NewCustomer {
    pub fn from_form(
        mikrotik_id: &str,
        service_type: ServiceType,
        pppoe_profile_id: &str,
        details: CustomerDetails,
    ) -> Self {
        Self {
            mikrotik_id: mikrotik_id.to_string(),
            name: details.name,
            username: details.username,
            service_type,
            phone: blank_to_none(details.phone),
            email: blank_to_none(details.email),
            pppoe_username: blank_to_none(details.pppoe_username),
            pppoe_password: blank_to_none(details.pppoe_password),
            pppoe_profile_id: blank_to_none(pppoe_profile_id.to_string()),
        }
    }
}

/// 빈 문자열 → None
pub fn blank_to_none(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

// ============ Serde Helpers ============

/// 숫자 id 도 문자열로 받음
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

fn optional_id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}
