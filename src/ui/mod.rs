//! View State Module
//!
//! In-memory stand-ins for the page elements the controllers drive:
//! select dropdowns, the profiles table body and its row actions, plus the
//! [`Dialogs`] collaborator for blocking alerts, confirmations and
//! navigation.
//!
//! # Design Decision
//!
//! 컨트롤러는 위젯을 직접 소유하고, 화면 출력은 `terminal` 이 담당
//! - 렌더링은 항상 전체 교체 (incremental patch 없음)
//! - 행 액션은 렌더링 시점에 프로필 id 에 바인딩된 값

pub mod format;
pub mod terminal;

use crate::types::Profile;

/// `<option>` 한 개
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// value 가 빈 문자열인 안내용 옵션
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self::new("", label)
    }
}

/// `<select>` 상태
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dropdown {
    options: Vec<SelectOption>,
    value: String,
}

impl Dropdown {
    pub fn with_placeholder(label: &str) -> Self {
        Self {
            options: vec![SelectOption::placeholder(label)],
            value: String::new(),
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// 현재 선택된 value (선택 없으면 빈 문자열)
    pub fn value(&self) -> &str {
        &self.value
    }

    /// placeholder + 새 옵션으로 전체 교체. 선택은 첫 옵션으로 돌아감
    pub fn replace_options(
        &mut self,
        placeholder: &str,
        options: impl IntoIterator<Item = SelectOption>,
    ) {
        self.options = std::iter::once(SelectOption::placeholder(placeholder))
            .chain(options)
            .collect();
        self.value = String::new();
    }

    /// 기존 옵션 뒤에 추가 (선택 유지)
    pub fn append(&mut self, options: impl IntoIterator<Item = SelectOption>) {
        self.options.extend(options);
    }

    /// 옵션에 없는 value 는 선택 해제로 처리하고 false 반환
    pub fn select(&mut self, value: &str) -> bool {
        if self.options.iter().any(|o| o.value == value) {
            self.value = value.to_string();
            true
        } else {
            self.value.clear();
            false
        }
    }
}

/// 프로필 행에 바인딩된 액션
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Sync(String),
    Delete(String),
}

impl RowAction {
    pub fn title(&self) -> &'static str {
        match self {
            RowAction::Sync(_) => "Sync to MikroTik",
            RowAction::Delete(_) => "Delete",
        }
    }

    pub fn profile_id(&self) -> &str {
        match self {
            RowAction::Sync(id) | RowAction::Delete(id) => id,
        }
    }
}

/// 프로필 테이블 한 행 (표시용 문자열로 변환 완료)
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRow {
    pub name: String,
    /// 이름 아래 보조 줄
    pub router_id: String,
    pub type_badge: String,
    pub rate_limit: String,
    pub remote_address: String,
    pub price: String,
    pub actions: [RowAction; 2],
}

impl ProfileRow {
    pub fn render(profile: &Profile, price_separator: char) -> Self {
        Self {
            name: profile.name.clone(),
            router_id: profile.mikrotik_id.clone().unwrap_or_default(),
            type_badge: format::type_badge(&profile.profile_type),
            rate_limit: format::rate_limit_pair(
                profile.rate_limit_up.as_deref(),
                profile.rate_limit_down.as_deref(),
            ),
            remote_address: format::remote_address(profile),
            price: format::price(profile.price, price_separator),
            actions: [
                RowAction::Sync(profile.id.clone()),
                RowAction::Delete(profile.id.clone()),
            ],
        }
    }
}

/// 프로필 테이블 body 상태
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Loading,
    Rows(Vec<ProfileRow>),
    Empty,
    Error(String),
}

impl TableBody {
    pub const LOADING_TEXT: &'static str = "Loading...";
    pub const EMPTY_TEXT: &'static str = "No profiles found.";

    pub fn rows(&self) -> &[ProfileRow] {
        match self {
            TableBody::Rows(rows) => rows,
            _ => &[],
        }
    }
}

/// 사용자 확인이 필요한 blocking 알림 / 페이지 이동
pub trait Dialogs: Send + Sync {
    fn alert(&self, message: &str);

    /// 사용자가 승인하면 true
    fn confirm(&self, message: &str) -> bool;

    fn navigate(&self, path: &str);
}
