//! Page Controllers
//!
//! 페이지 하나당 컨트롤러 하나. 각 컨트롤러는 주입받은 view 상태,
//! [`ConsoleBackend`](crate::services::ConsoleBackend),
//! [`Dialogs`](crate::ui::Dialogs) 만 사용한다.
//!
//! # Pages
//! - `customer_form`: 고객 추가 페이지 (라우터 → 프로필 연동 드롭다운, 제출)
//! - `profiles`: 프로필 목록 페이지 (필터, 테이블, sync / delete / sync-all)
//!
//! # Stale Responses
//!
//! ```text
//! filter=A ──request#1─────────────────────────▶ response A (discarded, #1 != #2)
//! filter=B ────────request#2──────▶ response B (applied)
//! ```
//!
//! 필터로 다시 그려지는 view 는 요청마다 [`RequestSequence`] 토큰을 받고,
//! 응답 도착 시점에 최신 토큰이 아니면 버린다.

pub mod customer_form;
pub mod profiles;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

pub use customer_form::{CustomerFormController, CustomerFormView};
pub use profiles::{ProfilesPageController, ProfilesView};

/// 요청 하나에 발급되는 토큰
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// 단조 증가 요청 번호
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// 새 토큰 발급. 이전 토큰은 모두 stale 이 됨
    pub fn next(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }
}

/// view 는 await 사이에 잠그지 않으므로 poison 된 상태도 그대로 사용
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_token_is_current() {
        let seq = RequestSequence::new();
        let first = seq.next();
        assert!(seq.is_current(first));

        let second = seq.next();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
