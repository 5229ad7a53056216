//! Error Handling Module
//!
//! One error type for every backend call. The three failure classes a
//! console request can hit are kept apart so each page can word its own
//! dialog or inline row.

use thiserror::Error;

/// 백엔드 호출 에러 타입
///
/// # Design Decision
///
/// - InvalidBaseUrl: 클라이언트 생성 시점의 설정 오류
/// - Transport: 요청 자체 실패 (연결, 타임아웃, 응답 디코딩)
/// - Http: non-2xx 응답
/// - Application: 2xx 이지만 `status != "success"`
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend returned HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Http {
        status: u16,
        message: Option<String>,
    },

    #[error("Backend reported status {status:?}: {}", .message.as_deref().unwrap_or("no message"))]
    Application {
        status: String,
        message: Option<String>,
    },
}

impl ConsoleError {
    /// 서버가 보낸 에러 메시지 (있을 때만)
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ConsoleError::InvalidBaseUrl { .. } | ConsoleError::Transport(_) => None,
            ConsoleError::Http { message, .. } | ConsoleError::Application { message, .. } => {
                message.as_deref().filter(|m| !m.is_empty())
            }
        }
    }

    /// 서버 메시지 또는 기본 문구
    pub fn message_or_unknown(&self) -> &str {
        self.server_message().unwrap_or(UNKNOWN_ERROR)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ConsoleError::Transport(_))
    }
}

/// 서버 메시지가 없을 때 사용자에게 보여줄 문구
pub const UNKNOWN_ERROR: &str = "Unknown error";
