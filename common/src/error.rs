//! エラー型定義

use thiserror::Error;

use crate::messages;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing input: no photo or description")]
    MissingInput,

    #[error("HTTP error: status {status}")]
    Http { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Request cancelled")]
    Cancelled,

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// 利用者に見せるメッセージ
    ///
    /// 入力不足以外は詳細を出さず、共通の文言に丸める。
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::MissingInput => messages::MISSING_INPUT,
            _ => messages::IDENTIFY_FAILED,
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
