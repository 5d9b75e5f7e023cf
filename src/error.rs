use thiserror::Error;

#[derive(Error, Debug)]
pub enum FloraScanError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    /// 識別リクエストの失敗（Web版と同じ文言で伝える）
    #[error("識別に失敗しました: {0}")]
    Identify(#[source] florascan_common::Error),

    #[error(transparent)]
    Common(#[from] florascan_common::Error),
}

impl FloraScanError {
    /// 利用者に見せるメッセージ
    ///
    /// 識別の失敗はWeb版と同じ文言に丸める（詳細はログに出す）。
    /// それ以外のAPIエラーはそのまま表示する。
    pub fn user_message(&self) -> String {
        match self {
            FloraScanError::Identify(e) => e.user_message().to_string(),
            FloraScanError::Common(florascan_common::Error::MissingInput) => {
                florascan_common::messages::MISSING_INPUT.to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FloraScanError>;
