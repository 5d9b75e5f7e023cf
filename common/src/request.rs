//! 識別リクエストの組み立て
//!
//! 画像と説明文のどちらか一方は必須。両方なければネットワークに出る前に失敗させる。

use crate::error::{Error, Result};

/// multipartのフィールド名
pub const IMAGE_FIELD: &str = "image";
pub const DESCRIPTION_FIELD: &str = "description";

/// 識別リクエスト
///
/// `I` は画像の表現（WASMでは `web_sys::File`、CLIではバイト列）。
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifyRequest<I> {
    pub image: Option<I>,
    pub description: Option<String>,
}

impl<I> IdentifyRequest<I> {
    /// 入力値からリクエストを作成
    ///
    /// 説明文は前後の空白を除去し、空なら無しとして扱う。
    pub fn from_input(description: &str, image: Option<I>) -> Result<Self> {
        let description = description.trim();
        let description = (!description.is_empty()).then(|| description.to_string());

        if image.is_none() && description.is_none() {
            return Err(Error::MissingInput);
        }

        Ok(Self { image, description })
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}
