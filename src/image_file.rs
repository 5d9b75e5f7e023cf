//! 識別に送る画像ファイル

use crate::error::{FloraScanError, Result};
use std::path::Path;

/// multipartで送る画像
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    /// ファイルを読み込む（形式・サイズのチェックはしない）
    pub fn read(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(FloraScanError::FileNotFound(path.display().to_string()));
        }

        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());

        Ok(Self {
            file_name,
            mime_type: mime_type_for(path),
            bytes,
        })
    }
}

/// 拡張子からMIMEタイプを推定
pub fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("heic") => "image/heic",
        _ => "application/octet-stream",
    }
}
