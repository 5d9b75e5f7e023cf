//! FloraScan CLI
//!
//! Web版と同じバックエンドAPIを端末から使うためのクライアント

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod image_file;
pub mod logger;
pub mod render;
