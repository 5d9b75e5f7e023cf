//! FloraScan Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod messages;
pub mod request;
pub mod api;
pub mod view;
pub mod gallery;
pub mod session;
pub mod config;

pub use types::{Alternative, IdentifyResponse, Plant, PlantSummary, Stats};
pub use error::{Error, Result};
pub use request::IdentifyRequest;
pub use api::{ApiRoutes, PlantApi, GALLERY_LIMIT};
pub use view::{AlternativeView, IdentifiedView, Notice, ResultView, MAX_ALTERNATIVES, confidence_percent};
pub use gallery::{GalleryState, PlantCard, detail_message};
pub use session::{Attempt, IdentifyOutcome, IdentifySession, RequestToken, identify, run_identify};
pub use config::ClientConfig;
