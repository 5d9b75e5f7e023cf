//! UIコンポーネント

pub mod header;
pub mod upload_area;
pub mod ask_bar;
pub mod result_card;
pub mod plant_gallery;
