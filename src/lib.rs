//! Leaf Todo: a single-window to-do list with falling leaves and background music (Rust + egui)

pub mod app;
pub mod assets;
pub mod audio;
pub mod config;
pub mod error;
pub mod leaf;
pub mod logging;
pub mod panel;
pub mod progress;
pub mod row;
pub mod scene;
pub mod scheduler;
pub mod sprite;
pub mod toggle;
