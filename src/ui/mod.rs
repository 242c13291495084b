// UI module
// egui-based interface

pub mod app;
pub mod components;
pub mod dialogs;
pub mod theme;

pub use app::HappyHourApp;
