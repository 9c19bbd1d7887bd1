pub mod app;
pub mod theme;
pub mod views;
