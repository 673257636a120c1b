pub mod app_runner;
pub mod input;
pub mod widgets;
