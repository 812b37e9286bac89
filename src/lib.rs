pub mod app;
pub mod backend;
pub mod constants;
pub mod conversation;
pub mod events;
pub mod ui;
