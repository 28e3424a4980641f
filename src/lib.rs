// src/lib.rs

pub mod api;
pub mod app;
pub mod config;
pub mod errors;
pub mod input;
pub mod key_handlers;
pub mod logging;
pub mod message;
pub mod status_indicator;
pub mod ui;
pub mod widget;

pub use api::{ChatClient, ChatTransport};
pub use errors::{ChatError, ChatResult};
pub use message::{Message, Sender};
pub use widget::{ChatWidget, SubmitControl};
