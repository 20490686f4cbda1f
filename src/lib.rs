pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::Cli;

pub use crate::adapters::http::HttpTransport;
pub use crate::core::user::UserApi;
pub use crate::domain::model::{PhoneInfo, PhoneNumber, QueryParams, Watermark};
pub use crate::domain::ports::Transport;
pub use crate::utils::error::{Result, WxApiError};
