pub mod user;

pub use crate::domain::model::{PhoneInfo, PhoneNumber, QueryParams, Watermark};
pub use crate::domain::ports::Transport;
pub use crate::utils::error::Result;
