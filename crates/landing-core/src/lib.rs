pub mod calendar;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod cookies;
pub mod error;
pub mod gateway;
pub mod gesture;
pub mod phone;
pub mod slides;
pub mod submit;
pub mod utm;
pub mod validate;

pub use calendar::*;
pub use carousel::*;
pub use config::*;
pub use constants::*;
pub use error::{CoreError, SubmitError};
pub use gateway::*;
pub use gesture::*;
pub use slides::*;
pub use submit::*;
pub use validate::*;
