pub mod config;
pub mod convert;
pub mod error;
pub mod kind;
pub mod logging;
pub mod merge;
pub mod naming;
pub mod sanitize;
pub mod session;
pub mod workflow;

mod process;

pub use error::{DocError, Result};
