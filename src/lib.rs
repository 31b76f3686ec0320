pub mod changelog;
pub mod config;
pub mod context;
pub mod domain;
pub mod error;
pub mod gateway;
pub mod ui;
pub mod workflow;

pub use error::{ReleaseError, Result};
