pub mod changelog;
pub mod config;
pub mod error;
pub mod git;
pub mod resolver;
pub mod ui;
pub mod version;
pub mod wizard;

pub use error::{Result, VerbumpError};
