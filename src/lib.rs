pub mod application;
pub mod cli;
pub mod domain;
pub mod observability;

pub use cli::Session;
pub use domain::*;
