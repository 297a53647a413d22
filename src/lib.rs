pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod prelude;
pub mod store;
