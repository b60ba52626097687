pub mod cli;
pub mod config;
pub mod docker;
pub mod purge;
pub mod runtime;
pub mod scheduler;
