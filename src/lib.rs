pub mod api;
pub mod cli;
pub mod config;
pub mod exporter;
pub mod health;
pub mod poll;
pub mod rate;
pub mod run;
pub mod scheduler;
pub mod shutdown;
