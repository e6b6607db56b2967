pub mod app;
pub mod auth;
pub mod cars;
pub mod config;
pub mod error;
pub mod ownership;
pub mod state;
