pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod identifier;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod validation;
