// src/lib.rs
pub mod config;
pub mod error;
pub mod message;
pub mod notice;
pub mod routes;
