//! Configuration and wire models shared by the dispatcher and the scorer

pub mod config;
pub mod models;
