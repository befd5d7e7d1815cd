pub mod config;
pub mod graph;
pub mod pixel;
pub mod user;
pub mod webhook;
