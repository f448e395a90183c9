#![deny(warnings)]
pub mod config;
pub mod logging;
pub mod render;
