// src/lib.rs

pub mod config;
pub mod decode;
pub mod output;

pub use config::{Args, Config, InputSource, OutputFormat};
