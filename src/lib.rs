pub mod common;
pub mod config;
pub mod image_stream;
