// src/lib.rs

pub mod cache;
pub mod config;
pub mod error;
pub mod grading;
pub mod http;
pub mod models;
pub mod services;

pub use error::ApiError;
pub use grading::{GradeSession, GradingScreen};
pub use http::HttpService;
