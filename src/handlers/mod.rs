//! HTTP request handlers
//!
//! This module organizes all handlers into logical groups:
//! - `api` - Health check endpoint
//! - `page` - The server-rendered form and its two actions
//! - `languages` - Language listing
//! - `speak` - Text-to-speech REST API
//! - `generation_info` - Provider diagnostics REST API

pub mod api;
pub mod generation_info;
pub mod languages;
pub mod page;
pub mod speak;
