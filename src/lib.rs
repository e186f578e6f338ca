//! activation-portal - web front end for account activation
//!
//! Serves two pages:
//! - `/`: the application entry page
//! - `/activate`: reads an activation token from the query string and
//!   confirms it against the backend API (`POST {base_url}/auth/activate`)

pub mod activation;
pub mod api;
pub mod config;
pub mod error;
pub mod pages;

pub use error::{Error, Result};
