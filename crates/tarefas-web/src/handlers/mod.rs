//! Request handlers
//!
//! - `pages`: GET routes rendering HTML
//! - `actions`: form posts, always answered with a redirect
//! - `api`: JSON endpoints

pub mod actions;
pub mod api;
pub mod pages;
