//! Server-rendered HTML.
//!
//! Pages are plain HTML forms and links that work without JavaScript; HTMX
//! attributes add the live search and the in-flight submit guard.
//!
//! # Structure
//!
//! - [`layout`]: document shell and navigation bar
//! - [`components`]: reusable ShadCN-style pieces
//! - [`pages`]: the list page, the add-school form and the 404 page

pub mod components;
pub mod layout;
pub mod pages;
