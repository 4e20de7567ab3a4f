//! # API crate — the HTTP client behind the admin screen
//!
//! Implements [`records::UserApi`] over reqwest against the remote REST
//! service. The wire contract is a plain JSON API rooted at a configurable
//! base URL:
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | list | GET | `/users` |
//! | get one | GET | `/users/{id}` |
//! | create | POST | `/users` |
//! | update | PUT | `/users/{id}` |
//! | delete | DELETE | `/users/{id}` |
//!
//! Non-2xx responses and network failures both come back as
//! [`records::TransportError`]; nothing in here retries.

mod config;
mod http;

pub use config::ApiConfig;
pub use http::HttpApi;
