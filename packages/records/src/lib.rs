//! # Records — framework-free core for the user admin screen
//!
//! This crate holds everything the UI does not: the domain models, the field
//! validation rules, the [`UserApi`] transport abstraction, and the
//! [`Workflow`] that orchestrates list/create/update/delete against it.
//! Nothing in here depends on Dioxus or on any particular HTTP stack, so the
//! whole crate is testable with an in-memory fake ([`MemoryApi`]).
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | [`UserRecord`], [`UserFields`], [`Mode`] |
//! | [`validate`] | Pure per-field validation returning a [`FieldErrors`] map |
//! | [`client`] | The [`UserApi`] async trait and [`TransportError`] |
//! | [`memory`] | [`MemoryApi`], an in-memory `UserApi` for tests |
//! | [`workflow`] | [`Workflow`]: held list + selection, refresh after every mutation |

pub mod client;
pub mod memory;
pub mod models;
pub mod validate;
pub mod workflow;

pub use client::{TransportError, UserApi};
pub use memory::MemoryApi;
pub use models::{Mode, UserFields, UserRecord};
pub use validate::{validate, Field, FieldErrors};
pub use workflow::{Workflow, WorkflowError};
