//! This crate contains all shared UI for the workspace.
//!
//! Everything here is presentation only: components take their data and
//! callbacks as props and carry no business logic of their own. Validation
//! and persistence live in the `records` crate.

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod error_banner;
pub use error_banner::ErrorBanner;

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod user_form;
pub use user_form::UserForm;

mod user_table;
pub use user_table::UserTable;
