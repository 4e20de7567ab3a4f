//! The user management page.
//!
//! Owns the page-level signals and mirrors the workflow's held state into
//! them after every completed operation. All business rules live in
//! `records::Workflow`; this view only decides what to show: validation
//! errors go inline into the form, transport failures into the banner.

use dioxus::prelude::*;

use api::{ApiConfig, HttpApi};
use records::{FieldErrors, UserFields, UserRecord, Workflow, WorkflowError};
use ui::{ConfirmDialog, ErrorBanner, ModalOverlay, UserForm, UserTable};

#[component]
pub fn Users() -> Element {
    let workflow = use_hook(|| Workflow::new(HttpApi::new(ApiConfig::from_env())));

    let mut users = use_signal(Vec::<UserRecord>::new);
    let mut editing = use_signal(|| Option::<UserRecord>::None);
    let mut show_dialog = use_signal(|| false);
    let mut field_errors = use_signal(FieldErrors::new);
    let mut banner = use_signal(|| Option::<String>::None);
    let mut confirm_delete = use_signal(|| Option::<u64>::None);
    // One outstanding call at a time; affordances are disabled while set.
    let mut busy = use_signal(|| false);

    // Initial fetch on mount
    let _loader = use_resource({
        let workflow = workflow.clone();
        move || {
            let workflow = workflow.clone();
            async move {
                match workflow.load_all().await {
                    Ok(list) => users.set(list),
                    Err(err) => {
                        tracing::error!("initial load failed: {err}");
                        banner.set(Some(err.to_string()));
                    }
                }
            }
        }
    });

    let open_create = {
        let workflow = workflow.clone();
        move |_| {
            workflow.clear_selection();
            editing.set(None);
            field_errors.set(FieldErrors::new());
            show_dialog.set(true);
        }
    };

    let open_edit = {
        let workflow = workflow.clone();
        move |user: UserRecord| {
            workflow.select(user.clone());
            editing.set(Some(user));
            field_errors.set(FieldErrors::new());
            show_dialog.set(true);
        }
    };

    let close_dialog = {
        let workflow = workflow.clone();
        move |_| {
            workflow.clear_selection();
            editing.set(None);
            field_errors.set(FieldErrors::new());
            show_dialog.set(false);
        }
    };

    let handle_submit = {
        let workflow = workflow.clone();
        move |submitted: UserFields| {
            if busy() {
                return;
            }
            let workflow = workflow.clone();
            spawn(async move {
                busy.set(true);
                banner.set(None);
                match workflow.save(&submitted).await {
                    Ok(_) => {
                        users.set(workflow.users());
                        editing.set(None);
                        field_errors.set(FieldErrors::new());
                        show_dialog.set(false);
                    }
                    Err(WorkflowError::ValidationFailed(errors)) => {
                        field_errors.set(errors);
                    }
                    Err(err) => {
                        tracing::error!("save failed: {err}");
                        banner.set(Some(err.to_string()));
                    }
                }
                busy.set(false);
            });
        }
    };

    let handle_confirm_delete = {
        let workflow = workflow.clone();
        move |_| {
            let Some(id) = confirm_delete() else { return };
            if busy() {
                return;
            }
            let workflow = workflow.clone();
            spawn(async move {
                busy.set(true);
                match workflow.remove(id).await {
                    Ok(()) => users.set(workflow.users()),
                    Err(err) => {
                        tracing::error!("delete failed: {err}");
                        banner.set(Some(err.to_string()));
                    }
                }
                confirm_delete.set(None);
                busy.set(false);
            });
        }
    };

    rsx! {
        div {
            class: "users-page",

            div {
                class: "users-header",
                h1 { "User Management" }
                button {
                    class: "primary",
                    disabled: busy(),
                    onclick: open_create,
                    "Add New User"
                }
            }

            if let Some(message) = banner() {
                ErrorBanner {
                    message: message,
                    on_dismiss: move |_| banner.set(None),
                }
            }

            UserTable {
                users: users(),
                busy: busy(),
                on_edit: open_edit,
                on_delete: move |id| confirm_delete.set(Some(id)),
            }

            if show_dialog() {
                ModalOverlay {
                    on_close: close_dialog.clone(),
                    div {
                        class: "dialog-content",
                        h2 {
                            if editing().is_some() { "Edit User" } else { "Add New User" }
                        }
                        UserForm {
                            initial: editing().map(|u| u.to_fields()).unwrap_or_default(),
                            editing: editing().is_some(),
                            errors: field_errors(),
                            busy: busy(),
                            on_submit: handle_submit,
                            on_cancel: close_dialog,
                        }
                    }
                }
            }

            if confirm_delete().is_some() {
                ModalOverlay {
                    on_close: move |_| confirm_delete.set(None),
                    ConfirmDialog {
                        title: "Delete User",
                        message: "Are you sure you want to delete this user?",
                        confirm_label: "Delete",
                        busy: busy(),
                        on_confirm: handle_confirm_delete,
                        on_cancel: move |_| confirm_delete.set(None),
                    }
                }
            }
        }
    }
}
