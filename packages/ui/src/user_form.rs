use dioxus::prelude::*;

use records::{Field, FieldErrors, UserFields};

/// The create/edit form for a user record.
///
/// The password input is only shown when creating; editing leaves the stored
/// password untouched, matching the workflow's "empty password means leave
/// unchanged" rule. Validation errors arrive via the `errors` prop and render
/// inline under the offending input.
#[component]
pub fn UserForm(
    initial: UserFields,
    editing: bool,
    errors: FieldErrors,
    busy: bool,
    on_submit: EventHandler<UserFields>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut username = use_signal(|| initial.username.clone());
    let mut email = use_signal(|| initial.email.clone());
    let mut password = use_signal(|| initial.password.clone());

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(UserFields {
            username: username(),
            email: email(),
            password: password(),
        });
    };

    let field_error = move |field: Field| -> Option<String> { errors.get(&field).cloned() };

    rsx! {
        form {
            class: "user-form",
            onsubmit: handle_submit,

            div {
                class: "form-field",
                label { r#for: "user-form-username", "Username" }
                input {
                    id: "user-form-username",
                    r#type: "text",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
                if let Some(message) = field_error(Field::Username) {
                    span { class: "field-error", "{message}" }
                }
            }

            div {
                class: "form-field",
                label { r#for: "user-form-email", "Email" }
                input {
                    id: "user-form-email",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                if let Some(message) = field_error(Field::Email) {
                    span { class: "field-error", "{message}" }
                }
            }

            if !editing {
                div {
                    class: "form-field",
                    label { r#for: "user-form-password", "Password" }
                    input {
                        id: "user-form-password",
                        r#type: "password",
                        placeholder: "Password (min 6 characters)",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    if let Some(message) = field_error(Field::Password) {
                        span { class: "field-error", "{message}" }
                    }
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: busy,
                    if editing { "Update User" } else { "Create User" }
                }
                button {
                    class: "secondary",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
