use dioxus::prelude::*;

/// Yes/no confirmation card, meant to be rendered inside a
/// [`crate::ModalOverlay`]. The decision comes back through the two
/// callbacks; the dialog itself performs nothing.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "confirm-dialog",
            h2 { "{title}" }
            p { "{message}" }
            div {
                class: "form-actions",
                button {
                    class: "primary danger",
                    disabled: busy,
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
                button {
                    class: "secondary",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
