use dioxus::prelude::*;

/// General notification strip for transport failures. Validation errors
/// render inline in the form instead; this is for everything the user can
/// only retry.
#[component]
pub fn ErrorBanner(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "error-banner",
            span { "{message}" }
            button {
                class: "banner-dismiss",
                onclick: move |_| on_dismiss.call(()),
                "Dismiss"
            }
        }
    }
}
