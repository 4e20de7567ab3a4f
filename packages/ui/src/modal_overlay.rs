use dioxus::prelude::*;

/// Dimmed backdrop with a centered card for the form and confirm dialogs.
/// A click on the backdrop fires `on_close`; clicks inside the card stop
/// propagating so they never count as dismissal.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
