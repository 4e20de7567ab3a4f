use dioxus::prelude::*;

use records::UserRecord;

/// The list view: one row per record with edit and delete actions.
#[component]
pub fn UserTable(
    users: Vec<UserRecord>,
    busy: bool,
    on_edit: EventHandler<UserRecord>,
    on_delete: EventHandler<u64>,
) -> Element {
    rsx! {
        table {
            class: "user-table",
            thead {
                tr {
                    th { "ID" }
                    th { "Username" }
                    th { "Email" }
                    th { "Actions" }
                }
            }
            tbody {
                if users.is_empty() {
                    tr {
                        td {
                            class: "empty-state",
                            colspan: 4,
                            "No users yet."
                        }
                    }
                }
                for user in users {
                    tr {
                        key: "{user.id}",
                        td { "{user.id}" }
                        td { "{user.username}" }
                        td { "{user.email}" }
                        td {
                            button {
                                class: "row-action",
                                disabled: busy,
                                onclick: {
                                    let user = user.clone();
                                    move |_| on_edit.call(user.clone())
                                },
                                "Edit"
                            }
                            button {
                                class: "row-action danger",
                                disabled: busy,
                                onclick: {
                                    let id = user.id;
                                    move |_| on_delete.call(id)
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}
