use dioxus::prelude::*;

use score_core::model::Identity;

/// Identity selection. Picking a name is synchronous and does not touch the
/// store; the board keeps loading in the background either way.
#[component]
pub fn PickerView(on_select: EventHandler<Identity>) -> Element {
    rsx! {
        div { class: "picker",
            img { class: "logo", src: asset!("/assets/logo.svg") }
            h2 { class: "picker-title", "Who are you?" }
            div { class: "picker-buttons",
                for identity in Identity::ALL {
                    button {
                        class: "picker-button",
                        r#type: "button",
                        onclick: move |_| on_select.call(identity),
                        "{identity}"
                    }
                }
            }
        }
    }
}
