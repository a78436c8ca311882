//! Documentation result display

use dioxus::prelude::*;

/// Pretty-printed documentation block, or nothing when no result has
/// arrived yet.
///
/// A failed submission leaves the previous rendering in place; there is no
/// error state to show.
#[component]
pub fn DocumentationView(rendered: Option<String>) -> Element {
    rsx! {
        if let Some(doc) = rendered {
            pre { "{doc}" }
        }
    }
}
