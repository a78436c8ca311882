//! Root application component

use dioxus::prelude::*;

use crate::routes::Route;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}
