//! Submission page component

use dioxus::prelude::*;

use crate::api::parse_code;
use crate::components::DocumentationView;
use crate::state::SubmissionState;

/// Home page - paste VBA code and view the parsed documentation
#[component]
pub fn Home() -> Element {
    let mut state = use_signal(SubmissionState::new);

    // Deliberately unguarded: clicking Parse again while a request is in
    // flight issues another submission, and whichever response arrives last
    // overwrites the result.
    let handle_parse = move |_| {
        let code = state.read().code.clone();
        spawn(async move {
            let outcome = parse_code(code).await;
            state.write().apply(outcome);
        });
    };

    let code = state.read().code.clone();
    let rendered = state.read().rendered();

    rsx! {
        div {
            class: "app",
            h1 { "VBA Code Parser" }
            textarea {
                value: "{code}",
                oninput: move |e| state.write().edit(e.value()),
                rows: "10",
                cols: "50",
                placeholder: "Paste your VBA code here..."
            }
            button {
                onclick: handle_parse,
                "Parse"
            }
            DocumentationView { rendered }
        }
    }
}
