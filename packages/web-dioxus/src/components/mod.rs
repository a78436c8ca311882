//! Reusable UI components

mod doc_view;

pub use doc_view::*;
