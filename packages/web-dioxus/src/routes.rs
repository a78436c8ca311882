//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::Home;

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    Home {},
}
