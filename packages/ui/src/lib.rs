//! This crate contains the server-rendered pages for both applications.

use dioxus::prelude::*;

mod layout;
pub use layout::Page;

pub mod views;
pub use views::{DashboardPage, GuessGamePage, LoginPage};

/// Render `element` into a complete HTML document. Pages supply the `head` and
/// `body`; the root `html` element is added here.
pub fn render(element: Element) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus_ssr::render_element(element)
    )
}
