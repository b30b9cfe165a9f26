//! Login page view with a username/password form.

use dioxus::prelude::*;

use crate::Page;

/// Login form. `error_message` is shown above the form after a failed attempt.
#[component]
pub fn LoginPage(error_message: Option<String>) -> Element {
    rsx! {
        Page {
            title: "Log in",

            h1 { "Quiz Dashboard" }

            if let Some(ref message) = error_message {
                p {
                    class: "error",
                    "{message}"
                }
            }

            form {
                method: "post",
                action: "/login",
                p {
                    label { r#for: "username", "Username " }
                    input {
                        id: "username",
                        name: "username",
                        r#type: "text",
                    }
                }
                p {
                    label { r#for: "password", "Password " }
                    input {
                        id: "password",
                        name: "password",
                        r#type: "password",
                    }
                }
                button {
                    r#type: "submit",
                    "Log in"
                }
            }
        }
    }
}
