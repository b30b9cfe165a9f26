//! Dashboard listing every quiz.

use api::UserInfo;
use dioxus::prelude::*;
use store::Quiz;

use crate::Page;

#[component]
pub fn DashboardPage(quizzes: Vec<Quiz>, user: Option<UserInfo>) -> Element {
    rsx! {
        Page {
            title: "Dashboard",

            h1 { "Quizzes" }

            if let Some(ref u) = user {
                p {
                    class: "current-user",
                    "Logged in as {u.username}"
                }
            } else {
                p {
                    a { href: "/login", "Log in" }
                }
            }

            if quizzes.is_empty() {
                p { "No quizzes available." }
            } else {
                table {
                    thead {
                        tr {
                            th { "Id" }
                            th { "Subject" }
                        }
                    }
                    tbody {
                        for quiz in quizzes.iter() {
                            tr {
                                key: "{quiz.id}",
                                td { "{quiz.id}" }
                                td { "{quiz.subject}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
