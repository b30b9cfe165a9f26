//! Guessing game page.

use dioxus::prelude::*;

use crate::Page;

/// The game form plus feedback on the last guess.
#[component]
pub fn GuessGamePage(feedback: Option<String>, guesses: u32) -> Element {
    rsx! {
        Page {
            title: "Guessing Game",

            h1 { "Guessing Game" }
            p { "I am thinking of a number between 1 and 100." }

            form {
                method: "get",
                action: "/guessGame",
                label {
                    r#for: "guess",
                    "Your guess: "
                }
                input {
                    id: "guess",
                    name: "guess",
                    r#type: "text",
                    autofocus: true,
                }
                button {
                    r#type: "submit",
                    "Guess"
                }
            }

            if let Some(ref feedback) = feedback {
                p {
                    class: "feedback",
                    "{feedback}"
                }
            }

            p {
                class: "guesses",
                "Guesses so far: {guesses}"
            }
        }
    }
}
