use dioxus::prelude::*;

/// Document shell shared by every page.
#[component]
pub fn Page(title: String, children: Element) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            title { "{title}" }
            style {
                r#"
                body {{
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
                    color: #37352f;
                    max-width: 40rem;
                    margin: 3rem auto;
                    padding: 0 1rem;
                }}

                .feedback {{
                    font-weight: 600;
                }}

                .error {{
                    color: #e03e3e;
                }}

                table {{
                    border-collapse: collapse;
                    width: 100%;
                }}

                th, td {{
                    text-align: left;
                    padding: 0.375rem 0.5rem;
                    border-bottom: 1px solid #e9e9e7;
                }}
                "#
            }
        }
        body {
            {children}
        }
    }
}
