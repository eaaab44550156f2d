use contracts::shared::code_tabs::{group_slots, CodeGroup, CodeTabsError, Theme};
use leptos::prelude::*;

use crate::shared::code_tabs::CodeTabs;

const DEMO_HEADINGS: [&str; 4] = ["Hello world", "Hello world", "Hello world", "Install"];
const DEMO_CODES: [&str; 4] = [
    "console.log(\"Hello, world!\");",
    "const greeting: string = \"Hello, world!\";\nconsole.log(greeting);",
    "print(\"Hello, world!\")",
    "npm install code-tabs",
];
const DEMO_LANGUAGES: &str = "JavaScript,TypeScript,Python,Shell";

pub fn demo_groups() -> Result<Vec<CodeGroup>, CodeTabsError> {
    group_slots(&DEMO_HEADINGS, &DEMO_CODES, DEMO_LANGUAGES)
}

/// Showcase page: the same block in every theme
#[component]
pub fn App() -> impl IntoView {
    let sections = Theme::all()
        .into_iter()
        .map(|theme| match demo_groups() {
            Ok(groups) => view! {
                <section class="code-tabs-demo__section">
                    <h2>{format!("{} theme", theme.as_str())}</h2>
                    <CodeTabs groups=groups theme=theme />
                </section>
            }
            .into_any(),
            Err(err) => view! {
                <p class="code-tabs-demo__error">{err.to_string()}</p>
            }
            .into_any(),
        })
        .collect_view();

    view! {
        <main class="code-tabs-demo">{sections}</main>
    }
}
