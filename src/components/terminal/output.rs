use leptos::prelude::*;

use crate::models::{OutputLine, OutputLineData};

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

#[component]
pub fn Output(line: OutputLine) -> impl IntoView {
    match line.data {
        OutputLineData::Command { prompt, input } => view! {
            <div class=css::command>
                <span class=css::textGreen>{prompt}</span>
                <span class=css::textDim>"$ "</span>
                <span class=css::textFg>{input}</span>
            </div>
        }
        .into_any(),
        OutputLineData::Text(text) => view! {
            <div class=format!("{} {}", css::line, css::textFg)>{text}</div>
        }
        .into_any(),
        OutputLineData::Error(text) => view! {
            <div class=format!("{} {}", css::line, css::textRed)>{text}</div>
        }
        .into_any(),
        OutputLineData::Success(text) => view! {
            <div class=format!("{} {}", css::line, css::textGreen)>{text}</div>
        }
        .into_any(),
        OutputLineData::Info(text) => view! {
            <div class=format!("{} {}", css::line, css::textYellow)>{text}</div>
        }
        .into_any(),
        OutputLineData::Empty => view! { <div class=css::lineEmpty></div> }.into_any(),
    }
}
