//! Demo terminal view.
//!
//! Shows the output history and a prompt. Submitted lines go to the demo
//! session; `clear` is handled here and never reaches it.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::terminal::{Input, Output};
use crate::models::OutputLine;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

#[component]
pub fn Terminal(output_ref: NodeRef<leptos::html::Div>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let prompt = Signal::derive(move || ctx.get_prompt());

    let on_submit = create_submit_callback(ctx);
    let on_history_nav = create_history_nav_callback(ctx);

    let history_signal = ctx.terminal.history;
    setup_autoscroll_effect(ctx, output_ref);

    let handle_click = move |_| {
        dom::focus_element("[data-terminal-input]");
    };

    view! {
        <div class=css::container on:click=handle_click>
            <div node_ref=output_ref class=css::output>
                <For
                    each={move || history_signal.get().into_iter().collect::<Vec<_>>()}
                    key={|line| line.id}
                    children={|line| view! { <Output line=line /> }}
                />
            </div>
            <div class=css::inputArea>
                <Input prompt=prompt on_submit=on_submit on_history_nav=on_history_nav />
            </div>
        </div>
    }
}

/// Keep the newest output line in view.
fn setup_autoscroll_effect(ctx: AppContext, output_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move || {
        ctx.terminal.history.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

fn create_submit_callback(ctx: AppContext) -> Callback<String> {
    Callback::new(move |input: String| {
        let line = input.trim();

        ctx.terminal
            .push_output(OutputLine::command(ctx.get_prompt(), &input));
        if line.is_empty() {
            return;
        }
        ctx.terminal.add_to_command_history(line);

        if line == "clear" {
            ctx.terminal.clear_history();
            return;
        }

        ctx.run_demo(line);
    })
}

fn create_history_nav_callback(ctx: AppContext) -> Callback<i32, Option<String>> {
    Callback::new(move |direction: i32| ctx.terminal.navigate_history(direction))
}
