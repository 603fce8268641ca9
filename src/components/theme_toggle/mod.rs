//! Header button cycling light → dark → system.

use leptos::prelude::*;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/theme_toggle/theme_toggle.module.css");

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let label = move || format!("Theme: {}", ctx.theme.get().label());

    view! {
        <button
            class=css::toggle
            title="Switch theme"
            on:click=move |_| ctx.cycle_theme()
        >
            {label}
        </button>
    }
}
