//! Sign-in form and the signed-in user's board list.
//!
//! Talks to the live backend through [`ApiClient::browser`]. Failures are
//! shown inline and logged to the console.

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::core::api::ApiClient;
use crate::models::BoardSummary;
use crate::utils::log;

stylance::import_crate_style!(css, "src/components/account/account.module.css");

#[derive(Clone, Copy)]
struct AccountState {
    logged_in: RwSignal<bool>,
    boards: RwSignal<Vec<BoardSummary>>,
    error: RwSignal<Option<String>>,
    busy: RwSignal<bool>,
}

impl AccountState {
    fn new() -> Self {
        Self {
            logged_in: RwSignal::new(ApiClient::browser().auth().is_logged_in()),
            boards: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            busy: RwSignal::new(false),
        }
    }

    fn fail(&self, context: &str, message: String) {
        log::error(&format!("{}: {}", context, message));
        self.error.set(Some(message));
        self.busy.set(false);
    }
}

fn load_boards(state: AccountState) {
    state.busy.set(true);
    spawn_local(async move {
        match ApiClient::browser().boards().list().await {
            Ok(boards) => {
                state.boards.set(boards);
                state.error.set(None);
                state.busy.set(false);
            }
            Err(e) if e.status() == Some(401) => {
                logout(state);
                state.fail(
                    "loading boards failed",
                    "Session expired, please sign in again".to_string(),
                );
            }
            Err(e) => state.fail("loading boards failed", e.to_string()),
        }
    });
}

fn login(state: AccountState, username: String, password: String) {
    state.busy.set(true);
    spawn_local(async move {
        match ApiClient::browser().auth().login(&username, &password).await {
            Ok(_) => {
                state.logged_in.set(true);
                state.error.set(None);
                load_boards(state);
            }
            Err(e) => state.fail("login failed", e.to_string()),
        }
    });
}

fn logout(state: AccountState) {
    ApiClient::browser().auth().logout();
    state.logged_in.set(false);
    state.boards.set(Vec::new());
    state.error.set(None);
}

fn input_value(ev: &ev::Event) -> Option<String> {
    ev.target()
        .map(|t| t.unchecked_into::<web_sys::HtmlInputElement>().value())
}

#[component]
pub fn AccountPanel() -> impl IntoView {
    let state = AccountState::new();
    if state.logged_in.get_untracked() {
        load_boards(state);
    }

    view! {
        <div class=css::panel>
            <Show
                when=move || state.logged_in.get()
                fallback=move || view! { <LoginForm state=state /> }
            >
                <BoardList state=state />
            </Show>
            {move || state.error.get().map(|message| view! {
                <p class=css::error>{message}</p>
            })}
        </div>
    }
}

#[component]
fn LoginForm(state: AccountState) -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let user = username.get();
        if user.trim().is_empty() || state.busy.get() {
            return;
        }
        login(state, user, password.get());
        set_password.set(String::new());
    };

    view! {
        <form class=css::form on:submit=on_submit>
            <h3 class=css::heading>"Sign in"</h3>
            <input
                class=css::field
                type="text"
                placeholder="username"
                autocomplete="username"
                prop:value=username
                on:input=move |ev| {
                    if let Some(v) = input_value(&ev) {
                        set_username.set(v);
                    }
                }
            />
            <input
                class=css::field
                type="password"
                placeholder="password"
                autocomplete="current-password"
                prop:value=password
                on:input=move |ev| {
                    if let Some(v) = input_value(&ev) {
                        set_password.set(v);
                    }
                }
            />
            <button class=css::button type="submit" disabled=move || state.busy.get()>
                {move || if state.busy.get() { "Signing in..." } else { "Sign in" }}
            </button>
        </form>
    }
}

#[component]
fn BoardList(state: AccountState) -> impl IntoView {
    view! {
        <div>
            <div class=css::listHeader>
                <h3 class=css::heading>"Your boards"</h3>
                <button class=css::button on:click=move |_| logout(state)>"Sign out"</button>
            </div>
            <Show
                when=move || !state.boards.with(|b| b.is_empty())
                fallback=move || view! {
                    <p class=css::muted>
                        {move || if state.busy.get() { "Loading..." } else { "No boards yet." }}
                    </p>
                }
            >
                <ul class=css::boards>
                    <For
                        each=move || state.boards.get()
                        key=|board| board.id
                        children=|board| view! {
                            <li class=css::boardItem>
                                <span class=css::muted>{format!("{:>4}", board.id)}</span>
                                <span>{board.name}</span>
                            </li>
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
