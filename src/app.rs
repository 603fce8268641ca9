//! Root application module.
//!
//! Contains the main App component, AppContext definition, TerminalState,
//! and application-level setup logic following Leptos conventions.

use std::collections::VecDeque;

use leptos::prelude::*;

use crate::components::account::AccountPanel;
use crate::components::board::BoardPreview;
use crate::components::terminal::Terminal;
use crate::components::theme_toggle::ThemeToggle;
use crate::config::{APP_NAME, DEMO_PROMPT, DEMO_SCRIPT, MAX_COMMAND_HISTORY, MAX_TERMINAL_HISTORY};
use crate::core::demo::{CommandOutcome, DemoSession, DemoState};
use crate::core::storage::LocalStore;
use crate::core::theme::{BrowserColorScheme, ThemeStore};
use crate::models::{OutputLine, ThemePreference};

stylance::import_crate_style!(css, "src/app.module.css");

/// Theme store backed by `localStorage` and `matchMedia`.
pub type BrowserThemeStore = ThemeStore<LocalStore, BrowserColorScheme>;

// ============================================================================
// TerminalState
// ============================================================================

/// Demo terminal state managed with Leptos signals.
///
/// Output is capped at [`MAX_TERMINAL_HISTORY`] lines and command history at
/// [`MAX_COMMAND_HISTORY`] entries; the oldest entries go first.
#[derive(Clone, Copy)]
pub struct TerminalState {
    pub history: RwSignal<VecDeque<OutputLine>>,
    /// Submitted commands, oldest first.
    pub command_history: RwSignal<Vec<String>>,
    /// Position while browsing `command_history` with the arrow keys.
    pub history_index: RwSignal<Option<usize>>,
}

impl TerminalState {
    pub fn new() -> Self {
        Self {
            history: RwSignal::new(VecDeque::with_capacity(MAX_TERMINAL_HISTORY)),
            command_history: RwSignal::new(Vec::new()),
            history_index: RwSignal::new(None),
        }
    }

    pub fn push_output(&self, line: OutputLine) {
        self.push_lines(vec![line]);
    }

    pub fn push_lines(&self, lines: Vec<OutputLine>) {
        self.history.update(|h| {
            for line in lines {
                push_capped(h, line, MAX_TERMINAL_HISTORY);
            }
        });
    }

    pub fn clear_history(&self) {
        self.history.update(|h| h.clear());
    }

    pub fn add_to_command_history(&self, cmd: &str) {
        if !cmd.trim().is_empty() {
            self.command_history.update(|h| {
                if h.last().map(|s| s.as_str()) != Some(cmd) {
                    h.push(cmd.to_string());
                    if h.len() > MAX_COMMAND_HISTORY {
                        h.remove(0);
                    }
                }
            });
        }
        self.history_index.set(None);
    }

    /// Step through command history. Negative `direction` goes back in time.
    pub fn navigate_history(&self, direction: i32) -> Option<String> {
        let history = self.command_history.get();
        let new_index = step_history(history.len(), self.history_index.get(), direction);
        self.history_index.set(new_index);
        new_index.map(|i| history[i].clone())
    }
}

impl Default for TerminalState {
    fn default() -> Self {
        Self::new()
    }
}

fn push_capped<T>(buffer: &mut VecDeque<T>, item: T, capacity: usize) {
    if buffer.len() == capacity {
        buffer.pop_front();
    }
    buffer.push_back(item);
}

/// Next history index. `None` means the fresh, empty input line.
fn step_history(len: usize, current: Option<usize>, direction: i32) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        None if direction < 0 => Some(len - 1),
        Some(i) if direction < 0 && i > 0 => Some(i - 1),
        Some(i) if direction > 0 && i < len - 1 => Some(i + 1),
        Some(_) if direction > 0 => None,
        _ => current,
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from children
/// with `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub terminal: TerminalState,

    /// Demo command interpreter. Only touched through [`AppContext::run_demo`].
    pub demo: StoredValue<DemoSession>,

    /// Latest board snapshot produced by the demo session.
    pub board: RwSignal<DemoState>,

    /// Current theme preference, mirrored from `theme_store` for the UI.
    pub theme: RwSignal<ThemePreference>,

    pub theme_store: StoredValue<BrowserThemeStore, LocalStorage>,
}

impl AppContext {
    pub fn new() -> Self {
        let session = DemoSession::new();
        let theme_store = ThemeStore::new(LocalStore, BrowserColorScheme);
        Self {
            terminal: TerminalState::new(),
            board: RwSignal::new(session.snapshot()),
            demo: StoredValue::new(session),
            theme: RwSignal::new(theme_store.preference()),
            theme_store: StoredValue::new_local(theme_store),
        }
    }

    pub fn get_prompt(&self) -> String {
        DEMO_PROMPT.to_string()
    }

    /// Run one line through the demo session and print the result.
    pub fn run_demo(&self, line: &str) -> Option<CommandOutcome> {
        let outcome = self.demo.try_update_value(|session| session.execute(line))?;
        self.terminal.push_lines(outcome.to_lines());
        if let Some(state) = &outcome.state {
            self.board.set(state.clone());
        }
        Some(outcome)
    }

    /// Apply the persisted theme.
    pub fn init_theme(&self) {
        if let Some(preference) = self.theme_store.try_with_value(|store| store.init()) {
            self.theme.set(preference);
        }
    }

    /// Advance to the next theme preference.
    pub fn cycle_theme(&self) {
        if let Some(preference) = self.theme_store.try_with_value(|store| store.cycle()) {
            self.theme.set(preference);
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Replay the landing-page script as if typed at the prompt.
fn replay_demo_script(ctx: &AppContext) {
    ctx.terminal.push_lines(vec![
        OutputLine::info(
            "Interactive demo. Type 'kanban help' for commands, 'reset' to start over.",
        ),
        OutputLine::empty(),
    ]);
    for line in DEMO_SCRIPT {
        ctx.terminal
            .push_output(OutputLine::command(ctx.get_prompt(), *line));
        ctx.run_demo(line);
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    ctx.init_theme();
    replay_demo_script(&ctx);

    let output_ref = NodeRef::<leptos::html::Div>::new();

    view! {
        <div class=css::app>
            <header class=css::header>
                <span class=css::title>{APP_NAME}</span>
                <ThemeToggle />
            </header>
            <main class=css::main>
                <section class=css::demo>
                    <Terminal output_ref=output_ref />
                    <BoardPreview />
                </section>
                <aside class=css::sidebar>
                    <AccountPanel />
                </aside>
            </main>
        </div>
    }
}
