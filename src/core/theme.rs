//! Theme preference store.
//!
//! Holds the light / dark / system preference, persists it under
//! [`THEME_KEY`] and applies the resolved theme by toggling [`DARK_CLASS`]
//! on `<html>`. While the preference is `System` the store keeps a
//! [`Subscription`] to OS color-scheme changes; any other preference drops
//! it.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

use crate::config::{COLOR_SCHEME_QUERY, DARK_CLASS, THEME_KEY};
use crate::core::storage::KeyValueStore;
use crate::models::{ResolvedTheme, ThemePreference};
use crate::utils::{dom, log};

// =============================================================================
// Subscription
// =============================================================================

/// Registered listener. Dropping it unregisters the listener.
#[must_use = "dropping a Subscription unregisters it immediately"]
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

// =============================================================================
// Color scheme host
// =============================================================================

/// Where the OS preference is read from and the resolved theme is applied.
pub trait ColorSchemeHost {
    /// Whether the OS currently prefers a dark color scheme.
    fn prefers_dark(&self) -> bool;

    /// Apply the theme to the document.
    fn apply(&self, theme: ResolvedTheme);

    /// Call `on_change` whenever the OS preference changes. `None` if the
    /// platform offers no notifications.
    fn watch(&self, on_change: Rc<dyn Fn()>) -> Option<Subscription>;
}

/// `matchMedia` and the `<html>` class list.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserColorScheme;

impl ColorSchemeHost for BrowserColorScheme {
    fn prefers_dark(&self) -> bool {
        dom::match_media(COLOR_SCHEME_QUERY).is_some_and(|query| query.matches())
    }

    fn apply(&self, theme: ResolvedTheme) {
        dom::toggle_root_class(DARK_CLASS, theme.is_dark());
    }

    fn watch(&self, on_change: Rc<dyn Fn()>) -> Option<Subscription> {
        let query = dom::match_media(COLOR_SCHEME_QUERY)?;

        let closure = Closure::wrap(Box::new(move || on_change()) as Box<dyn Fn()>);
        if query
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn("could not listen for color scheme changes");
            return None;
        }

        Some(Subscription::new(move || {
            let _ = query
                .remove_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        }))
    }
}

// =============================================================================
// Store
// =============================================================================

/// Theme preference state shared between the UI and the OS listener.
///
/// Cloning is cheap; clones share state.
pub struct ThemeStore<S, H> {
    inner: Rc<Inner<S, H>>,
}

struct Inner<S, H> {
    store: S,
    host: H,
    preference: Cell<ThemePreference>,
    subscription: RefCell<Option<Subscription>>,
}

impl<S, H> Clone for ThemeStore<S, H> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: KeyValueStore, H: ColorSchemeHost> Inner<S, H> {
    fn persisted(&self) -> ThemePreference {
        self.store
            .get(THEME_KEY)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    fn apply(&self, preference: ThemePreference) {
        self.host
            .apply(preference.resolve(self.host.prefers_dark()));
    }
}

impl<S, H> ThemeStore<S, H>
where
    S: KeyValueStore + 'static,
    H: ColorSchemeHost + 'static,
{
    /// Load the persisted preference. Nothing is applied until [`init`](Self::init).
    pub fn new(store: S, host: H) -> Self {
        let inner = Inner {
            store,
            host,
            preference: Cell::new(ThemePreference::System),
            subscription: RefCell::new(None),
        };
        inner.preference.set(inner.persisted());
        Self {
            inner: Rc::new(inner),
        }
    }

    pub fn preference(&self) -> ThemePreference {
        self.inner.preference.get()
    }

    /// Theme the current preference resolves to right now.
    pub fn resolved(&self) -> ResolvedTheme {
        self.preference().resolve(self.inner.host.prefers_dark())
    }

    /// Re-read the persisted preference and apply it.
    pub fn init(&self) -> ThemePreference {
        let preference = self.inner.persisted();
        self.inner.preference.set(preference);
        self.inner.apply(preference);
        self.sync_subscription();
        preference
    }

    /// Persist and apply `preference`.
    pub fn set(&self, preference: ThemePreference) {
        self.inner.preference.set(preference);
        if let Err(e) = self.inner.store.set(THEME_KEY, preference.as_str()) {
            log::warn(&format!("could not persist theme: {}", e));
        }
        self.inner.apply(preference);
        self.sync_subscription();
    }

    /// Advance light → dark → system → light and return the new preference.
    pub fn cycle(&self) -> ThemePreference {
        let next = self.preference().next();
        self.set(next);
        next
    }

    /// Whether an OS color-scheme listener is registered.
    pub fn is_watching(&self) -> bool {
        self.inner.subscription.borrow().is_some()
    }

    /// Register the OS listener for `System`, drop it otherwise.
    fn sync_subscription(&self) {
        let wants = self.preference() == ThemePreference::System;
        if wants == self.is_watching() {
            return;
        }

        let subscription = if wants {
            let weak: Weak<Inner<S, H>> = Rc::downgrade(&self.inner);
            self.inner.host.watch(Rc::new(move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                if inner.persisted() == ThemePreference::System {
                    inner.apply(ThemePreference::System);
                }
            }))
        } else {
            None
        };

        // Swap before dropping so the teardown never runs under a borrow.
        let previous = self.inner.subscription.replace(subscription);
        drop(previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;

    type Listener = (usize, Rc<dyn Fn()>);

    /// Host that records applied themes and lets tests flip the OS setting.
    #[derive(Clone, Default)]
    struct FakeHost {
        dark: Rc<Cell<bool>>,
        applied: Rc<RefCell<Vec<ResolvedTheme>>>,
        listeners: Rc<RefCell<Vec<Listener>>>,
        next_id: Rc<Cell<usize>>,
    }

    impl FakeHost {
        fn set_os_dark(&self, dark: bool) {
            self.dark.set(dark);
            let listeners: Vec<_> = self
                .listeners
                .borrow()
                .iter()
                .map(|(_, f)| Rc::clone(f))
                .collect();
            for listener in listeners {
                listener();
            }
        }

        fn last_applied(&self) -> Option<ResolvedTheme> {
            self.applied.borrow().last().copied()
        }

        fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }
    }

    impl ColorSchemeHost for FakeHost {
        fn prefers_dark(&self) -> bool {
            self.dark.get()
        }

        fn apply(&self, theme: ResolvedTheme) {
            self.applied.borrow_mut().push(theme);
        }

        fn watch(&self, on_change: Rc<dyn Fn()>) -> Option<Subscription> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.listeners.borrow_mut().push((id, on_change));

            let listeners = Rc::clone(&self.listeners);
            Some(Subscription::new(move || {
                listeners.borrow_mut().retain(|(existing, _)| *existing != id);
            }))
        }
    }

    fn theme_store(
        entries: &[(&str, &str)],
    ) -> (ThemeStore<MemoryStore, FakeHost>, MemoryStore, FakeHost) {
        let store = MemoryStore::with(entries);
        let host = FakeHost::default();
        (ThemeStore::new(store.clone(), host.clone()), store, host)
    }

    #[test]
    fn test_missing_or_unknown_value_is_system() {
        let (theme, _, _) = theme_store(&[]);
        assert_eq!(theme.preference(), ThemePreference::System);

        let (theme, _, _) = theme_store(&[(THEME_KEY, "purple")]);
        assert_eq!(theme.preference(), ThemePreference::System);
    }

    #[test]
    fn test_init_applies_persisted() {
        let (theme, _, host) = theme_store(&[(THEME_KEY, "dark")]);
        assert!(host.last_applied().is_none());

        assert_eq!(theme.init(), ThemePreference::Dark);
        assert_eq!(host.last_applied(), Some(ResolvedTheme::Dark));
        assert!(!theme.is_watching());
    }

    #[test]
    fn test_set_persists_and_applies() {
        let (theme, store, host) = theme_store(&[]);
        theme.set(ThemePreference::Light);

        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(host.last_applied(), Some(ResolvedTheme::Light));
        assert_eq!(theme.resolved(), ResolvedTheme::Light);
    }

    #[test]
    fn test_cycle_order() {
        let (theme, store, _) = theme_store(&[(THEME_KEY, "light")]);

        assert_eq!(theme.cycle(), ThemePreference::Dark);
        assert_eq!(theme.cycle(), ThemePreference::System);
        assert_eq!(theme.cycle(), ThemePreference::Light);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_system_follows_os() {
        let (theme, _, host) = theme_store(&[]);
        host.dark.set(true);
        theme.init();
        assert_eq!(host.last_applied(), Some(ResolvedTheme::Dark));
        assert!(theme.is_watching());

        host.set_os_dark(false);
        assert_eq!(host.last_applied(), Some(ResolvedTheme::Light));
    }

    #[test]
    fn test_subscription_only_while_system() {
        let (theme, _, host) = theme_store(&[]);
        theme.init();
        assert_eq!(host.listener_count(), 1);

        theme.set(ThemePreference::Dark);
        assert!(!theme.is_watching());
        assert_eq!(host.listener_count(), 0);

        let applied = host.applied.borrow().len();
        host.set_os_dark(true);
        assert_eq!(host.applied.borrow().len(), applied);

        theme.set(ThemePreference::System);
        assert_eq!(host.listener_count(), 1);

        // Re-setting System does not stack listeners.
        theme.set(ThemePreference::System);
        assert_eq!(host.listener_count(), 1);
    }

    #[test]
    fn test_dropping_store_unregisters() {
        let (theme, _, host) = theme_store(&[]);
        theme.init();
        let clone = theme.clone();
        drop(theme);
        assert_eq!(host.listener_count(), 1);

        drop(clone);
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn test_subscription_runs_teardown_once() {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let subscription = Subscription::new(move || counter.set(counter.get() + 1));
        assert_eq!(count.get(), 0);
        drop(subscription);
        assert_eq!(count.get(), 1);
    }
}
