//! UI components built with Leptos.
//!
//! - [`terminal`] - Demo terminal wired to the command simulator
//! - [`board`] - Board preview rendered from simulator snapshots
//! - [`account`] - Sign-in and board list against the live API
//! - [`theme_toggle`] - Light / dark / system switch

pub mod account;
pub mod board;
pub mod terminal;
pub mod theme_toggle;
