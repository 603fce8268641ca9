//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Board`], [`Column`], [`Card`] - Kanban board representation used by the demo
//! - [`BoardSummary`], [`BoardDetail`], [`CardResponse`] and friends - REST wire types
//! - [`ThemePreference`], [`ResolvedTheme`] - Light/dark preference
//! - [`OutputLine`] - Terminal output types

mod api;
mod board;
mod terminal;
mod theme;

pub use api::{Ack, BoardDetail, BoardSummary, CardResponse, ColumnResponse, Created, Token};
pub use board::{Board, BoardId, Card, CardId, Column, ColumnId};
pub use terminal::{OutputLine, OutputLineData};
pub use theme::{ResolvedTheme, ThemePreference};
