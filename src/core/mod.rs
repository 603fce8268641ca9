//! Core logic, independent of the UI.
//!
//! - [`api`] - REST client for the kanban backend
//! - [`demo`] - Scripted `kanban` CLI simulator
//! - [`theme`] - Persisted light / dark / system preference
//! - [`storage`] - `localStorage` access behind a trait

pub mod api;
pub mod demo;
pub mod error;
pub mod storage;
pub mod theme;
