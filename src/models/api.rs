//! Wire types returned by the kanban REST API.
//!
//! Only the board/column/card resources have fixed shapes; organization,
//! team, invite, API-key and admin payloads are handled as
//! `serde_json::Value` by the client.

use serde::{Deserialize, Serialize};

/// Entry of `GET /api/boards`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSummary {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Card as returned inside a board or column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardResponse {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub position: i64,
}

/// Column with its cards.
///
/// `POST /api/boards/{id}` returns columns without cards, so `cards`
/// defaults to empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnResponse {
    pub id: u32,
    pub name: String,
    pub position: i64,
    #[serde(default)]
    pub cards: Vec<CardResponse>,
}

/// Full board returned by `GET /api/boards/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardDetail {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnResponse>,
}

/// `{"id": n}` response of create endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Created {
    pub id: u32,
}

/// `{"ok": true}` response of delete endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub ok: bool,
}

/// Login response of `POST /api/token`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}
