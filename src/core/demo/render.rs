//! Text rendering that mirrors the `kanban` CLI's stdout.

use std::fmt::Write;

use crate::models::Board;

/// Render `board get` output.
///
/// ```text
/// Board: Sprint 1
///   #1 Todo (1 cards)
///     - #1 Setup project structure
///       optional description
/// ```
///
/// Every line, including the last, ends with a newline.
pub fn format_board(board: &Board) -> String {
    let mut out = format!("Board: {}\n", board.name);
    for column in &board.columns {
        let _ = writeln!(
            out,
            "  #{} {} ({} cards)",
            column.id,
            column.name,
            column.cards.len()
        );
        for card in &column.cards {
            let _ = write!(out, "    - #{} {}", card.id, card.title);
            if let Some(description) = card.description.as_deref().filter(|d| !d.is_empty()) {
                let _ = write!(out, "\n      {}", description);
            }
            out.push('\n');
        }
    }
    out
}
