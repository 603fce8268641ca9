//! Initial demo board.

use crate::models::{Board, BoardId, CardId, Column};

use super::DemoState;

/// The board every reset restores: one card in Todo, none in progress, two
/// done.
pub fn fixture() -> DemoState {
    let mut todo = Column::new(1, "Todo", 0);
    todo.push_card(CardId(1), "Setup project structure");

    let in_progress = Column::new(2, "In Progress", 1);

    let mut done = Column::new(3, "Done", 2);
    done.push_card(CardId(2), "Configure database");
    done.push_card(CardId(3), "Design API schema");

    DemoState {
        board: Board {
            id: BoardId(1),
            name: "Sprint 1".to_string(),
            columns: vec![todo, in_progress, done],
        },
        last_card_id: CardId(3),
    }
}
