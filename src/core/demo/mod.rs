//! Scripted imitation of the `kanban` CLI.
//!
//! A [`DemoSession`] owns one mock board and interprets a tiny command
//! grammar against it, producing the text the real CLI would print. Nothing
//! here touches the network; the landing page replays commands into it.
//!
//! Every command either reads the board or performs one mutation, then
//! hands back an owned snapshot in its [`CommandOutcome`].

mod args;
mod command;
mod fixture;
mod outcome;
mod render;

pub use command::{CardUpdate, DemoCommand};
pub use outcome::CommandOutcome;

use thiserror::Error;

use crate::config::HELP_TEXT;
use crate::models::{Board, CardId, ColumnId};
use args::parse_leading_int;
use fixture::fixture;
use render::format_board;

/// Mock board plus the card id counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoState {
    pub board: Board,
    /// Highest id ever handed out. Never decreases, even after deletes.
    pub last_card_id: CardId,
}

/// Lookup failures while mutating the board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DemoError {
    #[error("Column {0} not found")]
    ColumnNotFound(String),
    #[error("Card {0} not found")]
    CardNotFound(i64),
}

impl DemoState {
    /// Append a card to a column and return its new id.
    pub fn create_card(&mut self, column_id: i64, title: &str) -> Result<CardId, DemoError> {
        let column = ColumnId::from_number(column_id)
            .and_then(|id| self.board.column_mut(id))
            .ok_or_else(|| DemoError::ColumnNotFound(column_id.to_string()))?;
        let id = self.last_card_id.next();
        column.push_card(id, title);
        self.last_card_id = id;
        Ok(id)
    }

    /// Retitle a card, optionally moving it and setting its description.
    ///
    /// `column` is the raw flag value; it is resolved before anything
    /// changes, so a failed update leaves the board untouched.
    pub fn update_card(
        &mut self,
        card_id: i64,
        title: &str,
        column: Option<&str>,
        description: Option<&str>,
    ) -> Result<(), DemoError> {
        let (from, idx) = CardId::from_number(card_id)
            .and_then(|id| self.board.locate_card(id))
            .ok_or(DemoError::CardNotFound(card_id))?;

        let target = match column {
            Some(raw) => Some(
                parse_leading_int(raw)
                    .and_then(ColumnId::from_number)
                    .and_then(|id| self.board.columns.iter().position(|c| c.id == id))
                    .ok_or_else(|| DemoError::ColumnNotFound(raw.to_string()))?,
            ),
            None => None,
        };

        let (col, idx) = match target {
            Some(to) if to != from => {
                let mut card = self.board.columns[from].cards.remove(idx);
                let dest = &mut self.board.columns[to];
                card.column_id = dest.id;
                card.column_name = dest.name.clone();
                card.position = dest.cards.len();
                dest.cards.push(card);
                (to, dest.cards.len() - 1)
            }
            _ => (from, idx),
        };

        let card = &mut self.board.columns[col].cards[idx];
        card.title = title.to_string();
        if let Some(description) = description {
            card.description = Some(description.to_string());
        }
        Ok(())
    }

    /// Remove a card from its column.
    pub fn delete_card(&mut self, card_id: i64) -> Result<(), DemoError> {
        let (col, idx) = CardId::from_number(card_id)
            .and_then(|id| self.board.locate_card(id))
            .ok_or(DemoError::CardNotFound(card_id))?;
        self.board.columns[col].cards.remove(idx);
        Ok(())
    }
}

/// One user's demo session.
#[derive(Clone, Debug)]
pub struct DemoSession {
    state: DemoState,
}

impl Default for DemoSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoSession {
    /// Start from the fixture board.
    pub fn new() -> Self {
        Self { state: fixture() }
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> DemoState {
        self.state.clone()
    }

    /// Restore the fixture board.
    pub fn reset(&mut self) {
        self.state = fixture();
    }

    /// Parse and run one command line.
    pub fn execute(&mut self, line: &str) -> CommandOutcome {
        self.run(DemoCommand::parse(line))
    }

    /// Run an already parsed command.
    pub fn run(&mut self, command: DemoCommand) -> CommandOutcome {
        match command {
            DemoCommand::Reset => {
                self.reset();
                CommandOutcome::success("reset", "Demo board reset to initial state")
                    .with_state(self.snapshot())
            }
            DemoCommand::Help => CommandOutcome::success("kanban help", HELP_TEXT.trim_end()),
            DemoCommand::BoardList => {
                CommandOutcome::success("kanban board list", "   1  Sprint 1")
            }
            DemoCommand::BoardGet { raw_id } => self.board_get(raw_id.as_deref()),
            DemoCommand::BoardCreate => CommandOutcome::failure(
                "kanban board create",
                "Error: Board creation requires a name argument",
            ),
            DemoCommand::CardCreate { column_id, title } => self.card_create(column_id, &title),
            DemoCommand::CardUpdate(update) => self.card_update(update),
            DemoCommand::CardDelete { card_id } => self.card_delete(card_id),
            DemoCommand::UnknownBoard(sub) => CommandOutcome::failure(
                format!("kanban board {}", sub),
                format!("Error: Unknown board command '{}'", sub),
            ),
            DemoCommand::UnknownCard(sub) => CommandOutcome::failure(
                format!("kanban card {}", sub),
                format!("Error: Unknown card command '{}'", sub),
            ),
            DemoCommand::Unknown(word) => CommandOutcome::failure(
                word.clone(),
                format!(
                    "Error: Unknown command '{}'\nRun 'kanban help' for usage.",
                    word
                ),
            ),
        }
    }

    fn board_get(&mut self, raw_id: Option<&str>) -> CommandOutcome {
        let Some(board_id) = raw_id.and_then(parse_leading_int) else {
            return CommandOutcome::failure("kanban board get", "Error: Invalid board ID");
        };

        // The landing-page script opens with `board get 1`, so that exact
        // read also re-seeds the fixture. Only this literal id resets.
        if raw_id == Some("1") {
            self.reset();
        }

        CommandOutcome::success(
            format!("kanban board get {}", board_id),
            format_board(&self.state.board),
        )
        .with_state(self.snapshot())
    }

    fn card_create(&mut self, column_id: Option<i64>, title: &str) -> CommandOutcome {
        let Some(column_id) = column_id.filter(|_| !title.is_empty()) else {
            return CommandOutcome::failure(
                "kanban card create",
                "Error: Missing required arguments. Usage: kanban card create <column_id> <title>",
            );
        };

        let command = format!("kanban card create {} {}", column_id, title);
        match self.state.create_card(column_id, title) {
            Ok(id) => CommandOutcome::success(command, format!("Card created with id={}", id))
                .with_state(self.snapshot()),
            Err(e) => CommandOutcome::failure(command, format!("Error: {}", e)),
        }
    }

    fn card_update(&mut self, update: CardUpdate) -> CommandOutcome {
        let Some(card_id) = update.card_id.filter(|_| !update.title.is_empty()) else {
            return CommandOutcome::failure(
                "kanban card update",
                "Error: Missing required arguments. Usage: kanban card update <card_id> <title>",
            );
        };

        let column = update.column.as_ref().map(|v| v.as_str());
        let description = update.description.as_ref().map(|v| v.as_str());

        let mut command = format!("kanban card update {} {}", card_id, update.title);
        match self
            .state
            .update_card(card_id, &update.title, column, description)
        {
            Ok(()) => {
                if let Some(column) = column {
                    command.push_str(&format!(" --column {}", column));
                }
                if let Some(description) = description {
                    command.push_str(&format!(" --description \"{}\"", description));
                }
                CommandOutcome::success(command, "Card updated").with_state(self.snapshot())
            }
            Err(e) => CommandOutcome::failure(command, format!("Error: {}", e)),
        }
    }

    fn card_delete(&mut self, card_id: Option<i64>) -> CommandOutcome {
        let Some(card_id) = card_id else {
            return CommandOutcome::failure("kanban card delete", "Error: Missing card ID");
        };

        let command = format!("kanban card delete {}", card_id);
        match self.state.delete_card(card_id) {
            Ok(()) => CommandOutcome::success(command, "Card deleted").with_state(self.snapshot()),
            Err(e) => CommandOutcome::failure(command, format!("Error: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_titles(state: &DemoState, column: usize) -> Vec<String> {
        state.board.columns[column]
            .cards
            .iter()
            .map(|c| c.title.clone())
            .collect()
    }

    #[test]
    fn test_create_card_on_fixture() {
        let mut session = DemoSession::new();
        let outcome = session.execute("kanban card create 1 Write tests");
        assert_eq!(outcome.exit_code, 0);
        assert_eq!(outcome.stdout.as_deref(), Some("Card created with id=4"));
        assert_eq!(outcome.command, "kanban card create 1 Write tests");

        let state = outcome.state.unwrap();
        let card = state.board.columns[0].cards.last().unwrap();
        assert_eq!(card.id, CardId(4));
        assert_eq!(card.title, "Write tests");
        assert_eq!(card.position, 1);
        assert_eq!(card.column_name, "Todo");
    }

    #[test]
    fn test_update_missing_card() {
        let mut session = DemoSession::new();
        let before = session.snapshot();
        let outcome = session.execute("card update 99 Foo");
        assert_eq!(outcome.exit_code, 1);
        assert_eq!(outcome.stderr.as_deref(), Some("Error: Card 99 not found"));
        assert!(outcome.state.is_none());
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_created_ids_strictly_increase() {
        let mut session = DemoSession::new();
        let mut seen = vec![CardId(1), CardId(2), CardId(3)];
        for (i, line) in [
            "card create 1 a",
            "card delete 4",
            "card create 2 b",
            "card create 3 c",
            "card delete 6",
            "card delete 5",
            "card create 1 d",
        ]
        .iter()
        .enumerate()
        {
            let outcome = session.execute(line);
            assert!(outcome.is_success(), "step {} failed: {:?}", i, outcome);
            if line.contains("create") {
                let id = session.snapshot().last_card_id;
                assert!(seen.iter().all(|prev| id > *prev));
                seen.push(id);
            }
        }
        assert_eq!(session.snapshot().last_card_id, CardId(7));
    }

    #[test]
    fn test_card_counts_under_mutation() {
        let mut session = DemoSession::new();
        let count = |s: &DemoSession| s.snapshot().board.card_count();
        assert_eq!(count(&session), 3);

        session.execute("card create 2 new");
        assert_eq!(count(&session), 4);

        session.execute("card update 1 moved --column 3");
        assert_eq!(count(&session), 4);

        session.execute("card update 2 retitled");
        assert_eq!(count(&session), 4);

        session.execute("card delete 3");
        assert_eq!(count(&session), 3);
    }

    #[test]
    fn test_move_between_columns() {
        let mut session = DemoSession::new();
        let outcome = session.execute("kanban card update 1 Setup done -c 3 -d scaffolded");
        assert_eq!(outcome.stdout.as_deref(), Some("Card updated"));
        assert_eq!(
            outcome.command,
            "kanban card update 1 Setup done --column 3 --description \"scaffolded\""
        );

        let state = outcome.state.unwrap();
        assert!(state.board.columns[0].cards.is_empty());
        assert_eq!(
            column_titles(&state, 2),
            vec!["Configure database", "Design API schema", "Setup done"]
        );
        let moved = &state.board.columns[2].cards[2];
        assert_eq!(moved.column_id, ColumnId(3));
        assert_eq!(moved.column_name, "Done");
        assert_eq!(moved.description.as_deref(), Some("scaffolded"));
        // exactly one occurrence across the board
        let occurrences = state
            .board
            .columns
            .iter()
            .flat_map(|c| &c.cards)
            .filter(|c| c.id == CardId(1))
            .count();
        assert_eq!(occurrences, 1);
    }

    #[test]
    fn test_update_in_same_column_keeps_place() {
        let mut session = DemoSession::new();
        session.execute("card update 2 Configure db --column 3");
        let state = session.snapshot();
        assert_eq!(
            column_titles(&state, 2),
            vec!["Configure db", "Design API schema"]
        );
    }

    #[test]
    fn test_update_to_missing_column_changes_nothing() {
        let mut session = DemoSession::new();
        let before = session.snapshot();
        let outcome = session.execute("card update 1 Renamed --column 9");
        assert_eq!(outcome.stderr.as_deref(), Some("Error: Column 9 not found"));
        assert_eq!(session.snapshot(), before);

        let outcome = session.execute("card update 1 Renamed --column");
        assert_eq!(outcome.stderr.as_deref(), Some("Error: Column true not found"));
    }

    #[test]
    fn test_validation_errors() {
        let mut session = DemoSession::new();
        let usage_create =
            "Error: Missing required arguments. Usage: kanban card create <column_id> <title>";
        assert_eq!(
            session.execute("card create one Title").stderr.as_deref(),
            Some(usage_create)
        );
        assert_eq!(
            session.execute("card create 1").stderr.as_deref(),
            Some(usage_create)
        );
        assert_eq!(
            session.execute("card create 7 Title").stderr.as_deref(),
            Some("Error: Column 7 not found")
        );
        assert_eq!(
            session.execute("card update 1").stderr.as_deref(),
            Some("Error: Missing required arguments. Usage: kanban card update <card_id> <title>")
        );
        assert_eq!(
            session.execute("card delete x").stderr.as_deref(),
            Some("Error: Missing card ID")
        );
        assert_eq!(
            session.execute("card delete 42").stderr.as_deref(),
            Some("Error: Card 42 not found")
        );
        assert_eq!(
            session.execute("board get abc").stderr.as_deref(),
            Some("Error: Invalid board ID")
        );
        assert_eq!(session.snapshot(), fixture());
    }

    #[test]
    fn test_reset_restores_fixture() {
        let mut session = DemoSession::new();
        session.execute("card create 2 a");
        session.execute("card update 1 b -c 2");
        session.execute("card delete 3");
        assert_ne!(session.snapshot(), fixture());

        let outcome = session.execute("reset");
        assert_eq!(
            outcome.stdout.as_deref(),
            Some("Demo board reset to initial state")
        );
        assert_eq!(outcome.state, Some(fixture()));
        assert_eq!(session.snapshot(), fixture());
    }

    #[test]
    fn test_board_get_one_reseeds_fixture() {
        let mut session = DemoSession::new();
        session.execute("card delete 1");
        let outcome = session.execute("kanban board get 1");
        assert_eq!(outcome.state, Some(fixture()));
        // the deletion is hidden by the implicit reset
        assert!(
            outcome
                .stdout
                .unwrap()
                .contains("  #1 Todo (1 cards)\n")
        );
    }

    #[test]
    fn test_board_get_other_id_keeps_state() {
        let mut session = DemoSession::new();
        session.execute("card delete 1");
        let outcome = session.execute("board get 2");
        assert!(outcome.stdout.unwrap().contains("  #1 Todo (0 cards)\n"));
        assert_eq!(outcome.command, "kanban board get 2");
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut session = DemoSession::new();
        let mut outcome = session.execute("card create 1 detached");
        let state = outcome.state.as_mut().unwrap();
        state.board.columns.clear();
        assert_eq!(session.snapshot().board.columns.len(), 3);
    }

    #[test]
    fn test_static_commands() {
        let mut session = DemoSession::new();
        let list = session.execute("kanban board list");
        assert_eq!(list.stdout.as_deref(), Some("   1  Sprint 1"));
        assert!(list.state.is_none());

        let help = session.execute("help");
        assert_eq!(help.exit_code, 0);
        assert!(help.stdout.unwrap().starts_with("Available commands:"));

        let create = session.execute("board create Sprint 2");
        assert_eq!(
            create.stderr.as_deref(),
            Some("Error: Board creation requires a name argument")
        );
    }

    #[test]
    fn test_unknown_command() {
        let mut session = DemoSession::new();
        let outcome = session.execute("kanban deploy");
        assert_eq!(outcome.exit_code, 1);
        assert_eq!(outcome.command, "kanban");
        assert_eq!(
            outcome.stderr.as_deref(),
            Some("Error: Unknown command 'kanban'\nRun 'kanban help' for usage.")
        );

        let outcome = session.execute("deploy now");
        assert_eq!(outcome.command, "deploy");
        assert_eq!(
            outcome.stderr.as_deref(),
            Some("Error: Unknown command 'deploy'\nRun 'kanban help' for usage.")
        );

        let outcome = session.execute("card archive 1");
        assert_eq!(
            outcome.stderr.as_deref(),
            Some("Error: Unknown card command 'archive'")
        );
    }

    #[test]
    fn test_update_prefers_long_column_flag() {
        let mut session = DemoSession::new();
        let outcome = session.execute("kanban card update 1 Moved --column 2 -c 3");
        assert!(outcome.is_success());
        assert_eq!(outcome.command, "kanban card update 1 Moved --column 2");

        let state = outcome.state.unwrap();
        assert_eq!(state.board.columns[1].cards[0].title, "Moved");
        assert!(state.board.columns[2].cards.iter().all(|c| c.title != "Moved"));
    }
}
