//! Demo command parsing.

use super::args::{parse_leading_int, Flag, FlagValue, ParsedArgs};

/// Arguments of `card update`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardUpdate {
    pub card_id: Option<i64>,
    pub title: String,
    pub column: Option<FlagValue>,
    pub description: Option<FlagValue>,
}

/// Parsed demo command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DemoCommand {
    /// Top-level `reset`
    Reset,
    Help,
    BoardList,
    /// `board get <id>`; the raw id is kept for the fixture-reset check.
    BoardGet { raw_id: Option<String> },
    BoardCreate,
    CardCreate {
        column_id: Option<i64>,
        title: String,
    },
    CardUpdate(CardUpdate),
    CardDelete {
        card_id: Option<i64>,
    },
    UnknownBoard(String),
    UnknownCard(String),
    Unknown(String),
}

impl DemoCommand {
    /// Parse a raw command line.
    ///
    /// The first whitespace-delimited word is the command. A leading
    /// `kanban` is treated as the program name and the verb follows it.
    /// An unrecognized verb reports the first word, so `kanban deploy`
    /// is an unknown `kanban` command.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (head, tail) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        if head == "reset" {
            return Self::Reset;
        }

        let args = ParsedArgs::parse(tail);
        let (verb, base) = if head == "kanban" {
            (args.arg(0), 1)
        } else {
            (Some(head), 0)
        };

        match verb {
            Some("board") => Self::parse_board(&args, base),
            Some("card") => Self::parse_card(&args, base),
            Some("help") => Self::Help,
            _ => Self::Unknown(head.to_string()),
        }
    }

    fn parse_board(args: &ParsedArgs, base: usize) -> Self {
        match args.arg(base).unwrap_or_default() {
            "list" => Self::BoardList,
            "get" => Self::BoardGet {
                raw_id: args.arg(base + 1).map(str::to_string),
            },
            "create" => Self::BoardCreate,
            other => Self::UnknownBoard(other.to_string()),
        }
    }

    fn parse_card(args: &ParsedArgs, base: usize) -> Self {
        let id = args.arg(base + 1).and_then(parse_leading_int);
        let title = args.rest(base + 2);

        match args.arg(base).unwrap_or_default() {
            "create" => Self::CardCreate {
                column_id: id,
                title,
            },
            "update" => Self::CardUpdate(CardUpdate {
                card_id: id,
                title,
                column: args.flag(Flag::Column).cloned(),
                description: args.flag(Flag::Description).cloned(),
            }),
            "delete" => Self::CardDelete { card_id: id },
            other => Self::UnknownCard(other.to_string()),
        }
    }
}
