//! Kanban board types.
//!
//! Ids are small integer newtypes so a card id can never be passed where a
//! column id is expected.

use std::fmt;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub u32);

        impl $name {
            /// Convert a parsed CLI number, rejecting values outside the id range.
            pub fn from_number(n: i64) -> Option<Self> {
                u32::try_from(n).ok().map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(
    /// Identifier of a [`Board`].
    BoardId
);
id_type!(
    /// Identifier of a [`Column`].
    ColumnId
);
id_type!(
    /// Identifier of a [`Card`].
    CardId
);

impl CardId {
    /// The id following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// A unit of work placed in exactly one column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub description: Option<String>,
    pub column_id: ColumnId,
    pub column_name: String,
    /// Index within the owning column at the time the card was placed.
    pub position: usize,
}

/// An ordered lane of cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub id: ColumnId,
    pub name: String,
    pub position: usize,
    pub cards: Vec<Card>,
}

impl Column {
    /// Create an empty column.
    pub fn new(id: u32, name: impl Into<String>, position: usize) -> Self {
        Self {
            id: ColumnId(id),
            name: name.into(),
            position,
            cards: Vec::new(),
        }
    }

    /// Append a new card at the end of the column.
    ///
    /// The card's column id, column name and position are derived from this
    /// column.
    pub fn push_card(&mut self, id: CardId, title: impl Into<String>) -> &Card {
        let card = Card {
            id,
            title: title.into(),
            description: None,
            column_id: self.id,
            column_name: self.name.clone(),
            position: self.cards.len(),
        };
        self.cards.push(card);
        &self.cards[self.cards.len() - 1]
    }
}

/// Top-level container of ordered columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    pub columns: Vec<Column>,
}

impl Board {
    pub fn column_mut(&mut self, id: ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.id == id)
    }

    /// Find a card, returning `(column index, card index)`.
    pub fn locate_card(&self, id: CardId) -> Option<(usize, usize)> {
        self.columns.iter().enumerate().find_map(|(col_idx, col)| {
            col.cards
                .iter()
                .position(|card| card.id == id)
                .map(|card_idx| (col_idx, card_idx))
        })
    }

    /// Total number of cards across every column.
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }

    /// Highest card id present on the board.
    pub fn max_card_id(&self) -> Option<CardId> {
        self.columns
            .iter()
            .flat_map(|c| c.cards.iter().map(|card| card.id))
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        let mut todo = Column::new(1, "Todo", 0);
        todo.push_card(CardId(1), "first");
        let mut done = Column::new(2, "Done", 1);
        done.push_card(CardId(5), "second");
        done.push_card(CardId(3), "third");
        Board {
            id: BoardId(1),
            name: "Test".to_string(),
            columns: vec![todo, done],
        }
    }

    #[test]
    fn test_push_card_derives_placement() {
        let mut col = Column::new(7, "Review", 2);
        col.push_card(CardId(1), "a");
        let card = col.push_card(CardId(2), "b");
        assert_eq!(card.column_id, ColumnId(7));
        assert_eq!(card.column_name, "Review");
        assert_eq!(card.position, 1);
        assert_eq!(card.description, None);
    }

    #[test]
    fn test_locate_card() {
        let board = sample();
        assert_eq!(board.locate_card(CardId(1)), Some((0, 0)));
        assert_eq!(board.locate_card(CardId(3)), Some((1, 1)));
        assert_eq!(board.locate_card(CardId(99)), None);
    }

    #[test]
    fn test_card_count_and_max_id() {
        let board = sample();
        assert_eq!(board.card_count(), 3);
        assert_eq!(board.max_card_id(), Some(CardId(5)));
    }

    #[test]
    fn test_id_from_number() {
        assert_eq!(ColumnId::from_number(3), Some(ColumnId(3)));
        assert_eq!(ColumnId::from_number(-1), None);
        assert_eq!(CardId::from_number(i64::from(u32::MAX) + 1), None);
    }
}
