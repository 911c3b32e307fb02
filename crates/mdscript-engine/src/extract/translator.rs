use crate::position::{Location, Position};

/// Maps positions in a snippet's own coordinate space to the document the
/// snippet was lifted from.
///
/// The anchor is the document position of the snippet's first character.
/// Only the first snippet line is shifted horizontally: every later line
/// starts at column 1 of its own document line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationTranslator {
    anchor: Position,
}

impl LocationTranslator {
    pub fn new(anchor: Position) -> Self {
        Self { anchor }
    }

    /// Translator for a snippet that is the whole document.
    pub fn identity() -> Self {
        Self::new(Position::START)
    }

    pub fn anchor(&self) -> Position {
        self.anchor
    }

    pub fn translate(&self, p: Position) -> Position {
        let line = self.anchor.line + p.line.saturating_sub(1);
        let column = if p.line <= 1 {
            self.anchor.column + p.column.saturating_sub(1)
        } else {
            p.column
        };
        Position::new(line, column)
    }

    pub fn translate_location(&self, location: Location) -> Location {
        Location::new(self.translate(location.start), self.translate(location.end))
    }
}

impl Default for LocationTranslator {
    fn default() -> Self {
        Self::identity()
    }
}
