use std::fmt;

use super::{Board, Square};

/// Glyph diagram, row 0 first, with row and column labels.
///
/// ```text
///   0 1 2 3 4 5 6 7
/// 0 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜
/// ...
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2 3 4 5 6 7")?;
        for row in 0..8 {
            write!(f, "{row}")?;
            for col in 0..8 {
                let ch = match self.piece_at(Square(row, col)) {
                    Some((color, piece)) => piece.glyph(color),
                    None => '.',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
