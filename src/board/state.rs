#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Move, Piece, Square};

/// Contents of a single square.
pub type Cell = Option<(Color, Piece)>;

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

const fn starting_cells() -> [[Cell; 8]; 8] {
    let mut cells: [[Cell; 8]; 8] = [[None; 8]; 8];
    let mut col = 0;
    while col < 8 {
        cells[0][col] = Some((Color::Black, BACK_RANK[col]));
        cells[1][col] = Some((Color::Black, Piece::Pawn));
        cells[6][col] = Some((Color::White, Piece::Pawn));
        cells[7][col] = Some((Color::White, BACK_RANK[col]));
        col += 1;
    }
    cells
}

/// An immutable 8x8 board snapshot.
///
/// `Board` is `Copy`; every change goes through a method returning a new
/// value, so earlier snapshots held elsewhere never observe it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) cells: [[Cell; 8]; 8],
}

impl Board {
    /// The standard opening position.
    pub const STARTING: Board = Board {
        cells: starting_cells(),
    };

    /// A board with no pieces.
    pub const EMPTY: Board = Board {
        cells: [[None; 8]; 8],
    };

    pub fn new() -> Self {
        Board::STARTING
    }

    pub fn empty() -> Self {
        Board::EMPTY
    }

    /// The piece on `sq`, or `None` when the square is empty or off the board.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Cell {
        self.cells.get(sq.0).and_then(|row| row.get(sq.1)).copied().flatten()
    }

    /// Color of the piece on `sq`, if any
    #[inline]
    #[must_use]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    /// Copy of this board with `sq` holding `cell`.
    ///
    /// # Panics
    /// Panics if `sq` is off the board.
    #[must_use]
    pub fn with_cell(&self, sq: Square, cell: Cell) -> Board {
        let mut next = *self;
        next.cells[sq.0][sq.1] = cell;
        next
    }

    /// Copy of this board with the piece on `mv.from` moved to `mv.to`
    /// (replacing whatever was there) and `mv.from` cleared. No legality
    /// check is made.
    ///
    /// # Panics
    /// Panics if either square is off the board.
    #[must_use]
    pub fn with_move(&self, mv: Move) -> Board {
        let moving = self.cells[mv.from.0][mv.from.1];
        let mut next = *self;
        next.cells[mv.to.0][mv.to.1] = moving;
        next.cells[mv.from.0][mv.from.1] = None;
        next
    }

    /// First square in row-major order holding `color`'s king.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.squares_of(color)
            .find(|(_, piece)| *piece == Piece::King)
            .map(|(sq, _)| sq)
    }

    /// Every occupied square, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|(c, p)| (sq, c, p)))
    }

    /// Squares holding a piece of `color`, row-major.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied()
            .filter(move |(_, c, _)| *c == color)
            .map(|(sq, _, piece)| (sq, piece))
    }

    /// Number of pieces of `color` on the board
    #[must_use]
    pub fn piece_count(&self, color: Color) -> usize {
        self.squares_of(color).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
