use super::{CastlingRights, Color, Move, Piece, Square};

/// Contents of one board square.
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

/// The authoritative game state.
///
/// Holds the 8x8 mailbox board, the side to move, both king squares, the
/// current castling rights and en passant target, the log of applied moves and
/// one history entry per ply for rights and en passant target. A position is
/// only mutated through [`Position::apply_move`] and [`Position::undo_move`].
#[derive(Clone, Debug)]
pub struct Position {
    pub(crate) squares: [[Cell; 8]; 8], // [rank][file]
    pub(crate) white_to_move: bool,
    pub(crate) king_squares: [Square; 2],
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) move_log: Vec<Move>,
    pub(crate) castling_log: Vec<CastlingRights>,
    pub(crate) en_passant_log: Vec<Option<Square>>,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
    pub(crate) last_move_was_capture: bool,
    pub(crate) last_move_was_castle: bool,
}

impl Position {
    /// Standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            position.set_piece(Square(0, file), Color::White, *piece);
            position.set_piece(Square(7, file), Color::Black, *piece);
            position.set_piece(Square(1, file), Color::White, Piece::Pawn);
            position.set_piece(Square(6, file), Color::Black, Piece::Pawn);
        }
        position.king_squares = [Square(0, 4), Square(7, 4)];
        position.castling_rights = CastlingRights::all();
        position.reset_history();
        position
    }

    /// A board with no pieces. Callers must place both kings and then call
    /// [`Position::reset_history`] before using the position.
    pub(crate) fn empty() -> Self {
        Position {
            squares: [[None; 8]; 8],
            white_to_move: true,
            king_squares: [Square(0, 4), Square(7, 4)],
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            move_log: Vec::new(),
            castling_log: Vec::new(),
            en_passant_log: Vec::new(),
            checkmate: false,
            stalemate: false,
            last_move_was_capture: false,
            last_move_was_castle: false,
        }
    }

    /// Seed the history stacks with the current rights and en passant target.
    pub(crate) fn reset_history(&mut self) {
        self.move_log.clear();
        self.castling_log.clear();
        self.castling_log.push(self.castling_rights);
        self.en_passant_log.clear();
        self.en_passant_log.push(self.en_passant_target);
        self.checkmate = false;
        self.stalemate = false;
        self.last_move_was_capture = false;
        self.last_move_was_castle = false;
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.0][sq.1] = Some((color, piece));
    }

    #[inline]
    pub(crate) fn set_cell(&mut self, sq: Square, cell: Cell) {
        self.squares[sq.0][sq.1] = cell;
    }

    #[inline]
    pub(crate) fn clear_square(&mut self, sq: Square) {
        self.squares[sq.0][sq.1] = None;
    }

    /// Piece and color on a square
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Cell {
        self.squares[sq.0][sq.1]
    }

    /// Returns true if nothing stands on the square
    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    /// Get just the piece kind on a square
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Stored location of a king
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Moves applied since the game started, oldest first
    #[must_use]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last()
    }

    /// Set by the most recent legal-move query: no legal moves and in check.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Set by the most recent legal-move query: no legal moves, not in check.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    /// Whether the last applied move captured something
    #[must_use]
    pub fn last_move_was_capture(&self) -> bool {
        self.last_move_was_capture
    }

    /// Whether the last applied move was a castle
    #[must_use]
    pub fn last_move_was_castle(&self) -> bool {
        self.last_move_was_castle
    }

    /// Occupied squares in rank-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|(c, p)| (sq, c, p)))
    }

    /// Compare everything apply/undo must restore: board, side to move, king
    /// squares, castling rights, en passant target and log length.
    #[must_use]
    pub fn same_state(&self, other: &Position) -> bool {
        self.squares == other.squares
            && self.white_to_move == other.white_to_move
            && self.king_squares == other.king_squares
            && self.castling_rights == other.castling_rights
            && self.en_passant_target == other.en_passant_target
            && self.move_log.len() == other.move_log.len()
            && self.castling_log == other.castling_log
            && self.en_passant_log == other.en_passant_log
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

/// Start a new game from the standard position.
#[must_use]
pub fn new_game() -> Position {
    Position::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let position = Position::new();
        assert_eq!(
            position.piece_at(Square(0, 4)),
            Some((Color::White, Piece::King))
        );
        assert_eq!(
            position.piece_at(Square(7, 3)),
            Some((Color::Black, Piece::Queen))
        );
        assert_eq!(position.king_square(Color::White), Square(0, 4));
        assert_eq!(position.king_square(Color::Black), Square(7, 4));
        assert_eq!(position.pieces().count(), 32);
        assert!(position.white_to_move());
        assert_eq!(position.castling_rights(), CastlingRights::all());
        assert_eq!(position.en_passant_target(), None);
    }

    #[test]
    fn test_history_seeded_with_current_state() {
        let position = new_game();
        assert_eq!(position.castling_log, vec![CastlingRights::all()]);
        assert_eq!(position.en_passant_log, vec![None]);
        assert!(position.move_log().is_empty());
    }

    #[test]
    fn test_exactly_one_king_each() {
        let position = Position::new();
        for color in Color::BOTH {
            let kings = position
                .pieces()
                .filter(|&(_, c, p)| c == color && p == Piece::King)
                .count();
            assert_eq!(kings, 1);
        }
    }
}
