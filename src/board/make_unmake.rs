use super::{Move, MoveParseError, Piece, Position, Square};

/// Rook origin and destination files for a castle landing on `king_to_file`.
#[inline]
fn castle_rook_files(king_to_file: usize, kingside: bool) -> (usize, usize) {
    if kingside {
        (king_to_file + 1, king_to_file - 1)
    } else {
        (king_to_file - 2, king_to_file + 1)
    }
}

impl Position {
    /// Apply a move generated for this position.
    ///
    /// The move is trusted: validity is the generator's job.
    pub fn apply_move(&mut self, m: &Move) {
        let (color, piece) = m.moved;

        self.set_cell(m.to, Some(m.moved));
        self.clear_square(m.from);
        self.move_log.push(*m);
        self.white_to_move = !self.white_to_move;
        if piece == Piece::King {
            self.king_squares[color.index()] = m.to;
        }

        self.en_passant_target = if m.is_double_pawn_push() {
            Some(Square((m.from.0 + m.to.0) / 2, m.from.1))
        } else {
            None
        };

        if m.is_en_passant {
            self.clear_square(m.en_passant_victim());
        }
        if m.is_promotion {
            self.set_piece(m.to, color, Piece::Queen);
        }
        if m.is_castling {
            let kingside = m.is_castle_kingside();
            let (rook_from, rook_to) = castle_rook_files(m.to.1, kingside);
            let rook = self.piece_at(Square(m.to.0, rook_from));
            self.set_cell(Square(m.to.0, rook_to), rook);
            self.clear_square(Square(m.to.0, rook_from));
        }
        self.last_move_was_castle = m.is_castling;
        self.last_move_was_capture = m.is_capture();

        self.en_passant_log.push(self.en_passant_target);
        self.update_castling_rights(m);
        self.castling_log.push(self.castling_rights);
    }

    /// Take back the most recent move. Does nothing if no move was applied.
    pub fn undo_move(&mut self) {
        let Some(m) = self.move_log.pop() else {
            return;
        };
        let (color, piece) = m.moved;

        self.set_cell(m.from, Some(m.moved));
        self.set_cell(m.to, m.captured);
        self.white_to_move = !self.white_to_move;
        if piece == Piece::King {
            self.king_squares[color.index()] = m.from;
        }

        if m.is_en_passant {
            self.clear_square(m.to);
            self.set_cell(m.en_passant_victim(), m.captured);
        }
        self.en_passant_log.pop();
        self.en_passant_target = self.en_passant_log.last().copied().flatten();

        self.castling_log.pop();
        if let Some(rights) = self.castling_log.last() {
            self.castling_rights = *rights;
        }
        if m.is_castling {
            let kingside = m.is_castle_kingside();
            let (rook_from, rook_to) = castle_rook_files(m.to.1, kingside);
            let rook = self.piece_at(Square(m.to.0, rook_to));
            self.set_cell(Square(m.to.0, rook_from), rook);
            self.clear_square(Square(m.to.0, rook_to));
        }

        self.checkmate = false;
        self.stalemate = false;
    }

    fn update_castling_rights(&mut self, m: &Move) {
        let (color, piece) = m.moved;
        match piece {
            Piece::King => self.castling_rights.remove_both(color),
            Piece::Rook if m.from.0 == color.back_rank() => match m.from.1 {
                0 => self.castling_rights.remove(color, false),
                7 => self.castling_rights.remove(color, true),
                _ => {}
            },
            _ => {}
        }

        if let Some((captured_color, Piece::Rook)) = m.captured {
            if m.to.0 == captured_color.back_rank() {
                match m.to.1 {
                    0 => self.castling_rights.remove(captured_color, false),
                    7 => self.castling_rights.remove(captured_color, true),
                    _ => {}
                }
            }
        }
    }

    /// Apply a sequence of moves given in coordinate form (`e2e4`, `e7e8q`),
    /// checking each against the legal move list.
    pub fn apply_coordinate_moves<'a, I>(&mut self, moves: I) -> Result<(), MoveParseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for text in moves {
            let mv = self.find_legal_move(text)?;
            self.apply_move(&mv);
        }
        Ok(())
    }
}
