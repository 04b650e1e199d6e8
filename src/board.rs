// Mailbox board: the 8x8 playing area lives inside a 10x12 buffer whose
// padding cells hold the OffBoard sentinel, so knight jumps, king steps and
// sliding rays never need explicit bounds checks.

use std::fmt;
use std::ops::Deref;

use arrayvec::ArrayVec;

use crate::error::{ChessError, ChessResult};
use crate::utils::{
    cell_name, is_playable, parse_cell, playable_cells, square_to_cell, step, ALL_DIRECTIONS,
    BOARD_CELLS, DIAGONALS, KNIGHT_JUMPS, NORTH_EAST, NORTH_WEST, ORTHOGONALS, SOUTH_EAST,
    SOUTH_WEST,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    #[inline]
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// Lower-case letter of the piece kind.
    pub fn char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// Content of one mailbox cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    #[default]
    Empty,
    OffBoard,
    Piece(Color, PieceKind),
}

impl Square {
    pub const WHITE_KING: Square = Square::Piece(Color::White, PieceKind::King);
    pub const BLACK_KING: Square = Square::Piece(Color::Black, PieceKind::King);

    /// Owner of the piece on this square, if any.
    #[inline]
    pub fn side(self) -> Option<Color> {
        match self {
            Square::Piece(color, _) => Some(color),
            _ => None,
        }
    }

    pub fn kind(self) -> Option<PieceKind> {
        match self {
            Square::Piece(_, kind) => Some(kind),
            _ => None,
        }
    }

    /// FEN letter: upper case for White, lower case for Black.
    pub fn to_char(self) -> Option<char> {
        match self {
            Square::Piece(Color::White, kind) => Some(kind.char().to_ascii_uppercase()),
            Square::Piece(Color::Black, kind) => Some(kind.char()),
            _ => None,
        }
    }

    pub fn from_char(ch: char) -> Option<Square> {
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Square::Piece(color, kind))
    }
}

/// Score value of a move or table entry that has not been evaluated yet.
/// Distinct from every real score, including the draw score zero.
pub const UNSCORED: i16 = i16::MIN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub source: u8,
    pub dest: u8,
    pub score: i16,
}

impl Default for Move {
    fn default() -> Self {
        Move {
            source: 0,
            dest: 0,
            score: UNSCORED,
        }
    }
}

impl Move {
    pub fn new(source: usize, dest: usize) -> Self {
        debug_assert!(source < BOARD_CELLS && dest < BOARD_CELLS);
        Move {
            source: source as u8,
            dest: dest as u8,
            score: UNSCORED,
        }
    }

    #[inline]
    pub fn source(&self) -> usize {
        self.source as usize
    }

    #[inline]
    pub fn dest(&self) -> usize {
        self.dest as usize
    }

    #[inline]
    pub fn is_scored(&self) -> bool {
        self.score != UNSCORED
    }

    pub fn with_score(self, score: i16) -> Self {
        Move { score, ..self }
    }

    /// Same source and destination, ignoring the score.
    pub fn same_squares(&self, other: &Move) -> bool {
        self.source == other.source && self.dest == other.dest
    }

    /// Four-character coordinate form, e.g. "e1d2".
    pub fn algebraic(&self) -> ChessResult<String> {
        Ok(format!(
            "{}{}",
            cell_name(self.source())?,
            cell_name(self.dest())?
        ))
    }

    /// Parse the four-character coordinate form.
    pub fn parse(text: &str) -> ChessResult<Move> {
        if text.len() != 4 || !text.is_ascii() {
            return Err(ChessError::InvalidCoordinate {
                file: text.chars().next().unwrap_or('?'),
                rank: text.chars().nth(1).unwrap_or('?'),
            });
        }
        Ok(Move::new(parse_cell(&text[0..2])?, parse_cell(&text[2..4])?))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.algebraic() {
            Ok(text) => f.write_str(&text),
            Err(_) => f.write_str("0000"),
        }
    }
}

/// Upper bound on the moves of any position handled here.
pub const MAX_MOVES: usize = 255;

/// Bounded move list stored inline.
#[derive(Debug, Clone, Default)]
pub struct MoveList(ArrayVec<Move, MAX_MOVES>);

impl MoveList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, mv: Move) -> ChessResult<()> {
        self.0
            .try_push(mv)
            .map_err(|_| ChessError::MoveListOverflow)
    }

    /// True if a move with the same source and destination is present.
    pub fn contains_squares(&self, mv: &Move) -> bool {
        self.0.iter().any(|m| m.same_squares(mv))
    }
}

impl Deref for MoveList {
    type Target = [Move];

    fn deref(&self) -> &[Move] {
        self.0.as_slice()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Undo entry: the move just applied and whatever stood on its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undo {
    pub mv: Move,
    pub captured: Square,
}

// Home squares of the kings after clear(): e1 and e8.
const WHITE_KING_HOME: usize = 25;
const BLACK_KING_HOME: usize = 95;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Square; BOARD_CELLS],
    white_king: usize,
    black_king: usize,
    side: Color,
    undo_stack: Vec<Undo>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Bare kings on e1/e8, White to move.
    pub fn new() -> Self {
        let mut board = Board {
            cells: [Square::OffBoard; BOARD_CELLS],
            white_king: WHITE_KING_HOME,
            black_king: BLACK_KING_HOME,
            side: Color::White,
            undo_stack: Vec::with_capacity(64),
        };
        board.clear(Color::White);
        board
    }

    /// Empty every playable cell, put the kings back on e1/e8 and forget the
    /// undo history.
    pub fn clear(&mut self, side: Color) {
        self.cells = [Square::OffBoard; BOARD_CELLS];
        for cell in playable_cells() {
            self.cells[cell] = Square::Empty;
        }
        self.white_king = WHITE_KING_HOME;
        self.black_king = BLACK_KING_HOME;
        self.cells[WHITE_KING_HOME] = Square::WHITE_KING;
        self.cells[BLACK_KING_HOME] = Square::BLACK_KING;
        self.side = side;
        self.undo_stack.clear();
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side
    }

    pub fn set_side_to_move(&mut self, side: Color) {
        self.side = side;
    }

    #[inline]
    pub fn king_cell(&self, color: Color) -> usize {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    /// Number of pushed moves not yet popped.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    fn validate_offset(&self, cell: usize) -> ChessResult<()> {
        if cell >= BOARD_CELLS || self.cells[cell] == Square::OffBoard {
            return Err(ChessError::InvalidOffset(cell));
        }
        Ok(())
    }

    pub fn get(&self, cell: usize) -> ChessResult<Square> {
        self.validate_offset(cell)?;
        Ok(self.cells[cell])
    }

    /// Store `value` on `cell`. Placing a king moves that colour's king: the
    /// old king cell is vacated. Overwriting a king with anything else is
    /// reported as a missing king.
    pub fn set(&mut self, cell: usize, value: Square) -> ChessResult<()> {
        self.validate_offset(cell)?;
        match value {
            Square::OffBoard => return Err(ChessError::InvalidSquareValue),
            Square::WHITE_KING => {
                self.cells[self.white_king] = Square::Empty;
                self.white_king = cell;
            }
            Square::BLACK_KING => {
                self.cells[self.black_king] = Square::Empty;
                self.black_king = cell;
            }
            _ => {}
        }
        self.cells[cell] = value;

        if self.cells[self.white_king] != Square::WHITE_KING {
            return Err(ChessError::KingMissing(Color::White));
        }
        if self.cells[self.black_king] != Square::BLACK_KING {
            return Err(ChessError::KingMissing(Color::Black));
        }
        Ok(())
    }

    /// Occupied cells with their pieces, in a1, a2, .., h8 order.
    pub fn pieces(&self) -> impl Iterator<Item = (usize, Color, PieceKind)> + '_ {
        playable_cells().filter_map(move |cell| match self.cells[cell] {
            Square::Piece(color, kind) => Some((cell, color, kind)),
            _ => None,
        })
    }

    // Make/unmake -------------------------------------------------

    pub fn push(&mut self, mv: Move) -> ChessResult<()> {
        let source = mv.source();
        let dest = mv.dest();
        let mover = self.get(source)?;
        let captured = self.get(dest)?;
        if mover.side() != Some(self.side) {
            return Err(ChessError::IllegalMover {
                cell: source,
                side: self.side,
            });
        }
        match mover {
            Square::WHITE_KING => self.white_king = dest,
            Square::BLACK_KING => self.black_king = dest,
            _ => {}
        }
        self.undo_stack.push(Undo { mv, captured });
        self.cells[dest] = mover;
        self.cells[source] = Square::Empty;
        self.side = self.side.opposite();
        Ok(())
    }

    pub fn pop(&mut self) -> ChessResult<Undo> {
        let undo = self
            .undo_stack
            .pop()
            .ok_or(ChessError::EmptyUndoHistory)?;
        let source = undo.mv.source();
        let dest = undo.mv.dest();
        self.side = self.side.opposite();
        let mover = self.cells[dest];
        self.cells[source] = mover;
        self.cells[dest] = undo.captured;
        match mover {
            Square::WHITE_KING => self.white_king = source,
            Square::BLACK_KING => self.black_king = source,
            _ => {}
        }
        Ok(undo)
    }

    // Move generation ---------------------------------------------

    /// All strictly legal moves of the side to move.
    pub fn generate_moves(&mut self) -> ChessResult<MoveList> {
        let mut list = MoveList::new();
        let side = self.side;
        for source in playable_cells() {
            let kind = match self.cells[source] {
                Square::Piece(color, kind) if color == side => kind,
                _ => continue,
            };
            match kind {
                PieceKind::King => {
                    for dir in ALL_DIRECTIONS {
                        self.try_move(&mut list, source, step(source, dir))?;
                    }
                }
                PieceKind::Queen => {
                    for dir in ALL_DIRECTIONS {
                        self.try_ray(&mut list, source, dir)?;
                    }
                }
                PieceKind::Rook => {
                    for dir in ORTHOGONALS {
                        self.try_ray(&mut list, source, dir)?;
                    }
                }
                PieceKind::Bishop => {
                    for dir in DIAGONALS {
                        self.try_ray(&mut list, source, dir)?;
                    }
                }
                PieceKind::Knight => {
                    for jump in KNIGHT_JUMPS {
                        self.try_move(&mut list, source, step(source, jump))?;
                    }
                }
                PieceKind::Pawn => return Err(ChessError::Unimplemented(PieceKind::Pawn)),
            }
        }
        Ok(list)
    }

    // Accept source->dest if the destination is empty or hostile and the
    // mover's king is safe once the move is made.
    fn try_move(&mut self, list: &mut MoveList, source: usize, dest: usize) -> ChessResult<()> {
        let mover = self.side;
        let open = match self.cells[dest] {
            Square::Empty => true,
            Square::Piece(color, _) => color != mover,
            Square::OffBoard => false,
        };
        if !open {
            return Ok(());
        }
        let mv = Move::new(source, dest);
        self.push(mv)?;
        let self_check = self.is_attacked_by(self.king_cell(mover), mover.opposite());
        self.pop()?;
        if !self_check {
            list.add(mv)?;
        }
        Ok(())
    }

    fn try_ray(&mut self, list: &mut MoveList, source: usize, dir: isize) -> ChessResult<()> {
        let mut dest = step(source, dir);
        while self.cells[dest] == Square::Empty {
            self.try_move(list, source, dest)?;
            dest = step(dest, dir);
        }
        if let Square::Piece(color, _) = self.cells[dest] {
            if color != self.side {
                self.try_move(list, source, dest)?;
            }
        }
        Ok(())
    }

    // Legality helpers -------------------------------------------

    /// True if any piece of `by` attacks the playable cell `cell`.
    pub fn is_attacked_by(&self, cell: usize, by: Color) -> bool {
        debug_assert!(is_playable(cell));
        let at = |dir: isize| self.cells[step(cell, dir)];

        let king = Square::Piece(by, PieceKind::King);
        if ALL_DIRECTIONS.iter().any(|&dir| at(dir) == king) {
            return true;
        }

        let knight = Square::Piece(by, PieceKind::Knight);
        if KNIGHT_JUMPS.iter().any(|&jump| at(jump) == knight) {
            return true;
        }

        // A pawn attacks diagonally forward, so look diagonally backward.
        let pawn = Square::Piece(by, PieceKind::Pawn);
        let pawn_sources = match by {
            Color::White => [SOUTH_EAST, SOUTH_WEST],
            Color::Black => [NORTH_EAST, NORTH_WEST],
        };
        if pawn_sources.iter().any(|&dir| at(dir) == pawn) {
            return true;
        }

        let queen = Square::Piece(by, PieceKind::Queen);
        let rook = Square::Piece(by, PieceKind::Rook);
        if ORTHOGONALS
            .iter()
            .any(|&dir| self.ray_hits(cell, dir, rook, queen))
        {
            return true;
        }
        let bishop = Square::Piece(by, PieceKind::Bishop);
        DIAGONALS
            .iter()
            .any(|&dir| self.ray_hits(cell, dir, bishop, queen))
    }

    fn ray_hits(&self, cell: usize, dir: isize, first: Square, second: Square) -> bool {
        let mut dest = step(cell, dir);
        while self.cells[dest] == Square::Empty {
            dest = step(dest, dir);
        }
        self.cells[dest] == first || self.cells[dest] == second
    }

    pub fn is_current_player_in_check(&self) -> bool {
        self.is_attacked_by(self.king_cell(self.side), self.side.opposite())
    }

    /// A player may never leave his own king in check, so the side that just
    /// moved must not be in check.
    pub fn is_legal_position(&self) -> bool {
        let waiting = self.side.opposite();
        !self.is_attacked_by(self.king_cell(waiting), self.side)
    }
}

// FEN setup: piece placement and side to move. Castling and en-passant
// fields, when present, must be empty ("-").
impl Board {
    pub fn set_from_fen(&mut self, fen: &str) -> ChessResult<()> {
        let mut parts = fen.split_whitespace();
        let placement = parts.next().ok_or(ChessError::InvalidFen("missing pieces"))?;
        let side = match parts.next() {
            Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(_) => return Err(ChessError::InvalidFen("invalid side char")),
            None => return Err(ChessError::InvalidFen("missing side")),
        };
        if let Some(castling) = parts.next() {
            if castling != "-" {
                return Err(ChessError::InvalidFen("castling rights are not supported"));
            }
        }
        if let Some(ep) = parts.next() {
            if ep != "-" {
                return Err(ChessError::InvalidFen("en passant is not supported"));
            }
        }

        let mut cells = [Square::OffBoard; BOARD_CELLS];
        for cell in playable_cells() {
            cells[cell] = Square::Empty;
        }
        let mut white_king = None;
        let mut black_king = None;

        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(ChessError::InvalidFen("expected 8 ranks"));
        }
        for (i, row) in rows.iter().enumerate() {
            let rank = 7 - i;
            let mut file = 0usize;
            for ch in row.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    if skip == 0 || skip > 8 {
                        return Err(ChessError::InvalidFen("invalid empty-square count"));
                    }
                    file += skip as usize;
                    continue;
                }
                let square = Square::from_char(ch).ok_or(ChessError::InvalidFen("invalid piece char"))?;
                if file >= 8 {
                    return Err(ChessError::InvalidFen("rank too long"));
                }
                let cell = square_to_cell((rank * 8 + file) as u8);
                let king = match square {
                    Square::WHITE_KING => Some(&mut white_king),
                    Square::BLACK_KING => Some(&mut black_king),
                    _ => None,
                };
                if let Some(slot) = king {
                    if slot.replace(cell).is_some() {
                        return Err(ChessError::InvalidFen("more than one king of a color"));
                    }
                }
                cells[cell] = square;
                file += 1;
            }
            if file != 8 {
                return Err(ChessError::InvalidFen("rank has wrong length"));
            }
        }

        self.white_king = white_king.ok_or(ChessError::InvalidFen("missing white king"))?;
        self.black_king = black_king.ok_or(ChessError::InvalidFen("missing black king"))?;
        self.cells = cells;
        self.side = side;
        self.undo_stack.clear();
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            for file in 0..8u8 {
                let cell = square_to_cell(rank * 8 + file);
                match self.cells[cell].to_char() {
                    Some(ch) => write!(f, "{} ", ch)?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::offset;

    fn cell(text: &str) -> usize {
        parse_cell(text).unwrap()
    }

    #[test]
    fn fresh_board_has_kings_at_home() {
        let board = Board::new();
        assert_eq!(board.get(cell("e1")).unwrap(), Square::WHITE_KING);
        assert_eq!(board.get(cell("e8")).unwrap(), Square::BLACK_KING);
        assert_eq!(board.king_cell(Color::White), cell("e1"));
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.pieces().count(), 2);
    }

    #[test]
    fn get_rejects_padding() {
        let board = Board::new();
        assert!(matches!(board.get(0), Err(ChessError::InvalidOffset(0))));
        assert!(matches!(board.get(120), Err(ChessError::InvalidOffset(120))));
        assert!(matches!(board.get(30), Err(ChessError::InvalidOffset(30))));
    }

    #[test]
    fn placing_king_relocates_it() {
        let mut board = Board::new();
        board.set(cell("a1"), Square::WHITE_KING).unwrap();
        assert_eq!(board.get(cell("e1")).unwrap(), Square::Empty);
        assert_eq!(board.king_cell(Color::White), cell("a1"));
    }

    #[test]
    fn overwriting_king_is_reported() {
        let mut board = Board::new();
        let result = board.set(cell("e8"), Square::Piece(Color::White, PieceKind::Rook));
        assert!(matches!(result, Err(ChessError::KingMissing(Color::Black))));
    }

    #[test]
    fn off_board_value_is_rejected() {
        let mut board = Board::new();
        assert!(matches!(
            board.set(cell("d4"), Square::OffBoard),
            Err(ChessError::InvalidSquareValue)
        ));
    }

    #[test]
    fn push_rejects_wrong_side() {
        let mut board = Board::new();
        let mv = Move::new(cell("e8"), cell("e7"));
        assert!(matches!(
            board.push(mv),
            Err(ChessError::IllegalMover { side: Color::White, .. })
        ));
        let empty = Move::new(cell("d4"), cell("d5"));
        assert!(board.push(empty).is_err());
        assert_eq!(board.undo_depth(), 0);
    }

    #[test]
    fn pop_without_history_fails() {
        let mut board = Board::new();
        assert!(matches!(board.pop(), Err(ChessError::EmptyUndoHistory)));
    }

    #[test]
    fn push_pop_restores_capture() {
        let mut board = Board::new();
        board
            .set(cell("e2"), Square::Piece(Color::Black, PieceKind::Queen))
            .unwrap();
        let before = board.clone();
        board.push(Move::new(cell("e1"), cell("e2"))).unwrap();
        assert_eq!(board.king_cell(Color::White), cell("e2"));
        assert_eq!(board.side_to_move(), Color::Black);
        let undo = board.pop().unwrap();
        assert_eq!(undo.captured, Square::Piece(Color::Black, PieceKind::Queen));
        assert_eq!(board, before);
    }

    #[test]
    fn rook_ray_gives_check_until_blocked() {
        let mut board = Board::new();
        board.set_side_to_move(Color::Black);
        board
            .set(cell("e4"), Square::Piece(Color::White, PieceKind::Rook))
            .unwrap();
        assert!(board.is_current_player_in_check());
        board
            .set(cell("e6"), Square::Piece(Color::White, PieceKind::Knight))
            .unwrap();
        assert!(!board.is_current_player_in_check());
    }

    #[test]
    fn side_not_to_move_in_check_is_illegal() {
        let mut board = Board::new();
        board
            .set(offset('a', '4').unwrap(), Square::Piece(Color::White, PieceKind::Bishop))
            .unwrap();
        // Bishop a4 attacks e8 along a4-b5-c6-d7-e8.
        assert!(!board.is_legal_position());
        assert!(!board.is_current_player_in_check());
        board.set_side_to_move(Color::Black);
        assert!(board.is_legal_position());
        assert!(board.is_current_player_in_check());
    }

    #[test]
    fn pawn_attacks_point_forward() {
        let mut board = Board::new();
        board
            .set(cell("d7"), Square::Piece(Color::White, PieceKind::Pawn))
            .unwrap();
        assert!(board.is_attacked_by(cell("e8"), Color::White));
        assert!(!board.is_attacked_by(cell("e6"), Color::White));
        board
            .set(cell("d2"), Square::Piece(Color::Black, PieceKind::Pawn))
            .unwrap();
        assert!(board.is_attacked_by(cell("e1"), Color::Black));
    }

    #[test]
    fn fen_roundtrip_through_display() {
        let mut board = Board::new();
        board.set_from_fen("8/8/8/3k4/8/8/2N5/4K2Q b - - 0 1").unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.king_cell(Color::Black), cell("d5"));
        assert_eq!(
            board.get(cell("h1")).unwrap(),
            Square::Piece(Color::White, PieceKind::Queen)
        );
        let text = board.to_string();
        assert!(text.starts_with(". . . . . . . . \n"));
        assert!(text.ends_with(". . . . K . . Q \n"));
    }

    #[test]
    fn fen_errors() {
        let mut board = Board::new();
        assert!(board.set_from_fen("8/8/8/8/8/8/8/4K3 w").is_err());
        assert!(board.set_from_fen("4k3/8/8/8/8/8/8/4K2K w").is_err());
        assert!(board.set_from_fen("4k3/8/8/8/8/8/8/4K3 w KQ - 0 1").is_err());
        assert!(board.set_from_fen("4k3/8/8/8/8/8/4K3 w").is_err());
        assert!(board.set_from_fen("4k3/8/8/8/8/8/8/4K3 x").is_err());
        // A failed load leaves the board untouched.
        assert_eq!(board, Board::new());
    }

    #[test]
    fn move_text() {
        let mv = Move::parse("c2a3").unwrap();
        assert_eq!(mv.source(), cell("c2"));
        assert_eq!(mv.dest(), cell("a3"));
        assert!(!mv.is_scored());
        assert_eq!(mv.to_string(), "c2a3");
        assert_eq!(Move::default().to_string(), "0000");
        assert!(Move::parse("c2a").is_err());
        assert!(Move::parse("c2a9").is_err());
    }

    #[test]
    fn move_list_overflows_at_capacity() {
        let mut list = MoveList::new();
        for _ in 0..MAX_MOVES {
            list.add(Move::new(21, 22)).unwrap();
        }
        assert!(matches!(
            list.add(Move::new(21, 22)),
            Err(ChessError::MoveListOverflow)
        ));
    }
}
