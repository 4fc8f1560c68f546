//! Core value types shared by the board and the move pipeline.

/// Piece color. Friendliness is decided by value equality only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Lowercase initial used by the two-character board codes.
    #[inline]
    pub const fn code(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

/// Closed set of piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Uppercase initial used by board codes and FEN (`N` for the knight).
    #[inline]
    pub const fn code(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    #[inline]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A piece as stored on the board.
///
/// The piece's position is the board cell that holds it; it carries no copy
/// of its own square. `has_moved` is only ever set on pawns, where it
/// removes the double advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    #[inline]
    pub fn is_friendly_to(&self, other: &Piece) -> bool {
        self.color == other.color
    }

    /// Two-character board code, e.g. `"wP"` or `"bK"`.
    pub fn code(&self) -> String {
        let mut out = String::with_capacity(2);
        out.push(self.color.code());
        out.push(self.kind.code());
        out
    }
}
