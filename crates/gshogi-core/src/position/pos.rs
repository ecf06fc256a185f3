//! 局面本体
//!
//! 駒は最大40枚の駒テーブルに格納し、盤面と持ち駒キューは駒テーブルの
//! インデックス（`PieceId`）だけを保持する。駒テーブルの並びは局面の
//! 複製で変わらない。

use smallvec::SmallVec;

use crate::types::{Color, Move, Piece, PieceKind, Square};

/// 駒テーブルのインデックス
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PieceId(u8);

impl PieceId {
    /// 1局面に存在できる駒の最大数
    pub const MAX: usize = 40;

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// 駒の所在
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    Board(Square),
    Hand,
}

/// 駒テーブルの1エントリ
///
/// 持ち駒の `piece.color` は保持している側、`piece.promoted` は常に false。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceRecord {
    pub piece: Piece,
    pub location: Location,
}

/// 持ち駒キュー（先入れ先出し）
pub(super) type HandQueue = SmallVec<[PieceId; 4]>;

/// 局面
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: [Option<PieceId>; Square::NUM],
    pieces: Vec<PieceRecord>,
    hands: [[HandQueue; PieceKind::NUM]; Color::NUM],
    round: u16,
    kings: [Option<PieceId>; Color::NUM],
}

impl Position {
    /// 駒のない局面
    pub(super) fn empty(round: u16) -> Position {
        Position {
            board: [None; Square::NUM],
            pieces: Vec::with_capacity(PieceId::MAX),
            hands: Default::default(),
            round,
            kings: [None; Color::NUM],
        }
    }

    /// 平手初期局面
    pub fn startpos() -> Position {
        let mut pos = Position::empty(0);
        for sq in Square::all() {
            if let Some(piece) = startpos_piece(sq) {
                pos.put(piece, Location::Board(sq));
            }
        }
        pos
    }

    /// 駒テーブルに駒を追加する（局面の構築用）
    ///
    /// 駒数の上限や升の重複は呼び出し側で検証済みであること。
    pub(super) fn put(&mut self, piece: Piece, location: Location) -> PieceId {
        debug_assert!(self.pieces.len() < PieceId::MAX, "piece table overflow");
        let id = PieceId(self.pieces.len() as u8);
        self.pieces.push(PieceRecord { piece, location });
        match location {
            Location::Board(sq) => {
                debug_assert!(self.board[sq.index()].is_none(), "square {sq:?} already occupied");
                self.board[sq.index()] = Some(id);
            }
            Location::Hand => self.hands[piece.color.index()][piece.kind.index()].push(id),
        }
        if piece.kind == PieceKind::King {
            self.kings[piece.color.index()] = Some(id);
        }
        id
    }

    /// 手数（0始まり）
    #[inline]
    pub fn round(&self) -> u16 {
        self.round
    }

    /// 手番
    #[inline]
    pub fn side_to_move(&self) -> Color {
        Color::from_round(self.round)
    }

    /// 駒テーブル上の駒数
    #[inline]
    pub fn num_pieces(&self) -> usize {
        self.pieces.len()
    }

    /// 駒テーブルのエントリ
    #[inline]
    pub fn record(&self, id: PieceId) -> &PieceRecord {
        &self.pieces[id.index()]
    }

    /// 升にある駒のインデックス
    #[inline]
    pub fn id_on(&self, sq: Square) -> Option<PieceId> {
        self.board[sq.index()]
    }

    /// 升にある駒
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.board[sq.index()].map(|id| self.pieces[id.index()].piece)
    }

    /// 升が空いているか
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.board[sq.index()].is_none()
    }

    /// 指定した手番の駒が升にあるか
    #[inline]
    pub fn is_owned_by(&self, sq: Square, color: Color) -> bool {
        self.piece_on(sq).is_some_and(|p| p.color == color)
    }

    /// 駒テーブル全体を列挙
    pub fn records(&self) -> impl Iterator<Item = (PieceId, &PieceRecord)> {
        self.pieces
            .iter()
            .enumerate()
            .map(|(i, rec)| (PieceId(i as u8), rec))
    }

    /// 盤上の駒を駒テーブル順に列挙
    pub fn board_pieces(&self) -> impl Iterator<Item = (PieceId, Square, Piece)> + '_ {
        self.records().filter_map(|(id, rec)| match rec.location {
            Location::Board(sq) => Some((id, sq, rec.piece)),
            Location::Hand => None,
        })
    }

    /// 持ち駒の枚数
    #[inline]
    pub fn hand_count(&self, color: Color, kind: PieceKind) -> usize {
        self.hands[color.index()][kind.index()].len()
    }

    /// 持ち駒キュー（先頭が次に打たれる駒）
    #[inline]
    pub fn hand(&self, color: Color, kind: PieceKind) -> &[PieceId] {
        &self.hands[color.index()][kind.index()]
    }

    /// 玉のインデックス
    #[inline]
    pub fn king(&self, color: Color) -> Option<PieceId> {
        self.kings[color.index()]
    }

    /// 玉の位置（盤上にない、または取られている場合は None）
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let rec = self.record(self.king(color)?);
        match rec.location {
            Location::Board(sq) if rec.piece.color == color => Some(sq),
            _ => None,
        }
    }

    /// `do_move` が panic せずに適用できる指し手か（王手放置などの合法性は見ない）
    pub fn is_applicable(&self, mv: Move) -> bool {
        let us = self.side_to_move();
        let to = mv.to();

        if let Some(kind) = mv.drop_kind() {
            return !self.hands[us.index()][kind.index()].is_empty() && self.is_empty(to);
        }
        let Some(from) = mv.from() else {
            return false;
        };
        let Some(id) = self.board[from.index()] else {
            return false;
        };
        let moving = self.pieces[id.index()].piece;
        if moving.color != us || self.is_owned_by(to, us) {
            return false;
        }
        if mv.is_promotion() {
            let zone = from.rank().can_promote(us) || to.rank().can_promote(us);
            return moving.kind.can_promote() && !moving.promoted && zone;
        }
        true
    }

    /// 指し手を適用する
    ///
    /// 合法性は呼び出し側（合法手生成または外部の合法手表）で保証されている前提。
    /// 盤面・駒テーブル・持ち駒の整合が取れない指し手はプログラムの誤りとして panic する。
    pub fn do_move(&mut self, mv: Move) {
        let us = self.side_to_move();
        let to = mv.to();

        if let Some(kind) = mv.drop_kind() {
            let queue = &mut self.hands[us.index()][kind.index()];
            if queue.is_empty() {
                panic!("drop {mv}: {us:?} has no {kind:?} in hand");
            }
            let id = queue.remove(0);
            if let Some(occupant) = self.board[to.index()] {
                panic!("drop {mv}: destination occupied by piece {}", occupant.index());
            }
            self.pieces[id.index()].location = Location::Board(to);
            self.board[to.index()] = Some(id);
        } else {
            let Some(from) = mv.from() else {
                panic!("move {mv} has neither source square nor drop kind");
            };
            let Some(id) = self.board[from.index()] else {
                panic!("move {mv}: no piece on source square");
            };
            let moving = self.pieces[id.index()].piece;
            if moving.color != us {
                panic!("move {mv}: piece {} belongs to {:?}", id.index(), moving.color);
            }

            if let Some(captured) = self.board[to.index()] {
                let rec = &mut self.pieces[captured.index()];
                if rec.piece.color == us {
                    panic!("move {mv}: capturing own piece {}", captured.index());
                }
                rec.piece = rec.piece.captured();
                rec.location = Location::Hand;
                self.hands[us.index()][rec.piece.kind.index()].push(captured);
            }

            if mv.is_promotion() {
                let zone = from.rank().can_promote(us) || to.rank().can_promote(us);
                if !moving.kind.can_promote() || moving.promoted || !zone {
                    panic!("move {mv}: {moving:?} cannot promote here");
                }
                self.pieces[id.index()].piece.promoted = true;
            }

            self.board[from.index()] = None;
            self.board[to.index()] = Some(id);
            self.pieces[id.index()].location = Location::Board(to);
        }

        self.round = self.round.wrapping_add(1);
        debug_assert!(self.is_consistent(), "position inconsistent after {mv}");
    }

    /// 盤面・駒テーブル・持ち駒キューが互いに整合しているか
    pub fn is_consistent(&self) -> bool {
        let board_ok = Square::all().all(|sq| match self.board[sq.index()] {
            Some(id) => self
                .pieces
                .get(id.index())
                .is_some_and(|rec| rec.location == Location::Board(sq)),
            None => true,
        });
        let hands_ok = Color::ALL.iter().all(|&c| {
            PieceKind::ALL.iter().all(|&k| {
                self.hand(c, k).iter().all(|id| {
                    self.pieces.get(id.index()).is_some_and(|rec| {
                        rec.location == Location::Hand
                            && rec.piece == Piece::new(k, c)
                    })
                })
            })
        });
        let placed = self.records().all(|(id, rec)| match rec.location {
            Location::Board(sq) => self.board[sq.index()] == Some(id),
            Location::Hand => self.hand(rec.piece.color, rec.piece.kind).contains(&id),
        });
        board_ok && hands_ok && placed
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::startpos()
    }
}

/// 平手初期局面の駒配置
fn startpos_piece(sq: Square) -> Option<Piece> {
    let file = sq.file().number();
    let rank = sq.rank().number();
    let color = if rank <= 3 { Color::White } else { Color::Black };
    let kind = match (rank, file) {
        (1 | 9, 1 | 9) => PieceKind::Lance,
        (1 | 9, 2 | 8) => PieceKind::Knight,
        (1 | 9, 3 | 7) => PieceKind::Silver,
        (1 | 9, 4 | 6) => PieceKind::Gold,
        (1 | 9, 5) => PieceKind::King,
        (2, 8) | (8, 2) => PieceKind::Rook,
        (2, 2) | (8, 8) => PieceKind::Bishop,
        (3 | 7, _) => PieceKind::Pawn,
        _ => return None,
    };
    Some(Piece::new(kind, color))
}
