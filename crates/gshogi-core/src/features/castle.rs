//! 囲いライブラリと囲いの照合

use std::collections::BTreeMap;

use crate::position::Position;
use crate::types::{Color, Piece, Square};

use super::castle_data::{BLACK_CASTLES, WHITE_CASTLES};
use super::{FeatureContext, FeatureError};

/// 囲い1つ分の駒配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formation {
    king: Square,
    cells: Vec<(Square, Piece)>,
}

impl Formation {
    /// 局面から囲いを作る（`owner` 側の玉が必要）
    pub fn from_position(
        name: &str,
        pos: &Position,
        owner: Color,
    ) -> Result<Formation, FeatureError> {
        let king = pos
            .king_square(owner)
            .ok_or_else(|| FeatureError::CastleWithoutKing {
                name: name.to_string(),
            })?;
        let cells = pos
            .board_pieces()
            .filter(|&(_, sq, _)| sq != king)
            .map(|(_, sq, piece)| (sq, piece))
            .collect();
        Ok(Formation { king, cells })
    }

    /// 玉の位置
    #[inline]
    pub fn king(&self) -> Square {
        self.king
    }

    /// 玉以外の駒の数
    #[inline]
    pub fn piece_count(&self) -> usize {
        self.cells.len()
    }

    /// 玉以外で、局面の駒（手番・成りを含む）が一致する升の数
    pub fn matching(&self, pos: &Position) -> i32 {
        self.cells
            .iter()
            .filter(|&&(sq, piece)| pos.piece_on(sq) == Some(piece))
            .count() as i32
    }
}

/// 手番ごとの囲いの辞書（名前順）
#[derive(Debug, Clone, Default)]
pub struct CastleLibrary {
    formations: [BTreeMap<String, Formation>; Color::NUM],
}

impl CastleLibrary {
    /// (名前, 16進エンコード) の組から作る
    pub fn from_entries<'a>(
        black: impl IntoIterator<Item = (&'a str, &'a str)>,
        white: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<CastleLibrary, FeatureError> {
        let mut library = CastleLibrary::default();
        for (color, entries) in [
            (Color::Black, black.into_iter().collect::<Vec<_>>()),
            (Color::White, white.into_iter().collect::<Vec<_>>()),
        ] {
            for (name, hex) in entries {
                library.insert(color, name, hex)?;
            }
        }
        Ok(library)
    }

    /// 組み込みの囲い（先手・後手それぞれ43種）
    pub fn standard() -> Result<CastleLibrary, FeatureError> {
        CastleLibrary::from_entries(BLACK_CASTLES.iter().copied(), WHITE_CASTLES.iter().copied())
    }

    fn insert(&mut self, owner: Color, name: &str, hex: &str) -> Result<(), FeatureError> {
        let pos = Position::from_hex(hex).map_err(|source| FeatureError::CastleEncoding {
            name: name.to_string(),
            source,
        })?;
        let formation = Formation::from_position(name, &pos, owner)?;
        self.formations[owner.index()].insert(name.to_string(), formation);
        Ok(())
    }

    /// 手番側の囲い
    pub fn formations(&self, color: Color) -> &BTreeMap<String, Formation> {
        &self.formations[color.index()]
    }

    /// 登録数（手番ごと）
    pub fn len(&self, color: Color) -> usize {
        self.formations[color.index()].len()
    }

    /// 玉の位置が一致する囲いのうち、一致する駒が最も多いもの
    ///
    /// 同数の場合は名前順で先のものを返す。一致数が0なら `None`。
    pub fn best_match(&self, pos: &Position, player: Color) -> Option<(&str, i32)> {
        let king = pos.king_square(player)?;
        let mut best: Option<(&str, i32)> = None;
        for (name, formation) in self.formations(player) {
            if formation.king != king {
                continue;
            }
            let correct = formation.matching(pos);
            if correct > best.map_or(0, |(_, n)| n) {
                best = Some((name.as_str(), correct));
            }
        }
        best
    }

    /// CASTLE_FORMATION の値
    pub(super) fn feature(&self, ctx: &FeatureContext) -> i32 {
        self.best_match(ctx.pos, ctx.player).map_or(0, |(_, n)| n)
    }
}
