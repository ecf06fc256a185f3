//! 局面表現モジュール
//!
//! - `Position`: 局面本体（盤面配列・駒テーブル・持ち駒キュー・手数）
//! - 16進エンコードとの相互変換、特徴量キャッシュ用の正規化キー
//! - `AttackIndex`: 升ごとの利き（1マス利き・飛び利き・遮られた飛び利き）
//!
//! 盤面配列・駒テーブル・持ち駒キューは `do_move` を通じてのみ更新され、
//! 常に互いに整合しているように保つ。

mod attack;
mod hex;
mod pos;

pub use attack::{AttackEntry, AttackIndex, MovePattern, is_square_attacked, reachable_squares};
pub(crate) use attack::oriented;
pub use hex::{ENCODED_LEN, EncodingError, PositionKey};
pub use pos::{Location, PieceId, PieceRecord, Position};
