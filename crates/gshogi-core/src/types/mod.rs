//! 基本型
//!
//! - `Color`: 手番
//! - `File` / `Rank` / `Square`: 筋・段・升
//! - `PieceKind` / `Piece`: 駒種と駒（局面エンコードの駒コードと相互変換）
//! - `Move`: 16bit に詰めた指し手
//! - `Value`: 探索の評価値

mod color;
mod moves;
mod piece;
mod rank;
mod square;
mod value;

pub use color::Color;
pub use moves::Move;
pub use piece::{Piece, PieceKind};
pub use rank::{File, Rank};
pub use square::Square;
pub use value::Value;
