//! αβ探索による着手決定
//!
//! - 固定深さの negamax（fail-soft αβ）
//! - 駒種の重要度による手の並べ替え
//! - 直近に指した手を避ける履歴バッファ
//! - 同点の手からの乱択（シード指定で再現可能）

mod agent;
mod ordering;
mod stats;


pub use agent::{Decision, SearchAgent, SearchConfig};
pub use ordering::{SEARCH_ORDER, order_moves};
pub use stats::SearchStats;
