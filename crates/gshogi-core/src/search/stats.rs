//! 探索統計
//!
//! 着手決定1回ごとに集計し、debug ログに出力する。

/// 探索統計カウンタ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// 総ノード数（探索関数の呼び出し回数）
    pub nodes: u64,
    /// 静的評価したノード数
    pub leaves: u64,
    /// βカットの回数
    pub cutoffs: u64,
    /// 静的評価が `Value::EVAL_MAX` で頭打ちになった回数
    pub saturated: u64,
    /// ルートで最善値に並んだ手の数
    pub ties: usize,
}

impl SearchStats {
    /// 統計をリセット
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 1行の要約
    pub fn format_report(&self) -> String {
        format!(
            "nodes={} leaves={} cutoffs={} saturated={} ties={}",
            self.nodes, self.leaves, self.cutoffs, self.saturated, self.ties
        )
    }
}
