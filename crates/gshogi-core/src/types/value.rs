//! 評価値（Value）
//!
//! 静的評価値は重みベクトル次第で大きくなりうるため、詰みスコアは
//! 評価値の上限 `EVAL_MAX` よりも外側に予約している。

/// 評価値
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Value(i32);

impl Value {
    /// ゼロ
    pub const ZERO: Value = Value(0);
    /// 詰み（勝ち側の最大スコア）
    pub const MATE: Value = Value(1_000_000_000);
    /// 無限大
    pub const INFINITE: Value = Value(Self::MATE.0 + 1);
    /// 静的評価値の上限
    pub const EVAL_MAX: Value = Value(Self::MATE.0 - 1_000_000);

    /// 値から生成
    #[inline]
    pub const fn new(v: i32) -> Value {
        Value(v)
    }

    /// 静的評価のスコアを詰みスコアと重ならない範囲に収める
    ///
    /// `±EVAL_MAX` を超えるスコアは飽和し、超えた分の差は失われる。
    #[inline]
    pub const fn from_eval(score: i64) -> Value {
        let max = Self::EVAL_MAX.0 as i64;
        if score > max {
            Self::EVAL_MAX
        } else if score < -max {
            Value(-Self::EVAL_MAX.0)
        } else {
            Value(score as i32)
        }
    }

    /// ply手で詰ますスコア
    #[inline]
    pub const fn mate_in(ply: i32) -> Value {
        Value(Self::MATE.0 - ply)
    }

    /// ply手で詰まされるスコア
    #[inline]
    pub const fn mated_in(ply: i32) -> Value {
        Value(-Self::MATE.0 + ply)
    }

    /// 詰みスコア（勝ちまたは負け）かどうか
    #[inline]
    pub const fn is_mate_score(self) -> bool {
        self.0 > Self::EVAL_MAX.0 || self.0 < -Self::EVAL_MAX.0
    }

    /// 生の値を取得
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl std::ops::Neg for Value {
    type Output = Value;

    #[inline]
    fn neg(self) -> Value {
        Value(-self.0)
    }
}

impl std::ops::Add for Value {
    type Output = Value;

    #[inline]
    fn add(self, rhs: Value) -> Value {
        Value(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Value {
    type Output = Value;

    #[inline]
    fn sub(self, rhs: Value) -> Value {
        Value(self.0 - rhs.0)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_from_eval_clamps() {
        assert_eq!(Value::from_eval(123), Value::new(123));
        assert_eq!(Value::from_eval(i64::MAX), Value::EVAL_MAX);
        assert_eq!(Value::from_eval(i64::MIN), -Value::EVAL_MAX);
        assert!(!Value::from_eval(i64::MAX).is_mate_score());
    }

    #[test]
    fn test_value_mate() {
        assert!(Value::mate_in(3).is_mate_score());
        assert!(Value::mated_in(3).is_mate_score());
        assert!(Value::mate_in(1) > Value::mate_in(10));
        assert!(Value::mated_in(10) > Value::mated_in(1));
        assert!(Value::INFINITE > Value::MATE);
    }

    #[test]
    fn test_value_neg() {
        assert_eq!(-Value::new(100), Value::new(-100));
        assert_eq!(Value::new(100) - Value::new(1), Value::new(99));
    }
}
