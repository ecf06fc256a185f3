//! 特徴量キャッシュ
//!
//! 指した後の局面の正規化キー（99バイトのエンコード）から生の特徴量を引く。
//! セッション中は追い出さず、評価モードの切り替え時にまとめて消す。

use std::collections::HashMap;

use crate::features::RawFeatures;
use crate::position::PositionKey;

#[derive(Debug, Clone, Default)]
pub struct FeatureCache {
    entries: HashMap<PositionKey, RawFeatures>,
}

impl FeatureCache {
    pub fn new() -> FeatureCache {
        FeatureCache::default()
    }

    #[inline]
    pub fn get(&self, key: &PositionKey) -> Option<&RawFeatures> {
        self.entries.get(key)
    }

    /// 登録する。既にあれば先に登録された値を残す
    pub fn insert(&mut self, key: PositionKey, features: RawFeatures) -> &RawFeatures {
        self.entries.entry(key).or_insert(features)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
