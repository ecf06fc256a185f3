//! 指し手生成

mod generator;

pub use generator::{generate_legal, generate_pseudo_legal};
