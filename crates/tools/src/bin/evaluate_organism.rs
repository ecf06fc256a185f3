//! 重みベクトルを棋譜との一致数で評価する
//!
//! # 使用例
//!
//! - 登録特徴量の一覧:
//!   `cargo run -p tools --bin evaluate_organism -- --list-features`
//!
//! - 評価用棋譜で100局面を評価し、統計を JSON に保存:
//!   `cargo run -p tools --release --bin evaluate_organism -- --config run.toml --mode test --num-eval 100 --weights best.txt --stats-json stats.json`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gshogi_core::features::{FeatureSet, Link, Tier};
use gshogi_core::train::{EvalMode, OrganismEvaluator};
use tools::common::io::write_json;
use tools::config::RunConfig;
use tools::corpus::{load_training_data, weights_arg};

#[derive(Parser, Debug)]
#[command(name = "evaluate_organism")]
#[command(about = "重みベクトルの適応度（棋士の手との一致数の2乗）を計算する")]
struct Cli {
    /// 実行設定（TOML）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 学習用棋譜（JSON、.gz 可）
    #[arg(long)]
    train: Option<PathBuf>,

    /// 評価用棋譜（JSON、.gz 可）
    #[arg(long)]
    test: Option<PathBuf>,

    /// 合法手表（JSON、.gz 可）
    #[arg(long)]
    legal_moves: Option<PathBuf>,

    /// 評価モード（train / test / train_drops）
    #[arg(long)]
    mode: Option<EvalMode>,

    /// 評価する局面数
    #[arg(long)]
    num_eval: Option<usize>,

    /// 重みベクトル（カンマ区切り、またはファイル）。省略時は全て1
    #[arg(long)]
    weights: Option<String>,

    /// 同じ重みで繰り返す回数（2回目以降はキャッシュを読むだけ）
    #[arg(long, default_value_t = 1)]
    repeat: u32,

    /// 統計の出力先（JSON）
    #[arg(long)]
    stats_json: Option<PathBuf>,

    /// 登録特徴量を表示して終了
    #[arg(long, default_value_t = false)]
    list_features: bool,
}

fn list_features(set: &FeatureSet) {
    for (i, label) in set.labels().iter().enumerate() {
        let tier = match set.tier(i) {
            Tier::Major => "major",
            Tier::Minor => "minor",
        };
        let link = match set.link(i) {
            None => String::new(),
            Some(Link::PawnValue) => " -> PAWN_VALUE".to_string(),
            Some(Link::Index(base)) => format!(" -> {}", set.labels()[base]),
        };
        println!("{i:>3} {label} ({tier}){link}");
    }
    println!("features: {}, major: {}", set.len(), set.n_major());
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let mut config = RunConfig::load_or_default(cli.config.as_deref())?;

    if cli.list_features {
        let set = FeatureSet::new(&config.features).context("invalid feature configuration")?;
        list_features(&set);
        return Ok(());
    }

    if cli.train.is_some() {
        config.corpus.train = cli.train;
    }
    if cli.test.is_some() {
        config.corpus.test = cli.test;
    }
    if cli.legal_moves.is_some() {
        config.corpus.legal_moves = cli.legal_moves;
    }
    if let Some(mode) = cli.mode {
        config.harness.mode = mode;
    }
    if cli.num_eval.is_some() {
        config.harness.num_eval = cli.num_eval;
    }
    config.harness.log_stats = true;

    let data = load_training_data(&config.corpus)?;
    let mut harness = OrganismEvaluator::new(data, &config.features, config.harness.clone())
        .context("failed to build the evaluation harness")?;

    let weights = match &cli.weights {
        Some(arg) => weights_arg(arg)?,
        None => {
            log::info!("no weights given, using all ones");
            vec![1; harness.num_features()]
        }
    };

    let mut fitness = 0;
    for _ in 0..cli.repeat.max(1) {
        fitness = harness
            .evaluate_organism(&weights)
            .context("evaluation failed")?;
    }

    println!(
        "mode: {} positions: {} fitness: {}",
        harness.mode(),
        harness.num_eval(),
        fitness
    );
    for (name, value) in harness.stats().as_map() {
        println!("{name}: {value}");
    }

    if let Some(path) = &cli.stats_json {
        write_json(path, harness.stats())?;
        log::info!("stats written to {}", path.display());
    }
    Ok(())
}
