//! 2つの重みベクトルを平手から対局させる
//!
//! `cargo run -p tools --release --bin organism_game -- --sente a.txt --gote b.txt --games 10 --depth 2`

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use gshogi_core::features::FeatureSet;
use gshogi_core::game::{MatchOutcome, OrganismGame};
use tools::config::RunConfig;
use tools::corpus::weights_arg;

#[derive(Parser, Debug)]
#[command(name = "organism_game")]
#[command(about = "2つの重みベクトルを対局させる（1つ目が先手）")]
struct Cli {
    /// 実行設定（TOML）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 先手の重みベクトル（カンマ区切り、またはファイル）
    #[arg(long)]
    sente: String,

    /// 後手の重みベクトル（カンマ区切り、またはファイル）
    #[arg(long)]
    gote: String,

    /// 探索深さ
    #[arg(long)]
    depth: Option<u32>,

    /// 手数の上限
    #[arg(long)]
    max_round: Option<u16>,

    /// 対局数
    #[arg(long)]
    games: Option<u32>,

    /// 乱数シード（省略時は毎回ランダム）
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let mut config = RunConfig::load_or_default(cli.config.as_deref())?;
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if cli.seed.is_some() {
        config.search.seed = cli.seed;
    }
    if let Some(max_round) = cli.max_round {
        config.game.max_round = max_round;
    }
    if let Some(games) = cli.games {
        config.game.games = games;
    }
    if config.search.depth == 0 {
        bail!("--depth must be >= 1");
    }

    let sente = weights_arg(&cli.sente).context("failed to read sente weights")?;
    let gote = weights_arg(&cli.gote).context("failed to read gote weights")?;
    let num_features = FeatureSet::new(&config.features)?.len();
    log::info!(
        "{} features, depth {}, max round {}",
        num_features,
        config.search.depth,
        config.game.max_round
    );

    let mut results: BTreeMap<&str, u32> = BTreeMap::new();
    for game_no in 0..config.game.games {
        let mut search = config.search.clone();
        search.seed = config.search.seed.map(|s| s.wrapping_add(2 * game_no as u64));
        let mut game = OrganismGame::with_config(
            &sente,
            &gote,
            config.game.max_round,
            &config.features,
            search,
        )?;
        let outcome = game.simulate();
        let label = match outcome {
            MatchOutcome::SenteWin => "sente_win",
            MatchOutcome::GoteWin => "gote_win",
            MatchOutcome::Undetermined => "undetermined",
        };
        log::info!("game {}: {}", game_no + 1, label);
        *results.entry(label).or_default() += 1;
    }

    for (label, count) in &results {
        println!("{label}: {count}");
    }
    Ok(())
}
