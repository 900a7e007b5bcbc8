//! perft ツール
//!
//! 初期配置または JSON の局面から指定深さまでの合法手ノード数を数える。
//!
//! ```text
//! perft --depth 3 --layout belgian-daisy --divide
//! perft --position pos.json --depth 2 --json
//! ```

use std::path::PathBuf;

use abalone_core::tt::PositionCache;
use abalone_core::{BoardState, Layout, Player};
use anyhow::Result;
use clap::Parser;
use tools::perft::{load_cache_config, load_position, run};

#[derive(Parser, Debug)]
#[command(name = "perft")]
#[command(about = "アバロンの合法手生成を perft で検証する")]
struct Cli {
    /// 探索深さ
    #[arg(short, long, default_value_t = 3)]
    depth: u32,

    /// 初期配置（standard, belgian-daisy, german-daisy）
    #[arg(long, default_value_t = Layout::Standard)]
    layout: Layout,

    /// 局面JSONファイル（指定時は --layout より優先）
    #[arg(long)]
    position: Option<PathBuf>,

    /// ルートの指し手ごとのノード数を表示
    #[arg(long, default_value_t = false)]
    divide: bool,

    /// 結果をJSONで出力
    #[arg(long, default_value_t = false)]
    json: bool,

    /// キャッシュ設定のJSONファイル（指定時は指し手リストをキャッシュする）
    #[arg(long)]
    cache: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    let mut board = match &cli.position {
        Some(path) => load_position(path)?,
        None => BoardState::from_layout(cli.layout, Player::Black),
    };
    log::debug!("root position:\n{board}");

    let mut cache = match &cli.cache {
        Some(path) => Some(PositionCache::new(&load_cache_config(path)?)),
        None => None,
    };

    let report = run(&mut board, cli.depth, cli.divide, cache.as_mut());
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.to_text());
    }
    Ok(())
}
