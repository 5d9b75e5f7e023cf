use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "florascan")]
#[command(about = "FloraScan plant identification client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// APIのベースURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 写真または説明文から植物を識別
    Identify {
        /// 植物の写真
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// 植物の説明（葉の形、花の色など）
        #[arg(short, long)]
        description: Option<String>,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 植物一覧を表示
    Plants {
        /// 表示件数（省略時は設定値）
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// 植物の詳細を表示
    Plant {
        /// 植物ID
        id: u64,
    },

    /// 統計情報を表示
    Stats,

    /// 設定を表示/編集
    Config {
        /// ベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// タイムアウト（秒）を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
