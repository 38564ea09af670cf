mod commands;
mod naming;
mod source;
mod writer;

use clap::{Parser, Subcommand};
use colored::Colorize;
use source::SourceArgs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kubify")]
#[command(about = "docker run を、そのままクラスタへ。", long_about = None)]
struct Cli {
    /// デバッグログを表示
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// コマンドから Kubernetes マニフェストと Skaffold 設定を生成
    Generate {
        #[command(flatten)]
        source: SourceArgs,
        /// 出力先ルートディレクトリ（KUBIFY_OUTPUT_DIR 環境変数でも指定可）
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
        /// ファイルを書き込まずに標準出力へ表示
        #[arg(long)]
        dry_run: bool,
    },
    /// コマンドのパース結果を JSON で表示
    Inspect {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// バージョン情報を表示
    Version,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // 標準出力は YAML/JSON 用なのでログは stderr に出す
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        for cause in e.chain().skip(1) {
            eprintln!("  {} {}", "原因:".yellow(), cause);
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            source,
            output_dir,
            dry_run,
        } => {
            let source = source.into_source()?;
            commands::generate::handle(source.as_ref(), output_dir.as_deref(), dry_run).await
        }
        Commands::Inspect { source } => {
            let source = source.into_source()?;
            commands::inspect::handle(source.as_ref()).await
        }
        Commands::Version => {
            println!("kubify {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
