//! コマンドテキストの取得元
//!
//! クリップボード、標準入力、引数のいずれか1つを起動時に選ぶ。

use async_trait::async_trait;
use clap::Args;
use std::process::Stdio;
use thiserror::Error;
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("このOSのクリップボードには対応していません: {0}")]
    UnsupportedPlatform(String),

    #[error(
        "'{program}' が見つかりません\n\nヒント:\n  • {hint}\n  • --command または --stdin でコマンドを渡すこともできます"
    )]
    ProgramNotFound {
        program: &'static str,
        hint: &'static str,
    },

    #[error("'{program}' の実行に失敗しました: {stderr}")]
    CommandFailed {
        program: &'static str,
        stderr: String,
    },

    #[error("読み込みエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SourceError>;

/// コマンドテキストの取得元
#[async_trait]
pub trait TextSource: Send + Sync {
    /// 表示用の名前
    fn name(&self) -> &str;

    async fn read_text(&self) -> Result<String>;
}

/// 取得元の選択（--command と --stdin は排他、どちらも無ければクリップボード）
#[derive(Args, Debug, Clone, Default)]
#[group(multiple = false)]
pub struct SourceArgs {
    /// 変換するコマンド（省略時はクリップボードから読み込む）
    #[arg(short, long, value_name = "TEXT")]
    pub command: Option<String>,
    /// 標準入力からコマンドを読み込む
    #[arg(long)]
    pub stdin: bool,
}

impl SourceArgs {
    pub fn into_source(self) -> Result<Box<dyn TextSource>> {
        if let Some(text) = self.command {
            return Ok(Box::new(LiteralText(text)));
        }
        if self.stdin {
            return Ok(Box::new(StdinText));
        }
        Ok(Box::new(Clipboard::detect()?))
    }
}

/// 引数で渡されたテキスト
pub struct LiteralText(pub String);

#[async_trait]
impl TextSource for LiteralText {
    fn name(&self) -> &str {
        "--command"
    }

    async fn read_text(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// 標準入力
pub struct StdinText;

#[async_trait]
impl TextSource for StdinText {
    fn name(&self) -> &str {
        "stdin"
    }

    async fn read_text(&self) -> Result<String> {
        let mut text = String::new();
        tokio::io::stdin().read_to_string(&mut text).await?;
        Ok(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    Windows,
}

impl Platform {
    pub fn current() -> Option<Self> {
        if cfg!(target_os = "macos") {
            Some(Self::MacOs)
        } else if cfg!(target_os = "linux") {
            Some(Self::Linux)
        } else if cfg!(target_os = "windows") {
            Some(Self::Windows)
        } else {
            None
        }
    }
}

/// OSのクリップボード
///
/// プラットフォームは生成時に一度だけ判定する。
#[derive(Debug, Clone)]
pub struct Clipboard {
    platform: Platform,
}

impl Clipboard {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    pub fn detect() -> Result<Self> {
        Platform::current()
            .map(Self::new)
            .ok_or_else(|| SourceError::UnsupportedPlatform(std::env::consts::OS.to_string()))
    }
}

#[async_trait]
impl TextSource for Clipboard {
    fn name(&self) -> &str {
        "clipboard"
    }

    async fn read_text(&self) -> Result<String> {
        match self.platform {
            Platform::MacOs => {
                run_reader("pbpaste", &[], "pbpaste は macOS に標準で含まれています").await
            }
            Platform::Linux => {
                let xsel = run_reader("xsel", &["-b", "-o"], "xsel をインストールしてください");
                match xsel.await {
                    Err(SourceError::ProgramNotFound { .. }) => {
                        debug!("xsel not found, falling back to xclip");
                        run_reader(
                            "xclip",
                            &["-selection", "clipboard", "-o"],
                            "xsel または xclip をインストールしてください",
                        )
                        .await
                    }
                    result => result,
                }
            }
            Platform::Windows => run_reader(
                "powershell",
                &["-noprofile", "-command", "Get-Clipboard"],
                "PowerShell が PATH に含まれているか確認してください",
            )
            .await
            .map(|text| normalize_windows_text(&text)),
        }
    }
}

/// 外部コマンドを実行して標準出力を返す
async fn run_reader(program: &'static str, args: &[&str], hint: &'static str) -> Result<String> {
    debug!("Running: {} {}", program, args.join(" "));

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => SourceError::ProgramNotFound { program, hint },
            _ => SourceError::Io(e),
        })?;

    if !output.status.success() {
        return Err(SourceError::CommandFailed {
            program,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// CRを取り除き、末尾の改行を1つ落とす
fn normalize_windows_text(text: &str) -> String {
    let text = text.replace('\r', "");
    match text.strip_suffix('\n') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}
