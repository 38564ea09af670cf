pub mod error;

pub use error::*;

use kubify_core::{Protocol, SchemaVersions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 設定ファイルのパスを直接指定する環境変数
pub const CONFIG_PATH_ENV: &str = "KUBIFY_CONFIG_PATH";
/// 出力先ルートを指定する環境変数
pub const OUTPUT_DIR_ENV: &str = "KUBIFY_OUTPUT_DIR";

const LOCAL_CANDIDATES: [&str; 2] = ["kubify.yaml", ".kubify.yaml"];
const GLOBAL_CONFIG_FILE: &str = "config.yaml";

/// ユーザー設定
///
/// ```yaml
/// output_dir: ~/work/envs
/// default_protocol: TCP
/// schema:
///   pipeline_api_version: skaffold/v2beta29
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 生成物を書き出すルートディレクトリ
    pub output_dir: Option<PathBuf>,
    /// ポート指定でプロトコルを省略したときの既定値
    pub default_protocol: Protocol,
    pub schema: SchemaVersions,
}

/// kubifyの設定ディレクトリを取得
pub fn get_config_dir() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .ok_or(ConfigError::ConfigDirNotFound)?
        .join("kubify"))
}

/// 設定ファイルを探す
///
/// 以下の優先順位で検索:
/// 1. 環境変数 KUBIFY_CONFIG_PATH (直接パス指定)
/// 2. カレントディレクトリ: kubify.yaml, .kubify.yaml
/// 3. ~/.config/kubify/config.yaml (グローバル設定)
///
/// 見つからない場合は `Ok(None)`。
pub fn find_config_file() -> Result<Option<PathBuf>> {
    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(config_path);
        if path.exists() {
            return Ok(Some(path));
        }
        debug!(path = %path.display(), "KUBIFY_CONFIG_PATH does not exist, ignoring");
    }

    let current_dir = std::env::current_dir()?;
    for filename in &LOCAL_CANDIDATES {
        let path = current_dir.join(filename);
        if path.exists() {
            return Ok(Some(path));
        }
    }

    if let Ok(config_dir) = get_config_dir() {
        let global_config = config_dir.join(GLOBAL_CONFIG_FILE);
        if global_config.exists() {
            return Ok(Some(global_config));
        }
    }

    Ok(None)
}

/// 指定したファイルから設定を読み込む
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    // 空のファイルはすべて既定値
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// 設定ファイルを探して読み込む。無ければ既定値
#[tracing::instrument]
pub fn load_settings() -> Result<Settings> {
    match find_config_file()? {
        Some(path) => {
            debug!(path = %path.display(), "Loading settings");
            load_settings_from(&path)
        }
        None => {
            debug!("No settings file found, using defaults");
            Ok(Settings::default())
        }
    }
}

/// 生成物の出力先ルートを決定する
///
/// 優先順位: CLI引数 > KUBIFY_OUTPUT_DIR > 設定ファイル > データディレクトリ
pub fn resolve_output_root(cli_output_dir: Option<&Path>, settings: &Settings) -> PathBuf {
    if let Some(dir) = cli_output_dir {
        return dir.to_path_buf();
    }

    if let Ok(dir) = std::env::var(OUTPUT_DIR_ENV)
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }

    if let Some(dir) = &settings.output_dir {
        return expand_home(dir);
    }

    dirs::data_local_dir()
        .map(|dir| dir.join("kubify").join("envs"))
        .unwrap_or_else(|| PathBuf::from("kubify-envs"))
}

/// 先頭の `~/` をホームディレクトリに展開
fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}
