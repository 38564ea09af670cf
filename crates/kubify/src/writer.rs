//! 生成物の書き込み

use anyhow::Context;
use kubify_core::RenderedArtifacts;
use kubify_core::schema::{PIPELINE_FILE, SERVICE_MANIFEST_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const OPERATION: &str = "artifact_paths";

/// 出力先のパス一式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub dir: PathBuf,
    pub manifest: PathBuf,
    pub pipeline: PathBuf,
}

impl ArtifactPaths {
    /// `<root>/<name>/` 以下のパスを組み立てる
    ///
    /// 名前は単一のディレクトリ名でなければならない。
    /// 絶対パスや `..` を含む名前は出力先の外を指すので拒否する。
    pub fn new(root: &Path, name: &str) -> kubify_core::ValidationResult<Self> {
        kubify_core::check_name(name, OPERATION)?;

        let dir = root.join(name);
        Ok(Self {
            manifest: dir.join(SERVICE_MANIFEST_FILE),
            pipeline: dir.join(PIPELINE_FILE),
            dir,
        })
    }

    /// Skaffold から参照する manifest のパス
    pub fn manifest_reference(&self) -> anyhow::Result<&str> {
        self.manifest.to_str().with_context(|| {
            format!("出力先パスがUTF-8ではありません: {}", self.manifest.display())
        })
    }
}

/// レンダリング済みのドキュメントを書き込む
///
/// 途中で失敗した場合は、この呼び出しで書き込んだファイルと
/// 作成したディレクトリを取り除く。
pub fn write_artifacts(
    paths: &ArtifactPaths,
    artifacts: &RenderedArtifacts,
) -> anyhow::Result<()> {
    let created_dir = !paths.dir.exists();
    fs::create_dir_all(&paths.dir)
        .with_context(|| format!("ディレクトリを作成できません: {}", paths.dir.display()))?;

    let result = write_documents(paths, artifacts);
    if result.is_err() {
        discard_partial_output(paths, created_dir);
    }
    result
}

fn write_documents(paths: &ArtifactPaths, artifacts: &RenderedArtifacts) -> anyhow::Result<()> {
    fs::write(&paths.manifest, &artifacts.manifest_yaml)
        .with_context(|| format!("書き込みに失敗しました: {}", paths.manifest.display()))?;
    info!(path = %paths.manifest.display(), "Wrote Kubernetes manifest");

    fs::write(&paths.pipeline, &artifacts.skaffold_yaml)
        .with_context(|| format!("書き込みに失敗しました: {}", paths.pipeline.display()))?;
    info!(path = %paths.pipeline.display(), "Wrote Skaffold config");

    Ok(())
}

fn discard_partial_output(paths: &ArtifactPaths, created_dir: bool) {
    if paths.manifest.is_file()
        && let Err(e) = fs::remove_file(&paths.manifest)
    {
        warn!(path = %paths.manifest.display(), error = %e, "Failed to remove partial manifest");
    }

    if created_dir && let Err(e) = fs::remove_dir(&paths.dir) {
        warn!(path = %paths.dir.display(), error = %e, "Failed to remove output directory");
    }
}
