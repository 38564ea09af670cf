use crate::naming::UuidNameGenerator;
use crate::source::TextSource;
use crate::writer::{ArtifactPaths, write_artifacts};
use anyhow::Context;
use colored::Colorize;
use std::path::Path;
use tracing::debug;

/// コマンドテキストからマニフェストと Skaffold 設定を生成する
///
/// すべてのドキュメントをレンダリングしてから書き込むので、
/// 失敗時に中途半端なファイルは残らない。
pub async fn handle(
    source: &dyn TextSource,
    output_dir: Option<&Path>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let settings = kubify_config::load_settings()?;

    let text = source
        .read_text()
        .await
        .with_context(|| format!("{} からコマンドを読み込めませんでした", source.name()))?;
    debug!(source = source.name(), "Read command text");

    let command = kubify_core::parse_command_text(&text, settings.default_protocol)?;
    let name = command.resolve_name(&UuidNameGenerator);

    let root = kubify_config::resolve_output_root(output_dir, &settings);
    let root = std::path::absolute(&root)
        .with_context(|| format!("出力先を解決できません: {}", root.display()))?;
    let paths = ArtifactPaths::new(&root, &name)?;

    let artifacts = kubify_core::render_artifacts(
        &command,
        &name,
        paths.manifest_reference()?,
        &settings.schema,
    )?;

    if dry_run {
        print!("{}", artifacts.manifest_yaml);
        println!("---");
        print!("{}", artifacts.skaffold_yaml);
        return Ok(());
    }

    write_artifacts(&paths, &artifacts)?;

    println!(
        "{}",
        "✓ Skaffold 設定と Kubernetes マニフェストを生成しました".green()
    );
    println!("  • {}", paths.manifest.display().to_string().cyan());
    println!("  • {}", paths.pipeline.display().to_string().cyan());
    println!();
    println!("{}", "次のコマンドで起動できます:".bold());
    println!("  cd {}", paths.dir.display());
    println!("  skaffold run --port-forward --tail");

    Ok(())
}
