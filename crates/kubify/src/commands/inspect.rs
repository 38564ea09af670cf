use crate::source::TextSource;
use anyhow::Context;

/// パース結果を JSON で表示する
pub async fn handle(source: &dyn TextSource) -> anyhow::Result<()> {
    let settings = kubify_config::load_settings()?;
    let text = source
        .read_text()
        .await
        .with_context(|| format!("{} からコマンドを読み込めませんでした", source.name()))?;

    let command = kubify_core::parse_command_text(&text, settings.default_protocol)?;
    println!("{}", serde_json::to_string_pretty(&command)?);

    Ok(())
}
