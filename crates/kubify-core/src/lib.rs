//! kubify core
//!
//! docker run 形式のコマンドテキストを Kubernetes の Service/Deployment と
//! Skaffold 設定に変換する。I/O は持たず、同じ入力からは常に同じ出力を生成する。

pub mod error;
pub mod manifest;
pub mod model;
pub mod parser;
pub mod schema;

pub use error::*;
pub use manifest::{KubeManifest, SkaffoldConfig};
pub use model::*;
pub use parser::{parse_command_text, parse_env_var, parse_port_mapping};
pub use schema::SchemaVersions;

/// 1回の変換で生成されるドキュメント一式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifacts {
    pub name: String,
    pub manifest_yaml: String,
    pub skaffold_yaml: String,
}

/// 解決済みの名前と manifest の出力パスから、書き込む前のドキュメントをすべて生成する
///
/// ここで失敗した場合は何も書き込まれない。
#[tracing::instrument(skip(command, schema))]
pub fn render_artifacts(
    command: &ContainerCommand,
    name: &str,
    manifest_path: &str,
    schema: &SchemaVersions,
) -> Result<RenderedArtifacts> {
    let manifest = KubeManifest::from_command(command, name, schema);
    let skaffold = SkaffoldConfig::new(name, manifest_path, schema)?;

    Ok(RenderedArtifacts {
        name: name.to_string(),
        manifest_yaml: manifest.to_yaml()?,
        skaffold_yaml: skaffold.to_yaml()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_artifacts_end_to_end() {
        let command = parse_command_text(
            "docker run -d --name=api -p 3000:3000 -e DEBUG=true myorg/api:latest",
            Protocol::Tcp,
        )
        .unwrap();
        let name = command.resolve_name(&FixedName("unused".to_string()));
        let schema = SchemaVersions::default();
        let artifacts =
            render_artifacts(&command, &name, "/tmp/envs/api/service.yml", &schema).unwrap();

        assert_eq!(artifacts.name, "api");
        assert!(artifacts.manifest_yaml.contains("name: p-0"));
        assert!(artifacts.manifest_yaml.contains("image: myorg/api:latest"));
        assert!(artifacts.skaffold_yaml.contains("/tmp/envs/api/service.yml"));
    }
}
