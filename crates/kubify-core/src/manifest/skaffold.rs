//! Skaffold パイプライン設定

use crate::error::{Result, ValidationError, rules};
use crate::schema::{PIPELINE_KIND, SchemaVersions};
use serde::Serialize;

const OPERATION: &str = "build_skaffold_config";

/// 1つのマニフェストを kubectl でデプロイする Skaffold 設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkaffoldConfig {
    pub api_version: String,
    pub kind: String,
    pub metadata: SkaffoldMeta,
    pub deploy: Deploy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkaffoldMeta {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deploy {
    pub kubectl: KubectlDeploy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KubectlDeploy {
    pub manifests: Vec<String>,
}

impl SkaffoldConfig {
    pub fn new(name: &str, manifest_path: &str, schema: &SchemaVersions) -> Result<Self> {
        if name.is_empty() {
            return Err(ValidationError::EmptyInput {
                operation: OPERATION,
                parameter: "name",
                rule: rules::TEXT_IS_NOT_EMPTY,
            }
            .into());
        }
        if manifest_path.is_empty() {
            return Err(ValidationError::EmptyInput {
                operation: OPERATION,
                parameter: "manifestPath",
                rule: rules::TEXT_IS_NOT_EMPTY,
            }
            .into());
        }

        Ok(Self {
            api_version: schema.pipeline_api_version.clone(),
            kind: PIPELINE_KIND.to_string(),
            metadata: SkaffoldMeta {
                name: name.to_string(),
            },
            deploy: Deploy {
                kubectl: KubectlDeploy {
                    manifests: vec![manifest_path.to_string()],
                },
            },
        })
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
