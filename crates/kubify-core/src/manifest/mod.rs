//! Kubernetes マニフェストと Skaffold 設定の生成
//!
//! ContainerCommand から Service と Deployment を導出する。
//! i 番目の Service ポートと i 番目のコンテナポートは同じ名前 `p-<i>` を持ち、
//! Service のセレクタと Deployment のラベルはすべて `{app: name}` になる。

mod deployment;
mod service;
mod skaffold;

pub use deployment::*;
pub use service::*;
pub use skaffold::*;

use crate::error::Result;
use crate::model::ContainerCommand;
use crate::schema::SchemaVersions;
use serde::Serialize;
use std::collections::BTreeMap;

/// ラベル/アノテーション用の順序付きマップ
pub type Labels = BTreeMap<String, String>;

/// `{app: name}` のラベルを生成
pub fn app_labels(name: &str) -> Labels {
    Labels::from([("app".to_string(), name.to_string())])
}

/// i 番目のポートに付ける名前
pub fn port_name(index: usize) -> String {
    format!("p-{}", index)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectMeta {
    pub name: String,
    #[serde(default, skip_serializing_if = "Labels::is_empty")]
    pub labels: Labels,
}

impl ObjectMeta {
    pub fn labelled(name: &str) -> Self {
        Self {
            name: name.to_string(),
            labels: app_labels(name),
        }
    }
}

/// 1回の変換で生成される Service と Deployment の組
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KubeManifest {
    pub service: Service,
    pub deployment: Deployment,
}

impl KubeManifest {
    /// ContainerCommand から Service と Deployment を導出する
    ///
    /// `name` は解決済みの名前（`--name` または生成された識別子）。
    #[tracing::instrument(skip(command, schema))]
    pub fn from_command(command: &ContainerCommand, name: &str, schema: &SchemaVersions) -> Self {
        Self {
            service: Service::from_command(command, name, schema),
            deployment: Deployment::from_command(command, name, schema),
        }
    }

    /// Service、`---`、Deployment の順に YAML を出力する
    pub fn to_yaml(&self) -> Result<String> {
        let service = serde_yaml::to_string(&self.service)?;
        let deployment = serde_yaml::to_string(&self.deployment)?;
        Ok(format!("{}---\n{}", service, deployment))
    }
}
