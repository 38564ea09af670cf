//! Service マニフェスト

use super::{Labels, ObjectMeta, app_labels, port_name};
use crate::model::{ContainerCommand, Protocol};
use crate::schema::{HEADLESS_CLUSTER_IP, SERVICE_KIND, SchemaVersions};
use serde::Serialize;

/// ヘッドレス Service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: ServiceSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSpec {
    #[serde(rename = "clusterIP")]
    pub cluster_ip: String,
    pub selector: Labels,
    pub ports: Vec<ServicePort>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePort {
    pub name: String,
    /// 公開ポート（hostPort）
    pub port: u16,
    pub protocol: Protocol,
    /// 対応するコンテナポートの名前
    pub target_port: String,
}

impl Service {
    pub fn from_command(command: &ContainerCommand, name: &str, schema: &SchemaVersions) -> Self {
        let ports = command
            .ports()
            .iter()
            .enumerate()
            .map(|(i, mapping)| ServicePort {
                name: port_name(i),
                port: mapping.host_port,
                protocol: mapping.protocol,
                target_port: port_name(i),
            })
            .collect();

        Self {
            api_version: schema.service_api_version.clone(),
            kind: SERVICE_KIND.to_string(),
            metadata: ObjectMeta::labelled(name),
            spec: ServiceSpec {
                cluster_ip: HEADLESS_CLUSTER_IP.to_string(),
                selector: app_labels(name),
                ports,
            },
        }
    }
}
