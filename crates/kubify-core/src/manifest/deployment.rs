//! Deployment マニフェスト

use super::{Labels, ObjectMeta, app_labels, port_name};
use crate::model::{ContainerCommand, EnvVar};
use crate::schema::{DEPLOYMENT_KIND, REPLICAS, SchemaVersions};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: DeploymentSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentSpec {
    pub replicas: u32,
    pub selector: LabelSelector,
    pub template: PodTemplate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSelector {
    pub match_labels: Labels,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PodTemplate {
    pub metadata: TemplateMeta,
    pub spec: PodSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateMeta {
    pub labels: Labels,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PodSpec {
    pub containers: Vec<Container>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Container {
    pub name: String,
    pub image: String,
    pub ports: Vec<ContainerPort>,
    pub env: Vec<EnvEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerPort {
    pub name: String,
    pub container_port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvEntry {
    pub name: String,
    pub value: String,
}

impl From<&EnvVar> for EnvEntry {
    fn from(var: &EnvVar) -> Self {
        Self {
            name: var.key.clone(),
            value: var.value.clone(),
        }
    }
}

impl Deployment {
    pub fn from_command(command: &ContainerCommand, name: &str, schema: &SchemaVersions) -> Self {
        let ports = command
            .ports()
            .iter()
            .enumerate()
            .map(|(i, mapping)| ContainerPort {
                name: port_name(i),
                container_port: mapping.container_port,
            })
            .collect();

        let container = Container {
            name: name.to_string(),
            image: command.image().to_string(),
            ports,
            env: command.env_vars().iter().map(EnvEntry::from).collect(),
        };

        Self {
            api_version: schema.deployment_api_version.clone(),
            kind: DEPLOYMENT_KIND.to_string(),
            metadata: ObjectMeta::labelled(name),
            spec: DeploymentSpec {
                replicas: REPLICAS,
                selector: LabelSelector {
                    match_labels: app_labels(name),
                },
                template: PodTemplate {
                    metadata: TemplateMeta {
                        labels: app_labels(name),
                    },
                    spec: PodSpec {
                        containers: vec![container],
                    },
                },
            },
        }
    }

    /// Pod テンプレートの先頭のコンテナ
    pub fn container(&self) -> Option<&Container> {
        self.spec.template.spec.containers.first()
    }
}
