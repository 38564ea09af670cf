//! マニフェスト生成で使う固定のスキーマ定数

use serde::{Deserialize, Serialize};

pub const SERVICE_KIND: &str = "Service";
pub const DEPLOYMENT_KIND: &str = "Deployment";
pub const PIPELINE_KIND: &str = "Config";

pub const DEFAULT_SERVICE_API_VERSION: &str = "v1";
pub const DEFAULT_DEPLOYMENT_API_VERSION: &str = "apps/v1";
pub const DEFAULT_PIPELINE_API_VERSION: &str = "skaffold/v2beta29";

/// ヘッドレスサービスの clusterIP
pub const HEADLESS_CLUSTER_IP: &str = "None";

/// Deployment のレプリカ数（固定）
pub const REPLICAS: u32 = 1;

/// 出力ファイル名
pub const SERVICE_MANIFEST_FILE: &str = "service.yml";
pub const PIPELINE_FILE: &str = "skaffold.yml";

/// 各ドキュメントの apiVersion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SchemaVersions {
    pub service_api_version: String,
    pub deployment_api_version: String,
    pub pipeline_api_version: String,
}

impl Default for SchemaVersions {
    fn default() -> Self {
        Self {
            service_api_version: DEFAULT_SERVICE_API_VERSION.to_string(),
            deployment_api_version: DEFAULT_DEPLOYMENT_API_VERSION.to_string(),
            pipeline_api_version: DEFAULT_PIPELINE_API_VERSION.to_string(),
        }
    }
}
