//! コンテナ起動コマンド定義

use super::env::EnvVar;
use super::port::PortMapping;
use crate::error::{ValidationError, ValidationResult, rules};
use serde::Serialize;
use std::path::{Component, Path};

/// docker run コマンドを構造化したもの
///
/// 一度構築したら変更しない。`name` が無い場合は呼び出し側が
/// [`NameGenerator`] で名前を補う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerCommand {
    name: Option<String>,
    daemon: bool,
    ports: Vec<PortMapping>,
    env_vars: Vec<EnvVar>,
    image: String,
}

impl ContainerCommand {
    pub fn new(
        name: Option<String>,
        daemon: bool,
        ports: Vec<PortMapping>,
        env_vars: Vec<EnvVar>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name,
            daemon,
            ports,
            env_vars,
            image: image.into(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn daemon(&self) -> bool {
        self.daemon
    }

    pub fn ports(&self) -> &[PortMapping] {
        &self.ports
    }

    pub fn env_vars(&self) -> &[EnvVar] {
        &self.env_vars
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    /// `--name` があればそれを、無ければ生成した識別子を返す
    pub fn resolve_name(&self, generator: &dyn NameGenerator) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => generator.generate(),
        }
    }
}

/// 名前が指定されなかったときの識別子生成器
pub trait NameGenerator {
    /// 空でない、衝突しにくい識別子を返す
    fn generate(&self) -> String;
}

/// 常に同じ名前を返す生成器
#[derive(Debug, Clone)]
pub struct FixedName(pub String);

impl NameGenerator for FixedName {
    fn generate(&self) -> String {
        self.0.clone()
    }
}

/// DNS-1035 ラベルとして有効か（Service名の制約）
pub fn is_dns_label(name: &str) -> bool {
    let bytes = name.as_bytes();
    !bytes.is_empty()
        && bytes.len() <= 63
        && bytes[0].is_ascii_lowercase()
        && bytes[bytes.len() - 1] != b'-'
        && bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
}

/// 名前が単一の通常パス要素か確認する
///
/// 名前は `<root>/<name>/` として出力先に使われるので、絶対パスや `..`、
/// 区切り文字を含む名前は受け付けない。
pub fn check_name(name: &str, operation: &'static str) -> ValidationResult<()> {
    let mut components = Path::new(name).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );

    if single_normal && !name.contains(['/', '\\']) {
        return Ok(());
    }

    Err(ValidationError::InvalidName {
        operation,
        parameter: "name",
        rule: rules::NAME_IS_SINGLE_COMPONENT,
        value: name.to_string(),
    })
}
