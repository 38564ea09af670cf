use super::args::FlagMap;
use super::env::parse_env_var;
use super::port::parse_port_mapping_with_default;
use crate::error::{ValidationError, ValidationResult, rules};
use crate::model::{ContainerCommand, Protocol, check_name, is_dns_label};
use std::collections::HashSet;
use tracing::{debug, warn};

const OPERATION: &str = "build_command";

pub const PORT_FLAGS: &[&str] = &["p", "port", "publish"];
pub const ENV_FLAGS: &[&str] = &["e", "env"];
pub const NAME_FLAGS: &[&str] = &["name"];
pub const DETACH_FLAGS: &[&str] = &["d", "detach"];

/// フラグマップから ContainerCommand を組み立てる
///
/// ポートと環境変数は生の文字列で重複を除いてからパースする。
pub fn build_command(
    flags: &FlagMap,
    default_protocol: Protocol,
) -> ValidationResult<ContainerCommand> {
    let ports = dedup_tokens(flags.values(PORT_FLAGS))
        .into_iter()
        .map(|token| parse_port_mapping_with_default(token, default_protocol))
        .collect::<ValidationResult<Vec<_>>>()?;

    let env_vars = dedup_tokens(flags.values(ENV_FLAGS))
        .into_iter()
        .map(parse_env_var)
        .collect::<ValidationResult<Vec<_>>>()?;

    let name = flags
        .last_value(NAME_FLAGS)
        .filter(|name| !name.is_empty())
        .map(str::to_string);
    if let Some(name) = &name {
        check_name(name, OPERATION)?;
        if !is_dns_label(name) {
            warn!(
                name = %name,
                "Container name is not a valid DNS-1035 label; the cluster may reject it"
            );
        }
    }

    let daemon = flags.is_enabled(DETACH_FLAGS);

    let image = flags
        .positionals()
        .last()
        .map(|image| image.trim_end_matches(['\n', '\r']))
        .filter(|image| !image.is_empty())
        .ok_or(ValidationError::MissingImage {
            operation: OPERATION,
            parameter: "image",
            rule: rules::IMAGE_IS_PRESENT,
        })?;

    debug!(
        ports = ports.len(),
        env_vars = env_vars.len(),
        image = %image,
        "Built container command"
    );

    Ok(ContainerCommand::new(name, daemon, ports, env_vars, image))
}

/// コマンドテキストを ContainerCommand に変換する
#[tracing::instrument(skip(text))]
pub fn parse_command_text(
    text: &str,
    default_protocol: Protocol,
) -> ValidationResult<ContainerCommand> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyInput {
            operation: OPERATION,
            parameter: "cmdText",
            rule: rules::TEXT_IS_NOT_EMPTY,
        });
    }

    let flags = FlagMap::from_command_text(text);
    debug!(?flags, "Parsed command flags");
    build_command(&flags, default_protocol)
}

/// 最初の出現順を保ったまま、完全一致する文字列を取り除く
fn dedup_tokens(tokens: Vec<&str>) -> Vec<&str> {
    let mut seen = HashSet::new();
    tokens.into_iter().filter(|token| seen.insert(*token)).collect()
}
