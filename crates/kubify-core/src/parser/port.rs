use crate::error::{ValidationError, ValidationResult, rules};
use crate::model::{PortMapping, Protocol};

const OPERATION: &str = "parse_port_mapping";

/// `containerPort:hostPort[/protocol]` をパースする
pub fn parse_port_mapping(text: &str) -> ValidationResult<PortMapping> {
    parse_port_mapping_with_default(text, Protocol::default())
}

/// プロトコル省略時の既定値を指定してパースする
pub fn parse_port_mapping_with_default(
    text: &str,
    default_protocol: Protocol,
) -> ValidationResult<PortMapping> {
    if text.is_empty() {
        return Err(ValidationError::EmptyInput {
            operation: OPERATION,
            parameter: "portMapText",
            rule: rules::TEXT_IS_NOT_EMPTY,
        });
    }

    let (mapping, protocol) = match text.split_once('/') {
        Some((mapping, protocol)) => {
            let protocol =
                Protocol::parse(protocol).ok_or_else(|| ValidationError::UnsupportedProtocol {
                    operation: OPERATION,
                    parameter: "protocol",
                    rule: rules::PROTOCOL_IS_SUPPORTED,
                    value: protocol.to_string(),
                })?;
            (mapping, protocol)
        }
        None => (text, default_protocol),
    };

    let (container, host) = mapping.split_once(':').unwrap_or((mapping, ""));

    Ok(PortMapping {
        container_port: parse_port_number(container, "containerPort")?,
        host_port: parse_port_number(host, "hostPort")?,
        protocol,
    })
}

fn parse_port_number(value: &str, parameter: &'static str) -> ValidationResult<u16> {
    match value.parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(ValidationError::InvalidPortNumber {
            operation: OPERATION,
            parameter,
            rule: rules::PORT_IS_NUMERIC,
            value: value.to_string(),
        }),
    }
}
