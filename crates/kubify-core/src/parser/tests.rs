use super::*;
use crate::error::ErrorKind;
use crate::model::{EnvVar, PortMapping, Protocol};

#[test]
fn test_parse_port_mapping_defaults_to_tcp() {
    let port = parse_port_mapping("8080:80").unwrap();
    assert_eq!(
        port,
        PortMapping {
            container_port: 8080,
            host_port: 80,
            protocol: Protocol::Tcp,
        }
    );
}

#[test]
fn test_parse_port_mapping_with_protocol() {
    let port = parse_port_mapping("5775:5775/udp").unwrap();
    assert_eq!(port.protocol, Protocol::Udp);

    let port = parse_port_mapping("5775:5775/UdP").unwrap();
    assert_eq!(port.protocol, Protocol::Udp);

    let port = parse_port_mapping("53:53/tcp").unwrap();
    assert_eq!(port.protocol, Protocol::Tcp);
}

#[test]
fn test_parse_port_mapping_configured_default() {
    let port = parse_port_mapping_with_default("53:53", Protocol::Udp).unwrap();
    assert_eq!(port.protocol, Protocol::Udp);

    // 明示指定が既定値より優先される
    let port = parse_port_mapping_with_default("53:53/tcp", Protocol::Udp).unwrap();
    assert_eq!(port.protocol, Protocol::Tcp);
}

#[test]
fn test_parse_port_mapping_empty() {
    let err = parse_port_mapping("").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyInput);
    assert_eq!(err.operation(), "parse_port_mapping");
    assert_eq!(err.parameter(), "portMapText");
    assert_eq!(err.rule(), "text_isnot_empty");
}

#[test]
fn test_parse_port_mapping_invalid_numbers() {
    let err = parse_port_mapping("abc:80").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPortNumber);
    assert_eq!(err.parameter(), "containerPort");
    assert_eq!(err.rule(), "port_is_numeric");

    let err = parse_port_mapping("80:http").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPortNumber);
    assert_eq!(err.parameter(), "hostPort");

    // hostPort 省略
    let err = parse_port_mapping("8080").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPortNumber);
    assert_eq!(err.parameter(), "hostPort");

    // 範囲外
    assert_eq!(
        parse_port_mapping("70000:80").unwrap_err().kind(),
        ErrorKind::InvalidPortNumber
    );
    assert_eq!(
        parse_port_mapping("0:80").unwrap_err().kind(),
        ErrorKind::InvalidPortNumber
    );

    // IP アドレス付きは未対応
    assert_eq!(
        parse_port_mapping("127.0.0.1:80:8080").unwrap_err().kind(),
        ErrorKind::InvalidPortNumber
    );
}

#[test]
fn test_parse_port_mapping_unsupported_protocol() {
    let err = parse_port_mapping("80:80/sctp").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedProtocol);
    assert_eq!(err.rule(), "protocol_is_supported");
}

#[test]
fn test_parse_env_var_splits_on_first_equals() {
    let env = parse_env_var("K=V=W").unwrap();
    assert_eq!(env, EnvVar::new("K", "V=W"));

    let env = parse_env_var("EMPTY=").unwrap();
    assert_eq!(env, EnvVar::new("EMPTY", ""));
}

#[test]
fn test_parse_env_var_errors() {
    let err = parse_env_var("").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyInput);
    assert_eq!(err.operation(), "parse_env_var");

    let err = parse_env_var("NO_VALUE").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedAssignment);
    assert_eq!(err.rule(), "assignment_has_delimiter");

    let err = parse_env_var("=value").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedAssignment);
    assert_eq!(err.rule(), "key_isnot_empty");
}

#[test]
fn test_split_command_text_quotes() {
    let tokens = split_command_text(r#"docker run -e "GREETING=hello world" -e 'A=b c' nginx"#);
    assert_eq!(
        tokens,
        vec![
            "docker",
            "run",
            "-e",
            "GREETING=hello world",
            "-e",
            "A=b c",
            "nginx"
        ]
    );
}

#[test]
fn test_split_command_text_line_continuation() {
    let text = "docker run -d \\\n  -p 80:80 \\\r\n  nginx\n";
    let tokens = split_command_text(text);
    assert_eq!(tokens, vec!["docker", "run", "-d", "-p", "80:80", "nginx"]);
}

#[test]
fn test_split_command_text_escaped_quote() {
    let tokens = split_command_text(r#"-e "MSG=say \"hi\"""#);
    assert_eq!(tokens, vec!["-e", r#"MSG=say "hi""#]);
}

#[test]
fn test_strip_invocation_prefix() {
    let tokens = ["docker", "run", "-d", "nginx"];
    assert_eq!(strip_invocation_prefix(&tokens), &["-d", "nginx"]);

    let tokens = ["sudo", "/usr/bin/podman", "container", "run", "nginx"];
    assert_eq!(strip_invocation_prefix(&tokens), &["nginx"]);

    let tokens = ["-p", "80:80", "nginx"];
    assert_eq!(strip_invocation_prefix(&tokens), &["-p", "80:80", "nginx"]);
}

#[test]
fn test_flag_map_collects_repeated_values() {
    let flags = FlagMap::from_tokens(&["-p", "80:80", "--port", "81:81", "-p=82:82", "nginx"]);
    assert_eq!(flags.values(PORT_FLAGS), vec!["80:80", "81:81", "82:82"]);
    assert_eq!(flags.positionals(), &["nginx".to_string()]);
}

#[test]
fn test_flag_map_short_clusters() {
    let flags = FlagMap::from_tokens(&["-dit", "-p8080:80", "-dp", "90:90", "nginx"]);
    assert!(flags.has_switch(DETACH_FLAGS));
    assert!(flags.has_switch(&["i"]));
    assert!(flags.has_switch(&["t"]));
    assert_eq!(flags.values(PORT_FLAGS), vec!["8080:80", "90:90"]);
    assert_eq!(flags.positionals(), &["nginx".to_string()]);
}

#[test]
fn test_flag_map_long_forms() {
    let flags = FlagMap::from_tokens(&[
        "--name",
        "api",
        "--rm",
        "--env=A=1",
        "--volume",
        "/data:/data",
        "--",
        "--not-a-flag",
    ]);
    assert_eq!(flags.last_value(NAME_FLAGS), Some("api"));
    assert!(flags.has_switch(&["rm"]));
    assert_eq!(flags.values(ENV_FLAGS), vec!["A=1"]);
    assert_eq!(flags.values(&["volume"]), vec!["/data:/data"]);
    assert_eq!(flags.positionals(), &["--not-a-flag".to_string()]);
}

#[test]
fn test_parse_command_text_end_to_end() {
    let command = parse_command_text(
        "docker run -d --name=api -p 3000:3000 -e DEBUG=true myorg/api:latest",
        Protocol::Tcp,
    )
    .unwrap();

    assert_eq!(command.name(), Some("api"));
    assert!(command.daemon());
    assert_eq!(
        command.ports(),
        &[PortMapping {
            container_port: 3000,
            host_port: 3000,
            protocol: Protocol::Tcp,
        }]
    );
    assert_eq!(command.env_vars(), &[EnvVar::new("DEBUG", "true")]);
    assert_eq!(command.image(), "myorg/api:latest");
}

#[test]
fn test_parse_command_text_deduplicates_raw_tokens() {
    let text = "docker run -p 8080:80 -p 8080:80 --port 8080:80 nginx";
    let command = parse_command_text(text, Protocol::Tcp).unwrap();
    assert_eq!(command.ports().len(), 1);

    // 生の文字列が異なれば別扱い
    let command =
        parse_command_text("docker run -p 8080:80 -p 8080:80/tcp nginx", Protocol::Tcp).unwrap();
    assert_eq!(command.ports().len(), 2);

    let text = "docker run -e A=1 -e B=2 --env A=1 nginx";
    let command = parse_command_text(text, Protocol::Tcp).unwrap();
    assert_eq!(
        command.env_vars(),
        &[EnvVar::new("A", "1"), EnvVar::new("B", "2")]
    );
}

#[test]
fn test_parse_command_text_preserves_order() {
    let command = parse_command_text(
        "docker run -p 3:3 --port 1:1 -p 2:2 -e Z=1 --env A=2 nginx",
        Protocol::Tcp,
    )
    .unwrap();
    let ports: Vec<u16> = command.ports().iter().map(|p| p.container_port).collect();
    assert_eq!(ports, vec![3, 1, 2]);
    let keys: Vec<&str> = command.env_vars().iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["Z", "A"]);
}

#[test]
fn test_parse_command_text_without_name() {
    let command = parse_command_text("docker run nginx:alpine", Protocol::Tcp).unwrap();
    assert_eq!(command.name(), None);
    assert!(!command.daemon());

    // 空の --name は未指定扱い
    let command = parse_command_text("docker run --name= nginx", Protocol::Tcp).unwrap();
    assert_eq!(command.name(), None);
}

#[test]
fn test_parse_command_text_image_is_last_positional() {
    let command =
        parse_command_text("docker run -it --rm -v /a:/b ubuntu:22.04\n", Protocol::Tcp).unwrap();
    assert_eq!(command.image(), "ubuntu:22.04");
}

#[test]
fn test_parse_command_text_missing_image() {
    let err = parse_command_text("docker run -d -p 80:80", Protocol::Tcp).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingImage);
    assert_eq!(err.operation(), "build_command");
    assert_eq!(err.rule(), "image_is_present");
}

#[test]
fn test_parse_command_text_empty() {
    let err = parse_command_text("   \n", Protocol::Tcp).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyInput);
}

#[test]
fn test_parse_command_text_propagates_token_errors() {
    let err = parse_command_text("docker run -p 80:abc nginx", Protocol::Tcp).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPortNumber);

    let err = parse_command_text("docker run -e BROKEN nginx", Protocol::Tcp).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedAssignment);
}

#[test]
fn test_parse_command_text_rejects_path_like_names() {
    for text in [
        "docker run --name=/tmp/out/hijack -p 80:80 nginx",
        "docker run --name=../../escaped nginx",
        "docker run --name=a/b nginx",
        "docker run --name=.. nginx",
    ] {
        let err = parse_command_text(text, Protocol::Tcp).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidName, "{}", text);
        assert_eq!(err.operation(), "build_command");
        assert_eq!(err.rule(), "name_is_single_component");
    }
}

#[test]
fn test_detach_with_explicit_value() {
    let command = parse_command_text("docker run --detach=true nginx", Protocol::Tcp).unwrap();
    assert!(command.daemon());

    let command = parse_command_text("docker run -d=true nginx", Protocol::Tcp).unwrap();
    assert!(command.daemon());

    let command = parse_command_text("docker run --detach=false nginx", Protocol::Tcp).unwrap();
    assert!(!command.daemon());

    let command = parse_command_text("docker run --detach nginx", Protocol::Tcp).unwrap();
    assert!(command.daemon());
}

#[test]
fn test_flag_map_short_flag_with_equals() {
    let flags = FlagMap::from_tokens(&["-d=true", "-e=A=1", "nginx"]);
    assert!(flags.is_enabled(DETACH_FLAGS));
    assert!(!flags.has_switch(&["u"]));
    assert_eq!(flags.values(ENV_FLAGS), vec!["A=1"]);
    assert_eq!(flags.positionals(), &["nginx".to_string()]);
}
