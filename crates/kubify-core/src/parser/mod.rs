//! コマンドパーサー
//!
//! docker run 形式のコマンドテキストを ContainerCommand に変換します。
//! トークン分割、ポート、環境変数、コマンド全体の組み立てをモジュールに分離しています。

mod args;
mod command;
mod env;
mod port;

pub use args::{FlagMap, split_command_text, strip_invocation_prefix};
pub use command::{
    DETACH_FLAGS, ENV_FLAGS, NAME_FLAGS, PORT_FLAGS, build_command, parse_command_text,
};
pub use env::parse_env_var;
pub use port::{parse_port_mapping, parse_port_mapping_with_default};

#[cfg(test)]
mod tests;
