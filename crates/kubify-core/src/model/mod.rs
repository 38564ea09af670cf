//! モデル定義
//!
//! docker run コマンドを構造化したドメインモデルを定義します。

mod command;
mod env;
mod port;

// Re-exports
pub use command::*;
pub use env::*;
pub use port::*;
