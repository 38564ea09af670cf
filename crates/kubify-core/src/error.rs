use thiserror::Error;

/// バリデーションエラーの種別
///
/// 呼び出し側はメッセージではなくこの種別で分岐する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyInput,
    MalformedAssignment,
    InvalidPortNumber,
    UnsupportedProtocol,
    MissingImage,
    InvalidName,
}

/// コマンドテキストのバリデーションエラー
///
/// どのエラーも発生元の操作名、問題のパラメータ名、ルール識別子を持つ。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("空の入力は変換できません ({operation}: {parameter}, rule={rule})")]
    EmptyInput {
        operation: &'static str,
        parameter: &'static str,
        rule: &'static str,
    },

    #[error(
        "環境変数の指定が不正です: '{input}' ({operation}: {parameter}, rule={rule})\n\nヒント:\n  • KEY=VALUE 形式で指定してください"
    )]
    MalformedAssignment {
        operation: &'static str,
        parameter: &'static str,
        rule: &'static str,
        input: String,
    },

    #[error(
        "ポート番号が不正です: '{value}' ({operation}: {parameter}, rule={rule})\n\nヒント:\n  • containerPort:hostPort[/protocol] 形式で 1-65535 の数値を指定してください"
    )]
    InvalidPortNumber {
        operation: &'static str,
        parameter: &'static str,
        rule: &'static str,
        value: String,
    },

    #[error(
        "未対応のプロトコルです: '{value}' ({operation}: {parameter}, rule={rule})\n\nヒント:\n  • tcp または udp を指定してください"
    )]
    UnsupportedProtocol {
        operation: &'static str,
        parameter: &'static str,
        rule: &'static str,
        value: String,
    },

    #[error(
        "イメージが指定されていません ({operation}: {parameter}, rule={rule})\n\nヒント:\n  • docker run ... <image> のようにコマンドの末尾にイメージを指定してください"
    )]
    MissingImage {
        operation: &'static str,
        parameter: &'static str,
        rule: &'static str,
    },

    #[error(
        "コンテナ名が不正です: '{value}' ({operation}: {parameter}, rule={rule})\n\nヒント:\n  • 名前は出力先ディレクトリ名になるため、'/' や '..' を含めないでください"
    )]
    InvalidName {
        operation: &'static str,
        parameter: &'static str,
        rule: &'static str,
        value: String,
    },
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput { .. } => ErrorKind::EmptyInput,
            Self::MalformedAssignment { .. } => ErrorKind::MalformedAssignment,
            Self::InvalidPortNumber { .. } => ErrorKind::InvalidPortNumber,
            Self::UnsupportedProtocol { .. } => ErrorKind::UnsupportedProtocol,
            Self::MissingImage { .. } => ErrorKind::MissingImage,
            Self::InvalidName { .. } => ErrorKind::InvalidName,
        }
    }

    /// エラーを発生させた操作名
    pub fn operation(&self) -> &'static str {
        match self {
            Self::EmptyInput { operation, .. }
            | Self::MalformedAssignment { operation, .. }
            | Self::InvalidPortNumber { operation, .. }
            | Self::UnsupportedProtocol { operation, .. }
            | Self::MissingImage { operation, .. }
            | Self::InvalidName { operation, .. } => operation,
        }
    }

    /// 問題のあったパラメータ名
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::EmptyInput { parameter, .. }
            | Self::MalformedAssignment { parameter, .. }
            | Self::InvalidPortNumber { parameter, .. }
            | Self::UnsupportedProtocol { parameter, .. }
            | Self::MissingImage { parameter, .. }
            | Self::InvalidName { parameter, .. } => parameter,
        }
    }

    /// 違反したバリデーションルールの識別子
    pub fn rule(&self) -> &'static str {
        match self {
            Self::EmptyInput { rule, .. }
            | Self::MalformedAssignment { rule, .. }
            | Self::InvalidPortNumber { rule, .. }
            | Self::UnsupportedProtocol { rule, .. }
            | Self::MissingImage { rule, .. }
            | Self::InvalidName { rule, .. } => rule,
        }
    }
}

/// バリデーションルール識別子
pub mod rules {
    pub const TEXT_IS_NOT_EMPTY: &str = "text_isnot_empty";
    pub const ASSIGNMENT_HAS_DELIMITER: &str = "assignment_has_delimiter";
    pub const KEY_IS_NOT_EMPTY: &str = "key_isnot_empty";
    pub const PORT_IS_NUMERIC: &str = "port_is_numeric";
    pub const PROTOCOL_IS_SUPPORTED: &str = "protocol_is_supported";
    pub const IMAGE_IS_PRESENT: &str = "image_is_present";
    pub const NAME_IS_SINGLE_COMPONENT: &str = "name_is_single_component";
}

#[derive(Error, Debug)]
pub enum KubifyError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("YAMLの生成に失敗しました: {0}")]
    Render(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, KubifyError>;

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;
