//! コマンドテキストのトークン分割とフラグ解析

/// 値を取るロングフラグ
const LONG_VALUE_FLAGS: &[&str] = &[
    "port",
    "publish",
    "env",
    "name",
    "volume",
    "network",
    "workdir",
    "user",
    "hostname",
    "entrypoint",
    "env-file",
    "label",
    "memory",
    "restart",
    "platform",
    "cpus",
    "mount",
    "add-host",
    "expose",
    "log-driver",
    "device",
    "link",
    "dns",
    "cap-add",
    "cap-drop",
    "gpus",
    "pull",
    "shm-size",
    "ulimit",
    "stop-signal",
];

/// 値を取るショートフラグ
const SHORT_VALUE_FLAGS: &[char] = &['p', 'e', 'v', 'w', 'u', 'h', 'l', 'm'];

/// コンテナランタイムとして認識するコマンド名
const RUNTIMES: &[&str] = &["docker", "podman"];

/// コマンドテキストをシェル風に分割する
///
/// 空白で区切り、シングル/ダブルクォートと `\` による行継続を解釈する。
/// 閉じられていないクォートは入力の末尾までを取り込む。
pub fn split_command_text(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match quote {
            Some(q) if c == q => quote = None,
            Some('"') if c == '\\' => {
                // ダブルクォート内では \" と \\ のみエスケープとして扱う
                if let Some(&next) = chars.peek()
                    && matches!(next, '"' | '\\')
                {
                    chars.next();
                    current.push(next);
                } else {
                    current.push(c);
                }
            }
            Some(_) => current.push(c),
            None => match c {
                '\'' | '"' => {
                    quote = Some(c);
                    in_token = true;
                }
                '\\' => match chars.next() {
                    // 行継続
                    Some('\n') => {}
                    Some('\r') => {
                        if chars.peek() == Some(&'\n') {
                            chars.next();
                        }
                    }
                    Some(next) => {
                        current.push(next);
                        in_token = true;
                    }
                    None => {}
                },
                c if c.is_whitespace() => {
                    if in_token {
                        tokens.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                }
                _ => {
                    current.push(c);
                    in_token = true;
                }
            },
        }
    }

    if in_token {
        tokens.push(current);
    }

    tokens
}

/// 先頭の `docker run` / `docker container run` などを取り除く
pub fn strip_invocation_prefix<S: AsRef<str>>(tokens: &[S]) -> &[S] {
    let mut rest = tokens;

    if let Some((first, tail)) = rest.split_first()
        && first.as_ref() == "sudo"
    {
        rest = tail;
    }

    let Some((first, tail)) = rest.split_first() else {
        return rest;
    };
    let program = first.as_ref().rsplit(['/', '\\']).next().unwrap_or_default();
    let program = program.strip_suffix(".exe").unwrap_or(program);
    if !RUNTIMES.contains(&program) {
        return rest;
    }
    rest = tail;

    if let Some((first, tail)) = rest.split_first()
        && first.as_ref() == "container"
    {
        rest = tail;
    }
    if let Some((first, tail)) = rest.split_first()
        && first.as_ref() == "run"
    {
        rest = tail;
    }

    rest
}

/// フラグと位置引数に分解したコマンドライン
///
/// 繰り返し指定されたフラグの値は出現順にすべて保持する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagMap {
    values: Vec<(String, String)>,
    switches: Vec<String>,
    positionals: Vec<String>,
}

impl FlagMap {
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut map = FlagMap::default();
        let mut i = 0;

        while i < tokens.len() {
            let token = tokens[i].as_ref();
            i += 1;

            if token == "--" {
                map.positionals
                    .extend(tokens[i..].iter().map(|t| t.as_ref().to_string()));
                break;
            }

            if let Some(long) = token.strip_prefix("--") {
                if let Some((key, value)) = long.split_once('=') {
                    map.push_value(key, value);
                } else if LONG_VALUE_FLAGS.contains(&long) && i < tokens.len() {
                    map.push_value(long, tokens[i].as_ref());
                    i += 1;
                } else {
                    map.switches.push(long.to_string());
                }
            } else if let Some(cluster) = token.strip_prefix('-')
                && !cluster.is_empty()
            {
                // -d=true のように1文字フラグに = で値を付けた形
                let mut chars = cluster.chars();
                if let (Some(flag), Some('=')) = (chars.next(), chars.next()) {
                    map.push_value(&flag.to_string(), chars.as_str());
                    continue;
                }

                for (offset, c) in cluster.char_indices() {
                    if !SHORT_VALUE_FLAGS.contains(&c) {
                        map.switches.push(c.to_string());
                        continue;
                    }

                    // 値フラグ以降はその値（-p8080:80）、末尾なら次のトークン（-dp 80:80）
                    let rest = &cluster[offset + c.len_utf8()..];
                    let rest = rest.strip_prefix('=').unwrap_or(rest);
                    if !rest.is_empty() {
                        map.push_value(&c.to_string(), rest);
                    } else if i < tokens.len() {
                        map.push_value(&c.to_string(), tokens[i].as_ref());
                        i += 1;
                    } else {
                        map.switches.push(c.to_string());
                    }
                    break;
                }
            } else {
                map.positionals.push(token.to_string());
            }
        }

        map
    }

    /// コマンドテキストを直接解析する
    pub fn from_command_text(text: &str) -> Self {
        let tokens = split_command_text(text);
        Self::from_tokens(strip_invocation_prefix(&tokens))
    }

    fn push_value(&mut self, key: &str, value: &str) {
        self.values.push((key.to_string(), value.to_string()));
    }

    /// 別名をまとめて、出現順に値を返す
    pub fn values(&self, aliases: &[&str]) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(key, _)| aliases.contains(&key.as_str()))
            .map(|(_, value)| value.as_str())
            .collect()
    }

    /// 最後に指定された値
    pub fn last_value(&self, aliases: &[&str]) -> Option<&str> {
        self.values(aliases).last().copied()
    }

    pub fn has_switch(&self, aliases: &[&str]) -> bool {
        self.switches
            .iter()
            .any(|s| aliases.contains(&s.as_str()))
    }

    /// 真偽フラグが有効か
    ///
    /// `--detach=false` のように値付きで指定された場合は最後の値で判定し、
    /// それ以外はスイッチの有無で判定する。
    pub fn is_enabled(&self, aliases: &[&str]) -> bool {
        match self.last_value(aliases) {
            Some(value) => matches!(
                value.to_ascii_lowercase().as_str(),
                "true" | "1" | "yes" | "on"
            ),
            None => self.has_switch(aliases),
        }
    }

    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }
}
