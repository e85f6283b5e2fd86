use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display, EnumString};

/// 日志输出格式，配置中不区分大小写
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq, Display, EnumString, SerializeDisplay, DeserializeFromStr)]
#[strum(ascii_case_insensitive)]
pub enum LogFormat {
    /// 单行，字段紧随消息
    #[default]
    #[strum(serialize = "compact")]
    Compact,
    /// tracing-subscriber 默认的单行格式，带 span 上下文
    #[strum(serialize = "full")]
    Full,
    /// 多行，适合本地调试
    #[strum(serialize = "pretty")]
    Pretty,
    /// 每行一个 JSON 对象，供日志采集
    #[strum(serialize = "json")]
    Json,
}

/// 日志写入目标
///
/// 分页结果常被直接打印到标准输出（如命令行导出），此时日志应写入标准错误。
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq, Display, EnumString, SerializeDisplay, DeserializeFromStr)]
#[strum(ascii_case_insensitive)]
pub enum LogWriter {
    #[default]
    #[strum(serialize = "stdout")]
    Stdout,
    #[strum(serialize = "stderr")]
    Stderr,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use serde_test::{assert_de_tokens, assert_de_tokens_error, assert_tokens, Token};

    use super::*;

    #[test]
    fn format_parse_ignores_case() {
        assert_eq!(LogFormat::from_str("json"), Ok(LogFormat::Json));
        assert_eq!(LogFormat::from_str("JSON"), Ok(LogFormat::Json));
        assert_eq!(LogFormat::from_str("Full"), Ok(LogFormat::Full));
    }

    #[test]
    fn format_serde_uses_lower_case_names() {
        assert_tokens(&LogFormat::Compact, &[Token::Str("compact")]);
        assert_tokens(&LogFormat::Full, &[Token::Str("full")]);
        assert_tokens(&LogFormat::Pretty, &[Token::Str("pretty")]);
        assert_tokens(&LogFormat::Json, &[Token::Str("json")]);
        assert_de_tokens(&LogFormat::Pretty, &[Token::Str("PRETTY")]);
        assert_de_tokens_error::<LogFormat>(&[Token::Str("yaml")], "Matching variant not found");
    }

    #[test]
    fn writer_serde() {
        assert_tokens(&LogWriter::Stdout, &[Token::Str("stdout")]);
        assert_tokens(&LogWriter::Stderr, &[Token::Str("stderr")]);
        assert_de_tokens(&LogWriter::Stderr, &[Token::Str("StdErr")]);
        assert_de_tokens_error::<LogWriter>(&[Token::Str("file")], "Matching variant not found");
    }
}
