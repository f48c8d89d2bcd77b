//! `wrapgen.toml`: generator settings plus the escape and ambiguity lists.

use std::{path::Path, str::FromStr};

use miette::SourceSpan;
use serde::Deserialize;
use wrapgen_codegen::{EngineConfig, Registry};

use crate::{Error, Result, error::SourceContext};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "wrapgen.toml";

/// Root of `wrapgen.toml`. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub escape: EscapeConfig,

    #[serde(default)]
    pub ambiguity: AmbiguityConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Full C-level name of the class every other class depends on
    pub hub_class: Option<String>,
    /// C header included by every implementation unit
    pub c_header: Option<String>,
    /// Filename of the aggregate header
    pub aggregate_header: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EscapeConfig {
    #[serde(default)]
    pub symbols: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AmbiguityConfig {
    #[serde(default)]
    pub types: Vec<String>,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, CONFIG_FILENAME)
    }
}

impl Config {
    /// Parse a wrapgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_config(&content, &path.display().to_string())
    }

    /// Parse a wrapgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }

    /// The immutable settings handed to the engine.
    pub fn engine_config(&self) -> EngineConfig {
        let registry = Registry::new()
            .escape(self.escape.symbols.iter().cloned())
            .ambiguous(self.ambiguity.types.iter().cloned());
        let mut config = EngineConfig::new(registry);
        if let Some(hub) = &self.generator.hub_class {
            config = config.hub_class(hub.clone());
        }
        if let Some(header) = &self.generator.c_header {
            config = config.c_header(header.clone());
        }
        if let Some(filename) = &self.generator.aggregate_header {
            config = config.aggregate_header(filename.clone());
        }
        config
    }
}

/// Parse a configuration from content with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| ctx.config_error(e))?;
    validate_config(&config, &ctx)?;
    Ok(config)
}

fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    check_duplicates(&config.escape.symbols, "escape.symbols", ctx)?;
    check_duplicates(&config.ambiguity.types, "ambiguity.types", ctx)?;

    let generator = &config.generator;
    for (key, value) in [
        ("hub_class", &generator.hub_class),
        ("c_header", &generator.c_header),
        ("aggregate_header", &generator.aggregate_header),
    ] {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            let message = format!("generator.{} cannot be empty", key);
            return Err(match find_key_span(ctx.src(), key) {
                Some(span) => ctx.validation_error_at(message, span),
                None => ctx.validation_error(message),
            });
        }
    }
    Ok(())
}

fn check_duplicates(entries: &[String], list: &str, ctx: &SourceContext) -> Result<()> {
    for (i, entry) in entries.iter().enumerate() {
        if entries[..i].contains(entry) {
            let spans = find_string_spans(ctx.src(), entry);
            return Err(ctx.duplicate_error(
                entry.as_str(),
                list,
                spans.first().copied(),
                spans.get(1).copied(),
            ));
        }
    }
    Ok(())
}

/// Spans of every quoted occurrence of `value` in the TOML source.
fn find_string_spans(src: &str, value: &str) -> Vec<SourceSpan> {
    let mut spans = Vec::new();
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        for (pos, _) in src.match_indices(&pattern) {
            // +1 to skip the opening quote
            spans.push(SourceSpan::from((pos + 1, value.len())));
        }
    }
    spans.sort_by_key(|span| span.offset());
    spans
}

/// Span of a `key =` assignment in the TOML source.
fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    src.lines()
        .scan(0, |offset, line| {
            let start = *offset;
            *offset += line.len() + 1;
            Some((start, line))
        })
        .find_map(|(start, line)| {
            let trimmed = line.trim_start();
            let rest = trimmed.strip_prefix(key)?;
            rest.trim_start().starts_with('=').then(|| {
                let indent = line.len() - trimmed.len();
                SourceSpan::from((start + indent, key.len()))
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
[generator]
hub_class = "LinphoneCore"
c_header = "coreapi/linphonecore.h"
aggregate_header = "linphone.hh"

[escape]
symbols = ["linphone_core_get_default_proxy", "LinphoneBuffer"]

[ambiguity]
types = ["LinphonePayloadType"]
"#;

    #[test]
    fn test_parse_full_config() {
        let config: Config = FULL.parse().unwrap();
        assert_eq!(config.generator.hub_class.as_deref(), Some("LinphoneCore"));
        assert_eq!(config.escape.symbols.len(), 2);
        assert_eq!(config.ambiguity.types, vec!["LinphonePayloadType"]);
    }

    #[test]
    fn test_engine_config() {
        let config: Config = FULL.parse().unwrap();
        let engine = config.engine_config();

        assert!(engine.is_hub("LinphoneCore"));
        assert!(engine.registry.is_escaped("LinphoneBuffer"));
        assert!(engine.registry.is_escaped("linphone_core_get_default_proxy"));
        assert_eq!(
            engine.registry.ambiguous_types().collect::<Vec<_>>(),
            vec!["LinphonePayloadType"]
        );
        assert_eq!(engine.c_header, "coreapi/linphonecore.h");
        assert_eq!(engine.aggregate_header, "linphone.hh");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = "".parse().unwrap();
        let engine = config.engine_config();

        assert_eq!(engine.hub_class, None);
        assert_eq!(engine, EngineConfig::default());
    }

    #[test]
    fn test_duplicate_escape_entry() {
        let src = r#"
[escape]
symbols = ["LinphoneBuffer", "linphone_core_new", "LinphoneBuffer"]
"#;
        let err = src.parse::<Config>().unwrap_err();
        match err.as_ref() {
            Error::DuplicateSymbol {
                symbol,
                list,
                first_span: Some(first),
                second_span: Some(second),
                ..
            } => {
                assert_eq!(symbol, "LinphoneBuffer");
                assert_eq!(list, "escape.symbols");
                assert_eq!(&src[first.offset()..first.offset() + first.len()], "LinphoneBuffer");
                assert!(second.offset() > first.offset());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_ambiguous_type() {
        let src = "[ambiguity]\ntypes = ['LinphoneCall', 'LinphoneCall']\n";
        let err = src.parse::<Config>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "'LinphoneCall' is listed twice in ambiguity.types"
        );
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let err = "[escapes]\nsymbols = []\n".parse::<Config>().unwrap_err();
        assert!(matches!(*err, Error::ParseConfig { .. }));
    }

    #[test]
    fn test_empty_hub_class() {
        let src = "[generator]\nhub_class = \"\"\n";
        let err = src.parse::<Config>().unwrap_err();
        match err.as_ref() {
            Error::Validation { span, message, .. } => {
                assert_eq!(message, "generator.hub_class cannot be empty");
                assert_eq!(*span, Some(SourceSpan::from((12, 9))));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, FULL).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.generator.aggregate_header.as_deref(), Some("linphone.hh"));

        let missing = Config::from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(*missing, Error::Io { .. }));
    }
}
