use anyhow::anyhow;
use serde::{Deserialize, Serialize};

/// Fallback archive base name, used when the model omits `name` or when
/// sanitizing strips every character out of it.
pub const DEFAULT_BUNDLE_NAME: &str = "discord_bot";

/// One generated source file. `filename` becomes the zip entry path
/// verbatim; `content` is never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub filename: String,
    pub content: String,
}

/// The contract the model is instructed to return:
/// `{"name": "BotName", "files": [{"filename": "...", "content": "..."}]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotBundle {
    #[serde(default = "default_bundle_name")]
    pub name: String,
    #[serde(default)]
    pub files: Vec<GeneratedFile>,
}

fn default_bundle_name() -> String {
    DEFAULT_BUNDLE_NAME.to_string()
}

/// Parse the raw model reply. Strict parse first; on failure strip literal
/// markdown fence markers and parse exactly once more. Anything the second
/// attempt cannot handle propagates to the caller.
pub fn parse_bundle(raw: &str) -> anyhow::Result<BotBundle> {
    match serde_json::from_str::<BotBundle>(raw) {
        Ok(bundle) => Ok(bundle),
        Err(_) => {
            let stripped = raw.replace("```json", "").replace("```", "");
            serde_json::from_str::<BotBundle>(&stripped)
                .map_err(|e| anyhow!("model did not return a valid JSON bundle: {e}"))
        }
    }
}

/// Reduce a suggested archive name to ASCII alphanumerics plus `-`/`_`,
/// preserving order. The result names the download only; entry paths
/// inside the archive are untouched.
pub fn sanitize_name(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        .collect();
    if cleaned.is_empty() {
        DEFAULT_BUNDLE_NAME.to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_json() {
        let raw = r#"{"name":"Welcomer","files":[{"filename":"main.py","content":"print(1)"}]}"#;
        let bundle = parse_bundle(raw).unwrap();
        assert_eq!(bundle.name, "Welcomer");
        assert_eq!(bundle.files.len(), 1);
        assert_eq!(bundle.files[0].filename, "main.py");
        assert_eq!(bundle.files[0].content, "print(1)");
    }

    #[test]
    fn fenced_json_parses_identically() {
        let plain = r#"{"name":"Welcomer","files":[{"filename":"main.py","content":"print(1)"}]}"#;
        let fenced = format!("```json\n{plain}\n```");
        let a = parse_bundle(plain).unwrap();
        let b = parse_bundle(&fenced).unwrap();
        assert_eq!(a.name, b.name);
        assert_eq!(a.files, b.files);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let bundle = parse_bundle("{}").unwrap();
        assert_eq!(bundle.name, DEFAULT_BUNDLE_NAME);
        assert!(bundle.files.is_empty());
    }

    #[test]
    fn garbage_is_an_error_even_after_fence_stripping() {
        assert!(parse_bundle("the model wrote prose instead").is_err());
        assert!(parse_bundle("```json\nnot json either\n```").is_err());
    }

    #[test]
    fn sanitize_filters_to_alphanumeric_dash_underscore() {
        assert_eq!(sanitize_name("My Bot! 2.0"), "MyBot20");
        assert_eq!(sanitize_name("mod-bot_v2"), "mod-bot_v2");
        assert_eq!(sanitize_name("café"), "caf");
    }

    #[test]
    fn sanitize_falls_back_when_nothing_survives() {
        assert_eq!(sanitize_name("!!!"), DEFAULT_BUNDLE_NAME);
        assert_eq!(sanitize_name(""), DEFAULT_BUNDLE_NAME);
    }
}
