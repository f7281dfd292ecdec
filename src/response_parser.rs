//! Helpers for reading reasoning-model output.
//!
//! Reasoning models (o1, DeepSeek-R1 and friends) often wrap their chain of
//! thought in `<think>...</think>` ahead of the answer, and the retrieval layer
//! frequently asks for a list (sub-queries, relevant chunk ids). These helpers
//! are opt-in; adapters never rewrite `ChatResponse::content`.

use crate::error::{LlmError, LlmResult};
use crate::logging::{log_debug, log_warn};

use serde_json::Value;

const THINK_END: &str = "</think>";

/// Parser for free-form LLM output
pub struct ResponseParser;

impl ResponseParser {
    /// Return the text after the first `</think>` tag, trimmed.
    ///
    /// Some hosts drop the opening tag, so only the closing one is looked for.
    /// Text without a closing tag is returned trimmed.
    pub fn strip_reasoning(raw: &str) -> &str {
        match raw.find(THINK_END) {
            Some(end) => raw[end + THINK_END.len()..].trim(),
            None => raw.trim(),
        }
    }

    /// Extract the first list literal from LLM output.
    ///
    /// 1. Try a direct JSON parse
    /// 2. Clean code fences and retry
    /// 3. Extract the first balanced `[...]` from mixed content
    /// 4. Accept Python-style single-quoted strings inside that list
    pub fn parse_list_literal(raw: &str) -> LlmResult<Vec<Value>> {
        log_debug!(
            content_length = raw.len(),
            content_preview = %raw.chars().take(200).collect::<String>(),
            "Parsing list literal from LLM output"
        );

        if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(raw) {
            return Ok(items);
        }

        let cleaned = Self::clean_artifacts(raw);
        if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(&cleaned) {
            return Ok(items);
        }

        if let Some(list_str) = Self::extract_list(&cleaned) {
            if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(list_str) {
                return Ok(items);
            }

            let normalized = Self::normalize_single_quotes(list_str);
            if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(&normalized) {
                log_debug!("Parsed list literal after quote normalization");
                return Ok(items);
            }
        }

        let preview = raw.chars().take(200).collect::<String>();
        log_warn!(
            content_preview = %preview,
            "Failed to parse list literal from LLM output"
        );

        Err(LlmError::response_parsing_error(format!(
            "Could not parse a list from: {}{}",
            preview,
            if raw.chars().count() > 200 { "..." } else { "" }
        )))
    }

    /// Remove markdown fences around a payload
    fn clean_artifacts(content: &str) -> String {
        content
            .replace("```json", "")
            .replace("```python", "")
            .replace("```", "")
            .trim()
            .to_string()
    }

    /// First balanced `[...]` slice, ignoring brackets inside strings
    fn extract_list(content: &str) -> Option<&str> {
        let start = content.find('[')?;
        let mut depth = 0usize;
        let mut quote: Option<char> = None;
        let mut escaped = false;

        for (offset, ch) in content[start..].char_indices() {
            if let Some(q) = quote {
                if escaped {
                    escaped = false;
                } else if ch == '\\' {
                    escaped = true;
                } else if ch == q {
                    quote = None;
                }
                continue;
            }

            match ch {
                '"' | '\'' => quote = Some(ch),
                '[' => depth += 1,
                ']' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(&content[start..start + offset + 1]);
                    }
                }
                _ => {}
            }
        }

        None // Unbalanced brackets
    }

    /// Rewrite `'single'` string literals as JSON `"double"` ones
    fn normalize_single_quotes(literal: &str) -> String {
        let mut out = String::with_capacity(literal.len());
        let mut quote: Option<char> = None;
        let mut chars = literal.chars().peekable();

        while let Some(ch) = chars.next() {
            match quote {
                None => {
                    if ch == '\'' || ch == '"' {
                        quote = Some(ch);
                        out.push('"');
                    } else {
                        out.push(ch);
                    }
                }
                Some(q) => {
                    if ch == '\\' {
                        match chars.next() {
                            Some('\'') => out.push('\''),
                            Some(next) => {
                                out.push('\\');
                                out.push(next);
                            }
                            None => out.push('\\'),
                        }
                    } else if ch == q {
                        quote = None;
                        out.push('"');
                    } else if ch == '"' {
                        out.push_str("\\\"");
                    } else {
                        out.push(ch);
                    }
                }
            }
        }

        out
    }
}
