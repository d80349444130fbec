// src/utils.rs
use anyhow::{Context, Result};
use std::path::Path;

/// Normalize a language code. Known aliases map to their two-letter code;
/// anything else passes through lowercased, so a poor-fit code simply yields
/// a later load failure instead of being rejected up front.
pub fn normalize_language(lang: &str) -> String {
    match lang.to_lowercase().as_str() {
        "en" | "english" | "anglais" | "inglese" => "en".to_string(),
        "fr" | "french" | "français" | "francese" => "fr".to_string(),
        "it" | "italian" | "italien" | "italiano" => "it".to_string(),
        other => other.to_string(),
    }
}

/// Collapse every whitespace run to a single underscore. Used to derive the
/// exported artifact name from the personal name.
pub fn collapse_whitespace(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut in_run = false;
    for c in input.chars() {
        if c.is_whitespace() {
            if !in_run {
                result.push('_');
            }
            in_run = true;
        } else {
            result.push(c);
            in_run = false;
        }
    }
    result
}

/// Ensure directory exists
pub async fn ensure_dir_exists(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path)
        .await
        .with_context(|| format!("Failed to create directory: {}", path.display()))
}

/// Read file content as string with proper error context
pub async fn read_file_safe(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Write file content with proper error context
pub async fn write_file_safe(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent).await?;
    }

    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_language() {
        assert_eq!(normalize_language("fr"), "fr");
        assert_eq!(normalize_language("French"), "fr");
        assert_eq!(normalize_language("EN"), "en");
        assert_eq!(normalize_language("Italiano"), "it");
        // Unknown codes pass through to the resource lookup unchanged.
        assert_eq!(normalize_language("de"), "de");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("Jane Q. Public"), "Jane_Q._Public");
        assert_eq!(collapse_whitespace("Jean  Paul\tMartin"), "Jean_Paul_Martin");
        assert_eq!(collapse_whitespace("Solo"), "Solo");
    }
}
