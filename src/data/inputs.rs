//! Readers for textual address lists (files and stdin)

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Splits address list content into tokens
/// Format: addresses separated by whitespace or commas, `#` starts a comment
pub fn parse_address_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default())
        .flat_map(|line| line.split(|c: char| c.is_whitespace() || c == ','))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads an address list file
pub fn read_address_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read address file {}", path.display()))?;

    Ok(parse_address_list(&content))
}

/// Reads an address list from stdin until EOF
pub fn read_stdin() -> Result<Vec<String>> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read addresses from stdin")?;

    Ok(parse_address_list(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address_list_lines() {
        let content = "8.8.8.8\n192.168.1.1\nfd00::1\n";
        assert_eq!(parse_address_list(content), vec!["8.8.8.8", "192.168.1.1", "fd00::1"]);
    }

    #[test]
    fn test_parse_address_list_comments_and_blanks() {
        let content = "# upstream resolvers\n\n8.8.8.8  # google\n   \n# 10.0.0.1\n1.1.1.1\n";
        assert_eq!(parse_address_list(content), vec!["8.8.8.8", "1.1.1.1"]);
    }

    #[test]
    fn test_parse_address_list_separators() {
        let content = "8.8.8.8, 1.1.1.1,::1\t10.0.0.1";
        assert_eq!(
            parse_address_list(content),
            vec!["8.8.8.8", "1.1.1.1", "::1", "10.0.0.1"]
        );
    }

    #[test]
    fn test_parse_address_list_keeps_garbage_tokens() {
        // Unparsable tokens are still reported, as invalid addresses
        assert_eq!(parse_address_list("example.com"), vec!["example.com"]);
        assert!(parse_address_list("").is_empty());
    }

    #[test]
    fn test_read_address_file_missing() {
        let result = read_address_file(Path::new("/nonexistent/addr_guard/list.txt"));
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("Failed to read address file"));
    }

    #[test]
    fn test_read_address_file() {
        let path = std::env::temp_dir().join(format!("addr_guard_list_{}.txt", std::process::id()));
        fs::write(&path, "8.8.8.8\n# comment\n10.0.0.1, fd00::1\n").unwrap();

        let tokens = read_address_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(tokens, vec!["8.8.8.8", "10.0.0.1", "fd00::1"]);
    }
}
