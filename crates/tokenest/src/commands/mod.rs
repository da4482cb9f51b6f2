pub mod check;
pub mod count;
pub mod explain;
pub mod slice;
pub mod split;
pub mod version;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read the whole input text from a file, or from stdin when no file is given
pub fn read_input(file: Option<&Path>) -> Result<String> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed reading input file: {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed reading stdin")?;
            buffer
        }
    };
    tracing::debug!(bytes = text.len(), "read input");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_input_from_file() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("input.txt");
        std::fs::write(&path, "Grüße aus Köln").expect("write");
        assert_eq!(read_input(Some(&path)).unwrap(), "Grüße aus Köln");
    }

    #[test]
    fn test_read_input_missing_file() {
        let tmp = TempDir::new().expect("tmp");
        let err = read_input(Some(&tmp.path().join("nope.txt"))).unwrap_err();
        assert!(err.to_string().contains("Failed reading input file"));
    }
}
