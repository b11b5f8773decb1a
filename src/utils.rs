//! File system helpers.

use std::error::Error;
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Ensure the directory that will hold `output` exists and is writable.
///
/// Creates the directory if needed, then creates and removes a probe file
/// next to where the output will go. Run before crawling so a bad output
/// path fails fast instead of after every article has been fetched.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or written to.
#[instrument(level = "info", skip_all, fields(path = %output.display()))]
pub async fn ensure_writable_output(output: &Path) -> Result<(), Box<dyn Error>> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).await?;

    // A plain sync create gives the simplest error surface.
    let probe_path = dir.join("..__probe_write__");
    stdfs::File::create(&probe_path)?;
    let _ = stdfs::remove_file(&probe_path);
    info!("Output directory is writable");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ensure_writable_output_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("a").join("b").join("articles.json");

        ensure_writable_output(&output).await.unwrap();

        assert!(output.parent().unwrap().is_dir());
        assert!(!output.parent().unwrap().join("..__probe_write__").exists());
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_ensure_writable_output_bare_filename() {
        ensure_writable_output(Path::new("articles.json")).await.unwrap();
    }

    #[tokio::test]
    async fn test_ensure_writable_output_rejects_file_as_dir() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();

        let output = blocker.join("articles.json");
        assert!(ensure_writable_output(&output).await.is_err());
    }
}
