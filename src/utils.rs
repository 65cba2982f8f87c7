use std::io;
use std::path::{Path, PathBuf};

const WORK_DIR_NAME: &str = "epw_finder";

/// `epw_finder` under the platform cache directory, if the platform has one.
pub fn get_work_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join(WORK_DIR_NAME))
}

/// Creates `path` as a directory unless it already is one.
pub async fn ensure_dir_exists(path: &Path) -> io::Result<()> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) => {
            if !metadata.is_dir() {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("'{}' exists but is not a directory", path.display()),
                ));
            }
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("Creating work directory: {}", path.display());
            tokio::fs::create_dir_all(path).await
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_ensure_dir_exists_creates_nested() -> io::Result<()> {
        let scratch = TempDir::new()?;
        let nested = scratch.path().join("a").join("b");
        ensure_dir_exists(&nested).await?;
        assert!(nested.is_dir());
        ensure_dir_exists(&nested).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_ensure_dir_exists_rejects_file() -> io::Result<()> {
        let scratch = TempDir::new()?;
        let file = scratch.path().join("file");
        tokio::fs::write(&file, "x").await?;
        assert!(ensure_dir_exists(&file).await.is_err());
        Ok(())
    }
}
