use crate::archive::error::ArchiveError;
use log::{info, warn};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tokio::task;
use zip::result::ZipError;
use zip::ZipArchive;

/// Removes every regular file directly inside `dir`.
///
/// Best effort: failures are logged and skipped. Returns the number of files removed.
pub async fn clear_extraction_dir(dir: &Path) -> usize {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Could not list '{}' for cleanup: {}", dir.display(), e);
            return 0;
        }
    };

    let mut removed = 0;
    loop {
        let entry = match entries.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(e) => {
                warn!("Could not list '{}' for cleanup: {}", dir.display(), e);
                break;
            }
        };
        let path = entry.path();
        match entry.file_type().await {
            Ok(file_type) if file_type.is_file() => {}
            Ok(_) => continue,
            Err(e) => {
                warn!("Could not inspect '{}': {}", path.display(), e);
                continue;
            }
        }
        match tokio::fs::remove_file(&path).await {
            Ok(()) => removed += 1,
            Err(e) => warn!("Could not remove stale file '{}': {}", path.display(), e),
        }
    }
    removed
}

/// Extracts every entry of the zip archive at `archive` into `destination`
/// on a blocking task. Returns the number of entries in the archive.
pub async fn extract_archive(archive: &Path, destination: &Path) -> Result<usize, ArchiveError> {
    let archive_path = archive.to_path_buf();
    let destination_path = destination.to_path_buf();

    let entries = task::spawn_blocking(move || {
        let file =
            File::open(&archive_path).map_err(|e| ArchiveError::ArchiveRead(archive_path.clone(), e))?;
        let mut zip = ZipArchive::new(file).map_err(|e| match e {
            ZipError::Io(e) => ArchiveError::ArchiveRead(archive_path.clone(), e),
            other => ArchiveError::CorruptArchive(archive_path.clone(), other),
        })?;
        let entries = zip.len();
        zip.extract(&destination_path).map_err(|e| match e {
            ZipError::Io(e) => ArchiveError::ExtractIo(destination_path.clone(), e),
            other => ArchiveError::CorruptArchive(archive_path.clone(), other),
        })?;
        Ok::<usize, ArchiveError>(entries)
    })
    .await??;

    info!(
        "Extracted {} entries from {} into {}",
        entries,
        archive.display(),
        destination.display()
    );
    Ok(entries)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// Finds the payload among the files directly inside `dir`.
///
/// A single file with `extension` is the payload. With several, the one whose
/// stem equals `archive_stem` wins; otherwise the result is ambiguous.
/// The returned path is canonical.
pub async fn locate_payload(
    dir: &Path,
    archive_stem: &str,
    extension: &str,
) -> Result<PathBuf, ArchiveError> {
    let io_err = |e: io::Error| ArchiveError::ExtractIo(dir.to_path_buf(), e);

    let mut entries = tokio::fs::read_dir(dir).await.map_err(io_err)?;
    let mut candidates = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
        let path = entry.path();
        if entry.file_type().await.map_err(io_err)?.is_file() && has_extension(&path, extension) {
            candidates.push(path);
        }
    }
    candidates.sort();

    let payload = match candidates.len() {
        0 => return Err(ArchiveError::PayloadNotFound(dir.to_path_buf())),
        1 => candidates.remove(0),
        _ => {
            let named_after_archive = candidates
                .iter()
                .position(|path| path.file_stem().is_some_and(|stem| stem == archive_stem));
            match named_after_archive {
                Some(index) => candidates.swap_remove(index),
                None => {
                    return Err(ArchiveError::AmbiguousPayload {
                        dir: dir.to_path_buf(),
                        candidates,
                    })
                }
            }
        }
    };

    tokio::fs::canonicalize(&payload).await.map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use crate::testing::zip_bytes;
    use tempfile::TempDir;

    async fn write_archive(dir: &Path, name: &str, files: &[(&str, &str)]) -> io::Result<PathBuf> {
        let path = dir.join(name);
        tokio::fs::write(&path, zip_bytes(files)).await?;
        Ok(path)
    }

    #[tokio::test]
    async fn test_extract_and_locate_single_payload() -> Result<(), Box<dyn std::error::Error>> {
        let scratch = TempDir::new()?;
        let out = scratch.path().join("out");
        tokio::fs::create_dir_all(&out).await?;
        let archive = write_archive(
            scratch.path(),
            "City_TMYx.zip",
            &[("City_TMYx.epw", "LOCATION,City"), ("City_TMYx.stat", "stats")],
        )
        .await?;

        assert_eq!(extract_archive(&archive, &out).await?, 2);
        let payload = locate_payload(&out, "City_TMYx", "epw").await?;
        assert!(payload.is_absolute());
        assert_eq!(payload.file_name().unwrap(), "City_TMYx.epw");
        assert_eq!(tokio::fs::read_to_string(&payload).await?, "LOCATION,City");
        Ok(())
    }

    #[tokio::test]
    async fn test_extension_is_case_insensitive() -> Result<(), Box<dyn std::error::Error>> {
        let scratch = TempDir::new()?;
        tokio::fs::write(scratch.path().join("WEATHER.EPW"), "x").await?;
        let payload = locate_payload(scratch.path(), "whatever", "epw").await?;
        assert_eq!(payload.file_name().unwrap(), "WEATHER.EPW");
        Ok(())
    }

    #[tokio::test]
    async fn test_several_payloads_prefer_archive_stem() -> Result<(), Box<dyn std::error::Error>> {
        let scratch = TempDir::new()?;
        tokio::fs::write(scratch.path().join("A_TMYx.epw"), "a").await?;
        tokio::fs::write(scratch.path().join("B_TMYx.epw"), "b").await?;

        let payload = locate_payload(scratch.path(), "B_TMYx", "epw").await?;
        assert_eq!(payload.file_name().unwrap(), "B_TMYx.epw");

        let err = locate_payload(scratch.path(), "C_TMYx", "epw").await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::AmbiguousPayload);
        match err {
            ArchiveError::AmbiguousPayload { candidates, .. } => assert_eq!(candidates.len(), 2),
            other => panic!("unexpected error: {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_payload() -> Result<(), Box<dyn std::error::Error>> {
        let scratch = TempDir::new()?;
        tokio::fs::write(scratch.path().join("readme.txt"), "no weather here").await?;
        let err = locate_payload(scratch.path(), "City", "epw").await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::PayloadNotFound);
        Ok(())
    }

    #[tokio::test]
    async fn test_corrupt_archive() -> Result<(), Box<dyn std::error::Error>> {
        let scratch = TempDir::new()?;
        let archive = scratch.path().join("broken.zip");
        tokio::fs::write(&archive, "this is not a zip file\n".repeat(16)).await?;

        let err = extract_archive(&archive, scratch.path()).await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::CorruptArchive);
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_archive_file() -> Result<(), Box<dyn std::error::Error>> {
        let scratch = TempDir::new()?;
        let err = extract_archive(&scratch.path().join("absent.zip"), scratch.path())
            .await
            .unwrap_err();
        assert!(matches!(err, ArchiveError::ArchiveRead(..)));
        Ok(())
    }

    #[tokio::test]
    async fn test_clear_removes_files_only() -> Result<(), Box<dyn std::error::Error>> {
        let scratch = TempDir::new()?;
        tokio::fs::write(scratch.path().join("old.epw"), "stale").await?;
        tokio::fs::write(scratch.path().join("old.stat"), "stale").await?;
        tokio::fs::create_dir(scratch.path().join("nested")).await?;

        assert_eq!(clear_extraction_dir(scratch.path()).await, 2);
        assert!(!scratch.path().join("old.epw").exists());
        assert!(scratch.path().join("nested").is_dir());
        assert_eq!(clear_extraction_dir(&scratch.path().join("absent")).await, 0);
        Ok(())
    }
}
