//! JSON document storage - the whole collection in one file.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use blog_core::domain::Collection;
use blog_core::error::RepoError;
use blog_core::ports::CollectionStorage;

const INDENT: &[u8] = b"    ";

/// Stores the collection as a pretty-printed JSON array.
///
/// Saves go to a sibling `<name>.tmp` file which is fsynced and then renamed
/// over the target, so readers see either the old or the new document.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("storage"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn encode(posts: &Collection) -> Result<Vec<u8>, serde_json::Error> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        posts.serialize(&mut serializer)?;
        Ok(buf)
    }

    async fn write_atomic(&self, bytes: &[u8]) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let tmp = self.tmp_path();
        let result = async {
            let mut file = fs::File::create(&tmp).await?;
            file.write_all(bytes).await?;
            file.sync_all().await?;
            fs::rename(&tmp, &self.path).await?;
            self.sync_parent().await
        }
        .await;

        if result.is_err() {
            // Best effort; the tmp file is already gone if the rename went through.
            let _ = fs::remove_file(&tmp).await;
        }
        result
    }

    /// Persist the rename itself. Directories cannot be opened for syncing on Windows.
    #[cfg(unix)]
    async fn sync_parent(&self) -> io::Result<()> {
        let parent = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => parent,
            None => Path::new("."),
        };
        fs::File::open(parent).await?.sync_all().await
    }

    #[cfg(not(unix))]
    async fn sync_parent(&self) -> io::Result<()> {
        Ok(())
    }

    fn unavailable(&self, action: &str, err: io::Error) -> RepoError {
        RepoError::Unavailable(format!("{action} {}: {err}", self.path.display()))
    }
}

#[async_trait]
impl CollectionStorage for JsonFileStorage {
    async fn load(&self) -> Result<Collection, RepoError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Storage file missing, starting empty");
                return Ok(Collection::new());
            }
            Err(e) => return Err(self.unavailable("read", e)),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Collection::new());
        }

        let posts: Collection = serde_json::from_slice(&bytes).map_err(|e| {
            RepoError::Corrupt(format!("parse {}: {e}", self.path.display()))
        })?;

        tracing::debug!(path = %self.path.display(), posts = posts.len(), "Collection loaded");
        Ok(posts)
    }

    async fn save(&self, posts: &Collection) -> Result<(), RepoError> {
        let bytes = Self::encode(posts).map_err(|e| RepoError::Corrupt(e.to_string()))?;

        self.write_atomic(&bytes)
            .await
            .map_err(|e| self.unavailable("write", e))?;

        tracing::debug!(path = %self.path.display(), posts = posts.len(), "Collection saved");
        Ok(())
    }
}
