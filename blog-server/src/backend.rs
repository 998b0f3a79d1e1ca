use std::{
    io,
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
};

use anyhow::Context;
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Where the serialized store document lives
#[async_trait]
pub trait Backend: Send + Sync {
    /// Returns `None` if nothing was ever written
    async fn read(&self) -> anyhow::Result<Option<Vec<u8>>>;

    /// Replaces the whole contents
    async fn write(&self, data: Vec<u8>) -> anyhow::Result<()>;
}

pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: PathBuf) -> FileBackend {
        FileBackend { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

#[async_trait]
impl Backend for FileBackend {
    async fn read(&self) -> anyhow::Result<Option<Vec<u8>>> {
        match tokio::fs::read(&self.path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading store file {:?}", self.path)),
        }
    }

    async fn write(&self, data: Vec<u8>) -> anyhow::Result<()> {
        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, data)
            .await
            .with_context(|| format!("writing temporary store file {:?}", tmp))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("moving {:?} over store file {:?}", tmp, self.path))
    }
}

/// Keeps the document in memory, for tests
#[cfg_attr(not(test), allow(dead_code))]
#[derive(Default)]
pub struct MemoryBackend {
    data: Mutex<Option<Vec<u8>>>,
    writes: AtomicUsize,
}

#[cfg_attr(not(test), allow(dead_code))]
impl MemoryBackend {
    pub fn new() -> MemoryBackend {
        MemoryBackend::default()
    }

    pub fn with_contents(data: impl Into<Vec<u8>>) -> MemoryBackend {
        MemoryBackend {
            data: Mutex::new(Some(data.into())),
            writes: AtomicUsize::new(0),
        }
    }

    pub async fn contents(&self) -> Option<Vec<u8>> {
        self.data.lock().await.clone()
    }

    /// Number of times the document was rewritten
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn read(&self) -> anyhow::Result<Option<Vec<u8>>> {
        Ok(self.data.lock().await.clone())
    }

    async fn write(&self, data: Vec<u8>) -> anyhow::Result<()> {
        *self.data.lock().await = Some(data);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
