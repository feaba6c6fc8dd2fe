//! Common types and data structures

use std::path::Path;
use std::sync::Arc;

/// A file the user picked, held until the next selection replaces it
#[derive(Clone)]
pub struct SelectedFile {
    pub name: String,
    pub mime: Option<&'static str>,
    pub bytes: Arc<[u8]>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        let name = name.into();
        let mime = image::ImageFormat::from_path(&name)
            .ok()
            .map(|f| f.to_mime_type());
        Self {
            name,
            mime,
            bytes: bytes.into(),
        }
    }

    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, bytes))
    }
}

impl std::fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Widget lifecycle, one per converter instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionState {
    Idle,
    FileSelected,
    Converting,
    Converted,
}

/// Output of a finished pipeline run, before it is linked for download
pub struct EncodedWebp {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}
