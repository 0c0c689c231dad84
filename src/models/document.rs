use std::fmt;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::warn;

use crate::{PlagtrackerError, PlagtrackerResult};

/// File extensions the service accepts for upload.
pub const ALLOWED_EXTENSIONS: [&str; 7] = ["doc", "csv", "html", "odt", "rtf", "txt", "docx"];

/// Maximum size of an uploaded document (10 MiB).
pub const MAX_DOCUMENT_SIZE: u64 = 10 * 1024 * 1024;

/// A document ready to be uploaded for checking.
///
/// Construction enforces the upload rules, so a `Document` that exists can
/// always be sent.
#[derive(Clone, PartialEq, Eq)]
pub struct Document {
    file_name: String,
    contents: Vec<u8>,
}

impl Document {
    /// Creates a document from a file name and its raw contents.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFileType` if the extension of `file_name` is not in
    /// [`ALLOWED_EXTENSIONS`], and `FileTooLarge` if `contents` is bigger than
    /// [`MAX_DOCUMENT_SIZE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use plagtracker_client::Document;
    ///
    /// let document = Document::new("essay.txt", "Some essay text")?;
    /// assert_eq!(document.file_name(), "essay.txt");
    ///
    /// assert!(Document::new("essay.pdf", "Some essay text").is_err());
    /// # Ok::<(), plagtracker_client::PlagtrackerError>(())
    /// ```
    pub fn new(file_name: impl Into<String>, contents: impl Into<Vec<u8>>) -> PlagtrackerResult<Self> {
        let file_name = file_name.into();
        let contents = contents.into();

        check_extension(Path::new(&file_name))?;
        check_size(contents.len() as u64)?;

        Ok(Self {
            file_name,
            contents,
        })
    }

    /// Reads a document from disk.
    ///
    /// The extension and the size reported by the file system are checked
    /// before the file is read, so oversized files are never loaded.
    pub async fn from_path(path: impl AsRef<Path>) -> PlagtrackerResult<Self> {
        let path = path.as_ref();
        check_extension(path)?;

        let io_error = |source: std::io::Error| PlagtrackerError::Io {
            path: path.to_path_buf(),
            source,
        };

        let metadata = tokio::fs::metadata(path).await.map_err(io_error)?;
        check_size(metadata.len())?;

        let contents = tokio::fs::read(path).await.map_err(io_error)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self::new(file_name, contents)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Form fields of the upload request.
    pub(crate) fn form_fields(&self) -> [(&'static str, String); 2] {
        [
            ("file[name]", self.file_name.clone()),
            ("file[data]", STANDARD.encode(&self.contents)),
        ]
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("file_name", &self.file_name)
            .field("len", &self.contents.len())
            .finish()
    }
}

/// Returns `true` if documents with this extension can be uploaded.
pub fn is_allowed_extension(extension: &str) -> bool {
    ALLOWED_EXTENSIONS
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(extension))
}

// Everything after the last dot of the file name, so `.txt` has extension `txt`.
fn check_extension(path: &Path) -> PlagtrackerResult<()> {
    let extension = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .and_then(|name| name.rsplit_once('.').map(|(_, ext)| ext.to_string()))
        .unwrap_or_default();

    if is_allowed_extension(&extension) {
        Ok(())
    } else {
        warn!("Rejecting {}: unsupported file type", path.display());
        Err(PlagtrackerError::UnsupportedFileType { extension })
    }
}

fn check_size(size: u64) -> PlagtrackerResult<()> {
    if size > MAX_DOCUMENT_SIZE {
        warn!("Rejecting document of {} bytes: over the upload limit", size);
        return Err(PlagtrackerError::FileTooLarge {
            size,
            max: MAX_DOCUMENT_SIZE,
        });
    }
    Ok(())
}
