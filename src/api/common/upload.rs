//
//  onesky-cli
//  api/common/upload.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Content attached to a multipart request body.

use std::fmt;
use std::path::Path;

use reqwest::multipart::Part;
use reqwest::Body;
use tokio::fs::File;
use tokio::io::AsyncRead;
use tokio_util::io::ReaderStream;

use super::ApiError;

/// Multipart field name the platform API reads uploads from.
pub const UPLOAD_FIELD: &str = "file";

/// Content sent under the multipart field [`UPLOAD_FIELD`].
///
/// Files and readers are streamed into the request body rather than read into
/// memory. When the length is known the part is sized, so the request carries a
/// `Content-Length` instead of a chunked body.
///
/// # Example
///
/// ```rust,no_run
/// use onesky_cli::UploadSource;
///
/// # async fn example() -> Result<(), onesky_cli::ApiError> {
/// let upload = UploadSource::open("strings.pot").await?;
/// assert_eq!(upload.file_name(), "strings.pot");
///
/// let generated = UploadSource::from_bytes("en.json", br#"{"hello":"Hello"}"#.to_vec());
/// assert_eq!(generated.content_length(), Some(17));
/// # Ok(())
/// # }
/// ```
pub struct UploadSource {
    file_name: String,
    content: Content,
}

enum Content {
    Stream { body: Body, length: Option<u64> },
    Bytes(Vec<u8>),
}

impl UploadSource {
    /// Opens a local file for upload. The multipart filename is the path's final
    /// component.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`] if the file cannot be opened or its size read.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        let path = path.as_ref();
        let file = File::open(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_file(file_name, file).await
    }

    /// Wraps an already opened file, sized from its metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`] if the file's metadata cannot be read.
    pub async fn from_file(file_name: impl Into<String>, file: File) -> Result<Self, ApiError> {
        let length = file.metadata().await?.len();
        Ok(Self::from_reader_with_length(file_name, file, length))
    }

    /// Streams any async reader. The length is unknown, so the body is chunked.
    pub fn from_reader<R>(file_name: impl Into<String>, reader: R) -> Self
    where
        R: AsyncRead + Send + Sync + 'static,
    {
        Self::streamed(file_name, reader, None)
    }

    /// Streams an async reader that yields exactly `length` bytes.
    pub fn from_reader_with_length<R>(file_name: impl Into<String>, reader: R, length: u64) -> Self
    where
        R: AsyncRead + Send + Sync + 'static,
    {
        Self::streamed(file_name, reader, Some(length))
    }

    /// Uploads content already held in memory.
    pub fn from_bytes(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content: Content::Bytes(bytes.into()),
        }
    }

    fn streamed<R>(file_name: impl Into<String>, reader: R, length: Option<u64>) -> Self
    where
        R: AsyncRead + Send + Sync + 'static,
    {
        Self {
            file_name: file_name.into(),
            content: Content::Stream {
                body: Body::wrap_stream(ReaderStream::new(reader)),
                length,
            },
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Size of the content, when known.
    pub fn content_length(&self) -> Option<u64> {
        match &self.content {
            Content::Stream { length, .. } => *length,
            Content::Bytes(bytes) => Some(bytes.len() as u64),
        }
    }

    pub(crate) fn into_part(self) -> Part {
        let part = match self.content {
            Content::Stream {
                body,
                length: Some(length),
            } => Part::stream_with_length(body, length),
            Content::Stream { body, length: None } => Part::stream(body),
            Content::Bytes(bytes) => Part::bytes(bytes),
        };
        part.file_name(self.file_name)
    }
}

impl fmt::Debug for UploadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadSource")
            .field("file_name", &self.file_name)
            .field("len", &self.content_length())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_is_sized_from_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strings.pot");
        std::fs::write(&path, "msgid \"a\"\n").unwrap();

        let upload = UploadSource::open(&path).await.unwrap();
        assert_eq!(upload.file_name(), "strings.pot");
        assert_eq!(upload.content_length(), Some(10));
    }

    #[test]
    fn test_reader_length() {
        let reader = std::io::Cursor::new(b"abc".to_vec());
        assert_eq!(UploadSource::from_reader("a.po", reader).content_length(), None);

        let reader = std::io::Cursor::new(b"abc".to_vec());
        assert_eq!(
            UploadSource::from_reader_with_length("a.po", reader, 3).content_length(),
            Some(3)
        );
    }

    #[tokio::test]
    async fn test_open_missing_file_is_io_error() {
        let err = UploadSource::open("/definitely/not/here.po")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Io(_)));
    }
}
