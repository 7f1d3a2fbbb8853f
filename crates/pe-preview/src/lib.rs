use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::fmt;
use thiserror::Error;
use tracing::debug;

pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PreviewError {
    #[error("no file was selected")]
    NoFileSelected,
    #[error("failed to read selected file: {0}")]
    ReadFailed(String),
    #[error("malformed data uri: {0}")]
    MalformedDataUri(String),
}

/// A user-selected local file. Reads are not cancellable once started.
#[async_trait(?Send)]
pub trait PictureFile {
    fn name(&self) -> String;
    fn mime_type(&self) -> String;
    async fn read_bytes(&self) -> Result<Vec<u8>, PreviewError>;
}

/// `data:<mime>;base64,<payload>` suitable for an image `src`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri(String);

impl DataUri {
    pub fn encode(mime_type: &str, bytes: &[u8]) -> Self {
        let mime = mime_type.trim();
        let mime = if mime.is_empty() { FALLBACK_MIME_TYPE } else { mime };
        DataUri(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
    }

    pub fn parse(raw: &str) -> Result<Self, PreviewError> {
        let uri = DataUri(raw.to_owned());
        uri.decode()?;
        Ok(uri)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn mime_type(&self) -> &str {
        self.header().map(|(mime, _)| mime).unwrap_or(FALLBACK_MIME_TYPE)
    }

    pub fn decode(&self) -> Result<(String, Vec<u8>), PreviewError> {
        let (mime, payload) = self
            .header()
            .ok_or_else(|| PreviewError::MalformedDataUri("missing base64 header".to_owned()))?;
        let bytes = STANDARD
            .decode(payload.as_bytes())
            .map_err(|err| PreviewError::MalformedDataUri(err.to_string()))?;
        Ok((mime.to_owned(), bytes))
    }

    fn header(&self) -> Option<(&str, &str)> {
        let rest = self.0.strip_prefix("data:")?;
        let (meta, payload) = rest.split_once(',')?;
        let mime = meta.strip_suffix(";base64")?;
        Some((mime, payload))
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub async fn encode_picture<F: PictureFile + ?Sized>(file: &F) -> Result<DataUri, PreviewError> {
    let bytes = file.read_bytes().await?;
    debug!(file = %file.name(), size = bytes.len(), "encoded picture preview");
    Ok(DataUri::encode(&file.mime_type(), &bytes))
}

/// Encode the first file of a selection. An empty selection is reported
/// instead of being indexed blindly.
pub async fn encode_first<F: PictureFile>(files: &[F]) -> Result<DataUri, PreviewError> {
    let file = files.first().ok_or(PreviewError::NoFileSelected)?;
    encode_picture(file).await
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MemoryFile {
        name: &'static str,
        mime: &'static str,
        bytes: Result<Vec<u8>, PreviewError>,
    }

    #[async_trait(?Send)]
    impl PictureFile for MemoryFile {
        fn name(&self) -> String {
            self.name.to_owned()
        }

        fn mime_type(&self) -> String {
            self.mime.to_owned()
        }

        async fn read_bytes(&self) -> Result<Vec<u8>, PreviewError> {
            self.bytes.clone()
        }
    }

    #[test]
    fn encodes_with_reported_mime_type() {
        let uri = DataUri::encode("image/png", b"hello");
        assert_eq!(uri.as_str(), "data:image/png;base64,aGVsbG8=");
        assert_eq!(uri.mime_type(), "image/png");
    }

    #[test]
    fn missing_mime_type_falls_back_to_octet_stream() {
        let uri = DataUri::encode("", &[0xff, 0x00]);
        assert!(uri.as_str().starts_with("data:application/octet-stream;base64,"));
    }

    #[test]
    fn rejects_non_base64_uri() {
        assert!(matches!(
            DataUri::parse("data:text/plain,hello"),
            Err(PreviewError::MalformedDataUri(_))
        ));
        assert!(DataUri::parse("data:image/gif;base64,R0lGODlh").is_ok());
    }

    #[tokio::test]
    async fn first_file_bytes_survive_encoding() -> anyhow::Result<()> {
        let files = vec![
            MemoryFile {
                name: "avatar.jpg",
                mime: "image/jpeg",
                bytes: Ok(vec![0xff, 0xd8, 0xff, 0xe0, 0x00]),
            },
            MemoryFile {
                name: "ignored.png",
                mime: "image/png",
                bytes: Ok(vec![1, 2, 3]),
            },
        ];

        let uri = encode_first(&files).await?;
        let (mime, bytes) = uri.decode()?;
        assert_eq!(mime, "image/jpeg");
        assert_eq!(bytes, vec![0xff, 0xd8, 0xff, 0xe0, 0x00]);
        Ok(())
    }

    #[tokio::test]
    async fn empty_selection_is_reported() {
        let files: Vec<MemoryFile> = Vec::new();
        assert_eq!(encode_first(&files).await, Err(PreviewError::NoFileSelected));
    }

    #[tokio::test]
    async fn read_failure_propagates() {
        let file = MemoryFile {
            name: "broken.png",
            mime: "image/png",
            bytes: Err(PreviewError::ReadFailed("permission denied".to_owned())),
        };
        let err = encode_picture(&file).await.unwrap_err();
        assert_eq!(err.to_string(), "failed to read selected file: permission denied");
    }
}
