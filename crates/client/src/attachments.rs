//! Client-side attachment policy for multipart submissions.
//!
//! The policy is enforced BEFORE any bytes leave the client: an oversized or
//! surplus file fails the whole submission with a message and nothing is
//! sent.

use crate::error::ApiError;

/// Maximum number of files per submission.
pub const MAX_FILES: usize = 3;

/// Maximum size of a single file, in bytes (1 MiB).
pub const MAX_FILE_BYTES: usize = 1_048_576;

/// One file selected for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// File name as shown to the user and sent in the multipart part.
    pub file_name: String,

    /// MIME type of the content.
    pub content_type: String,

    /// Raw file content.
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Creates an attachment from its parts.
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Size of the file content in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True if the file has no content.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Checks the upload policy over a whole submission.
///
/// Fails on the first violation: more than [`MAX_FILES`] files, or any file
/// over [`MAX_FILE_BYTES`].
pub fn check_policy(files: &[Attachment]) -> Result<(), ApiError> {
    if files.len() > MAX_FILES {
        let surplus = &files[MAX_FILES];
        return Err(ApiError::Attachment {
            name: surplus.file_name.clone(),
            reason: format!("at most {MAX_FILES} files may be attached"),
        });
    }
    for file in files {
        if file.len() > MAX_FILE_BYTES {
            return Err(ApiError::Attachment {
                name: file.file_name.clone(),
                reason: "file exceeds the 1 MB size limit".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size: usize) -> Attachment {
        Attachment::new(name, "application/octet-stream", vec![0u8; size])
    }

    #[test]
    fn test_within_policy() {
        let files = vec![file("a.pdf", 100), file("b.png", MAX_FILE_BYTES)];
        assert!(check_policy(&files).is_ok());
    }

    #[test]
    fn test_too_many_files_names_the_surplus_one() {
        let files = vec![
            file("a", 1),
            file("b", 1),
            file("c", 1),
            file("d.jpg", 1),
        ];
        let err = check_policy(&files).unwrap_err();
        match err {
            ApiError::Attachment { name, .. } => assert_eq!(name, "d.jpg"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_oversized_file_rejected() {
        let files = vec![file("huge.mov", MAX_FILE_BYTES + 1)];
        let err = check_policy(&files).unwrap_err();
        assert!(err.user_message().contains("1 MB"));
        assert!(err.is_local());
    }

    #[test]
    fn test_empty_submission_is_fine() {
        assert!(check_policy(&[]).is_ok());
    }
}
