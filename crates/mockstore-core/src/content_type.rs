//! Content-type inference from object keys.

use crate::object::ObjectOptions;

/// Guess a content type from the key's extension.
///
/// Keys without a recognized extension map to `application/octet-stream`.
///
/// # Examples
///
/// ```
/// use mockstore_core::content_type::guess_content_type;
///
/// assert_eq!(guess_content_type("notes.txt").essence_str(), "text/plain");
/// assert_eq!(guess_content_type("blob").essence_str(), "application/octet-stream");
/// ```
#[must_use]
pub fn guess_content_type(key: &str) -> mime::Mime {
    mime_guess::from_path(key).first_or_octet_stream()
}

/// Return `options` with a content type filled in from the key.
///
/// A content type set by the caller is kept as-is.
#[must_use]
pub fn infer_content_type(key: &str, options: &ObjectOptions) -> ObjectOptions {
    if options.content_type.is_some() {
        return options.clone();
    }
    ObjectOptions {
        content_type: Some(guess_content_type(key).to_string()),
        ..options.clone()
    }
}
