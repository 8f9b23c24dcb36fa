use super::{ContentError, ContentRequest};

/// Source of generated lesson text.
///
/// Implemented for any `FnMut(&ContentRequest) -> Result<String, ContentError>`,
/// so a closure over an HTTP client or a canned test response both work.
pub trait ContentProvider {
    /// Produce the raw response text for `request`.
    fn generate(&mut self, request: &ContentRequest) -> Result<String, ContentError>;
}

impl<F> ContentProvider for F
where
    F: FnMut(&ContentRequest) -> Result<String, ContentError>,
{
    fn generate(&mut self, request: &ContentRequest) -> Result<String, ContentError> {
        self(request)
    }
}

/// Provider with no backend. Every request fails, so callers always get
/// fallback content.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineProvider;

impl ContentProvider for OfflineProvider {
    fn generate(&mut self, _request: &ContentRequest) -> Result<String, ContentError> {
        Err(ContentError::Provider("offline".to_owned()))
    }
}
