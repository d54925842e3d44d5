//! Render backend surface – the external collaborators that turn a finished
//! layout tree into document bytes.
//!
//! The composition core never computes positions or emits bytes itself; it
//! hands the fully resolved [`Document`] to a [`Renderer`]. Pagination,
//! glyph layout, page-number substitution, and structural validation
//! (balanced column spans, required attributes) are all backend concerns.

use std::path::Path;

use thiserror::Error;

use crate::document::Document;

/// Failure reported by a render backend. Opaque to the core and propagated
/// to the caller unmodified.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The layout tree is structurally invalid for rendering.
    #[error("layout tree rejected: {0}")]
    InvalidTree(String),

    /// Any other backend failure.
    #[error("render backend error: {0}")]
    Backend(String),
}

/// A rendering backend: consumes a finished layout tree and produces the
/// final document bytes.
pub trait Renderer {
    /// Load a license credential. Must be called before [`render`] or the
    /// output carries an evaluation watermark. Implementations must treat a
    /// path that does not resolve to an existing credential as a no-op.
    ///
    /// [`render`]: Renderer::render
    fn apply_license(&mut self, path: &Path) {
        let _ = path;
    }

    /// Serialise the tree into document bytes.
    fn render(&mut self, document: &Document) -> Result<Vec<u8>, RenderError>;
}

/// Merges independently rendered documents into one output. Operates on
/// opaque byte buffers only; no knowledge of the tree model.
pub trait Concatenator {
    fn concatenate(&mut self, parts: &[Vec<u8>]) -> Result<Vec<u8>, RenderError>;
}

/// Render each document in order and merge the outputs into one buffer.
///
/// Thin glue for callers that build several independent documents (for
/// instance in parallel, one document per writer) and stitch the results.
pub fn render_and_concatenate<R, C>(
    renderer: &mut R,
    concatenator: &mut C,
    documents: &[Document],
) -> Result<Vec<u8>, RenderError>
where
    R: Renderer + ?Sized,
    C: Concatenator + ?Sized,
{
    let mut parts = Vec::with_capacity(documents.len());
    for document in documents {
        parts.push(renderer.render(document)?);
    }
    log::debug!("concatenating {} rendered documents", parts.len());
    concatenator.concatenate(&parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubRenderer;

    impl Renderer for StubRenderer {
        fn render(&mut self, document: &Document) -> Result<Vec<u8>, RenderError> {
            Ok(vec![document.section_count() as u8])
        }
    }

    struct ByteJoiner;

    impl Concatenator for ByteJoiner {
        fn concatenate(&mut self, parts: &[Vec<u8>]) -> Result<Vec<u8>, RenderError> {
            Ok(parts.concat())
        }
    }

    #[test]
    fn renders_then_joins() {
        let docs = vec![Document::new(), Document::new()];
        let merged =
            render_and_concatenate(&mut StubRenderer, &mut ByteJoiner, &docs).unwrap();
        assert_eq!(merged, vec![1, 1]);
    }

    #[test]
    fn missing_license_is_a_noop() {
        let mut renderer = StubRenderer;
        renderer.apply_license(Path::new("/does/not/exist/report.lic"));
        let bytes = renderer.render(&Document::new()).unwrap();
        assert!(!bytes.is_empty());
    }
}
