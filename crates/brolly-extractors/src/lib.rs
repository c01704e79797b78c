//! brolly-extractors - Policy document text extraction.
//!
//! Turns a directory of source documents into the `document id -> raw
//! text` mapping the engine consumes. Extractors share a small trait so
//! new formats slot in beside PDF and plain text.
//!
//! # Example
//!
//! ```ignore
//! use brolly_extractors::scan_documents;
//!
//! let documents = scan_documents("./pdfs").await?;
//! for (name, text) in &documents {
//!     println!("{}: {} chars", name, text.len());
//! }
//! ```

mod documents;
mod error;
mod pdf;
mod text;

pub use documents::scan_documents;
pub use error::{ExtractError, ExtractResult};
pub use pdf::PdfExtractor;
pub use text::TextExtractor;

use async_trait::async_trait;

/// Core extractor trait - all document extractors implement this.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract text content from raw bytes.
    async fn extract(&self, content: &[u8]) -> ExtractResult<String>;

    /// Supported file extensions (lowercase, without dot).
    fn supported_extensions(&self) -> &[&str];

    /// Check if this extractor handles the given extension.
    fn supports(&self, extension: &str) -> bool {
        self.supported_extensions().contains(&extension)
    }

    /// Human-readable name for this extractor.
    fn name(&self) -> &str;
}
