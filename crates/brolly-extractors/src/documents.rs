//! Directory enumeration yielding raw text per document.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::warn;

use crate::error::ExtractResult;
use crate::pdf::PdfExtractor;
use crate::text::TextExtractor;
use crate::Extractor;

/// Scan a directory of policy documents and extract raw text from each.
///
/// Document id is the file name. Entries are returned in sorted order so
/// downstream graph builds are reproducible. A document that fails to
/// extract is logged and skipped; one bad file never aborts the batch.
pub async fn scan_documents(dir: impl AsRef<Path>) -> ExtractResult<BTreeMap<String, String>> {
    let pdf = PdfExtractor::new();
    let text = TextExtractor::new();
    let extractors: [&dyn Extractor; 2] = [&pdf, &text];

    let mut documents = BTreeMap::new();

    let mut entries: Vec<_> = std::fs::read_dir(dir.as_ref())?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    entries.sort();

    for path in entries {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        let Some(extractor) = extractors.iter().find(|x| x.supports(&ext)) else {
            continue;
        };

        let content = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Skipping unreadable document {}: {}", name, e);
                continue;
            }
        };

        match extractor.extract(&content).await {
            Ok(text) => {
                documents.insert(name.to_string(), text);
            }
            Err(e) => {
                warn!("Skipping document {}: {}", name, e);
            }
        }
    }

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scan_extracts_text_documents() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("policyA.txt"), "Policy A covers theft.").unwrap();
        std::fs::write(dir.path().join("policyB.txt"), "Policy B covers fire.").unwrap();
        std::fs::write(dir.path().join("notes.xyz"), "ignored").unwrap();

        let documents = scan_documents(dir.path()).await.unwrap();
        let names: Vec<_> = documents.keys().cloned().collect();
        assert_eq!(names, vec!["policyA.txt", "policyB.txt"]);
        assert_eq!(documents["policyA.txt"], "Policy A covers theft.");
    }

    #[tokio::test]
    async fn test_scan_skips_bad_documents() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("good.txt"), "Policy text.").unwrap();
        // Claims to be a PDF but is not; extraction fails and is skipped.
        std::fs::write(dir.path().join("broken.pdf"), b"not a pdf").unwrap();

        let documents = scan_documents(dir.path()).await.unwrap();
        assert_eq!(documents.len(), 1);
        assert!(documents.contains_key("good.txt"));
    }

    #[tokio::test]
    async fn test_scan_missing_dir_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");
        assert!(scan_documents(&missing).await.is_err());
    }
}
