//! Reference document adapters.

mod pdf_extractor;

pub use pdf_extractor::PdfReferenceExtractor;
