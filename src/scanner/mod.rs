pub mod template_scanner;

pub use template_scanner::{SourceFile, TemplateScanner};
