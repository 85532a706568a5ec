// Bio Page Builder - Core Library

pub mod block;
pub mod config;
pub mod event;
pub mod export;
pub mod render;
pub mod store;
pub mod ui;
pub mod validation;

// Re-export main types for convenience
pub use block::{Alignment, Block, BlockKind, BlockPatch, BlockStyle, StylePatch, TRANSPARENT};
pub use config::{ConfigError, EditorConfig};
pub use event::{BlockEvent, EventType};
pub use export::{
    export_document, export_to, DirectorySink, DownloadSink, EXPORT_FILE_NAME, EXPORT_MIME_TYPE,
};
pub use render::{render_block, resolve, Element, RenderTarget, Rendered, ResolvedStyle};
pub use store::{BlockList, DragOutcome};
pub use ui::BioBuilderApp;
pub use validation::{
    ValidatedBlocks, ValidationIssue, ValidationIssueType, ValidationResult, ValidationSeverity,
    Validator,
};
