use crate::render::{resolve, RenderTarget};
use crate::Block;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Name the exported page is offered under
pub const EXPORT_FILE_NAME: &str = "bio-page.html";

/// MIME type of the exported page
pub const EXPORT_MIME_TYPE: &str = "text/html";

const PAGE_TITLE: &str = "My Bio Page";

const STYLESHEET: &str = r#"    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      min-height: 100vh;
      padding: 2rem;
    }
    .container {
      max-width: 600px;
      margin: 0 auto;
      background: white;
      border-radius: 20px;
      padding: 3rem 2rem;
      box-shadow: 0 20px 60px rgba(0,0,0,0.3);
    }
    .block { margin-bottom: 1.5rem; }
    .heading { font-weight: bold; font-size: inherit; }
    .image {
      max-width: 100%;
      height: auto;
      border-radius: 10px;
      display: block;
      margin: 0 auto;
    }
    .link-button {
      display: inline-block;
      padding: 12px 24px;
      text-decoration: none;
      border-radius: 8px;
      color: white;
      font-weight: 500;
      transition: transform 0.2s;
      width: 100%;
      text-align: center;
    }
    .link-button:hover { transform: translateY(-2px); }
    .email { color: #3b82f6; text-decoration: none; }
    .social-links a { margin: 0 0.5rem; color: #2563eb; text-decoration: none; }
    .social-links a:last-child { color: #1f2937; }
"#;

/// Build the standalone page for `blocks`, in list order
///
/// Hidden blocks (image/link without URL) contribute nothing.
pub fn export_document(blocks: &[Block]) -> String {
    let body = blocks
        .iter()
        .filter_map(resolve)
        .map(|rendered| {
            format!(
                r#"<div class="block" style="{}">{}</div>"#,
                rendered.style.declarations(),
                rendered.to_markup(RenderTarget::Classed)
            )
        })
        .collect::<Vec<_>>()
        .join("\n    ");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{PAGE_TITLE}</title>
  <style>
{STYLESHEET}  </style>
</head>
<body>
  <div class="container">
    {body}
  </div>
</body>
</html>
"#
    )
}

/// Something that can hand a finished document to the user
pub trait DownloadSink {
    /// Offer `contents` as a file named `file_name`; returns where it went
    fn offer(&self, contents: &str, file_name: &str, mime_type: &str) -> Result<PathBuf>;
}

/// Writes downloads into a directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DownloadSink for DirectorySink {
    fn offer(&self, contents: &str, file_name: &str, mime_type: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).with_context(|| {
            format!("Failed to create export directory: {}", self.dir.display())
        })?;

        let path = self.dir.join(file_name);
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}: {}", mime_type, path.display()))?;

        log::info!("wrote {} ({} bytes)", path.display(), contents.len());
        Ok(path)
    }
}

/// Render `blocks` and hand the page to `sink`
pub fn export_to(blocks: &[Block], sink: &dyn DownloadSink) -> Result<PathBuf> {
    let document = export_document(blocks);
    sink.offer(&document, EXPORT_FILE_NAME, EXPORT_MIME_TYPE)
}
