use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Background value meaning "no background"; never emitted as CSS
pub const TRANSPARENT: &str = "transparent";

/// A single content block on the bio page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Block {
    /// Unique identifier (sortable, timestamp-based)
    pub id: Ulid,

    /// Block kind determines rendering; fixed at creation
    pub kind: BlockKind,

    /// Text payload, meaning depends on kind
    pub content: String,

    /// Image source or link target
    pub url: Option<String>,

    /// Per-block presentation
    #[serde(default)]
    pub style: BlockStyle,
}

impl Block {
    /// Create a block seeded with the kind's default content and style
    pub fn new(kind: BlockKind) -> Self {
        Self::with_id(Ulid::new(), kind)
    }

    /// Create a seeded block with a specific ID (useful for testing)
    pub fn with_id(id: Ulid, kind: BlockKind) -> Self {
        Self {
            id,
            kind,
            content: kind.default_content().to_string(),
            url: None,
            style: BlockStyle::defaults_for(kind),
        }
    }

    /// Create a bare block with no style and the given content
    pub fn bare(kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            id: Ulid::new(),
            kind,
            content: content.into(),
            url: None,
            style: BlockStyle::default(),
        }
    }

    /// Builder-style URL setter
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// The URL if one is set and non-empty
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }

    /// Merge a partial update into this block
    pub fn apply(&mut self, patch: BlockPatch) {
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(url) = patch.url {
            self.url = Some(url);
        }
        if let Some(style) = patch.style {
            self.style.apply(style);
        }
    }
}

/// The closed set of block kinds offered by the palette
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Heading,
    Text,
    Image,
    Link,
    Email,
    Social,
}

impl BlockKind {
    /// Palette order
    pub const ALL: [BlockKind; 6] = [
        BlockKind::Heading,
        BlockKind::Text,
        BlockKind::Image,
        BlockKind::Link,
        BlockKind::Email,
        BlockKind::Social,
    ];

    /// Content a freshly added block starts with
    pub fn default_content(self) -> &'static str {
        match self {
            BlockKind::Heading => "Your Name",
            BlockKind::Text => "Add your bio text here...",
            BlockKind::Image | BlockKind::Social => "",
            BlockKind::Link => "Click Here",
            BlockKind::Email => "your@email.com",
        }
    }

    /// Palette button label
    pub fn label(self) -> &'static str {
        match self {
            BlockKind::Heading => "Heading",
            BlockKind::Text => "Text",
            BlockKind::Image => "Image",
            BlockKind::Link => "Link Button",
            BlockKind::Email => "Email",
            BlockKind::Social => "Social Links",
        }
    }

    /// Whether the kind needs a URL to render at all
    pub fn requires_url(self) -> bool {
        matches!(self, BlockKind::Image | BlockKind::Link)
    }

    /// Whether the kind displays its `content` field
    pub fn uses_content(self) -> bool {
        !matches!(self, BlockKind::Image | BlockKind::Social)
    }
}

/// Horizontal alignment of a block
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    pub const ALL: [Alignment; 3] = [Alignment::Left, Alignment::Center, Alignment::Right];

    /// CSS `text-align` value
    pub fn as_css(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Alignment::Left => "Left",
            Alignment::Center => "Center",
            Alignment::Right => "Right",
        }
    }
}

/// Presentation settings; every field is optional and resolved at render time
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockStyle {
    pub font_size: Option<String>,
    pub color: Option<String>,
    pub alignment: Option<Alignment>,
    pub background_color: Option<String>,
}

impl BlockStyle {
    /// Style a freshly added block of `kind` starts with
    pub fn defaults_for(kind: BlockKind) -> Self {
        let font_size = match kind {
            BlockKind::Heading => "2rem",
            _ => "1rem",
        };
        let background_color = match kind {
            BlockKind::Link => "#3b82f6",
            _ => TRANSPARENT,
        };

        Self {
            font_size: Some(font_size.to_string()),
            color: Some("#000000".to_string()),
            alignment: Some(Alignment::Center),
            background_color: Some(background_color.to_string()),
        }
    }

    /// Merge the set fields of a partial style
    pub fn apply(&mut self, patch: StylePatch) {
        if let Some(font_size) = patch.font_size {
            self.font_size = Some(font_size);
        }
        if let Some(color) = patch.color {
            self.color = Some(color);
        }
        if let Some(alignment) = patch.alignment {
            self.alignment = Some(alignment);
        }
        if let Some(background_color) = patch.background_color {
            self.background_color = Some(background_color);
        }
    }
}

/// Partial update for a block; `None` leaves the field untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockPatch {
    pub content: Option<String>,
    pub url: Option<String>,
    pub style: Option<StylePatch>,
}

impl BlockPatch {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn style(style: StylePatch) -> Self {
        Self {
            style: Some(style),
            ..Default::default()
        }
    }

    /// Names of the fields this patch sets, for event logs
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.content.is_some() {
            fields.push("content");
        }
        if self.url.is_some() {
            fields.push("url");
        }
        if let Some(style) = &self.style {
            if style.font_size.is_some() {
                fields.push("style.font_size");
            }
            if style.color.is_some() {
                fields.push("style.color");
            }
            if style.alignment.is_some() {
                fields.push("style.alignment");
            }
            if style.background_color.is_some() {
                fields.push("style.background_color");
            }
        }
        fields
    }
}

/// Partial style update
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StylePatch {
    pub font_size: Option<String>,
    pub color: Option<String>,
    pub alignment: Option<Alignment>,
    pub background_color: Option<String>,
}

impl StylePatch {
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Default::default()
        }
    }

    pub fn alignment(alignment: Alignment) -> Self {
        Self {
            alignment: Some(alignment),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_creation_defaults() {
        let heading = Block::new(BlockKind::Heading);
        assert_eq!(heading.kind, BlockKind::Heading);
        assert_eq!(heading.content, "Your Name");
        assert_eq!(heading.url, None);
        assert_eq!(heading.style.font_size.as_deref(), Some("2rem"));
        assert_eq!(heading.style.color.as_deref(), Some("#000000"));
        assert_eq!(heading.style.alignment, Some(Alignment::Center));
        assert_eq!(heading.style.background_color.as_deref(), Some(TRANSPARENT));

        let link = Block::new(BlockKind::Link);
        assert_eq!(link.content, "Click Here");
        assert_eq!(link.style.font_size.as_deref(), Some("1rem"));
        assert_eq!(link.style.background_color.as_deref(), Some("#3b82f6"));
    }

    #[test]
    fn test_default_content_per_kind() {
        assert_eq!(BlockKind::Text.default_content(), "Add your bio text here...");
        assert_eq!(BlockKind::Image.default_content(), "");
        assert_eq!(BlockKind::Email.default_content(), "your@email.com");
        assert_eq!(BlockKind::Social.default_content(), "");
    }

    #[test]
    fn test_empty_url_is_absent() {
        let block = Block::new(BlockKind::Image).with_url("");
        assert_eq!(block.url(), None);

        let block = Block::new(BlockKind::Image).with_url("https://x/me.png");
        assert_eq!(block.url(), Some("https://x/me.png"));
    }

    #[test]
    fn test_apply_merges_nested_style() {
        let mut block = Block::new(BlockKind::Text);
        block.apply(BlockPatch::style(StylePatch::color("#ff0000")));

        assert_eq!(block.style.color.as_deref(), Some("#ff0000"));
        // Untouched fields survive the merge
        assert_eq!(block.style.font_size.as_deref(), Some("1rem"));
        assert_eq!(block.style.alignment, Some(Alignment::Center));
        assert_eq!(block.content, "Add your bio text here...");
    }

    #[test]
    fn test_changed_fields() {
        let patch = BlockPatch {
            content: Some("Hi".to_string()),
            url: None,
            style: Some(StylePatch::alignment(Alignment::Left)),
        };
        assert_eq!(patch.changed_fields(), vec!["content", "style.alignment"]);
        assert!(BlockPatch::default().changed_fields().is_empty());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&BlockKind::Social).unwrap();
        assert_eq!(json, "\"social\"");
    }
}
