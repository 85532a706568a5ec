//! Block to markup rendering
//!
//! [`resolve`] is the one mapping from a block to what it shows. Both markup
//! targets and the editor preview are built on its output, so they cannot
//! disagree about content, fallbacks, or which blocks are hidden.
//!
//! Content and URLs are written verbatim. Nothing here escapes or sanitizes
//! user input; the output is not safe for untrusted content.

use crate::{Alignment, Block, BlockKind, BlockStyle, TRANSPARENT};
use std::fmt::Write;

pub const DEFAULT_COLOR: &str = "#000";
pub const DEFAULT_FONT_SIZE: &str = "1rem";

/// Labels of the fixed social row
pub const SOCIAL_LINKS: [&str; 3] = ["Twitter", "LinkedIn", "GitHub"];

/// Markup flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    /// Self-contained fragment carrying its own inline styles, for pasting
    /// a single block elsewhere
    Inline,
    /// Fragment relying on the export stylesheet; the caller wraps it in a
    /// styled container
    Classed,
}

/// Style after defaults and the transparent sentinel are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedStyle<'a> {
    pub color: &'a str,
    pub alignment: Alignment,
    pub font_size: &'a str,
    pub background_color: Option<&'a str>,
}

impl<'a> ResolvedStyle<'a> {
    pub fn resolve(style: &'a BlockStyle) -> Self {
        Self {
            color: style.color.as_deref().unwrap_or(DEFAULT_COLOR),
            alignment: style.alignment.unwrap_or_default(),
            font_size: style.font_size.as_deref().unwrap_or(DEFAULT_FONT_SIZE),
            background_color: style
                .background_color
                .as_deref()
                .filter(|bg| *bg != TRANSPARENT),
        }
    }

    /// CSS declarations for `style="..."`
    pub fn declarations(&self) -> String {
        let mut css = format!(
            "color: {}; text-align: {}; font-size: {};",
            self.color,
            self.alignment.as_css(),
            self.font_size
        );
        if let Some(bg) = self.background_color {
            let _ = write!(css, " background-color: {};", bg);
        }
        css
    }
}

/// What a block shows, independent of markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element<'a> {
    Heading { text: &'a str },
    Paragraph { text: &'a str },
    Image { src: &'a str },
    LinkButton { href: &'a str, label: &'a str },
    Email { address: &'a str, label: &'a str },
    SocialRow,
}

/// A block ready to be emitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered<'a> {
    pub element: Element<'a>,
    pub style: ResolvedStyle<'a>,
}

fn or_placeholder<'a>(content: &'a str, placeholder: &'static str) -> &'a str {
    if content.is_empty() {
        placeholder
    } else {
        content
    }
}

/// Resolve a block, or `None` when an image/link has no URL
pub fn resolve(block: &Block) -> Option<Rendered<'_>> {
    let element = match block.kind {
        BlockKind::Heading => Element::Heading {
            text: or_placeholder(&block.content, "Heading"),
        },
        BlockKind::Text => Element::Paragraph {
            text: or_placeholder(&block.content, "Text content"),
        },
        BlockKind::Image => Element::Image { src: block.url()? },
        BlockKind::Link => Element::LinkButton {
            href: block.url()?,
            label: or_placeholder(&block.content, "Click Here"),
        },
        BlockKind::Email => Element::Email {
            address: &block.content,
            label: or_placeholder(&block.content, "email@example.com"),
        },
        BlockKind::Social => Element::SocialRow,
    };

    Some(Rendered {
        element,
        style: ResolvedStyle::resolve(&block.style),
    })
}

/// Markup for one block; empty when the block is hidden
pub fn render_block(block: &Block, target: RenderTarget) -> String {
    resolve(block)
        .map(|rendered| rendered.to_markup(target))
        .unwrap_or_default()
}

impl Rendered<'_> {
    pub fn to_markup(&self, target: RenderTarget) -> String {
        match target {
            RenderTarget::Inline => self.inline_markup(),
            RenderTarget::Classed => self.classed_markup(),
        }
    }

    fn inline_markup(&self) -> String {
        let css = self.style.declarations();
        let wrapper = format!(
            "text-align: {}; margin-bottom: 1rem;",
            self.style.alignment.as_css()
        );

        match &self.element {
            Element::Heading { text } => format!(
                r#"<h1 style="{css} font-weight: bold; margin-bottom: 1rem;">{text}</h1>"#
            ),
            Element::Paragraph { text } => {
                format!(r#"<p style="{css} margin-bottom: 1rem;">{text}</p>"#)
            }
            Element::Image { src } => format!(
                r#"<div style="{wrapper}"><img src="{src}" alt="Bio" style="max-width: 100%; height: auto; max-height: 300px; border-radius: 8px; display: inline-block;" /></div>"#
            ),
            Element::LinkButton { href, label } => format!(
                r#"<div style="{wrapper}"><a href="{href}" target="_blank" rel="noopener noreferrer" style="{css} display: inline-block; padding: 0.75rem 1.5rem; border-radius: 0.5rem; font-weight: 500; text-decoration: none;">{label}</a></div>"#
            ),
            Element::Email { address, label } => format!(
                r#"<div style="{wrapper}"><a href="mailto:{address}" style="{css} text-decoration: none;">{label}</a></div>"#
            ),
            Element::SocialRow => {
                let mut row = format!(r#"<div style="{wrapper}">"#);
                for label in SOCIAL_LINKS {
                    let color = if label == "GitHub" { "#1f2937" } else { "#2563eb" };
                    let _ = write!(
                        row,
                        r##"<a href="#" style="color: {color}; margin: 0 0.375rem;">{label}</a>"##
                    );
                }
                row.push_str("</div>");
                row
            }
        }
    }

    fn classed_markup(&self) -> String {
        match &self.element {
            Element::Heading { text } => format!(r#"<h1 class="heading">{text}</h1>"#),
            Element::Paragraph { text } => format!("<p>{text}</p>"),
            Element::Image { src } => {
                format!(r#"<img class="image" src="{src}" alt="Bio image" />"#)
            }
            Element::LinkButton { href, label } => {
                let mut css = format!("color: {};", self.style.color);
                if let Some(bg) = self.style.background_color {
                    let _ = write!(css, " background-color: {};", bg);
                }
                format!(r#"<a href="{href}" class="link-button" style="{css}">{label}</a>"#)
            }
            Element::Email { address, label } => {
                let color = self.style.color;
                format!(
                    r#"<a href="mailto:{address}" class="email" style="color: {color};">{label}</a>"#
                )
            }
            Element::SocialRow => {
                let links = SOCIAL_LINKS
                    .iter()
                    .map(|label| format!(r##"<a href="#">{label}</a>"##))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!(r#"<div class="social-links">{links}</div>"#)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BlockPatch, StylePatch};
    use assert_matches::assert_matches;

    const TARGETS: [RenderTarget; 2] = [RenderTarget::Inline, RenderTarget::Classed];

    #[test]
    fn test_style_defaults() {
        let style = BlockStyle::default();
        let resolved = ResolvedStyle::resolve(&style);

        assert_eq!(resolved.color, "#000");
        assert_eq!(resolved.alignment, Alignment::Center);
        assert_eq!(resolved.font_size, "1rem");
        assert_eq!(resolved.background_color, None);
        assert_eq!(
            resolved.declarations(),
            "color: #000; text-align: center; font-size: 1rem;"
        );
    }

    #[test]
    fn test_transparent_background_is_omitted() {
        let style = BlockStyle::defaults_for(BlockKind::Heading);
        let resolved = ResolvedStyle::resolve(&style);

        assert_eq!(resolved.background_color, None);
        assert!(!resolved.declarations().contains("background"));
    }

    #[test]
    fn test_background_is_applied() {
        let style = BlockStyle::defaults_for(BlockKind::Link);
        let css = ResolvedStyle::resolve(&style).declarations();
        assert!(css.ends_with("background-color: #3b82f6;"));
    }

    #[test]
    fn test_missing_url_renders_nothing() {
        for kind in [BlockKind::Link, BlockKind::Image] {
            let block = Block::new(kind);
            assert!(resolve(&block).is_none());
            for target in TARGETS {
                assert_eq!(render_block(&block, target), "");
            }

            let empty = Block::new(kind).with_url("");
            assert_eq!(render_block(&empty, RenderTarget::Inline), "");
        }
    }

    #[test]
    fn test_link_with_url() {
        let block = Block::new(BlockKind::Link).with_url("https://x");
        for target in TARGETS {
            let html = render_block(&block, target);
            assert!(html.contains(r#"href="https://x""#), "{html}");
            assert!(html.contains("Click Here"));
            assert!(html.contains("#3b82f6"));
        }
    }

    #[test]
    fn test_email_mailto_target() {
        let mut block = Block::new(BlockKind::Email);
        block.apply(BlockPatch::content("a@b.com"));

        assert_matches!(
            resolve(&block).unwrap().element,
            Element::Email { address: "a@b.com", label: "a@b.com" }
        );
        for target in TARGETS {
            assert!(render_block(&block, target).contains(r#"href="mailto:a@b.com""#));
        }
    }

    #[test]
    fn test_placeholders_for_empty_content() {
        let cases = [
            (BlockKind::Heading, "Heading"),
            (BlockKind::Text, "Text content"),
            (BlockKind::Email, "email@example.com"),
        ];
        for (kind, placeholder) in cases {
            let block = Block::bare(kind, "");
            assert!(render_block(&block, RenderTarget::Classed).contains(placeholder));
        }

        let link = Block::bare(BlockKind::Link, "").with_url("https://x");
        assert!(render_block(&link, RenderTarget::Inline).contains(">Click Here</a>"));

        // The mailto target stays built from the raw content
        let email = Block::bare(BlockKind::Email, "");
        assert!(render_block(&email, RenderTarget::Inline).contains(r#"href="mailto:""#));
    }

    #[test]
    fn test_classed_anchors_carry_block_color() {
        let mut email = Block::bare(BlockKind::Email, "a@b.com");
        email.apply(BlockPatch::style(StylePatch::color("#ff0000")));
        assert_eq!(
            render_block(&email, RenderTarget::Classed),
            r#"<a href="mailto:a@b.com" class="email" style="color: #ff0000;">a@b.com</a>"#
        );

        let link = Block::bare(BlockKind::Link, "Blog").with_url("https://x");
        assert_eq!(
            render_block(&link, RenderTarget::Classed),
            r#"<a href="https://x" class="link-button" style="color: #000;">Blog</a>"#
        );
    }

    #[test]
    fn test_social_ignores_content_and_color() {
        let mut block = Block::bare(BlockKind::Social, "ignored");
        block.apply(BlockPatch::style(StylePatch::color("#ff0000")));

        for target in TARGETS {
            let html = render_block(&block, target);
            for label in SOCIAL_LINKS {
                assert!(html.contains(&format!(">{label}</a>")));
            }
            assert!(!html.contains("ignored"));
            assert!(!html.contains("#ff0000"));
        }
    }

    #[test]
    fn test_heading_markup() {
        let block = Block::bare(BlockKind::Heading, "Jane Doe");
        assert_eq!(
            render_block(&block, RenderTarget::Classed),
            r#"<h1 class="heading">Jane Doe</h1>"#
        );
        assert_eq!(
            render_block(&block, RenderTarget::Inline),
            r#"<h1 style="color: #000; text-align: center; font-size: 1rem; font-weight: bold; margin-bottom: 1rem;">Jane Doe</h1>"#
        );
    }

    #[test]
    fn test_image_alignment_on_wrapper() {
        let mut block = Block::new(BlockKind::Image).with_url("me.png");
        block.apply(BlockPatch::style(StylePatch::alignment(Alignment::Right)));

        let html = render_block(&block, RenderTarget::Inline);
        assert!(html.starts_with(r#"<div style="text-align: right;"#));
        assert!(html.contains(r#"src="me.png""#));
    }

    #[test]
    fn test_content_passes_through_verbatim() {
        let block = Block::bare(BlockKind::Text, "<b>bold</b> & co");
        assert_eq!(
            render_block(&block, RenderTarget::Classed),
            "<p><b>bold</b> & co</p>"
        );
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let block = Block::new(BlockKind::Link).with_url("https://example.com");
        for target in TARGETS {
            assert_eq!(render_block(&block, target), render_block(&block, target));
        }
    }
}
