use crate::{
    export_document, export_to, render_block,
    render::{resolve, Element, Rendered, RenderTarget, SOCIAL_LINKS},
    validation::{ValidatedBlocks, ValidationSeverity},
    Alignment, Block, BlockKind, BlockList, BlockPatch, DirectorySink, DragOutcome, EditorConfig,
    StylePatch,
};
use anyhow::{Context, Result};
use egui::{Align, Color32, Layout, RichText, Stroke};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use ulid::Ulid;

/// Main application state
pub struct BioBuilderApp {
    /// The blocks being edited; lost when the app closes
    blocks: BlockList,

    /// Editor settings
    config: EditorConfig,

    /// Export directory as typed in the settings menu
    export_dir_input: String,

    /// Whether the full preview window is open
    show_preview: bool,

    /// Status message
    status_message: String,
}

/// Drag payload: index of the row being dragged
#[derive(Debug, Clone, Copy)]
struct DraggedRow(usize);

/// Edits collected while drawing the list, applied afterwards
enum RowAction {
    Update(Ulid, BlockPatch),
    Delete(Ulid),
    Drag(DragOutcome),
    CopyBlock(Ulid),
}

impl Default for BioBuilderApp {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl BioBuilderApp {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            blocks: BlockList::new(),
            export_dir_input: config.export_dir.display().to_string(),
            config,
            show_preview: false,
            status_message: "Add blocks to start building your page".to_string(),
        }
    }

    /// Write the page through the configured export directory
    fn export_page(&mut self) {
        let sink = DirectorySink::new(&self.config.export_dir);
        match export_to(self.blocks.blocks(), &sink) {
            Ok(path) => {
                self.status_message = format!("✓ Exported {}", path.display());
            }
            Err(e) => {
                log::error!("export failed: {e:#}");
                self.status_message = format!("❌ Export failed: {}", e);
            }
        }
    }

    fn copy_html(&mut self) {
        let document = export_document(self.blocks.blocks());
        match copy_to_clipboard(&document) {
            Ok(()) => {
                log::info!("copied {} bytes of HTML to clipboard", document.len());
                self.status_message = "✓ HTML copied to clipboard".to_string();
            }
            Err(e) => {
                log::warn!("clipboard copy failed: {e:#}");
                self.status_message = format!("❌ Copy failed: {}", e);
            }
        }
    }

    /// Standalone markup for one block, `None` when it is unknown or hidden
    fn block_snippet(&self, id: Ulid) -> Option<String> {
        let block = self.blocks.get(id)?;
        let snippet = render_block(block, RenderTarget::Inline);
        (!snippet.is_empty()).then_some(snippet)
    }

    fn copy_block(&mut self, id: Ulid) {
        let Some(snippet) = self.block_snippet(id) else {
            self.status_message = "Nothing to copy, the block is hidden".to_string();
            return;
        };
        match copy_to_clipboard(&snippet) {
            Ok(()) => {
                log::info!("copied block {id} to clipboard");
                self.status_message = "✓ Block HTML copied to clipboard".to_string();
            }
            Err(e) => {
                log::warn!("clipboard copy failed: {e:#}");
                self.status_message = format!("❌ Copy failed: {}", e);
            }
        }
    }

    /// Take the typed export directory and write the settings to `path`
    fn save_settings_to(&mut self, path: &Path) -> Result<()> {
        self.config.export_dir = PathBuf::from(self.export_dir_input.trim());
        self.config
            .save_to_path(path)
            .with_context(|| format!("Failed to save settings: {}", path.display()))?;
        log::info!("saved settings to {}", path.display());
        Ok(())
    }

    fn save_settings(&mut self) {
        match self.save_settings_to(&EditorConfig::config_path()) {
            Ok(()) => {
                self.status_message = "✓ Settings saved".to_string();
            }
            Err(e) => {
                log::error!("{e:#}");
                self.status_message = format!("❌ {}", e);
            }
        }
    }

    fn apply(&mut self, action: RowAction) {
        match action {
            RowAction::Update(id, patch) => {
                self.blocks.update(id, patch);
            }
            RowAction::Delete(id) => {
                if self.blocks.delete(id) {
                    self.status_message = "Block deleted".to_string();
                }
            }
            RowAction::Drag(outcome) => {
                if self.blocks.apply_drag(outcome) {
                    self.status_message = "Block moved".to_string();
                }
            }
            RowAction::CopyBlock(id) => self.copy_block(id),
        }
    }

    /// Render the entire UI
    fn render_ui(&mut self, ctx: &egui::Context) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui
                        .add_enabled(!self.blocks.is_empty(), egui::Button::new("Export HTML"))
                        .clicked()
                    {
                        self.export_page();
                        ui.close_menu();
                    }
                    if ui.button("Copy HTML").clicked() {
                        self.copy_html();
                        ui.close_menu();
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Settings", |ui| {
                    ui.label("Export directory");
                    ui.text_edit_singleline(&mut self.export_dir_input);
                    if ui.button("Save Settings").clicked() {
                        self.save_settings();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Help", |ui| {
                    ui.label("Bio Page Builder");
                    ui.separator();
                    ui.label("Add blocks from the palette");
                    ui.label("Drag ☰ to reorder blocks");
                    ui.label(format!(
                        "Export writes {} to {}",
                        crate::EXPORT_FILE_NAME,
                        self.config.export_dir.display()
                    ));
                });
            });
        });

        // Toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("👁 Preview").clicked() {
                    self.show_preview = true;
                }
                if ui
                    .add_enabled(!self.blocks.is_empty(), egui::Button::new("💾 Export HTML"))
                    .clicked()
                {
                    self.export_page();
                }
                if ui.button("📋 Copy HTML").clicked() {
                    self.copy_html();
                }

                ui.separator();
                ui.label(format!("Blocks: {}", self.blocks.len()));
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status_message);
            });
        });

        // Left panel (palette and block list)
        egui::SidePanel::left("builder_panel")
            .default_width(420.0)
            .show(ctx, |ui| {
                self.render_palette(ui);
                ui.separator();
                self.render_block_list(ui);
            });

        // Central panel (live preview)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Live Preview");
            ui.separator();
            egui::ScrollArea::vertical()
                .id_salt("live_preview")
                .show(ui, |ui| draw_preview(ui, self.blocks.blocks()));
        });

        // Full preview window
        let mut open = self.show_preview;
        egui::Window::new("Full Preview")
            .open(&mut open)
            .default_width(600.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("full_preview")
                    .show(ui, |ui| draw_preview(ui, self.blocks.blocks()));
            });
        self.show_preview = open;
    }

    /// Render the add-block palette
    fn render_palette(&mut self, ui: &mut egui::Ui) {
        ui.heading("Add Blocks");
        egui::Grid::new("palette").num_columns(2).show(ui, |ui| {
            for (i, kind) in BlockKind::ALL.into_iter().enumerate() {
                if ui.button(format!("➕ {}", kind.label())).clicked() {
                    self.blocks.add(kind);
                    self.status_message = format!("Added {} block", kind.label());
                }
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });
    }

    /// Render the reorderable block list with inline editors
    fn render_block_list(&mut self, ui: &mut egui::Ui) {
        ui.heading("Your Blocks");

        let result = self.blocks.validate();
        let issues = self.blocks.blocks_with_issues(&result);
        let mut actions = Vec::new();

        egui::ScrollArea::vertical()
            .id_salt("block_list")
            .show(ui, |ui| {
                if self.blocks.is_empty() {
                    ui.add_space(24.0);
                    ui.vertical_centered(|ui| {
                        ui.weak("Add blocks to get started");
                    });
                }

                for (index, block) in self.blocks.blocks().iter().enumerate() {
                    let row = egui::Frame::group(ui.style())
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            block_row(ui, index, block, &issues, &mut actions);
                        })
                        .response;

                    if row.dnd_hover_payload::<DraggedRow>().is_some() {
                        ui.painter().hline(
                            row.rect.x_range(),
                            row.rect.top(),
                            Stroke::new(2.0, Color32::LIGHT_BLUE),
                        );
                    }
                    if let Some(source) = row.dnd_release_payload::<DraggedRow>() {
                        actions.push(RowAction::Drag(DragOutcome::dropped(source.0, index)));
                    }
                }
            });

        // A payload still held after release landed outside every row
        if ui.input(|i| i.pointer.any_released()) {
            if let Some(source) = egui::DragAndDrop::take_payload::<DraggedRow>(ui.ctx()) {
                actions.push(RowAction::Drag(DragOutcome::cancelled(source.0)));
            }
        }

        for action in actions {
            self.apply(action);
        }
    }
}

/// One block's header and inline editors
fn block_row(
    ui: &mut egui::Ui,
    index: usize,
    block: &Block,
    issues: &HashMap<Ulid, ValidationSeverity>,
    actions: &mut Vec<RowAction>,
) {
    let id = block.id;

    ui.horizontal(|ui| {
        ui.dnd_drag_source(egui::Id::new(("block_handle", id)), DraggedRow(index), |ui| {
            ui.label("☰");
        });
        ui.strong(block.kind.label());

        match issues.get(&id) {
            Some(ValidationSeverity::Warning) => {
                ui.colored_label(Color32::YELLOW, "⚠ hidden").on_hover_text(
                    "Add a URL, otherwise this block does not appear on the page",
                );
            }
            Some(ValidationSeverity::Info) => {
                ui.colored_label(Color32::LIGHT_BLUE, "ℹ placeholder");
            }
            None => {}
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.small_button("🗑").clicked() {
                actions.push(RowAction::Delete(id));
            }
            if ui
                .small_button("📋")
                .on_hover_text("Copy block HTML")
                .clicked()
            {
                actions.push(RowAction::CopyBlock(id));
            }
        });
    });

    if block.kind != BlockKind::Image {
        let mut content = block.content.clone();
        if ui
            .add(egui::TextEdit::singleline(&mut content).hint_text("Content"))
            .changed()
        {
            actions.push(RowAction::Update(id, BlockPatch::content(content)));
        }
    }

    if block.kind.requires_url() {
        let hint = if block.kind == BlockKind::Image {
            "Image URL"
        } else {
            "Link URL"
        };
        let mut url = block.url.clone().unwrap_or_default();
        if ui
            .add(egui::TextEdit::singleline(&mut url).hint_text(hint))
            .changed()
        {
            actions.push(RowAction::Update(id, BlockPatch::url(url)));
        }
    }

    ui.horizontal(|ui| {
        let current = block.style.alignment.unwrap_or_default();
        let mut alignment = current;
        for option in Alignment::ALL {
            ui.selectable_value(&mut alignment, option, option.label());
        }
        if alignment != current {
            actions.push(RowAction::Update(
                id,
                BlockPatch::style(StylePatch::alignment(alignment)),
            ));
        }

        ui.separator();

        let mut rgb = block
            .style
            .color
            .as_deref()
            .and_then(parse_hex_rgb)
            .unwrap_or([0, 0, 0]);
        if ui.color_edit_button_srgb(&mut rgb).changed() {
            actions.push(RowAction::Update(
                id,
                BlockPatch::style(StylePatch::color(to_hex(rgb))),
            ));
        }
    });
}

/// Draw the page the way the exported document lays it out
fn draw_preview(ui: &mut egui::Ui, blocks: &[Block]) {
    if blocks.is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.weak("Your bio page will appear here");
        });
        return;
    }

    for rendered in blocks.iter().filter_map(resolve) {
        let align = match rendered.style.alignment {
            Alignment::Left => Align::Min,
            Alignment::Center => Align::Center,
            Alignment::Right => Align::Max,
        };
        ui.with_layout(Layout::top_down(align), |ui| draw_element(ui, &rendered));
        ui.add_space(12.0);
    }
}

fn draw_element(ui: &mut egui::Ui, rendered: &Rendered<'_>) {
    let color = parse_hex_rgb(rendered.style.color)
        .map(|[r, g, b]| Color32::from_rgb(r, g, b))
        .unwrap_or(Color32::BLACK);
    let size = font_px(rendered.style.font_size);
    let fill = rendered
        .style
        .background_color
        .and_then(parse_hex_rgb)
        .map(|[r, g, b]| Color32::from_rgb(r, g, b));

    match &rendered.element {
        Element::Heading { text } => {
            filled(ui, fill, |ui| {
                ui.label(RichText::new(*text).size(size).strong().color(color));
            });
        }
        Element::Paragraph { text } => {
            filled(ui, fill, |ui| {
                ui.label(RichText::new(*text).size(size).color(color));
            });
        }
        Element::Image { src } => {
            ui.label(RichText::new(format!("🖼 {src}")).italics());
        }
        Element::LinkButton { href, label } => {
            let mut button = egui::Button::new(RichText::new(*label).size(size).color(color));
            if let Some(fill) = fill {
                button = button.fill(fill);
            }
            if ui.add(button).on_hover_text(*href).clicked() {
                ui.ctx().open_url(egui::OpenUrl::new_tab(*href));
            }
        }
        Element::Email { address, label } => {
            ui.hyperlink_to(
                RichText::new(*label).size(size).color(color),
                format!("mailto:{address}"),
            );
        }
        Element::SocialRow => {
            ui.horizontal(|ui| {
                for label in SOCIAL_LINKS {
                    let link_color = if label == "GitHub" {
                        Color32::from_rgb(0x1f, 0x29, 0x37)
                    } else {
                        Color32::from_rgb(0x25, 0x63, 0xeb)
                    };
                    ui.label(RichText::new(label).color(link_color));
                }
            });
        }
    }
}

fn filled(ui: &mut egui::Ui, fill: Option<Color32>, add_contents: impl FnOnce(&mut egui::Ui)) {
    let mut frame = egui::Frame::none();
    if let Some(fill) = fill {
        frame = frame.fill(fill).inner_margin(4.0);
    }
    frame.show(ui, add_contents);
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new().context("Failed to open clipboard")?;
    clipboard
        .set_text(text.to_string())
        .context("Failed to write to clipboard")?;
    Ok(())
}

/// Parse `#rgb` or `#rrggbb`
fn parse_hex_rgb(value: &str) -> Option<[u8; 3]> {
    let hex = value.strip_prefix('#')?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = channel(&c.to_string())?;
                rgb[i] = v * 17;
            }
            Some(rgb)
        }
        6 => Some([
            channel(hex.get(0..2)?)?,
            channel(hex.get(2..4)?)?,
            channel(hex.get(4..6)?)?,
        ]),
        _ => None,
    }
}

fn to_hex([r, g, b]: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// CSS size to preview pixels; `rem`/`em` scale by 16
fn font_px(value: &str) -> f32 {
    let value = value.trim();
    let parsed = if let Some(rem) = value.strip_suffix("rem").or(value.strip_suffix("em")) {
        rem.trim().parse::<f32>().ok().map(|v| v * 16.0)
    } else if let Some(px) = value.strip_suffix("px") {
        px.trim().parse::<f32>().ok()
    } else {
        value.parse::<f32>().ok()
    };
    parsed.filter(|v| *v > 0.0).unwrap_or(16.0)
}

impl eframe::App for BioBuilderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_ui(ctx);
    }
}
