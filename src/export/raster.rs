//! Greeked raster capture of a rendered document
//!
//! The exporter slices a tall raster image of the document; it has no
//! semantic awareness of section boundaries. This rasterizer produces
//! that surface as a greeked preview: text becomes proportional line
//! bars on a white sheet. There is no font engine, in line with the
//! export contract's scope (a paginated raster capture, not print-accurate
//! typesetting). Output is deterministic for a given tree and geometry.

use crate::document::{DocumentTree, Node, Tag};

use super::config::ExportConfig;

/// An RGB8 raster surface, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Raster {
    /// A white surface of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0xff; (width as usize) * (height as usize) * 3],
        }
    }

    /// Fill a rectangle, clamped to the surface.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, rgb: [u8; 3]) {
        let x1 = (x + w).min(self.width);
        let y1 = (y + h).min(self.height);
        for row in y.min(self.height)..y1 {
            for col in x.min(self.width)..x1 {
                let i = ((row as usize) * (self.width as usize) + col as usize) * 3;
                self.pixels[i..i + 3].copy_from_slice(&rgb);
            }
        }
    }

    /// Copy out a horizontal band, clamped to the surface.
    pub fn band(&self, top: u32, height: u32) -> Raster {
        let top = top.min(self.height);
        let h = height.min(self.height - top);
        let row_bytes = (self.width as usize) * 3;
        let start = (top as usize) * row_bytes;
        let end = start + (h as usize) * row_bytes;
        Raster {
            width: self.width,
            height: h,
            pixels: self.pixels[start..end].to_vec(),
        }
    }
}

const HEADING_SHADE: [u8; 3] = [0x11, 0x11, 0x11];
const BODY_SHADE: [u8; 3] = [0x55, 0x55, 0x55];
const RULE_SHADE: [u8; 3] = [0x00, 0x00, 0x00];

/// One horizontal slot of the greeked layout.
struct Row {
    height: u32,
    /// Bar to paint inside the slot: x offset, width, bar height, shade.
    bar: Option<(u32, u32, u32, [u8; 3])>,
}

struct Greeker {
    em: u32,
    margin: u32,
    usable: u32,
    rows: Vec<Row>,
}

impl Greeker {
    fn gap(&mut self, height: u32) {
        self.rows.push(Row { height, bar: None });
    }

    /// Wrapped line bars for a run of text at the given size.
    fn text_rows(&mut self, text: &str, size: u32, indent: u32, shade: [u8; 3]) {
        let chars = text.chars().count() as u32;
        if chars == 0 {
            return;
        }
        let char_w = (size / 2).max(1);
        let usable = self.usable.saturating_sub(indent).max(char_w);
        let cols = (usable / char_w).max(1);
        let lines = chars.div_ceil(cols);
        let line_h = size + size / 4;
        let bar_h = size * 3 / 5;

        for line in 0..lines {
            let remaining = chars - line * cols;
            let width = remaining.min(cols) * char_w;
            self.rows.push(Row {
                height: line_h,
                bar: Some((self.margin + indent, width, bar_h, shade)),
            });
        }
    }

    fn walk(&mut self, node: &Node, indent: u32) {
        let em = self.em;
        match node.tag {
            Tag::Heading(level) => {
                let size = match level {
                    1 => em * 2,
                    2 => em * 3 / 2,
                    _ => em * 5 / 4,
                };
                if let Some(text) = &node.text {
                    self.text_rows(text, size, indent, HEADING_SHADE);
                }
                for child in &node.children {
                    self.walk(child, indent);
                }
                self.gap(em / 4);
                return;
            }
            Tag::Divider => {
                self.rows.push(Row {
                    height: em / 2,
                    bar: Some((self.margin, self.usable, 2, RULE_SHADE)),
                });
                return;
            }
            Tag::Item => {
                if let Some(text) = &node.text {
                    self.text_rows(text, em, indent + em, BODY_SHADE);
                }
            }
            Tag::Paragraph | Tag::Span | Tag::Link => {
                if let Some(text) = &node.text {
                    self.text_rows(text, em, indent, BODY_SHADE);
                }
            }
            Tag::Block | Tag::Section | Tag::List => {}
        }

        for child in &node.children {
            self.walk(child, indent);
        }

        if node.tag == Tag::Section {
            self.gap(em / 2);
        }
    }
}

/// Rasterize a rendered document at the configured capture geometry.
///
/// The surface width is fixed by configuration; height follows content
/// and is never zero, so a rendered document always paginates to at
/// least one band.
pub fn rasterize(tree: &DocumentTree, config: &ExportConfig) -> Raster {
    let width = config.device_width();
    let em = (width / 50).max(4);
    let margin = em * 2;

    let mut greeker = Greeker {
        em,
        margin,
        usable: width - 2 * margin,
        rows: Vec::new(),
    };
    greeker.walk(&tree.root, 0);

    let content: u32 = greeker.rows.iter().map(|r| r.height).sum();
    let height = content + 2 * margin;

    let mut raster = Raster::new(width, height);
    let mut y = margin;
    for row in &greeker.rows {
        if let Some((x, w, bar_h, shade)) = row.bar {
            let pad = row.height.saturating_sub(bar_h) / 2;
            raster.fill_rect(x, y + pad, w, bar_h, shade);
        }
        y += row.height;
    }
    raster
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Profile;
    use crate::render::render;

    #[test]
    fn test_raster_starts_white() {
        let raster = Raster::new(4, 2);
        assert_eq!(raster.pixels.len(), 24);
        assert!(raster.pixels.iter().all(|&b| b == 0xff));
    }

    #[test]
    fn test_fill_rect_clamps() {
        let mut raster = Raster::new(4, 4);
        raster.fill_rect(2, 2, 10, 10, [0, 0, 0]);
        // Top-left pixel untouched, bottom-right painted.
        assert_eq!(&raster.pixels[0..3], &[0xff, 0xff, 0xff]);
        let last = ((3 * 4 + 3) * 3) as usize;
        assert_eq!(&raster.pixels[last..last + 3], &[0, 0, 0]);
    }

    #[test]
    fn test_band_clamps_to_surface() {
        let raster = Raster::new(2, 10);
        let band = raster.band(8, 5);
        assert_eq!(band.height, 2);
        assert_eq!(band.width, 2);
    }

    #[test]
    fn test_rasterize_empty_profile_is_nonzero() {
        let tree = render(&Profile::default());
        let config = ExportConfig::default();
        let raster = rasterize(&tree, &config);
        assert_eq!(raster.width, config.device_width());
        assert!(raster.height > 0);
    }

    fn small_config() -> ExportConfig {
        ExportConfig::from_str(
            "[page]\nwidth_mm = 210.0\nheight_mm = 297.0\n\n[raster]\nwidth_px = 200\nscale = 1\n",
        )
        .expect("should parse")
    }

    #[test]
    fn test_rasterize_is_deterministic() {
        let tree = render(&Profile::sample());
        let config = small_config();
        assert_eq!(rasterize(&tree, &config), rasterize(&tree, &config));
    }

    #[test]
    fn test_more_content_means_taller_raster() {
        let config = small_config();
        let short = rasterize(&render(&Profile::default()), &config);
        let long = rasterize(&render(&Profile::sample()), &config);
        assert!(long.height > short.height);
    }
}
