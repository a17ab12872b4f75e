//! PDF assembly from a paginated raster
//!
//! One PDF page per band, each band embedded as an image XObject drawn
//! from the top of its page at the page's full width.

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::document::DocumentTree;

use super::config::ExportConfig;
use super::paginate::page_bands;
use super::raster::{rasterize, Raster};
use super::ExportError;

/// Derive the download filename from the full-name field: whitespace runs
/// collapse to underscores, with the fixed portfolio suffix.
pub fn pdf_filename(full_name: &str) -> String {
    let stem = full_name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{stem}_Portfolio.pdf")
}

/// Assemble the paginated PDF for a raster surface.
pub fn pdf_bytes(raster: &Raster, config: &ExportConfig) -> Result<Vec<u8>, ExportError> {
    let bands = page_bands(raster.height, config.page_height_px());
    if bands.is_empty() {
        return Err(ExportError::Empty);
    }

    let page_w = config.page.width_pt();
    let page_h = config.page.height_pt();

    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();
    let mut page_ids: Vec<Object> = Vec::new();

    for band in bands {
        let slice = raster.band(band.top, band.height);

        let image_id = doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => slice.width as i64,
                "Height" => slice.height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
            },
            slice.pixels,
        ));
        let resources_id = doc.add_object(dictionary! {
            "XObject" => dictionary! { "Im0" => image_id },
        });

        // Band width maps onto the page width; height keeps the raster's
        // aspect so bands butt together across page boundaries.
        let img_h = band.height as f64 / raster.width as f64 * page_w;
        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        page_w.into(),
                        0.0.into(),
                        0.0.into(),
                        img_h.into(),
                        0.0.into(),
                        (page_h - img_h).into(),
                    ],
                ),
                Operation::new("Do", vec!["Im0".into()]),
                Operation::new("Q", vec![]),
            ],
        };
        let encoded = content
            .encode()
            .map_err(|e| ExportError::Assembly(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.0.into(), 0.0.into(), page_w.into(), page_h.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        page_ids.push(page_id.into());
    }

    let count = page_ids.len() as i64;
    doc.objects.insert(
        pages_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids,
            "Count" => count,
        }
        .into(),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| ExportError::Assembly(e.to_string()))?;
    Ok(bytes)
}

/// Rasterize a rendered document and write the paginated PDF.
///
/// Failures are logged here at the export boundary and returned for the
/// caller to surface; the profile and editor state are unaffected.
pub fn export_pdf(
    tree: &DocumentTree,
    config: &ExportConfig,
    path: &Path,
) -> Result<(), ExportError> {
    let result = (|| -> Result<(), ExportError> {
        let raster = rasterize(tree, config);
        let bytes = pdf_bytes(&raster, config)?;
        std::fs::write(path, bytes)?;
        Ok(())
    })();
    if let Err(e) = &result {
        log::error!("PDF generation failed: {e}");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_filename_collapses_whitespace() {
        assert_eq!(pdf_filename("Alex Rivera"), "Alex_Rivera_Portfolio.pdf");
        assert_eq!(pdf_filename("Ada   B.  Lovelace"), "Ada_B._Lovelace_Portfolio.pdf");
        assert_eq!(pdf_filename(""), "_Portfolio.pdf");
    }

    fn small_config() -> ExportConfig {
        ExportConfig::from_str(
            "[page]\nwidth_mm = 210.0\nheight_mm = 297.0\n\n[raster]\nwidth_px = 200\nscale = 1\n",
        )
        .expect("should parse")
    }

    #[test]
    fn test_pdf_bytes_page_count_matches_bands() {
        let config = small_config();
        // Exactly two page-heights tall: exactly two pages.
        let raster = Raster::new(config.device_width(), config.page_height_px() * 2);
        let bytes = pdf_bytes(&raster, &config).expect("should assemble");
        assert!(bytes.starts_with(b"%PDF-1.7"));

        let doc = Document::load_mem(&bytes).expect("should parse back");
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn test_pdf_bytes_empty_raster_is_error() {
        let config = small_config();
        let raster = Raster::new(config.device_width(), 0);
        assert!(matches!(pdf_bytes(&raster, &config), Err(ExportError::Empty)));
    }
}
