//! Export pipeline: pagination boundaries, PDF assembly, HTML snapshot

use quickresume::export::{export_pdf, page_bands, pdf_bytes, pdf_filename, ExportConfig, Raster};
use quickresume::export::rasterize;
use quickresume::html::snapshot::standalone_page;
use quickresume::{render, render_with, Profile, ThemeId};

fn small_config() -> ExportConfig {
    ExportConfig::from_str(
        "[page]\nwidth_mm = 210.0\nheight_mm = 297.0\n\n[raster]\nwidth_px = 200\nscale = 1\n",
    )
    .expect("should parse")
}

#[test]
fn exact_two_page_raster_yields_exactly_two_pages() {
    let config = small_config();
    let page = config.page_height_px();
    let raster = Raster::new(config.device_width(), page * 2);

    let bands = page_bands(raster.height, page);
    assert_eq!(bands.len(), 2);
    assert!(bands.iter().all(|b| b.height > 0));

    let bytes = pdf_bytes(&raster, &config).expect("should assemble");
    let doc = lopdf::Document::load_mem(&bytes).expect("should parse back");
    assert_eq!(doc.get_pages().len(), 2);
}

#[test]
fn rendered_document_paginates_with_no_empty_band() {
    let config = small_config();
    let tree = render(&Profile::sample());
    let raster = rasterize(&tree, &config);

    let bands = page_bands(raster.height, config.page_height_px());
    assert!(!bands.is_empty());

    let covered: u32 = bands.iter().map(|b| b.height).sum();
    assert_eq!(covered, raster.height);
    assert!(bands.iter().all(|b| b.height > 0));
    assert!(bands.last().unwrap().height <= config.page_height_px());
}

#[test]
fn export_pdf_writes_a_parseable_file() {
    let dir = tempfile::tempdir().unwrap();
    let profile = Profile::sample();
    let path = dir.path().join(pdf_filename(&profile.full_name));

    let tree = render(&profile);
    export_pdf(&tree, &small_config(), &path).expect("export should succeed");

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.7"));
    assert!(lopdf::Document::load_mem(&bytes).is_ok());
}

#[test]
fn derived_filename_uses_underscores_and_suffix() {
    assert_eq!(pdf_filename("Alex Rivera"), "Alex_Rivera_Portfolio.pdf");
    assert_eq!(pdf_filename("Grace  Brewster Hopper"), "Grace_Brewster_Hopper_Portfolio.pdf");
}

#[test]
fn snapshot_is_a_full_page_with_external_assets() {
    let profile = Profile::sample();
    let tree = render_with(&profile, ThemeId::Professional);
    let page = standalone_page(&profile, &tree);

    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>Alex Rivera - Portfolio</title>"));
    assert!(page.contains(r#"<script src="https://cdn.tailwindcss.com"></script>"#));
    assert!(page.contains("fonts.googleapis.com/css2?family=Inter"));
    // The realized markup is embedded, keys included.
    assert!(page.contains("data-key=\"1\""));
    assert!(page.contains("TechFlow Solutions"));
}

#[test]
fn every_theme_produces_an_exportable_raster() {
    let config = small_config();
    let profile = Profile::sample();
    for theme in ThemeId::ALL {
        let raster = rasterize(&render_with(&profile, theme), &config);
        assert!(raster.height > 0, "zero-height raster under theme {theme}");
        assert_eq!(raster.width, config.device_width());
    }
}
