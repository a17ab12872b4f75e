//! Standalone HTML snapshot export
//!
//! Produces a single page embedding the realized markup. Styling comes
//! from the Tailwind CDN and the Inter font over the network; this is a
//! snapshot of the rendered document, not a self-contained asset bundle.

use crate::document::DocumentTree;
use crate::profile::Profile;

use super::{escape_text, realize};

/// Classes of the fixed-width sheet the document renders onto, sized for
/// ISO A4 portrait so the exported page matches the raster export.
const SHEET_CLASSES: &str = "bg-white shadow-2xl min-h-[297mm] w-[210mm] mx-auto";

/// Build the standalone snapshot page for a rendered profile.
pub fn standalone_page(profile: &Profile, tree: &DocumentTree) -> String {
    let markup = realize(tree);
    let title = escape_text(&profile.full_name);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Portfolio</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap" rel="stylesheet">
    <style>body {{ font-family: 'Inter', sans-serif; }}</style>
</head>
<body>
    <div id="root">
        <div class="{SHEET_CLASSES}">
{markup}
        </div>
    </div>
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;

    #[test]
    fn test_snapshot_embeds_markup_and_links() {
        let profile = Profile::sample();
        let tree = render(&profile);
        let page = standalone_page(&profile, &tree);

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Alex Rivera - Portfolio</title>"));
        assert!(page.contains("https://cdn.tailwindcss.com"));
        assert!(page.contains("fonts.googleapis.com"));
        assert!(page.contains("Alex Rivera"));
    }

    #[test]
    fn test_snapshot_title_escaped() {
        let mut profile = Profile::default();
        profile.full_name = "A <b> B".into();
        let tree = render(&profile);
        let page = standalone_page(&profile, &tree);
        assert!(page.contains("<title>A &lt;b&gt; B - Portfolio</title>"));
    }
}
