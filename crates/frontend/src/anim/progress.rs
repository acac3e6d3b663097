//! Scroll geometry for scrub bindings.
//!
//! Pure math over document coordinates; the controller feeds it
//! measurements and writes the result back as styles.

use super::spec::Region;

/// Resolve a region into absolute scroll offsets.
///
/// `doc_top` is the element's top in document coordinates. The region
/// spans the element's height shrunk by the viewport (a full-page
/// wrapper then scrubs from page top to page bottom), shifted by the
/// declared offsets. A degenerate region collapses onto its start.
pub fn resolve_region(region: Region, doc_top: f64, height: f64, viewport: f64) -> (f64, f64) {
    let start = doc_top + region.start;
    let end = doc_top + (height - viewport).max(0.0) + region.end;
    (start, end.max(start))
}

/// Clamped linear progress of `scroll_y` through `[start, end]`.
///
/// An empty region reads as already swept.
pub fn scrub_progress(scroll_y: f64, start: f64, end: f64) -> f64 {
    if end <= start {
        return 1.0;
    }
    ((scroll_y - start) / (end - start)).clamp(0.0, 1.0)
}
