use upload_core::IconTransform;

/// CSS `transform` value for the icon; translate first so the scale stays
/// centered on the moved box.
#[inline]
pub fn icon_transform_css(t: &IconTransform) -> String {
    format!("translateY({:.2}px) scale({:.4})", t.translate_y, t.scale)
}

#[inline]
pub fn is_identity(t: &IconTransform) -> bool {
    t.translate_y == 0.0 && t.scale == 1.0
}
