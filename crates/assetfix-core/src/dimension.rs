//! Logo dimension math

/// Scale `(width, height)` so the longer edge becomes `max_edge`.
///
/// The ratio is taken from the longer edge in single precision and both
/// results are truncated toward zero, never rounded. Existing registry logos
/// were resized with exactly this arithmetic, so a rounding variant would
/// produce one-pixel drift on re-runs.
///
/// A side that would truncate to zero is kept at one pixel, since an image
/// cannot have an empty edge.
pub fn target_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    let width_f = width as f32;
    let height_f = height as f32;

    let longer = if height_f > width_f { height_f } else { width_f };
    if longer == 0.0 {
        return (0, 0);
    }

    let ratio = max_edge as f32 / longer;

    let target_w = ((width_f * ratio) as u32).max(1);
    let target_h = ((height_f * ratio) as u32).max(1);

    (target_w, target_h)
}
