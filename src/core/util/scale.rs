/// Maps `value` linearly from `[src_min, src_max]` onto `[dst_min, dst_max]`.
///
/// The source range must be non-degenerate (`src_min != src_max`); a zero-width
/// source range divides by zero and yields a non-finite result.
#[must_use]
#[inline]
pub fn scale(value: f64, src_min: f64, src_max: f64, dst_min: f64, dst_max: f64) -> f64 {
    dst_min + (value - src_min) / (src_max - src_min) * (dst_max - dst_min)
}
