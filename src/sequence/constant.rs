//! The fixed value exposed alongside the fill operations

/// The value returned by [`get_four`]
pub const FOUR: i32 = 4;

/// Returns the constant `4`.
#[inline]
pub fn get_four() -> i32 {
    FOUR
}
