use crate::coords::Vec2;

/// Number of invocations per instance.
pub const CORNER_COUNT: u32 = 4;

/// Corners of a unit square centered on the origin.
///
/// Order: bottom-left, top-left, top-right, bottom-right (clip space, +Y up).
pub const CORNER_OFFSETS: [Vec2; CORNER_COUNT as usize] = [
    Vec2::new(-0.5, -0.5),
    Vec2::new(-0.5, 0.5),
    Vec2::new(0.5, 0.5),
    Vec2::new(0.5, -0.5),
];
