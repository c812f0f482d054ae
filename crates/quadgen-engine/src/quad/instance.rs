use bytemuck::{Pod, Zeroable};

use crate::coords::{ColorRgba, Rect, Vec2, Viewport};

/// Per-instance input of the quad stage.
///
/// The struct is the GPU instance layout verbatim (32 bytes):
///
/// | slot | field    | format      | offset |
/// |------|----------|-------------|--------|
/// | 0    | `anchor` | `Float32x2` | 0      |
/// | 1    | `width`  | `Float32`   | 8      |
/// | 2    | `height` | `Float32`   | 12     |
/// | 3    | `color`  | `Float32x4` | 16     |
///
/// Slot order is part of the shader interface and must not change.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct InstanceRecord {
    /// Quad center, in clip space.
    pub anchor: [f32; 2],
    /// Clip-space width. Not validated; negative mirrors the quad.
    pub width: f32,
    /// Clip-space height. Not validated; negative mirrors the quad.
    pub height: f32,
    /// Forwarded to the fragment stage unchanged.
    pub color: [f32; 4],
}

impl InstanceRecord {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x2, // anchor
        1 => Float32,   // width
        2 => Float32,   // height
        3 => Float32x4  // color
    ];

    #[inline]
    pub const fn new(anchor: Vec2, width: f32, height: f32, color: ColorRgba) -> Self {
        Self {
            anchor: anchor.to_array(),
            width,
            height,
            color: color.to_array(),
        }
    }

    /// Builds a record covering `rect` (logical pixels) inside `viewport`.
    ///
    /// The rect is normalized first, so the resulting width/height are never negative.
    pub fn from_pixel_rect(rect: Rect, color: ColorRgba, viewport: Viewport) -> Self {
        let r = rect.normalized();
        let anchor = viewport.pixel_to_clip(r.center());
        let size = viewport.pixel_extent_to_clip(r.size);
        Self::new(anchor, size.x, size.y, color)
    }

    #[inline]
    pub fn anchor(&self) -> Vec2 {
        Vec2::from_array(self.anchor)
    }

    /// `(width, height)`.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Instance-rate vertex buffer layout (slots 0..=3).
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRecord>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn record_is_32_bytes() {
        assert_eq!(std::mem::size_of::<InstanceRecord>(), 32);
    }

    #[test]
    fn layout_slots_and_offsets_are_fixed() {
        let layout = InstanceRecord::layout();
        assert_eq!(layout.array_stride, 32);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Instance);

        let got: Vec<(u32, u64, wgpu::VertexFormat)> = layout
            .attributes
            .iter()
            .map(|a| (a.shader_location, a.offset, a.format))
            .collect();

        assert_eq!(
            got,
            vec![
                (0, 0, wgpu::VertexFormat::Float32x2),
                (1, 8, wgpu::VertexFormat::Float32),
                (2, 12, wgpu::VertexFormat::Float32),
                (3, 16, wgpu::VertexFormat::Float32x4),
            ]
        );
    }

    #[test]
    fn bytes_follow_field_order() {
        let rec = InstanceRecord::new(
            Vec2::new(1.0, 2.0),
            3.0,
            4.0,
            ColorRgba::new(5.0, 6.0, 7.0, 8.0),
        );
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&rec));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    // ── from_pixel_rect ───────────────────────────────────────────────────

    #[test]
    fn full_viewport_rect_covers_clip_space() {
        let vp = Viewport::new(640.0, 480.0);
        let rec = InstanceRecord::from_pixel_rect(
            Rect::new(0.0, 0.0, 640.0, 480.0),
            ColorRgba::white(),
            vp,
        );
        assert_eq!(rec.anchor(), Vec2::new(0.0, 0.0));
        assert_eq!(rec.size(), Vec2::new(2.0, 2.0));
    }

    #[test]
    fn top_left_quarter_lands_in_upper_left() {
        let vp = Viewport::new(100.0, 100.0);
        let rec = InstanceRecord::from_pixel_rect(
            Rect::new(0.0, 0.0, 50.0, 50.0),
            ColorRgba::black(),
            vp,
        );
        assert_eq!(rec.anchor(), Vec2::new(-0.5, 0.5));
        assert_eq!(rec.size(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn negative_pixel_rect_is_normalized() {
        let vp = Viewport::new(100.0, 100.0);
        let a = InstanceRecord::from_pixel_rect(Rect::new(50.0, 50.0, -50.0, -50.0), ColorRgba::white(), vp);
        let b = InstanceRecord::from_pixel_rect(Rect::new(0.0, 0.0, 50.0, 50.0), ColorRgba::white(), vp);
        assert_eq!(a, b);
    }
}
