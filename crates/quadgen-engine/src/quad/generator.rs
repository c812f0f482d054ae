use super::{InstanceRecord, QuadTransform, CORNER_COUNT, CORNER_OFFSETS};

/// Result of one invocation: clip position plus the forwarded color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VertexOutput {
    pub position: [f32; 4],
    pub color: [f32; 4],
}

/// Runs the quad stage for a single `(instance, vertex_index)` pair.
///
/// `vertex_index` must be in `0..4`. The driver guarantees this, so it is only
/// checked in debug builds; release builds wrap the index into range.
#[inline]
pub fn generate_vertex(vertex_index: u32, instance: &InstanceRecord) -> VertexOutput {
    debug_assert!(
        vertex_index < CORNER_COUNT,
        "generate_vertex: vertex_index {vertex_index} out of range 0..{CORNER_COUNT}"
    );
    let offset = CORNER_OFFSETS[(vertex_index & (CORNER_COUNT - 1)) as usize];

    VertexOutput {
        position: QuadTransform::for_instance(instance).apply(offset),
        color: instance.color,
    }
}

/// All four invocations of one instance, in corner-table order.
pub fn quad_corners(instance: &InstanceRecord) -> [VertexOutput; 4] {
    core::array::from_fn(|i| generate_vertex(i as u32, instance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{ColorRgba, Vec2};

    fn inst(ax: f32, ay: f32, w: f32, h: f32) -> InstanceRecord {
        InstanceRecord::new(Vec2::new(ax, ay), w, h, ColorRgba::new(0.2, 0.4, 0.6, 1.0))
    }

    fn xy(v: VertexOutput) -> (f32, f32) {
        (v.position[0], v.position[1])
    }

    // ── placement ─────────────────────────────────────────────────────────

    #[test]
    fn concrete_scenario() {
        let c = quad_corners(&inst(10.0, 20.0, 4.0, 2.0));
        assert_eq!(xy(c[0]), (8.0, 19.0));
        assert_eq!(xy(c[1]), (8.0, 21.0));
        assert_eq!(xy(c[2]), (12.0, 21.0));
        assert_eq!(xy(c[3]), (12.0, 19.0));
        for v in c {
            assert_eq!(v.position[2], 0.0);
            assert_eq!(v.position[3], 1.0);
        }
    }

    #[test]
    fn corners_match_closed_form() {
        let cases = [
            (0.0, 0.0, 2.0, 2.0),
            (-0.3, 0.7, 0.1, 0.25),
            (123.5, -42.0, 17.0, 3.5),
            (0.5, 0.5, 1e-3, 1e3),
        ];
        for (ax, ay, w, h) in cases {
            let c = quad_corners(&inst(ax, ay, w, h));
            let expected = [
                (ax - w / 2.0, ay - h / 2.0),
                (ax - w / 2.0, ay + h / 2.0),
                (ax + w / 2.0, ay + h / 2.0),
                (ax + w / 2.0, ay - h / 2.0),
            ];
            for (got, want) in c.iter().zip(expected) {
                let (x, y) = xy(*got);
                assert!((x - want.0).abs() <= f32::EPSILON * want.0.abs().max(1.0), "x {x} vs {}", want.0);
                assert!((y - want.1).abs() <= f32::EPSILON * want.1.abs().max(1.0), "y {y} vs {}", want.1);
            }
        }
    }

    #[test]
    fn corners_form_axis_aligned_rect_of_requested_size() {
        let c = quad_corners(&inst(1.0, -1.0, 6.0, 4.0));
        let (x0, y0) = xy(c[0]);
        let (x2, y2) = xy(c[2]);
        assert_eq!(x2 - x0, 6.0);
        assert_eq!(y2 - y0, 4.0);
        // Shared edges.
        assert_eq!(xy(c[0]).0, xy(c[1]).0);
        assert_eq!(xy(c[1]).1, xy(c[2]).1);
        assert_eq!(xy(c[2]).0, xy(c[3]).0);
        assert_eq!(xy(c[3]).1, xy(c[0]).1);
    }

    // ── purity ────────────────────────────────────────────────────────────

    #[test]
    fn repeated_invocations_are_bit_identical() {
        let i = inst(0.1, 0.2, 0.3, 0.7);
        for idx in 0..4 {
            let a = generate_vertex(idx, &i);
            let b = generate_vertex(idx, &i);
            assert_eq!(a.position.map(f32::to_bits), b.position.map(f32::to_bits));
            assert_eq!(a.color.map(f32::to_bits), b.color.map(f32::to_bits));
        }
    }

    // ── color ─────────────────────────────────────────────────────────────

    #[test]
    fn color_passes_through_unclamped() {
        let colors = [
            [0.0, 0.0, 0.0, 0.0],
            [1.0, 0.5, 0.25, 1.0],
            [-3.0, 7.5, 1e9, -0.0],
            [f32::INFINITY, f32::MIN, f32::MAX, 2.0],
        ];
        for c in colors {
            let mut i = inst(0.0, 0.0, 1.0, 1.0);
            i.color = c;
            for v in quad_corners(&i) {
                assert_eq!(v.color.map(f32::to_bits), c.map(f32::to_bits));
            }
        }
    }

    // ── degenerate geometry ───────────────────────────────────────────────

    #[test]
    fn zero_size_collapses_to_anchor() {
        for v in quad_corners(&inst(3.0, -5.0, 0.0, 0.0)) {
            assert_eq!(xy(v), (3.0, -5.0));
        }
    }

    #[test]
    fn negative_width_mirrors_on_x() {
        let mirrored = quad_corners(&inst(0.0, 0.0, -2.0, 3.0));
        let normal = quad_corners(&inst(0.0, 0.0, 2.0, 3.0));
        for (m, n) in mirrored.iter().zip(normal.iter()) {
            assert_eq!(m.position[0], -n.position[0]);
            assert_eq!(m.position[1], n.position[1]);
        }
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn out_of_range_index_wraps_in_release() {
        let i = inst(0.0, 0.0, 2.0, 2.0);
        assert_eq!(generate_vertex(5, &i), generate_vertex(1, &i));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn out_of_range_index_trips_debug_assert() {
        let _ = generate_vertex(4, &inst(0.0, 0.0, 1.0, 1.0));
    }
}
