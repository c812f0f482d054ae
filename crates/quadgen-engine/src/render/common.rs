//! Pipeline pieces shared by the quad renderer.

use std::ops::Range;

use crate::quad::InstanceRecord;

pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState {
        color: component,
        alpha: component,
    }
}

/// Two triangles over the corner table: (0, 1, 2) and (0, 2, 3).
///
/// Every instance therefore sees vertex indices 0..=3, each at least once.
pub(super) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Most instances one buffer of `max_buffer_size` bytes can hold.
pub(super) fn instances_fitting(max_buffer_size: u64) -> usize {
    let per_instance = std::mem::size_of::<InstanceRecord>() as u64;
    usize::try_from(max_buffer_size / per_instance).unwrap_or(usize::MAX).max(1)
}

/// Instance buffer capacity for `required` instances, never above `limit`.
pub(super) fn grown_capacity(required: usize, limit: usize) -> usize {
    required.next_power_of_two().max(64).min(limit)
}

/// Splits `total` instances into consecutive draws of at most `per_draw`.
pub(super) fn draw_chunks(total: usize, per_draw: usize) -> impl Iterator<Item = Range<usize>> {
    let per_draw = per_draw.max(1);
    (0..total)
        .step_by(per_draw)
        .map(move |start| start..(start + per_draw).min(total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quad::CORNER_COUNT;

    #[test]
    fn indices_cover_every_corner() {
        for corner in 0..CORNER_COUNT as u16 {
            assert!(QUAD_INDICES.contains(&corner), "corner {corner} never emitted");
        }
        assert!(QUAD_INDICES.iter().all(|&i| (i as u32) < CORNER_COUNT));
    }

    #[test]
    fn capacity_has_floor_and_rounds_up() {
        assert_eq!(grown_capacity(0, usize::MAX), 64);
        assert_eq!(grown_capacity(1, usize::MAX), 64);
        assert_eq!(grown_capacity(64, usize::MAX), 64);
        assert_eq!(grown_capacity(65, usize::MAX), 128);
        assert_eq!(grown_capacity(1000, usize::MAX), 1024);
    }

    #[test]
    fn capacity_never_exceeds_the_buffer_limit() {
        let max_bytes = wgpu::Limits::default().max_buffer_size;
        let limit = instances_fitting(max_bytes);
        assert_eq!(limit, 8_388_608);

        // One past the limit would round up to twice the allowed size.
        let cap = grown_capacity(limit + 1, limit);
        assert_eq!(cap, limit);
        assert!((cap * std::mem::size_of::<InstanceRecord>()) as u64 <= max_bytes);
    }

    #[test]
    fn tiny_limits_still_fit_one_instance() {
        assert_eq!(instances_fitting(0), 1);
        assert_eq!(instances_fitting(64), 2);
        assert_eq!(grown_capacity(10, instances_fitting(64)), 2);
    }

    #[test]
    fn chunks_cover_the_batch_in_order() {
        let chunks: Vec<_> = draw_chunks(10, 4).collect();
        assert_eq!(chunks, vec![0..4, 4..8, 8..10]);

        let limit = 8_388_608;
        let chunks: Vec<_> = draw_chunks(limit + 1, limit).collect();
        assert_eq!(chunks, vec![0..limit, limit..limit + 1]);
    }

    #[test]
    fn fitting_batches_draw_once() {
        assert_eq!(draw_chunks(64, 64).collect::<Vec<_>>(), vec![0..64]);
        assert_eq!(draw_chunks(0, 64).count(), 0);
    }
}
