use crate::coords::{ColorRgba, Rect, Viewport};
use crate::quad::InstanceRecord;

use super::{SortKey, ZIndex};

/// One recorded quad.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadItem {
    pub key: SortKey,
    pub instance: InstanceRecord,
}

/// Instance records for one frame.
///
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame
///   allocation once warmed
#[derive(Debug, Default)]
pub struct QuadBatch {
    items: Vec<QuadItem>,
    next_order: u64,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl QuadBatch {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all records. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Records in insertion order.
    #[inline]
    pub fn items(&self) -> &[QuadItem] {
        &self.items
    }

    /// Records a clip-space instance on layer `z`.
    #[inline]
    pub fn push(&mut self, z: ZIndex, instance: InstanceRecord) {
        let order = self.next_order;
        self.next_order += 1;

        self.items.push(QuadItem {
            key: SortKey::new(z, order),
            instance,
        });
        self.sorted_dirty = true;
    }

    /// Records a quad laid out in logical pixels.
    ///
    /// Empty rects are skipped; they would rasterize to nothing.
    pub fn push_pixel_rect(&mut self, z: ZIndex, rect: Rect, color: ColorRgba, viewport: Viewport) {
        let rect = rect.normalized();
        if rect.is_empty() {
            return;
        }
        self.push(z, InstanceRecord::from_pixel_rect(rect, color, viewport));
    }

    /// Iterates instance records back-to-front.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &InstanceRecord> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i].instance)
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Keys are unique (insertion order is part of them), so an unstable sort is fine.
        let items = &self.items;
        self.sorted_indices
            .sort_unstable_by_key(|&i| items[i].key);

        self.sorted_dirty = false;
    }
}
