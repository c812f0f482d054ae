/// Paint layer. Higher values are drawn later, on top of lower ones.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ZIndex(pub i32);

impl ZIndex {
    pub const BACKGROUND: ZIndex = ZIndex(-100);
    pub const DEFAULT: ZIndex = ZIndex(0);
    pub const OVERLAY: ZIndex = ZIndex(100);

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}

/// Stable paint-order key: `z` first, then insertion `order`.
///
/// Field order matters: the derived `Ord` compares lexicographically.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u64,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u64) -> Self {
        Self { z, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_dominates_order() {
        let back_late = SortKey::new(ZIndex::new(0), 99);
        let front_early = SortKey::new(ZIndex::new(1), 0);
        assert!(back_late < front_early);
    }

    #[test]
    fn order_breaks_ties() {
        assert!(SortKey::new(ZIndex::DEFAULT, 1) < SortKey::new(ZIndex::DEFAULT, 2));
    }

    #[test]
    fn order_is_wider_than_u32() {
        let past_u32 = SortKey::new(ZIndex::DEFAULT, u32::MAX as u64 + 1);
        assert!(SortKey::new(ZIndex::DEFAULT, u32::MAX as u64) < past_u32);
        assert!(SortKey::new(ZIndex::DEFAULT, 0) < past_u32);
    }

    #[test]
    fn named_layers_are_ordered() {
        assert!(ZIndex::BACKGROUND < ZIndex::DEFAULT);
        assert!(ZIndex::DEFAULT < ZIndex::OVERLAY);
    }
}
