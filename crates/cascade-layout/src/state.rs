//! Layout state: computed placements and per-column bookkeeping.

use cascade_geometry::Rect;
use smallvec::SmallVec;

use crate::config::WaterfallConfig;

/// Rectangle computed for a single item.
///
/// Computed once when the item is first laid out and immutable afterwards;
/// the placement list stays in item index order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemPlacement {
    /// Index of the item in the data source.
    pub index: usize,
    /// Position and size of the item inside the container.
    pub frame: Rect,
}

/// Evolving result of incremental waterfall measurement.
///
/// Owned by the caller (through [`WaterfallLayout`]) and passed to
/// [`measure_waterfall`], which appends placements for items it has not seen
/// yet. Column heights never shrink; the state is only re-seeded when the
/// configuration changes.
///
/// [`WaterfallLayout`]: crate::WaterfallLayout
/// [`measure_waterfall`]: crate::measure_waterfall
#[derive(Clone, Debug)]
pub struct WaterfallState {
    pub(crate) placements: Vec<ItemPlacement>,
    pub(crate) column_heights: SmallVec<[f32; 4]>,
    pub(crate) max_height: f32,
    pub(crate) next_unlaid_index: usize,
}

impl WaterfallState {
    /// Fresh state seeded from `config`: one cumulative height per column,
    /// each starting at the top inset.
    pub fn new(config: &WaterfallConfig) -> Self {
        Self {
            placements: Vec::new(),
            column_heights: SmallVec::from_elem(config.section_inset.top, config.column_count),
            max_height: config.section_inset.top,
            next_unlaid_index: 0,
        }
    }

    /// Discards every placement and re-seeds the column heights.
    pub fn reset(&mut self, config: &WaterfallConfig) {
        *self = Self::new(config);
    }

    /// All placements computed so far, in item index order.
    pub fn placements(&self) -> &[ItemPlacement] {
        &self.placements
    }

    /// Cumulative height consumed per column, including the top inset and
    /// the trailing line spacing of the last item placed in each column.
    pub fn column_heights(&self) -> &[f32] {
        &self.column_heights
    }

    /// The tallest column's cumulative height.
    pub fn max_height(&self) -> f32 {
        self.max_height
    }

    /// Count of leading items already placed; the next pass starts here.
    pub fn next_unlaid_index(&self) -> usize {
        self.next_unlaid_index
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub(crate) fn recompute_max_height(&mut self) {
        self.max_height = self
            .column_heights
            .iter()
            .copied()
            .fold(f32::NEG_INFINITY, f32::max);
    }
}
