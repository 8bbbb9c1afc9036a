//! The incremental waterfall measurement pass.

use cascade_geometry::{Rect, Size};

use crate::config::WaterfallConfig;
use crate::error::LayoutError;
use crate::state::{ItemPlacement, WaterfallState};

/// Column assignment strategy for newly placed items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnFill {
    /// Item `i` goes to column `i % column_count`, regardless of how tall
    /// the columns currently are. This matches the classic collection-view
    /// waterfall behavior and is the default.
    RoundRobin,
    /// Each item goes to the column with the smallest cumulative height,
    /// ties breaking toward the lower column index. Produces tighter
    /// balancing when item heights vary a lot.
    ShortestColumn,
}

impl Default for ColumnFill {
    fn default() -> Self {
        ColumnFill::RoundRobin
    }
}

impl ColumnFill {
    fn pick(&self, index: usize, column_heights: &[f32]) -> usize {
        match self {
            ColumnFill::RoundRobin => index % column_heights.len(),
            ColumnFill::ShortestColumn => {
                let mut best = 0;
                for (col, height) in column_heights.iter().enumerate().skip(1) {
                    if *height < column_heights[best] {
                        best = col;
                    }
                }
                best
            }
        }
    }
}

/// Runs one measurement pass, appending placements for every item the state
/// has not seen yet.
///
/// Heights are pulled from `height_for` exactly once per new index, in
/// increasing index order, before any state is mutated: a `None` for a
/// required index aborts the whole pass with [`LayoutError::MissingHeight`]
/// and leaves prior placements intact. Calling again with an `item_count`
/// the state already covers is a no-op.
///
/// The provider's answer is trusted for the lifetime of the placement; if a
/// provider later reports a different height for an already-placed index,
/// reset the state and lay everything out again.
///
/// # Arguments
/// * `state` - layout state previously seeded from this `config`
/// * `item_count` - total number of items in the data source
/// * `config` - layout configuration; validated before any work
/// * `height_for` - height for the item at the given index, `None` if unknown
pub fn measure_waterfall<F>(
    state: &mut WaterfallState,
    item_count: usize,
    config: &WaterfallConfig,
    mut height_for: F,
) -> Result<(), LayoutError>
where
    F: FnMut(usize) -> Option<f32>,
{
    let item_width = config.item_width()?;
    debug_assert_eq!(
        state.column_heights.len(),
        config.column_count,
        "state was seeded from a different configuration"
    );

    let first = state.next_unlaid_index;
    if item_count < first {
        log::warn!(
            "item count shrank from {} to {}; placements are append-only, reset for a full relayout",
            first,
            item_count
        );
        return Ok(());
    }
    if item_count == first {
        return Ok(());
    }

    // Consult the provider for every new index up front so a hole aborts
    // the pass before any state is touched.
    let mut heights = Vec::with_capacity(item_count - first);
    for index in first..item_count {
        match height_for(index) {
            Some(height) => {
                if height <= 0.0 {
                    log::warn!("item {} has non-positive height {}", index, height);
                }
                heights.push(height);
            }
            None => return Err(LayoutError::MissingHeight { index }),
        }
    }

    for (offset, height) in heights.into_iter().enumerate() {
        let index = first + offset;
        let col = config.column_fill.pick(index, &state.column_heights);

        // New cumulative height for the column; the item's top edge sits at
        // the previous cumulative height.
        let column_height = state.column_heights[col] + height + config.line_spacing;
        let frame = Rect::new(
            config.section_inset.left + col as f32 * (item_width + config.interitem_spacing),
            column_height - height - config.line_spacing,
            item_width,
            height,
        );

        state.placements.push(ItemPlacement { index, frame });
        state.column_heights[col] = column_height;
    }

    state.recompute_max_height();
    state.next_unlaid_index = item_count;

    log::debug!(
        "placed items {}..{}; max column height {:.1}",
        first,
        item_count,
        state.max_height
    );
    Ok(())
}

/// Total bounding size of the laid-out content.
///
/// The width is 0.0 by contract - the consumer already knows its container
/// width and the engine does not second-guess it. The height is the tallest
/// column minus the trailing line spacing baked into it, plus the bottom
/// inset. With no items laid out this is
/// `inset.top + inset.bottom - line_spacing`, which can go negative when
/// spacing exceeds the insets; the raw value is returned and callers clamp.
pub fn content_size(state: &WaterfallState, config: &WaterfallConfig) -> Size {
    let height = state.max_height + config.section_inset.bottom - config.line_spacing;
    if height < 0.0 {
        log::warn!(
            "content height {:.1} is negative; line spacing exceeds the section insets",
            height
        );
    }
    Size::new(0.0, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_geometry::EdgeInsets;

    fn test_config() -> WaterfallConfig {
        WaterfallConfig::new(230.0)
            .columns(2)
            .section_inset(EdgeInsets::uniform(10.0))
            .interitem_spacing(10.0)
            .line_spacing(10.0)
    }

    #[test]
    fn test_round_robin_assignment_ignores_heights() {
        let config = test_config();
        let mut state = WaterfallState::new(&config);
        // Wildly uneven heights; parity still decides the column.
        let heights = [10.0, 500.0, 10.0, 10.0, 10.0, 10.0];
        measure_waterfall(&mut state, heights.len(), &config, |i| {
            heights.get(i).copied()
        })
        .unwrap();

        let item_width = config.item_width().unwrap();
        for placement in state.placements() {
            let expected_x = if placement.index % 2 == 0 {
                config.section_inset.left
            } else {
                config.section_inset.left + item_width + config.interitem_spacing
            };
            assert_eq!(placement.frame.x, expected_x);
        }
    }

    #[test]
    fn test_shortest_column_tracks_minimum() {
        let config = test_config().column_fill(ColumnFill::ShortestColumn);
        let mut state = WaterfallState::new(&config);
        // Item 0 makes column 0 tall, so items 1 and 2 both land in column 1.
        let heights = [500.0, 50.0, 50.0];
        measure_waterfall(&mut state, heights.len(), &config, |i| {
            heights.get(i).copied()
        })
        .unwrap();

        let col1_x = config.section_inset.left + config.item_width().unwrap() + 10.0;
        assert_eq!(state.placements()[1].frame.x, col1_x);
        assert_eq!(state.placements()[2].frame.x, col1_x);
        // Column 1 after two items: 10 + 50 + 10 + 50 + 10.
        assert_eq!(state.column_heights()[1], 130.0);
    }

    #[test]
    fn test_shortest_column_ties_break_low() {
        let config = test_config().column_fill(ColumnFill::ShortestColumn);
        let mut state = WaterfallState::new(&config);
        measure_waterfall(&mut state, 1, &config, |_| Some(100.0)).unwrap();
        assert_eq!(state.placements()[0].frame.x, config.section_inset.left);
    }

    #[test]
    fn test_missing_height_leaves_state_untouched() {
        let config = test_config();
        let mut state = WaterfallState::new(&config);
        measure_waterfall(&mut state, 2, &config, |_| Some(100.0)).unwrap();

        let placements_before = state.placements().to_vec();
        let heights_before = state.column_heights().to_vec();

        // Index 3 has no height; the whole second pass must abort.
        let result = measure_waterfall(&mut state, 5, &config, |i| {
            if i == 3 {
                None
            } else {
                Some(100.0)
            }
        });

        assert_eq!(result, Err(LayoutError::MissingHeight { index: 3 }));
        assert_eq!(state.placements(), placements_before.as_slice());
        assert_eq!(state.column_heights(), heights_before.as_slice());
        assert_eq!(state.next_unlaid_index(), 2);
    }

    #[test]
    fn test_empty_state_boundary() {
        let config = test_config();
        let state = WaterfallState::new(&config);
        assert!(state.is_empty());
        assert_eq!(state.column_heights(), &[10.0, 10.0]);
        assert_eq!(state.max_height(), 10.0);
        // top + bottom - line spacing
        assert_eq!(content_size(&state, &config).height, 10.0);
    }

    #[test]
    fn test_empty_content_height_can_go_negative() {
        let config = WaterfallConfig::new(230.0).columns(2).line_spacing(25.0);
        let state = WaterfallState::new(&config);
        // No insets to absorb the trailing line spacing.
        assert_eq!(content_size(&state, &config).height, -25.0);
    }

    #[test]
    fn test_content_size_width_is_delegated() {
        let config = test_config();
        let state = WaterfallState::new(&config);
        assert_eq!(content_size(&state, &config).width, 0.0);
    }

    #[test]
    fn test_shrinking_item_count_is_a_no_op() {
        let config = test_config();
        let mut state = WaterfallState::new(&config);
        measure_waterfall(&mut state, 4, &config, |_| Some(100.0)).unwrap();

        measure_waterfall(&mut state, 2, &config, |_| {
            panic!("no item should be measured when the count shrinks")
        })
        .unwrap();
        assert_eq!(state.placements().len(), 4);
        assert_eq!(state.next_unlaid_index(), 4);
    }
}
