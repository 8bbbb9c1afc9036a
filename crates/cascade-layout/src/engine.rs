//! Stateful facade over configuration, state, and measurement.

use cascade_geometry::{Rect, Size};

use crate::config::WaterfallConfig;
use crate::error::LayoutError;
use crate::item_source::ItemSource;
use crate::measure::{content_size, measure_waterfall};
use crate::state::{ItemPlacement, WaterfallState};

/// A waterfall layout engine owning its configuration and state.
///
/// Mutating operations take `&mut self`, which makes the single-writer rule
/// structural: measurement passes cannot race, and completed placements are
/// freely readable through `&self`. The engine is synchronous - a pass runs
/// to completion with no suspension points and nothing to cancel.
pub struct WaterfallLayout {
    config: WaterfallConfig,
    state: WaterfallState,
    item_width: f32,
}

impl WaterfallLayout {
    /// Creates an engine for a validated configuration.
    pub fn new(config: WaterfallConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        let item_width = config.item_width()?;
        let state = WaterfallState::new(&config);
        Ok(Self {
            config,
            state,
            item_width,
        })
    }

    pub fn config(&self) -> &WaterfallConfig {
        &self.config
    }

    /// Width every item is given, derived from the configuration.
    pub fn item_width(&self) -> f32 {
        self.item_width
    }

    /// Replaces the configuration.
    ///
    /// A configuration that differs from the current one invalidates every
    /// placement - column assignment depends on the whole configuration -
    /// so the state is reset and the next [`layout`](Self::layout) call
    /// recomputes from item 0. Setting an equal configuration keeps the
    /// state as is.
    pub fn set_config(&mut self, config: WaterfallConfig) -> Result<(), LayoutError> {
        config.validate()?;
        if config != self.config {
            log::debug!(
                "configuration changed; discarding {} placements",
                self.state.placements().len()
            );
            self.item_width = config.item_width()?;
            self.state.reset(&config);
            self.config = config;
        }
        Ok(())
    }

    /// Discards all placements while keeping the configuration.
    ///
    /// Use this when the data source's heights changed for items that were
    /// already placed; the next pass lays everything out again.
    pub fn reset(&mut self) {
        self.state.reset(&self.config);
    }

    /// Lays out every item the engine has not seen yet and returns the full
    /// placement list.
    ///
    /// See [`measure_waterfall`] for the incremental contract: `height_for`
    /// is consulted exactly once per new index, a missing height aborts the
    /// pass with prior placements intact, and repeating a call with the same
    /// `item_count` is a no-op.
    pub fn layout<F>(
        &mut self,
        item_count: usize,
        height_for: F,
    ) -> Result<&[ItemPlacement], LayoutError>
    where
        F: FnMut(usize) -> Option<f32>,
    {
        measure_waterfall(&mut self.state, item_count, &self.config, height_for)?;
        Ok(self.state.placements())
    }

    /// [`layout`](Self::layout) driven by an [`ItemSource`].
    pub fn layout_from(&mut self, source: &impl ItemSource) -> Result<&[ItemPlacement], LayoutError> {
        self.layout(source.item_count(), |index| source.item_height(index))
    }

    /// All placements computed so far, in item index order.
    pub fn placements(&self) -> &[ItemPlacement] {
        self.state.placements()
    }

    /// Placements to show for `region`.
    ///
    /// Mirrors the reference behavior: the entire placement list is returned
    /// regardless of the region - no spatial pruning is performed, and
    /// consumers may rely on receiving the full set. This is a known
    /// scalability limit for very large item counts; cull on the consumer
    /// side if that matters.
    pub fn placements_in(&self, _region: Rect) -> &[ItemPlacement] {
        self.state.placements()
    }

    /// Total bounding size of the laid-out content; see
    /// [`content_size`](crate::content_size) for the width/height contract.
    pub fn content_size(&self) -> Size {
        content_size(&self.state, &self.config)
    }

    /// The underlying layout state, for read access beyond the placement
    /// list (column heights, max height, progress).
    pub fn state(&self) -> &WaterfallState {
        &self.state
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
