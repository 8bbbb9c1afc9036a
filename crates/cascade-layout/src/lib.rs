//! Waterfall (masonry) layout measurement for Cascade.
//!
//! Variable-height items are distributed across a fixed number of columns
//! inside a fixed-width container, each item stacked below the previous one
//! in its column. The engine computes a placement rectangle per item and the
//! total content size; it never renders anything.
//!
//! # Architecture
//!
//! - [`WaterfallConfig`] - column count, insets, spacing, container width
//! - [`WaterfallState`] - placements and per-column cumulative heights
//! - [`measure_waterfall`] - the incremental measurement pass
//! - [`WaterfallLayout`] - stateful facade wiring config and state together
//! - [`ItemSource`] - adapter-facing item data contract
//!
//! Measurement is incremental: placements already computed are immutable,
//! and a pass only appends frames for items the state has not seen yet.
//! Laying out N new items costs O(N) regardless of how many items were
//! placed before.
//!
//! # Example
//!
//! ```
//! use cascade_geometry::EdgeInsets;
//! use cascade_layout::{WaterfallConfig, WaterfallLayout};
//!
//! let config = WaterfallConfig::new(230.0)
//!     .columns(2)
//!     .section_inset(EdgeInsets::uniform(10.0))
//!     .interitem_spacing(10.0)
//!     .line_spacing(10.0);
//!
//! let heights = [100.0_f32, 120.0, 80.0];
//! let mut layout = WaterfallLayout::new(config).unwrap();
//! let placements = layout
//!     .layout(heights.len(), |i| heights.get(i).copied())
//!     .unwrap();
//!
//! assert_eq!(placements.len(), 3);
//! assert_eq!(placements[0].frame.width, 100.0);
//! ```

mod config;
mod engine;
mod error;
mod item_source;
mod measure;
mod state;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use item_source::*;
pub use measure::*;
pub use state::*;
