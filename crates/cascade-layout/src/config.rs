//! Layout configuration and derived item width.

use cascade_geometry::EdgeInsets;

use crate::error::LayoutError;
use crate::measure::ColumnFill;

/// Configuration for a waterfall layout.
///
/// Immutable for the duration of a measurement pass. Changing any field
/// between passes invalidates previously computed placements, since column
/// assignment depends on the whole configuration; [`WaterfallLayout`]
/// enforces the reset.
///
/// [`WaterfallLayout`]: crate::WaterfallLayout
#[derive(Clone, Debug, PartialEq)]
pub struct WaterfallConfig {
    /// Number of columns items are distributed into.
    pub column_count: usize,

    /// Inset distances between the container edges and the content.
    pub section_inset: EdgeInsets,

    /// Horizontal gap between adjacent columns.
    pub interitem_spacing: f32,

    /// Vertical gap between items stacked in the same column.
    pub line_spacing: f32,

    /// Width of the container the columns share.
    pub container_width: f32,

    /// Column assignment strategy for new items.
    pub column_fill: ColumnFill,
}

impl WaterfallConfig {
    /// Creates a configuration for the given container width with two
    /// columns, zero insets and spacing, and round-robin column fill.
    pub fn new(container_width: f32) -> Self {
        Self {
            column_count: 2,
            section_inset: EdgeInsets::default(),
            interitem_spacing: 0.0,
            line_spacing: 0.0,
            container_width,
            column_fill: ColumnFill::default(),
        }
    }

    /// Sets the number of columns.
    pub fn columns(mut self, column_count: usize) -> Self {
        self.column_count = column_count;
        self
    }

    /// Sets the insets between the container edges and the content.
    pub fn section_inset(mut self, inset: EdgeInsets) -> Self {
        self.section_inset = inset;
        self
    }

    /// Sets the horizontal gap between adjacent columns.
    pub fn interitem_spacing(mut self, spacing: f32) -> Self {
        self.interitem_spacing = spacing;
        self
    }

    /// Sets the vertical gap between items stacked in the same column.
    pub fn line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing;
        self
    }

    /// Sets the column assignment strategy.
    pub fn column_fill(mut self, fill: ColumnFill) -> Self {
        self.column_fill = fill;
        self
    }

    /// Checks every configuration rule, including a positive derived item
    /// width. Runs before any layout work so a bad configuration never
    /// mutates state.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.column_count < 1 {
            return Err(LayoutError::InvalidConfiguration {
                reason: "column count must be at least 1",
            });
        }
        let inset = self.section_inset;
        if inset.left < 0.0 || inset.top < 0.0 || inset.right < 0.0 || inset.bottom < 0.0 {
            return Err(LayoutError::InvalidConfiguration {
                reason: "section insets must be non-negative",
            });
        }
        if self.interitem_spacing < 0.0 {
            return Err(LayoutError::InvalidConfiguration {
                reason: "interitem spacing must be non-negative",
            });
        }
        if self.line_spacing < 0.0 {
            return Err(LayoutError::InvalidConfiguration {
                reason: "line spacing must be non-negative",
            });
        }
        if self.container_width <= 0.0 {
            return Err(LayoutError::InvalidConfiguration {
                reason: "container width must be positive",
            });
        }
        self.item_width().map(|_| ())
    }

    /// Width shared by every item: the container width minus horizontal
    /// insets and inter-column gaps, divided evenly between the columns.
    pub fn item_width(&self) -> Result<f32, LayoutError> {
        if self.column_count < 1 {
            return Err(LayoutError::InvalidConfiguration {
                reason: "column count must be at least 1",
            });
        }
        let gaps = self.interitem_spacing * (self.column_count as f32 - 1.0);
        let available = self.container_width - self.section_inset.horizontal_sum() - gaps;
        let width = available / self.column_count as f32;
        if width <= 0.0 {
            return Err(LayoutError::InvalidConfiguration {
                reason: "container is too narrow for the columns and spacing",
            });
        }
        Ok(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_width_formula() {
        let config = WaterfallConfig::new(320.0)
            .columns(3)
            .section_inset(EdgeInsets::uniform(10.0))
            .interitem_spacing(10.0)
            .line_spacing(10.0);

        // (320 - 10 - 10 - 10 * 2) / 3
        let width = config.item_width().unwrap();
        assert!((width - 280.0 / 3.0).abs() < 0.001);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_columns_rejected() {
        let config = WaterfallConfig::new(320.0).columns(0);
        assert!(matches!(
            config.validate(),
            Err(LayoutError::InvalidConfiguration { .. })
        ));
        assert!(config.item_width().is_err());
    }

    #[test]
    fn test_negative_spacing_rejected() {
        let config = WaterfallConfig::new(320.0).interitem_spacing(-1.0);
        assert!(config.validate().is_err());

        let config = WaterfallConfig::new(320.0).line_spacing(-0.5);
        assert!(config.validate().is_err());

        let config =
            WaterfallConfig::new(320.0).section_inset(EdgeInsets::from_components(-1.0, 0.0, 0.0, 0.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_too_narrow_container_rejected() {
        // 5 columns with 40px of gaps leave nothing of a 40px container.
        let config = WaterfallConfig::new(40.0).columns(5).interitem_spacing(10.0);
        assert_eq!(
            config.validate(),
            Err(LayoutError::InvalidConfiguration {
                reason: "container is too narrow for the columns and spacing",
            })
        );
    }

    #[test]
    fn test_default_is_two_round_robin_columns() {
        let config = WaterfallConfig::new(100.0);
        assert_eq!(config.column_count, 2);
        assert_eq!(config.column_fill, ColumnFill::RoundRobin);
        assert_eq!(config.item_width().unwrap(), 50.0);
    }
}
