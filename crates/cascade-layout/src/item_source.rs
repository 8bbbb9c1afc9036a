//! Adapter-facing item data contract.

/// Provides the item data a waterfall measurement pass needs.
///
/// This is the capability the engine consumes from its environment: a count
/// and a height per index. It is passed per call rather than stored, so the
/// engine holds no back-reference to the data source.
///
/// Implementations are consulted once per index when the item is first
/// placed, and the answer is trusted for the lifetime of that placement.
/// A source whose height for an already-placed index changes must trigger
/// a full relayout on the caller's side.
pub trait ItemSource {
    /// Total number of items, placed or not.
    fn item_count(&self) -> usize;

    /// Height for the item at `index`, or `None` when the source cannot
    /// answer. A `None` for an index below `item_count` aborts the
    /// measurement pass.
    fn item_height(&self, index: usize) -> Option<f32>;
}
