//! Engine observer trait for presentation layers.

use fleet_core::DriverId;
use fleet_driver::Driver;

use crate::EngineError;

/// Callbacks invoked by [`DriverEngine`][crate::DriverEngine] after each
/// state change.
///
/// Every hook runs after the derived view has been recomputed, so an
/// observer that re-reads the engine never sees a collection without its
/// matching view.  All methods default to no-ops.
///
/// # Example: re-render on change
///
/// ```rust,ignore
/// struct Redraw;
///
/// impl EngineObserver for Redraw {
///     fn on_view_changed(&mut self, view: &[Driver]) {
///         println!("{} drivers visible", view.len());
///     }
/// }
/// ```
pub trait EngineObserver {
    /// The derived view was recomputed.
    fn on_view_changed(&mut self, _view: &[Driver]) {}

    /// A load started (`true`) or finished either way (`false`).
    fn on_loading_changed(&mut self, _loading: bool) {}

    /// A source load failed; the previous collection is still in place.
    fn on_load_failed(&mut self, _error: &EngineError) {}

    /// `id` was added to (`true`) or removed from (`false`) the favorites.
    fn on_favorite_toggled(&mut self, _id: &DriverId, _is_favorite: bool) {}

    /// A simulation tick moved `moved` drivers.  `tick` counts from 1.
    fn on_tick(&mut self, _tick: u64, _moved: usize) {}
}
