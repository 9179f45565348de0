//! Interface implemented by targeting strategies.

use crate::common::SearchError;
use crate::env::Step;

/// A targeting strategy that drives the environment from observations alone.
///
/// Implementations never see ship identities or positions, only the cell
/// states in [`Step::observation`](crate::env::Step).
pub trait Policy {
    /// Pick the next flat integer action in `[0, 99]` for the supplied step.
    ///
    /// On a terminal step this returns the no-op action `0` and resets any
    /// per-episode state the strategy keeps.
    fn choose(&mut self, step: &Step) -> Result<usize, SearchError>;
}
