#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::constants::{DELTA_MARGIN, MAX_QSEARCH_DEPTH};

/// Search knobs. The defaults give the full search.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(clippy::struct_excessive_bools)]
pub struct SearchParams {
    /// Quiescence plies allowed past the horizon
    pub quiescence_depth: u32,
    pub delta_margin: i32,
    pub use_tt: bool,
    /// Grant the capture/recapture extension
    pub extensions: bool,
    /// Sort moves before searching; otherwise generation order is used
    pub move_ordering: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            quiescence_depth: MAX_QSEARCH_DEPTH,
            delta_margin: DELTA_MARGIN,
            use_tt: true,
            extensions: true,
            move_ordering: true,
        }
    }
}
