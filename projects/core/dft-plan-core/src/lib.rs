#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

pub mod allocate;
pub mod complex;
pub(crate) mod execute;
pub(crate) mod plan;

// Re-export main types and functions at the crate root
pub use complex::Complex64;
pub use execute::{execute_dft, execute_dft_slice, ExecuteError};
pub use plan::{live_plan_count, plan_dft_1d, DftPlan, Direction, PlanCreateError};

/// Native numeric encodings for direction and planner flags.
///
/// These values are part of the engine's external contract: hosts persist
/// them and pass them back across calls, so they must never be renumbered.
pub mod flags {
    /// Forward transform (negative exponent sign).
    pub const FORWARD: i64 = -1;
    /// Backward (inverse, unnormalized) transform.
    pub const BACKWARD: i64 = 1;

    /// Measure candidate strategies at planning time.
    pub const MEASURE: u32 = 0;
    /// Widest planning search.
    pub const EXHAUSTIVE: u32 = 1 << 3;
    /// Broader planning search than [`MEASURE`].
    pub const PATIENT: u32 = 1 << 5;
    /// Cheap heuristic planning, the default.
    pub const ESTIMATE: u32 = 1 << 6;
    /// Only use previously gathered planning knowledge.
    pub const WISDOM_ONLY: u32 = 1 << 21;

    /// The transform may clobber its input buffer.
    pub const DESTROY_INPUT: u32 = 1 << 0;
    /// The transform must leave its input buffer intact.
    pub const PRESERVE_INPUT: u32 = 1 << 4;
    /// Buffers are not guaranteed to satisfy the engine's alignment.
    pub const UNALIGNED: u32 = 1 << 1;
}
