#![doc = include_str!("../README.MD")]
#![warn(missing_docs)]

// Module declarations
pub mod args;
pub(crate) mod convert;
pub mod error;
pub mod handle;
pub mod module;
pub mod value;

#[cfg(feature = "c-exports")]
pub mod c_api;

// Re-export main functionality at crate root
pub use error::PlanError;
pub use handle::PlanHandle;
pub use module::{execute_dft, module_constants, plan_dft_1d};
pub use value::Value;

// Re-export the engine types hosts need to interpret handles and constants
pub use dft_plan_core::{Direction, flags};
