//! Application-level configuration.
//!
//! - [`GenerationParams`]: prompt window and reply length bounds used by
//!   provider adapters
//! - [`BehaviorConfig`]: runtime behavior of the discussion use case

pub mod behavior;
pub mod generation_params;

pub use behavior::BehaviorConfig;
pub use generation_params::GenerationParams;
