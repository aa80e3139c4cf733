//! JSON configuration for reconstruction runs.
//!
//! [`ReconstructionConfig`] mirrors the on-disk layout: the six required
//! thresholds at the top level, optional tuning grouped per stage. Nothing
//! required has a default; [`ReconstructionConfig::validate`] turns a missing
//! or invalid value into [`RecoError::Configuration`](crate::RecoError).

pub mod reconstruction;
pub mod run;

pub use reconstruction::{
    load_config, GraphExtras, QuboExtras, ReconstructionConfig, TripletExtras,
};
pub use run::{load_run_config, OutputConfig, RunConfig};
