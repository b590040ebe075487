//! AHP Engine - Crisp and fuzzy weight propagation for decision hierarchies
//!
//! This crate derives priorities for a layered decision hierarchy (goal,
//! criteria, alternatives) from pairwise comparison judgments, synthesizes
//! them top-down into global priorities, and ranks alternatives under
//! interval uncertainty.
//!
//! # Example
//!
//! ```
//! use ahp_engine::domain::global::DistributedSynthesis;
//! use ahp_engine::domain::hierarchy::HierarchyModel;
//! use ahp_engine::domain::local::EigenvalueMethod;
//! use nalgebra::DMatrix;
//!
//! let mut model = HierarchyModel::new(&[2]).unwrap();
//! model
//!     .set_comparisons(1, 0, DMatrix::from_row_slice(2, 2, &[1.0, 3.0, 1.0 / 3.0, 1.0]))
//!     .unwrap();
//! model.compute_all_local_weights(&EigenvalueMethod::default()).unwrap();
//! model.compute_all_global_weights(&DistributedSynthesis).unwrap();
//!
//! let weights = model.layer_global_weights(1).unwrap();
//! assert!((weights[0] - 0.75).abs() < 1e-9);
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
