//! # refind-index
//!
//! A k-d tree keyed on one descriptor type. Nodes live in an arena and link
//! to each other by index, so parent back-references carry no ownership.
//!
//! Search is exact for every metric whose
//! [`axis_lower_bound`](refind_core::IMetric::axis_lower_bound) is a true
//! lower bound.

mod arena;
mod kd_tree;
mod results;

pub use kd_tree::KdTree;
