//! Team Weaver - Team Composition Optimization Engine
//!
//! This crate searches the space of candidate sub-teams for a member pool
//! and ranks them by a multi-criteria objective (performance, harmony,
//! diversity, collaboration) using pairwise Big Five compatibility scoring.

pub mod application;
pub mod domain;
