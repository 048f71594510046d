//! Trellis Core Types and Definitions
//!
//! This crate provides the foundational types for the Trellis topology
//! layout engine. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Topology**: The node/edge graph model ([`topology`] module)
//! - **Strategy**: The layout strategy selector ([`strategy::LayoutStrategy`])

pub mod geometry;
pub mod identifier;
pub mod strategy;
pub mod topology;
