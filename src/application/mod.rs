//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain tree algorithms (those are in Domain)
//! - Enforces the preconditions the domain services assume
//!
//! ## Use Cases
//!
//! - `TreeUseCase` - Validate selections, build, prune, render

pub mod tree;

pub use tree::{validate_selections, RenderedTree, TreeOptions, TreeUseCase};
