//! Domain Layer
//!
//! The core of foldertree - tree construction, pruning and rendering.
//!
//! ## Structure
//!
//! - `entities/` - `TreeNode`
//! - `value_objects/` - Immutable value types (`ExcludePatterns`, `Charset`, path relations)
//! - `services/` - Builder, pruner and renderer
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - The builder reads directories only through the `FileSystem` port
//! 2. **Values in, values out** - Pruning and rendering never mutate their input
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
