//! Mapping request paths onto the filesystem under a root directory.

pub mod resolver;

pub use resolver::{Resolver, Resource};
