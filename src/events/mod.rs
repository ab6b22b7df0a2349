//! Event types used by the engine.
//!
//! Events provide a decoupled way for systems to communicate: systems
//! trigger them, observers react.
//!
//! Submodules:
//! - [`flipbook`] – pages captured into and retired from a flip-book sequence
//! - [`intvalue`] – integer values sent by remote button adapters
pub mod flipbook;
pub mod intvalue;
