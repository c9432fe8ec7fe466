//! Public cold plate models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The model module
//! re-exports the parts of `core` that callers need and adds thin adapters
//! on top of it: a [`twine_core::Model`] implementation and a serde wire layer.

pub mod thermal;
