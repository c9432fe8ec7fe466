//! Thermal systems models.
//!
//! This module contains models for liquid-cooled electronics, starting with
//! single cold plates mounted against a heat-generating chip.

pub mod coldplate;
