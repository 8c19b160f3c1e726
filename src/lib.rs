//! Argentic - darkroom digital enlarger driver.
//!
//! Drives a transparent-LCD "digital negative" through the temporal-dither
//! pipeline: a 16-bit scan goes in, a cycle of 8-bit frames comes out.
//! This library exposes modules for integration testing.

pub mod error;
pub mod export;
pub mod models;
pub mod services;
