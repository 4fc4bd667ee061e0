//! Shared test fixtures for landmark crates.
//!
//! This crate provides profiles and synthetic nuclei for testing.
//! It depends only on `landmark-core` so that `landmark-rules` can use it
//! as a dev-dependency.
//!
//! - [`profiles`] - Hand-built profiles with known landmark positions
//! - [`nuclei`] - Deterministic random nuclei
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! landmark-test = { workspace = true }
//! ```
//!
//! ```ignore
//! use landmark_test::profiles::sample_profile;
//! use landmark_test::nuclei::synthetic_nuclei;
//! ```

pub mod nuclei;
pub mod profiles;

pub use nuclei::synthetic_nuclei;
pub use profiles::{flat_profile, mouse_profile, pig_tail_profile, sample_profile};
