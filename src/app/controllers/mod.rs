//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - The customizer (preview, cart, checkout and order submission)

pub mod customizer;
