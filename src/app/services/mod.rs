//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Order intake (the checkout POST)

pub mod order_intake;
