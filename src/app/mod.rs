//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Customization, Cart, Order, Settings, Messages)
//! - `controllers/` - Orchestration (Customizer)
//! - `services/` - Business operations (order intake)
//! - `infrastructure/` - External integrations (error)

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-exports for convenient external access
pub use controllers::customizer::{AddToCartButton, Customizer, ModalState, SubmitButton};
pub use domain::{Effect, Message, Notice, StoreSettings, SubmissionOutcome};
pub use infrastructure::error::{AppError, Result};
pub use services::order_intake::{HttpOrderIntake, OrderTransport};
