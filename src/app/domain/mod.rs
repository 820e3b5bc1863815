//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Customization (text, color, font) and its preview
//! - Cart and order form, plus the order payload
//! - Store settings
//! - Message and effect types for the event system

pub mod cart;
pub mod customization;
pub mod effects;
pub mod messages;
pub mod order;
pub mod settings;

pub use cart::CartState;
pub use customization::{CustomizationState, Opacity, Preview, Rgb};
pub use effects::{Effect, Notice};
pub use messages::{Message, SubmissionOutcome};
pub use order::{OrderForm, OrderPayload, ProofFile};
pub use settings::{ColorOption, StoreSettings};
