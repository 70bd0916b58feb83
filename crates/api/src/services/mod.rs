//! Transactional services composed over the repository layer.
//!
//! - [`intake::IntakeCoordinator`] -- creates a batch of items under one
//!   freshly allocated retrieval code.
//! - [`checkout::CheckoutResolver`] -- retrieves every eligible item sharing
//!   a code.

pub mod checkout;
pub mod intake;

pub use checkout::CheckoutResolver;
pub use intake::IntakeCoordinator;
