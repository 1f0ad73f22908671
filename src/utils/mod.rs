//! Utility functions shared across layers.
//!
//! - [`correlation_id`] - Random tokens attached to every outcome
//! - [`mask`] - Masking of emails and credentials for log output

pub mod correlation_id;
pub mod mask;
