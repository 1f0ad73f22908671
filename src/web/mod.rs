//! Web layer serving the email capture page.
//!
//! Uses Askama templates for server-side rendering. The page is a thin
//! presentation layer: it hands the submitted text to
//! [`crate::application::services::SubscriptionService::subscribe`] and renders
//! whatever outcome comes back.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
