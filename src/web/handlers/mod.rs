//! HTML template rendering handlers for the capture page.

mod home;

pub use home::{SubscribeForm, index_handler, subscribe_form_handler};
