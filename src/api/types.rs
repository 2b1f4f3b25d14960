//! Shared state for the HTTP layer.

use std::sync::Arc;

use crate::templates::TemplateStore;

/// Shared context for all routes. Wraps the template store; the store is
/// read-only so no locking is needed.
#[derive(Clone)]
pub struct ApiContext {
    pub store: Arc<TemplateStore>,
}

impl ApiContext {
    pub fn new(store: Arc<TemplateStore>) -> Self {
        Self { store }
    }
}
