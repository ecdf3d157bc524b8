use std::sync::Arc;

/// Long lived clients shared by every invocation.
/// Built once at cold start and never mutated afterwards.
pub struct Context<D, S> {
    pub label_detector: Arc<D>,
    pub record_store: Arc<S>,
}

impl<D, S> Context<D, S> {
    pub fn new(label_detector: D, record_store: S) -> Self {
        Self {
            label_detector: Arc::new(label_detector),
            record_store: Arc::new(record_store),
        }
    }
}

impl<D, S> Clone for Context<D, S> {
    fn clone(&self) -> Self {
        Self {
            label_detector: self.label_detector.clone(),
            record_store: self.record_store.clone(),
        }
    }
}
