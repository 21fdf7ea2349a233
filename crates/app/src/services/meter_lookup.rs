//! Meter lookup: live existence feedback for the other-meter field.
//!
//! Every input event triggers its own lookup. Nothing is deduplicated or
//! cancelled, so a slow reply may overwrite a newer one.

use meterdash_domain::purchase::{MeterFeedback, MeterQuery};

use crate::ports::MeterApi;

/// Application service behind the other-meter field.
pub struct MeterLookup<A> {
    api: A,
}

impl<A: MeterApi> MeterLookup<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Feedback for the raw field value. Blank input never hits the backend.
    pub async fn check(&self, input: &str) -> MeterFeedback {
        let Some(query) = MeterQuery::from_input(input) else {
            return MeterFeedback::Cleared;
        };
        match self.api.check_meter(&query).await {
            Ok(existence) => existence.into(),
            Err(err) => {
                tracing::warn!(meter = query.as_str(), error = %err, "error checking meter");
                MeterFeedback::Failed
            }
        }
    }
}
