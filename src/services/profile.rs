use std::rc::Rc;

use crate::database::Store;
use crate::models::ProfileData;
use crate::services::feedback::FeedbackSink;

pub const PROFILE_KEY: &str = "profile_data_v1";

/// Owns the single site-profile record. Loaded once at startup; survives
/// workflow resets.
pub struct ProfileService {
    store: Rc<Store>,
    feedback: FeedbackSink,
    data: ProfileData,
}

impl ProfileService {
    /// Missing or malformed data installs the all-empty default record.
    pub fn load(store: Rc<Store>, feedback: FeedbackSink) -> Self {
        let data = store.load_json(PROFILE_KEY).unwrap_or_default();
        Self {
            store,
            feedback,
            data,
        }
    }

    pub fn data(&self) -> &ProfileData {
        &self.data
    }

    /// Replaces the record wholesale and persists immediately. The in-memory
    /// copy updates even when the write fails, so readers stay consistent.
    pub fn save(&mut self, data: ProfileData) {
        self.data = data;
        if let Err(e) = self.store.save_json(PROFILE_KEY, &self.data) {
            log::error!("Failed to save profile data: {}", e);
            self.feedback.error("Error saving profile settings.");
        }
    }
}
