use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use crate::database::Store;
use crate::models::{
    default_steps, FieldValue, ProfileData, Step, WorkflowData, OUTLINE_FIELD, OUTLINE_STEP_ID,
    PRIMARY_KEYWORD_FIELD,
};
use crate::services::feedback::FeedbackSink;
use crate::services::substitution::SubstitutionContext;
use crate::utils::debounce::Debounce;

pub const WORKFLOW_KEY: &str = "workflow_data_v1";

/// Quiet window for coalescing keystroke-driven saves. Catalog and
/// assignment writes elsewhere persist immediately; only the continuously
/// edited workflow fields are debounced.
const SAVE_DEBOUNCE: Duration = Duration::from_millis(500);

/// Owns the step catalog, the current-step pointer, and all per-step
/// user-entered outputs. `current_step` ranges over `1..=N+1`, where `N+1`
/// is the terminal "workflow complete" screen.
pub struct WorkflowService {
    store: Rc<Store>,
    feedback: FeedbackSink,
    steps: Vec<Step>,
    data: WorkflowData,
    save: Debounce,
}

impl WorkflowService {
    pub fn load(store: Rc<Store>, feedback: FeedbackSink) -> Self {
        let steps = default_steps();
        let mut data = store
            .load_json::<WorkflowData>(WORKFLOW_KEY)
            .unwrap_or_else(|| Self::fresh_data(&steps));
        data.current_step = data.current_step.clamp(1, steps.len() as u32 + 1);

        Self {
            store,
            feedback,
            steps,
            data,
            save: Debounce::new(SAVE_DEBOUNCE),
        }
    }

    fn fresh_data(steps: &[Step]) -> WorkflowData {
        let mut data = WorkflowData::default();
        for step in steps {
            data.step_outputs.insert(step.id, BTreeMap::new());
        }
        data
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step(&self, step_id: u32) -> Option<&Step> {
        self.steps.iter().find(|s| s.id == step_id)
    }

    pub fn step_count(&self) -> u32 {
        self.steps.len() as u32
    }

    fn completion_step(&self) -> u32 {
        self.step_count() + 1
    }

    pub fn current_step(&self) -> u32 {
        self.data.current_step
    }

    /// True on the terminal "workflow complete" screen.
    pub fn is_complete(&self) -> bool {
        self.data.current_step == self.completion_step()
    }

    pub fn show_step(&mut self, step_id: u32) {
        self.data.current_step = step_id.clamp(1, self.completion_step());
        self.save.touch();
    }

    pub fn next_step(&mut self) {
        self.show_step(self.data.current_step + 1);
    }

    pub fn prev_step(&mut self) {
        if self.data.current_step > 1 {
            self.show_step(self.data.current_step - 1);
        }
    }

    pub fn outputs_for_step(&self, step_id: u32) -> Option<&BTreeMap<String, FieldValue>> {
        self.data.step_outputs.get(&step_id)
    }

    pub fn output(&self, step_id: u32, field: &str) -> Option<&FieldValue> {
        self.outputs_for_step(step_id)
            .and_then(|outputs| outputs.get(field))
    }

    /// Upserts one field value. Editing the outline step's outline field also
    /// refreshes the denormalized outline slot; the step-output copy stays
    /// authoritative.
    pub fn auto_save_output(&mut self, step_id: u32, field: &str, value: FieldValue) {
        if step_id == OUTLINE_STEP_ID && field == OUTLINE_FIELD {
            self.data.blog_outline_text = value.joined();
        }
        self.data
            .step_outputs
            .entry(step_id)
            .or_default()
            .insert(field.to_string(), value);
        self.save.touch();
    }

    pub fn primary_keyword(&self) -> &str {
        &self.data.primary_keyword
    }

    pub fn blog_outline_text(&self) -> &str {
        &self.data.blog_outline_text
    }

    /// Trims and stores the keyword, writing it through to the step's
    /// outputs as well. Unchanged input is a no-op.
    pub fn update_primary_keyword(&mut self, keyword: &str, step_id: u32) {
        let trimmed = keyword.trim();
        if self.data.primary_keyword == trimmed {
            return;
        }
        self.data.primary_keyword = trimmed.to_string();
        self.auto_save_output(step_id, PRIMARY_KEYWORD_FIELD, FieldValue::from(trimmed));
        self.feedback.info("Primary keyword updated.");
    }

    /// Destructive: clears every step output, the keyword, the outline cache,
    /// and the persisted blob, returning to step 1. Callers confirm with the
    /// user first. Profile and resource-library data are left untouched.
    pub fn reset_workflow(&mut self) {
        self.data = Self::fresh_data(&self.steps);
        // A pending debounced save must not recreate the removed blob.
        self.save.take_pending();
        if let Err(e) = self.store.remove(WORKFLOW_KEY) {
            log::error!("Failed to clear saved workflow data: {}", e);
        }
        self.feedback.success("Workflow has been reset.");
    }

    /// Host pump: persists once the debounce window lapses.
    pub fn maybe_flush(&mut self) {
        if self.save.take_ready() {
            self.persist();
        }
    }

    /// Forces any pending save to disk immediately (e.g. on shutdown).
    pub fn flush(&mut self) {
        if self.save.take_pending() {
            self.persist();
        }
    }

    fn persist(&self) {
        if let Err(e) = self.store.save_json(WORKFLOW_KEY, &self.data) {
            log::error!("Failed to save workflow data: {}", e);
            self.feedback
                .error("Error saving progress. Data might be too large.");
        }
    }

    /// View of the current state for the substitution engine.
    pub fn substitution_context<'a>(&'a self, profile: &'a ProfileData) -> SubstitutionContext<'a> {
        SubstitutionContext {
            profile,
            step_outputs: &self.data.step_outputs,
            primary_keyword: &self.data.primary_keyword,
            blog_outline: &self.data.blog_outline_text,
        }
    }
}
