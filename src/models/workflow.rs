use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One user-entered output value. Multi-input fields store ordered lists;
/// everything else stores plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Single display string; list values join with ", ".
    pub fn joined(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::List(items) => items.join(", "),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.joined().trim().is_empty()
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

/// Per-step user-entered field values, keyed by step id then field name.
pub type StepOutputs = BTreeMap<u32, BTreeMap<String, FieldValue>>;

/// Persisted workflow blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowData {
    #[serde(default)]
    pub step_outputs: StepOutputs,
    #[serde(default = "default_current_step")]
    pub current_step: u32,
    #[serde(default)]
    pub primary_keyword: String,
    #[serde(default)]
    pub blog_outline_text: String,
}

fn default_current_step() -> u32 {
    1
}

impl Default for WorkflowData {
    fn default() -> Self {
        Self {
            step_outputs: StepOutputs::new(),
            current_step: 1,
            primary_keyword: String::new(),
            blog_outline_text: String::new(),
        }
    }
}
