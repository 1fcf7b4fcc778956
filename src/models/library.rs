use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Prompt, Tool};

/// Persisted definitions blob: the two resource catalogs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceDefinitions {
    #[serde(default)]
    pub prompts: Vec<Prompt>,
    #[serde(default)]
    pub tools: Vec<Tool>,
}

/// Persisted assignments blob: step id -> prompt ids, step id -> tool names.
/// Kept sparse; a step with nothing assigned has no key at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentData {
    #[serde(default)]
    pub prompts: BTreeMap<u32, Vec<String>>,
    #[serde(default)]
    pub tools: BTreeMap<u32, Vec<String>>,
}
