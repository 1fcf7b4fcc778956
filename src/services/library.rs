use std::collections::BTreeMap;
use std::rc::Rc;

use uuid::Uuid;

use crate::database::Store;
use crate::models::{
    default_prompts, default_tools, AssignmentData, CreatePromptRequest, Prompt,
    ResourceDefinitions, Tool,
};
use crate::services::feedback::FeedbackSink;

pub const DEFINITIONS_KEY: &str = "resource_definitions_v1";
pub const ASSIGNMENTS_KEY: &str = "resource_assignments_v1";

/// Owns the prompt/tool catalogs and the step assignment maps. Catalog and
/// assignment changes are discrete user actions, so every mutation persists
/// immediately (unlike the debounced workflow fields).
pub struct ResourceLibrary {
    store: Rc<Store>,
    feedback: FeedbackSink,
    prompts: Vec<Prompt>,
    tools: Vec<Tool>,
    assignments: AssignmentData,
    max_step_id: u32,
}

impl ResourceLibrary {
    pub fn load(store: Rc<Store>, feedback: FeedbackSink, max_step_id: u32) -> Self {
        let mut library = Self {
            store,
            feedback,
            prompts: Vec::new(),
            tools: Vec::new(),
            assignments: AssignmentData::default(),
            max_step_id,
        };
        library.load_definitions();
        library.load_assignments();
        library
    }

    fn load_definitions(&mut self) {
        match self.store.load_json::<ResourceDefinitions>(DEFINITIONS_KEY) {
            Some(defs) if !defs.prompts.is_empty() && !defs.tools.is_empty() => {
                self.prompts = defs.prompts;
                self.tools = defs.tools;
            }
            _ => {
                // Missing, corrupt, or empty: install the built-in catalog
                // and re-persist so this state is never observed twice.
                log::warn!("No usable resource definitions found, installing defaults");
                self.prompts = default_prompts();
                self.tools = default_tools();
                self.save_definitions();
            }
        }
    }

    fn load_assignments(&mut self) {
        match self.store.load_json::<AssignmentData>(ASSIGNMENTS_KEY) {
            Some(data) if self.references_unknown_steps(&data) => {
                // Written against an older step list; discarded wholesale
                // rather than partially migrated.
                log::warn!(
                    "Assignments reference steps beyond {}, clearing them",
                    self.max_step_id
                );
                self.assignments = AssignmentData::default();
                self.save_assignments();
            }
            Some(data) => self.assignments = data,
            None => {
                self.assignments = AssignmentData::default();
                self.save_assignments();
            }
        }
    }

    fn references_unknown_steps(&self, data: &AssignmentData) -> bool {
        data.prompts
            .keys()
            .chain(data.tools.keys())
            .any(|&step_id| step_id > self.max_step_id)
    }

    fn save_definitions(&self) {
        let defs = ResourceDefinitions {
            prompts: self.prompts.clone(),
            tools: self.tools.clone(),
        };
        if let Err(e) = self.store.save_json(DEFINITIONS_KEY, &defs) {
            log::error!("Failed to save resource definitions: {}", e);
            self.feedback
                .error("Error saving resource library definitions.");
        }
    }

    fn save_assignments(&self) {
        if let Err(e) = self.store.save_json(ASSIGNMENTS_KEY, &self.assignments) {
            log::error!("Failed to save resource assignments: {}", e);
            self.feedback.error("Error saving resource assignments.");
        }
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn assignments(&self) -> &AssignmentData {
        &self.assignments
    }

    // --- prompt definitions ---

    /// Returns the generated id, or `None` when validation rejects the
    /// request (no state is touched in that case).
    pub fn add_prompt_definition(&mut self, request: CreatePromptRequest) -> Option<String> {
        if request.title.trim().is_empty() || request.content.trim().is_empty() {
            self.feedback.error("Prompt title and content are required.");
            return None;
        }
        let prompt = Prompt {
            id: Uuid::new_v4().to_string(),
            title: request.title,
            category: request.category,
            content: request.content,
            favorite: request.favorite,
        };
        let id = prompt.id.clone();
        self.feedback
            .success(format!("Prompt \"{}\" added.", prompt.title));
        self.prompts.push(prompt);
        self.save_definitions();
        Some(id)
    }

    pub fn update_prompt_definition(&mut self, updated: Prompt) {
        if updated.title.trim().is_empty() || updated.content.trim().is_empty() {
            self.feedback.error("Prompt title and content are required.");
            return;
        }
        match self.prompts.iter().position(|p| p.id == updated.id) {
            Some(index) => {
                let title = updated.title.clone();
                self.prompts[index] = updated;
                self.save_definitions();
                self.feedback.success(format!("Prompt \"{}\" updated.", title));
            }
            None => self
                .feedback
                .error(format!("Prompt with id {} not found.", updated.id)),
        }
    }

    /// Removes the definition and cascades the id out of every step's
    /// assignment list, so no step is left holding a dangling id.
    pub fn delete_prompt_definition(&mut self, prompt_id: &str) {
        if Self::remove_from_assignments(&mut self.assignments.prompts, prompt_id) {
            self.save_assignments();
        }

        let before = self.prompts.len();
        self.prompts.retain(|p| p.id != prompt_id);
        if self.prompts.len() != before {
            self.save_definitions();
            self.feedback.success("Prompt deleted.");
        } else {
            self.feedback
                .error(format!("Prompt with id {} not found.", prompt_id));
        }
    }

    // --- tool definitions ---

    pub fn add_tool_definition(&mut self, tool: Tool) {
        if tool.name.trim().is_empty() || tool.url.trim().is_empty() {
            self.feedback.error("Tool name and URL are required.");
            return;
        }
        if self.tools.iter().any(|t| t.name == tool.name) {
            self.feedback
                .error(format!("Tool \"{}\" already exists.", tool.name));
            return;
        }
        self.feedback
            .success(format!("Tool \"{}\" added.", tool.name));
        self.tools.push(tool);
        self.save_definitions();
    }

    pub fn update_tool_definition(&mut self, updated: Tool) {
        if updated.url.trim().is_empty() {
            self.feedback.error("Tool URL is required.");
            return;
        }
        match self.tools.iter().position(|t| t.name == updated.name) {
            Some(index) => {
                let name = updated.name.clone();
                self.tools[index] = updated;
                self.save_definitions();
                self.feedback.success(format!("Tool \"{}\" updated.", name));
            }
            None => self
                .feedback
                .error(format!("Tool \"{}\" not found.", updated.name)),
        }
    }

    pub fn delete_tool_definition(&mut self, name: &str) {
        if Self::remove_from_assignments(&mut self.assignments.tools, name) {
            self.save_assignments();
        }

        let before = self.tools.len();
        self.tools.retain(|t| t.name != name);
        if self.tools.len() != before {
            self.save_definitions();
            self.feedback.success(format!("Tool \"{}\" deleted.", name));
        } else {
            self.feedback.error(format!("Tool \"{}\" not found.", name));
        }
    }

    // --- assignments ---

    pub fn assign_prompt_to_step(&mut self, step_id: u32, prompt_id: &str) {
        if !self.valid_step(step_id) {
            return;
        }
        if !self.prompts.iter().any(|p| p.id == prompt_id) {
            self.feedback
                .error(format!("Prompt with id {} not found.", prompt_id));
            return;
        }
        let assigned = self.assignments.prompts.entry(step_id).or_default();
        if assigned.iter().any(|id| id == prompt_id) {
            return; // already assigned
        }
        assigned.push(prompt_id.to_string());
        self.save_assignments();
        self.feedback
            .success(format!("Prompt assigned to step {}.", step_id));
    }

    pub fn unassign_prompt_from_step(&mut self, step_id: u32, prompt_id: &str) {
        if Self::unassign(&mut self.assignments.prompts, step_id, prompt_id) {
            self.save_assignments();
            self.feedback
                .success(format!("Prompt unassigned from step {}.", step_id));
        }
    }

    pub fn assign_tool_to_step(&mut self, step_id: u32, tool_name: &str) {
        if !self.valid_step(step_id) {
            return;
        }
        if !self.tools.iter().any(|t| t.name == tool_name) {
            self.feedback
                .error(format!("Tool \"{}\" not found.", tool_name));
            return;
        }
        let assigned = self.assignments.tools.entry(step_id).or_default();
        if assigned.iter().any(|name| name == tool_name) {
            return; // already assigned
        }
        assigned.push(tool_name.to_string());
        self.save_assignments();
        self.feedback
            .success(format!("Tool \"{}\" assigned to step {}.", tool_name, step_id));
    }

    pub fn unassign_tool_from_step(&mut self, step_id: u32, tool_name: &str) {
        if Self::unassign(&mut self.assignments.tools, step_id, tool_name) {
            self.save_assignments();
            self.feedback.success(format!(
                "Tool \"{}\" unassigned from step {}.",
                tool_name, step_id
            ));
        }
    }

    fn valid_step(&self, step_id: u32) -> bool {
        if step_id == 0 || step_id > self.max_step_id {
            self.feedback
                .error(format!("Step {} does not exist.", step_id));
            return false;
        }
        true
    }

    /// Strips `value` from every step's list, dropping emptied step keys.
    fn remove_from_assignments(map: &mut BTreeMap<u32, Vec<String>>, value: &str) -> bool {
        let mut changed = false;
        map.retain(|_, values| {
            let before = values.len();
            values.retain(|v| v != value);
            if values.len() != before {
                changed = true;
            }
            !values.is_empty()
        });
        changed
    }

    /// Removes one value from one step's list; the step key goes with it
    /// when the list empties, keeping the persisted map sparse.
    fn unassign(map: &mut BTreeMap<u32, Vec<String>>, step_id: u32, value: &str) -> bool {
        let mut removed = false;
        let mut now_empty = false;
        if let Some(assigned) = map.get_mut(&step_id) {
            let before = assigned.len();
            assigned.retain(|v| v != value);
            removed = assigned.len() != before;
            now_empty = assigned.is_empty();
        }
        if now_empty {
            map.remove(&step_id);
        }
        removed
    }

    // --- joins ---

    /// Assignment list joined against the catalog; ids that no longer
    /// resolve are skipped rather than surfaced as errors.
    pub fn get_prompts_for_step(&self, step_id: u32) -> Vec<Prompt> {
        self.assignments
            .prompts
            .get(&step_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.prompts.iter().find(|p| &p.id == id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn get_tools_for_step(&self, step_id: u32) -> Vec<Tool> {
        self.assignments
            .tools
            .get(&step_id)
            .map(|names| {
                names
                    .iter()
                    .filter_map(|name| self.tools.iter().find(|t| &t.name == name))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Step listing order: favorites first, then by title.
    pub fn prompts_sorted_for_step(&self, step_id: u32) -> Vec<Prompt> {
        let mut prompts = self.get_prompts_for_step(step_id);
        prompts.sort_by(|a, b| b.favorite.cmp(&a.favorite).then_with(|| a.title.cmp(&b.title)));
        prompts
    }
}
