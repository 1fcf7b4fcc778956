use std::path::Path;
use std::rc::Rc;

use anyhow::Result;

use crate::database::{self, Store};
use crate::services::feedback::FeedbackSink;
use crate::services::library::ResourceLibrary;
use crate::services::profile::ProfileService;
use crate::services::substitution;
use crate::services::workflow::WorkflowService;
use crate::utils::config;

/// Composition root. Owns the store and one service per concern; the
/// presentation layer holds this and calls through. Each service persists
/// its own slice of state under its own key.
pub struct App {
    pub store: Rc<Store>,
    pub feedback: FeedbackSink,
    pub profile: ProfileService,
    pub workflow: WorkflowService,
    pub library: ResourceLibrary,
}

impl App {
    pub fn init(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)?;

        let db_path = data_dir.join("contentflow.db");
        let conn = database::init_database(&db_path)?;
        let store = Rc::new(Store::new(conn));

        let feedback = FeedbackSink::new();
        let profile = ProfileService::load(store.clone(), feedback.clone());
        let workflow = WorkflowService::load(store.clone(), feedback.clone());
        let library = ResourceLibrary::load(store.clone(), feedback.clone(), workflow.step_count());

        Ok(Self {
            store,
            feedback,
            profile,
            workflow,
            library,
        })
    }

    /// Resolves the data directory from the environment or the platform
    /// default.
    pub fn init_from_env() -> Result<Self> {
        config::load_dotenv();
        let data_dir = config::resolve_data_dir(None);
        Self::init(&data_dir)
    }

    /// Rewrites a prompt template against the current profile and workflow
    /// state, ready for display or copy.
    pub fn render_prompt(&self, template: &str) -> String {
        let ctx = self.workflow.substitution_context(self.profile.data());
        substitution::substitute(template, &ctx)
    }
}
