//! Cross-service tests against a real on-disk database.

use contentflow::models::{CreatePromptRequest, ProfileData};
use contentflow::services::library::{ASSIGNMENTS_KEY, DEFINITIONS_KEY};
use contentflow::services::profile::PROFILE_KEY;
use contentflow::services::workflow::WORKFLOW_KEY;
use contentflow::App;
use tempfile::TempDir;

fn test_dir() -> TempDir {
    let _ = env_logger::builder().is_test(true).try_init();
    TempDir::new().unwrap()
}

fn prompt_request(title: &str) -> CreatePromptRequest {
    CreatePromptRequest {
        title: title.to_string(),
        category: "Testing".to_string(),
        content: "Write about [primary keyword] for [our domain].".to_string(),
        favorite: false,
    }
}

fn sample_profile() -> ProfileData {
    ProfileData {
        our_domain: "example.com".to_string(),
        brand_voice: "playful".to_string(),
        ..ProfileData::default()
    }
}

#[test]
fn init_creates_the_database_and_installs_defaults() {
    let dir = test_dir();
    let app = App::init(dir.path()).unwrap();

    assert!(dir.path().join("contentflow.db").exists());
    assert!(!app.library.prompts().is_empty());
    assert!(!app.library.tools().is_empty());
    assert_eq!(app.workflow.current_step(), 1);
    assert_eq!(app.workflow.step_count(), 16);
}

#[test]
fn state_survives_reopening_the_app() {
    let dir = test_dir();
    let prompt_id;
    {
        let mut app = App::init(dir.path()).unwrap();
        app.profile.save(sample_profile());
        app.workflow.update_primary_keyword("espresso machines", 1);
        app.workflow.show_step(3);
        app.workflow.flush();
        prompt_id = app
            .library
            .add_prompt_definition(prompt_request("Reopen"))
            .unwrap();
        app.library.assign_prompt_to_step(3, &prompt_id);
    }

    let app = App::init(dir.path()).unwrap();
    assert_eq!(app.profile.data().our_domain, "example.com");
    assert_eq!(app.workflow.current_step(), 3);
    assert_eq!(app.workflow.primary_keyword(), "espresso machines");
    let assigned = app.library.get_prompts_for_step(3);
    assert!(assigned.iter().any(|p| p.id == prompt_id));
}

#[test]
fn reset_clears_only_the_workflow_blob() {
    let dir = test_dir();
    let mut app = App::init(dir.path()).unwrap();

    app.profile.save(sample_profile());
    let prompt_id = app
        .library
        .add_prompt_definition(prompt_request("Survivor"))
        .unwrap();
    app.library.assign_prompt_to_step(2, &prompt_id);
    app.workflow.update_primary_keyword("espresso machines", 1);
    app.workflow.auto_save_output(2, "selectedTopic", "Topic".into());
    app.workflow.flush();

    let profile_raw = app.store.get(PROFILE_KEY).unwrap();
    let definitions_raw = app.store.get(DEFINITIONS_KEY).unwrap();
    let assignments_raw = app.store.get(ASSIGNMENTS_KEY).unwrap();

    app.workflow.reset_workflow();

    assert_eq!(app.workflow.current_step(), 1);
    assert_eq!(app.workflow.primary_keyword(), "");
    assert_eq!(app.store.get(WORKFLOW_KEY), None);
    // The other concerns' blobs are byte-for-byte untouched.
    assert_eq!(app.store.get(PROFILE_KEY).unwrap(), profile_raw);
    assert_eq!(app.store.get(DEFINITIONS_KEY).unwrap(), definitions_raw);
    assert_eq!(app.store.get(ASSIGNMENTS_KEY).unwrap(), assignments_raw);
}

#[test]
fn cascading_delete_is_visible_after_a_reload() {
    let dir = test_dir();
    let prompt_id;
    {
        let mut app = App::init(dir.path()).unwrap();
        prompt_id = app
            .library
            .add_prompt_definition(prompt_request("Doomed"))
            .unwrap();
        app.library.assign_prompt_to_step(4, &prompt_id);
        app.library.delete_prompt_definition(&prompt_id);
    }

    let app = App::init(dir.path()).unwrap();
    assert!(app.library.prompts().iter().all(|p| p.id != prompt_id));
    for step in app.workflow.steps() {
        assert!(app
            .library
            .get_prompts_for_step(step.id)
            .iter()
            .all(|p| p.id != prompt_id));
    }
}

#[test]
fn render_prompt_draws_from_profile_and_workflow() {
    let dir = test_dir();
    let mut app = App::init(dir.path()).unwrap();

    app.profile.save(sample_profile());
    app.workflow.update_primary_keyword("espresso machines", 1);
    app.workflow
        .auto_save_output(2, "selectedTopic", "Top 5 Espresso Machines".into());

    let rendered = app.render_prompt(
        "Write about [primary keyword] using [brand voice] tone. \
         See [output from step 2: selectedTopic].",
    );
    assert_eq!(
        rendered,
        "Write about espresso machines using playful tone. \
         See Top 5 Espresso Machines."
    );
}

#[test]
fn default_prompts_render_with_fallbacks_on_a_fresh_install() {
    let dir = test_dir();
    let app = App::init(dir.path()).unwrap();

    let template = &app.library.prompts()[0].content;
    let rendered = app.render_prompt(template);
    assert!(rendered.contains("(Primary Keyword Not Set)"));
}
