//! services/planner/src/bin/planner.rs
//!
//! The console front-end: stands in for the original presentation layer and
//! drives the core through the same operations it exposes to any UI.

use async_openai::{config::OpenAIConfig, Client};
use lesson_planner_core::{
    FormError, KeyValueStore, PlanFormController, PlanStore, SessionGate,
};
use planner_lib::{
    adapters::{FileStore, OpenAiPlanAdapter},
    config::Config,
    error::AppError,
    state::AppState,
};
use std::io::{self, Write};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting planner...");

    // --- 2. Initialize Storage & the Generation Adapter ---
    let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(config.data_dir.clone()));

    let mut openai_config = OpenAIConfig::new().with_api_key(&config.openai_api_key);
    if let Some(base) = &config.openai_api_base {
        openai_config = openai_config.with_api_base(base);
    }
    let client = Client::with_config(openai_config);
    let generator = Arc::new(OpenAiPlanAdapter::new(client, config.plan_model.clone()));

    // --- 3. Build the Shared AppState and the Core Components ---
    let state = AppState {
        config,
        storage,
        generator,
    };
    let mut gate = SessionGate::restore(state.storage.clone())?;
    let store = PlanStore::new(state.storage.clone());
    let mut form = PlanFormController::new(store.clone(), state.generator.clone());

    // --- 4. Run the Console Loop ---
    println!("Lesson Planner");
    loop {
        if !gate.is_authenticated() {
            let username = prompt("Username: ")?;
            let password = prompt("Password: ")?;
            if gate.login(&username, &password)? {
                println!("Logged in.\n");
            } else {
                println!("Invalid credentials.\n");
            }
            continue;
        }

        let command = prompt("planner> ")?;
        let parts: Vec<&str> = command.split_whitespace().collect();
        match *parts.as_slice() {
            ["edit"] => edit_draft(&mut form)?,
            ["show"] => show_form(&form),
            ["generate"] => generate(&mut form).await,
            ["save"] => match form.save() {
                Ok(plan) => println!("Saved plan {}.", plan.id),
                Err(e) => {
                    error!("Save failed: {e}");
                    println!("Failed to save lesson plan.");
                }
            },
            ["list"] => list_plans(&store),
            ["load", index] => load_plan(&store, &mut form, index),
            ["delete", index] => delete_plan(&store, index),
            ["new"] => {
                form.reset();
                println!("Started a new draft.");
            }
            ["logout"] => {
                gate.logout()?;
                form.reset();
                println!("Logged out.\n");
            }
            ["quit"] | ["exit"] => break,
            [] => {}
            _ => {
                println!(
                    "Commands: edit, show, generate, save, list, load <n>, delete <n>, \
                     new, logout, quit"
                );
            }
        }
    }

    Ok(())
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompts for each of the six fields; an empty answer keeps the current value.
fn edit_draft(form: &mut PlanFormController) -> io::Result<()> {
    let current = form.draft().clone();
    let fields = [
        ("Topic", current.topic),
        ("Grade level", current.grade_level),
        ("Main concept", current.main_concept),
        ("Materials", current.materials),
        ("Learning objectives", current.objectives),
        ("Lesson outline", current.outline),
    ];
    let mut answers = Vec::with_capacity(fields.len());
    for (label, existing) in fields {
        let answer = if existing.is_empty() {
            prompt(&format!("{label}: "))?
        } else {
            let answer = prompt(&format!("{label} [{existing}]: "))?;
            if answer.is_empty() { existing } else { answer }
        };
        answers.push(answer);
    }

    let draft = form.draft_mut();
    [
        &mut draft.topic,
        &mut draft.grade_level,
        &mut draft.main_concept,
        &mut draft.materials,
        &mut draft.objectives,
        &mut draft.outline,
    ]
    .into_iter()
    .zip(answers)
    .for_each(|(slot, answer)| *slot = answer);
    Ok(())
}

fn show_form(form: &PlanFormController) {
    let draft = form.draft();
    println!("Topic:               {}", draft.topic);
    println!("Grade level:         {}", draft.grade_level);
    println!("Main concept:        {}", draft.main_concept);
    println!("Materials:           {}", draft.materials);
    println!("Learning objectives: {}", draft.objectives);
    println!("Lesson outline:      {}", draft.outline);
    match form.loaded_plan() {
        Some(plan) => println!("Editing saved plan {} (save will update it).", plan.id),
        None => println!("Editing a new, unsaved draft."),
    }
    if !form.generated_content().is_empty() {
        println!("\nGenerated lesson plan:");
        print_content(form.generated_content());
    }
}

async fn generate(form: &mut PlanFormController) {
    println!("Generating lesson plan...");
    match form.submit().await {
        Ok(()) => {
            println!("Lesson plan generated successfully!\n");
            print_content(form.generated_content());
        }
        Err(FormError::Validation(fields)) => {
            for field in fields {
                println!("  {}", field.required_message());
            }
        }
        Err(e) => {
            error!("Generation failed: {e}");
            println!("Failed to generate lesson plan. Please try again.");
        }
    }
}

/// Renders the prose the way the original UI did: one paragraph per line.
fn print_content(content: &str) {
    for line in content.lines() {
        println!("{line}");
    }
}

fn list_plans(store: &PlanStore) {
    match store.list() {
        Ok(plans) if plans.is_empty() => println!("No saved lesson plans."),
        Ok(plans) => {
            for (i, plan) in plans.iter().enumerate() {
                println!(
                    "{:>3}. {} (grade {}) - saved {}",
                    i + 1,
                    plan.topic,
                    plan.grade_level,
                    plan.created_at.format("%Y-%m-%d %H:%M")
                );
            }
        }
        Err(e) => {
            error!("Listing plans failed: {e}");
            println!("Failed to read saved lesson plans.");
        }
    }
}

fn load_plan(store: &PlanStore, form: &mut PlanFormController, index: &str) {
    match indexed_plan(store, index) {
        Some(plan) => {
            println!("Loaded \"{}\".", plan.topic);
            form.load(plan);
        }
        None => println!("No such plan."),
    }
}

fn delete_plan(store: &PlanStore, index: &str) {
    match indexed_plan(store, index) {
        Some(plan) => match store.delete(plan.id) {
            Ok(()) => println!("Deleted \"{}\".", plan.topic),
            Err(e) => {
                error!("Delete failed: {e}");
                println!("Failed to delete lesson plan.");
            }
        },
        None => println!("No such plan."),
    }
}

fn indexed_plan(store: &PlanStore, index: &str) -> Option<lesson_planner_core::LessonPlan> {
    let index: usize = index.parse().ok()?;
    let plans = store.list().ok()?;
    plans.into_iter().nth(index.checked_sub(1)?)
}
