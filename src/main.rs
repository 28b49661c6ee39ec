//! Treino - Weekly Training Planner
//!
//! Prints the weekly schedule for a plan file, or for a plan generated from
//! the configured questionnaire answers.
//!
//! Usage: `treino [PLAN.json] [FREQUENCY]`

use anyhow::{bail, Context};
use chrono::Local;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use treino::plans::generator::generate_plan;
use treino::plans::types::TrainingPlan;
use treino::plans::validation::{is_plan_valid, is_plan_value_valid};
use treino::schedule::{distribute, WorkoutCalendar};
use treino::storage::config::load_config;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Treino v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config().context("Failed to load configuration")?;
    let mut args = std::env::args().skip(1);

    let (plan, default_frequency) = match args.next() {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read plan file {}", path))?;
            let value: serde_json::Value = serde_json::from_str(&content)
                .with_context(|| format!("Plan file {} is not valid JSON", path))?;
            if !is_plan_value_valid(&value) {
                bail!("Plan file {} has no training day with exercises", path);
            }
            let plan = TrainingPlan::from_value(&value)
                .with_context(|| format!("Failed to decode plan file {}", path))?;
            (plan, config.scheduler.default_frequency)
        }
        None => {
            let plan = generate_plan(&config.questionnaire);
            (plan, config.questionnaire.days_per_week)
        }
    };

    let frequency = match args.next() {
        Some(raw) => raw
            .parse::<u32>()
            .with_context(|| format!("Frequency must be a non-negative integer, got '{}'", raw))?,
        None => default_frequency,
    };

    if !is_plan_valid(Some(&plan)) {
        tracing::warn!("Plan has no valid training day; the week will be all rest");
    }

    let assignment = distribute(frequency, &plan);

    println!("Weekly schedule ({} day(s)/week)", frequency);
    for (day, label) in assignment.to_labels() {
        println!("  {:<14} {}", day, label);
    }

    let calendar = WorkoutCalendar::new(assignment.clone());
    let today = Local::now().date_naive();

    println!("Upcoming {} day(s):", config.scheduler.upcoming_days);
    for entry in calendar.upcoming(today, config.scheduler.upcoming_days) {
        println!("  {} {:<14} {}", entry.date, entry.day, entry.label);
    }

    if let Some(next) = calendar.next_training_day(today) {
        println!("Next workout: {} ({}) - {}", next.date, next.day, next.label);
        if let Some(body) = plan.get(&next.label) {
            for entry in body.entries() {
                println!("    {} - {}x{}", entry.name, entry.sets, entry.reps);
            }
        }
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&assignment).context("Failed to encode schedule")?
    );

    Ok(())
}
