use anyhow::Result;
use clap::{Parser, Subcommand};

use skyplan_core::{
    SuitabilityScorer, Task, best_windows, dashboard_summary, notifications_for, parse_advisory,
    task_urgency,
};

mod config;
mod llm;
mod openweather;
mod render;
mod state;
mod store;

#[derive(Parser, Debug)]
#[command(name = "skyplan", version, about = "Weather-aware task planning CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default config to ~/.skyplan/config.toml
    Init,

    /// Current weather, per-task scores, alerts and the summary banner
    Dashboard {
        /// City override (default: config default_city)
        #[arg(long)]
        city: Option<String>,
    },

    /// Score one task against current conditions
    Score {
        task_name: String,

        #[arg(long)]
        city: Option<String>,
    },

    /// Rank the best forecast days for one task
    Windows {
        task_name: String,

        #[arg(long)]
        city: Option<String>,
    },

    /// Task management
    Task {
        #[command(subcommand)]
        command: TaskCommand,
    },
}

#[derive(Subcommand, Debug)]
enum TaskCommand {
    /// Add a pending task (fetches an advisory for it)
    Add {
        name: String,

        #[arg(long)]
        city: Option<String>,
    },

    /// List stored tasks
    List,

    /// Toggle a task between pending and completed
    Done { id: String },

    /// Remove a task
    Rm { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Init => {
            config::init_config()?;
        }

        Command::Dashboard { city } => {
            dashboard(city).await?;
        }

        Command::Score { task_name, city } => {
            let (cfg, client) = setup()?;
            let city = city.unwrap_or_else(|| cfg.weather.default_city.clone());
            let key = config::weather_api_key(&cfg)?;
            let current = openweather::fetch_current(&client, &key, &city).await?;

            render::print_current(&current);
            let scorer = SuitabilityScorer::new();
            render::print_score(&task_name, &scorer.score(&task_name, &current.snapshot()));
        }

        Command::Windows { task_name, city } => {
            let (cfg, client) = setup()?;
            let city = city.unwrap_or_else(|| cfg.weather.default_city.clone());
            let key = config::weather_api_key(&cfg)?;
            let forecast = openweather::fetch_forecast(&client, &key, &city).await?;

            let scorer = SuitabilityScorer::new();
            render::print_windows(&task_name, &best_windows(&scorer, &task_name, &forecast));
            let urgency = task_urgency(&scorer, &task_name, &forecast);
            println!(
                "Urgency: {} ({}) — {}",
                urgency.level.as_str(),
                urgency.urgency_score,
                urgency.reason
            );
        }

        Command::Task { command } => match command {
            TaskCommand::Add { name, city } => {
                add_task(name, city).await?;
            }
            TaskCommand::List => {
                let tasks = store::load_tasks()?;
                if tasks.is_empty() {
                    println!("No tasks. Add one with: skyplan task add <name>");
                }
                for t in &tasks {
                    let status = if t.as_task().is_completed() { "✔" } else { " " };
                    println!("[{status}] {} {}", t.id, t.name);
                }
            }
            TaskCommand::Done { id } => {
                let mut tasks = store::load_tasks()?;
                let status = store::toggle_task(&mut tasks, &id)?;
                store::save_tasks(&tasks)?;
                println!("{id} is now {status:?}");
            }
            TaskCommand::Rm { id } => {
                let mut tasks = store::load_tasks()?;
                let removed = store::remove_task(&mut tasks, &id)?;
                store::save_tasks(&tasks)?;
                println!("Removed {} ({})", removed.id, removed.name);
            }
        },
    }

    Ok(())
}

fn setup() -> Result<(config::Config, reqwest::Client)> {
    Ok((config::load_config()?, reqwest::Client::new()))
}

async fn dashboard(city: Option<String>) -> Result<()> {
    let (cfg, client) = setup()?;
    let city = city.unwrap_or_else(|| cfg.weather.default_city.clone());
    let key = config::weather_api_key(&cfg)?;

    let current = openweather::fetch_current(&client, &key, &city).await?;
    let forecast = openweather::fetch_forecast(&client, &key, &city).await?;
    let stored = store::load_tasks()?;

    render::print_current(&current);
    println!();

    let scorer = SuitabilityScorer::new();
    let snapshot = current.snapshot();
    if stored.is_empty() {
        println!("No tasks. Add one with: skyplan task add <name>");
    }
    for t in &stored {
        render::print_task_row(t, &scorer.score(&t.name, &snapshot));
    }
    println!();

    let tasks: Vec<Task> = stored.iter().map(|t| t.as_task()).collect();
    let notifications = notifications_for(&scorer, &tasks, &forecast);
    let summary = dashboard_summary(&notifications);
    render::print_notifications(&notifications, &summary);

    Ok(())
}

async fn add_task(name: String, city: Option<String>) -> Result<()> {
    let (cfg, client) = setup()?;
    let city = city.unwrap_or_else(|| cfg.weather.default_city.clone());
    let key = config::weather_api_key(&cfg)?;
    let current = openweather::fetch_current(&client, &key, &city).await?;
    let snapshot = current.snapshot();

    // Advisory failure is never fatal: degrade to the weather backstop.
    let advisory = match llm::advise(&cfg, &name, &current).await {
        Ok(text) => parse_advisory(&text, &snapshot),
        Err(e) => {
            eprintln!("advisory unavailable ({e}); using weather backstop");
            skyplan_core::Advisory::fallback(&snapshot)
        }
    };

    let mut tasks = store::load_tasks()?;
    let task = store::add_task(
        &mut tasks,
        name,
        Some(advisory.suggestion.clone()),
        Some(advisory.risk),
    );
    store::save_tasks(&tasks)?;

    println!("Added {} ({})", task.id, task.name);
    println!("  risk: {}", advisory.risk.as_str());
    println!("  {}", advisory.suggestion);
    Ok(())
}
