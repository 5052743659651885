use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cram_core::{plan_to_value, select_high_yield, to_value, PlanRequest, StudyPlan};
use std::path::{Path, PathBuf};
use tracing::info;

mod config;
mod state;

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "cram", version, about = "Exam study planner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a day-by-day study plan and print it as JSON
    Plan {
        /// Request document: topics, start_date, exam_date, hours_per_day
        #[arg(long)]
        request: PathBuf,

        /// Override hours_per_day from the request
        #[arg(long)]
        hours: Option<f64>,

        /// Single-line JSON instead of pretty output
        #[arg(long)]
        compact: bool,
    },

    /// Rank topics and print the high-yield subset as JSON
    HighYield {
        #[arg(long)]
        request: PathBuf,

        /// Share of topics to keep (default from config)
        #[arg(long)]
        fraction: Option<f64>,

        /// Minimum number of topics to keep (default from config)
        #[arg(long)]
        min_count: Option<usize>,
    },

    /// Print a readable day-by-day table
    Summary {
        #[arg(long)]
        request: PathBuf,

        #[arg(long)]
        hours: Option<f64>,
    },

    /// Manage ~/.cram/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;
    init_logging(&cfg);

    match cli.command {
        Command::Plan {
            request,
            hours,
            compact,
        } => {
            let plan = plan_from_file(&request, hours, &cfg)?;
            let value = plan_to_value(&plan);
            let out = if compact {
                serde_json::to_string(&value)?
            } else {
                serde_json::to_string_pretty(&value)?
            };
            println!("{out}");
        }

        Command::HighYield {
            request,
            fraction,
            min_count,
        } => {
            let req = load_request(&request)?;
            let topics = req.topics()?;
            let selection = select_high_yield(
                &topics,
                fraction.unwrap_or(cfg.high_yield.fraction),
                min_count.unwrap_or(cfg.high_yield.min_count),
            )?;
            println!("{}", serde_json::to_string_pretty(&to_value(&selection))?);
        }

        Command::Summary { request, hours } => {
            let plan = plan_from_file(&request, hours, &cfg)?;
            print_summary(&plan);
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn init_logging(cfg: &Config) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.log.level)),
        )
        .init();
}

fn load_request(path: &Path) -> Result<PlanRequest> {
    let raw = state::read_request(path)?;
    PlanRequest::from_json(&raw).with_context(|| format!("parsing {}", path.display()))
}

fn plan_from_file(path: &Path, hours: Option<f64>, cfg: &Config) -> Result<StudyPlan> {
    let mut req = load_request(path)?;
    if hours.is_some() {
        req.hours_per_day = hours;
    }

    let plan = req
        .plan(cfg.planner.default_hours_per_day)
        .with_context(|| format!("planning {}", path.display()))?;

    info!(
        status = %plan.status,
        days = plan.days.len(),
        tasks = plan.task_count(),
        "plan generated"
    );
    Ok(plan)
}

fn print_summary(plan: &StudyPlan) {
    println!(
        "# Study plan {} -> {} ({}h/day, status: {})\n",
        plan.start_date, plan.exam_date, plan.hours_per_day, plan.status
    );

    if plan.days.is_empty() {
        println!("(nothing to schedule)");
        return;
    }

    for day in &plan.days {
        println!("{}  {:.2}h", day.date, day.total_hours);
        for t in &day.tasks {
            println!(
                "  - [{}] {} / {} {:.2}h (priority {:.2})",
                t.task_type, t.subject_name, t.topic_name, t.duration_hours, t.priority_score
            );
        }
    }

    println!(
        "\nScheduled {:.2}h across {} tasks.",
        plan.scheduled_hours(),
        plan.task_count()
    );
}
