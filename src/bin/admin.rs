//! CLI administration tool for school-admin.
//!
//! Works directly against the JSON store file, without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Print a report
//! cargo run --bin admin -- report overview
//! cargo run --bin admin -- report subjects --grade "grade 2"
//!
//! # Add a user interactively
//! cargo run --bin admin -- user add
//! ```
//!
//! # Environment Variables
//!
//! - `STORE_PATH` (required): JSON store file
//! - `ACTIVE_WINDOW_DAYS`, `UNSPECIFIED_LABEL`: as for the server

use school_admin::application::services::{ReportService, UserService};
use school_admin::config;
use school_admin::domain::entities::{NewUser, Role};
use school_admin::domain::reporting::GroupCounts;
use school_admin::infrastructure::persistence::MemoryDocumentStore;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use dialoguer::{Confirm, Input, Select};
use std::sync::Arc;

/// CLI tool for managing school-admin data.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Print a report
    Report {
        #[arg(value_enum)]
        kind: ReportKind,

        /// Restrict subject statistics to one grade
        #[arg(short, long)]
        grade: Option<String>,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportKind {
    Dashboard,
    Overview,
    Subjects,
    Activity,
    Fees,
    Students,
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Add a user with interactive prompts
    Add {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let path = config
        .store_path
        .clone()
        .context("STORE_PATH must be set")?;

    let store = Arc::new(
        MemoryDocumentStore::open(&path)
            .await
            .with_context(|| format!("Failed to open store file {}", path.display()))?,
    );

    match cli.command {
        Commands::Report { kind, grade } => {
            let service = ReportService::new(store, config.report_settings());
            print_report(&service, kind, grade.as_deref()).await?
        }
        Commands::User {
            action: UserAction::Add { yes },
        } => add_user(UserService::new(store), yes).await?,
    }

    Ok(())
}

/// Computes and prints one report.
async fn print_report(
    service: &ReportService<MemoryDocumentStore>,
    kind: ReportKind,
    grade: Option<&str>,
) -> Result<()> {
    let now = Utc::now();

    match kind {
        ReportKind::Dashboard => {
            let r = service.dashboard().await?;
            heading("Dashboard");
            line("Users", r.total_users);
            line("Students", r.total_students);
            line("Teachers", r.total_teachers);
            line("Guardians", r.total_guardians);
            line("Admins", r.total_admins);
        }
        ReportKind::Overview => {
            let r = service.overview().await?;
            heading("Overview");
            line("Users", r.total_users);
            line("Subjects", r.total_subjects);
            line("Fees", r.total_fees);
            groups("Users by role", &r.users_by_role);
            groups("Subjects by grade", &r.subjects_by_grade);
        }
        ReportKind::Subjects => {
            let r = service.subject_statistics(grade).await?;
            heading(&match &r.grade {
                Some(g) => format!("Subjects in {g}"),
                None => "Subjects".to_string(),
            });
            line("Subjects", r.total_subjects);
            line(
                "Average per grade",
                format!("{:.2}", r.average_subjects_per_grade),
            );
            line(
                "Most active grade",
                r.most_active_grade.as_deref().unwrap_or("-"),
            );
            line(
                "Without teacher",
                format!(
                    "{} ({:.1}%)",
                    r.subjects_without_teacher, r.percentage_without_teacher
                ),
            );
            groups("By grade", &r.subjects_by_grade);
            groups("By teacher", &r.subjects_by_teacher);
        }
        ReportKind::Activity => {
            let r = service.activity(now).await?;
            heading("Activity");
            line("Users", r.total_users);
            line(
                &format!("Active (last {} days)", r.window_days),
                r.active_users,
            );
            line("Subjects", r.total_subjects);
            line("Fees", r.total_fees);
        }
        ReportKind::Fees => {
            let r = service.fee_summary().await?;
            heading("Fees");
            line("Fees", r.total_fees);
            line("Active", r.active_fees);
            line("Active amount", format!("{:.2}", r.total_active_amount));
            line("Average amount", format!("{:.2}", r.average_amount));
            groups("By type", &r.fees_by_type);
            groups("By status", &r.fees_by_status);
            groups("By grade", &r.fees_by_grade);
        }
        ReportKind::Students => {
            let r = service.student_summary(now).await?;
            heading("Students");
            line("Students", r.total_students);
            line("Active", r.active_students);
            line("Inactive", r.inactive_students);
            line(
                &format!("Enrolled (last {} days)", r.window_days),
                r.recently_enrolled,
            );
            groups("By grade", &r.students_by_grade);
            groups("By class", &r.students_by_class);
        }
    }

    println!();
    Ok(())
}

fn heading(title: &str) {
    println!("{}", title.bright_blue().bold());
    println!();
}

fn line(label: &str, value: impl ToString) {
    println!(
        "  {:<24} {}",
        label,
        value.to_string().bright_green().bold()
    );
}

fn groups(title: &str, counts: &GroupCounts) {
    println!();
    println!("  {}", title.bright_white().bold());
    println!("  {}", "-".repeat(40).bright_black());

    if counts.is_empty() {
        println!("  {}", "(none)".yellow());
        return;
    }

    for (key, count) in counts {
        println!("  {:<30} {}", key.cyan(), count.to_string().bright_white());
    }
}

/// Adds a user after prompting for each field.
async fn add_user(service: UserService<MemoryDocumentStore>, skip_confirm: bool) -> Result<()> {
    println!("{}", "Add User".bright_blue().bold());
    println!();

    let name: String = Input::new().with_prompt("Name").interact_text()?;
    let email: String = Input::new().with_prompt("Email").interact_text()?;

    let labels: Vec<&str> = Role::ALL.iter().map(Role::as_str).collect();
    let choice = Select::new()
        .with_prompt("Role")
        .items(&labels[..])
        .default(0)
        .interact()?;
    let role = Role::ALL[choice];

    let phone: String = Input::new()
        .with_prompt("Phone (optional)")
        .allow_empty(true)
        .interact_text()?;

    println!();
    println!("  Name:  {}", name.cyan());
    println!("  Email: {}", email.cyan());
    println!("  Role:  {}", role.as_str().cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let user = service
        .create_user(NewUser {
            name,
            email,
            role,
            phone: Some(phone).filter(|p| !p.is_empty()),
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!(
        "{} {}",
        "User created:".green().bold(),
        user.id.bright_yellow()
    );
    println!();

    Ok(())
}
