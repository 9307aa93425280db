mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::db::Database;

#[derive(Debug, Parser)]
#[command(
    name = "mesoledger",
    version,
    about = "mesoledger - local-only meso ledger, savings goal and weekly boss tracker"
)]
pub(crate) struct Cli {
    /// Ledger file to use instead of the per-user data directory
    #[arg(long, value_name = "PATH", env = "MESOLEDGER_DB", global = true)]
    pub(crate) db: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Show the savings goal, balance and progress ratio
    Goal,
    /// Override the savings goal and/or the current balance
    GoalSet {
        #[arg(long, value_name = "MESO")]
        goal: Option<Decimal>,
        #[arg(long, value_name = "MESO", allow_hyphen_values = true)]
        current: Option<Decimal>,
    },
    /// Show material-farming settings
    Material,
    /// Update material-farming settings; omitted fields are kept
    MaterialSet {
        #[arg(long, value_name = "MESO")]
        meso_per_run: Option<Decimal>,
        #[arg(long, value_name = "COUNT")]
        sol_erda_count: Option<i64>,
        #[arg(long, value_name = "MESO")]
        sol_erda_price: Option<Decimal>,
        #[arg(long, value_name = "COUNT")]
        runs: Option<i64>,
    },
    /// Step the material run counter up or down (never below zero)
    MaterialRuns {
        #[arg(allow_hyphen_values = true)]
        delta: i64,
    },
    /// List records, newest first
    Records {
        #[arg(long, value_name = "YYYY-MM")]
        month: Option<String>,
    },
    /// Add an income or expense record
    RecordAdd {
        /// "income" or "expense"
        kind: String,
        amount: Decimal,
        #[arg(long)]
        description: Option<String>,
        /// Defaults to today
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,
    },
    /// Delete a record and reverse its effect on the balance
    RecordRm { id: i64 },
    /// List catalog contents
    Contents,
    /// Add a catalog content item
    ContentAdd {
        name: String,
        cost: Decimal,
        #[arg(long)]
        category: Option<String>,
    },
    /// Delete a catalog content item
    ContentRm { id: i64 },
    /// Spend a content item once (books an expense for its cost)
    Spend { content_id: i64 },
    /// List bosses in display order
    Bosses,
    /// Add a boss
    BossAdd { name: String, reward: Decimal },
    /// Delete a boss (income already booked is kept)
    BossRm { id: i64 },
    /// Set the boss display order; every boss id exactly once
    BossOrder {
        #[arg(num_args = 0..)]
        ids: Vec<i64>,
    },
    /// Check a boss for this cycle and book its reward
    BossCheck {
        id: i64,
        /// Book this amount instead of the stored reward
        #[arg(long, value_name = "MESO")]
        reward: Option<Decimal>,
    },
    /// Clear every boss check to start a new cycle
    BossReset,
    /// Record quick manual income
    QuickIncome {
        amount: Decimal,
        #[arg(long)]
        description: Option<String>,
    },
    /// Print the monthly summary (default: current month)
    Summary {
        #[arg(value_name = "YYYY-MM")]
        month: Option<String>,
    },
    /// Export records to CSV
    Export {
        path: Option<PathBuf>,
        #[arg(long, value_name = "YYYY-MM")]
        month: Option<String>,
    },
}

pub(crate) fn as_cli(command: Command, db: &mut Database) -> Result<()> {
    match command {
        Command::Goal => cli::goal(db),
        Command::GoalSet { goal, current } => cli::goal_set(db, goal, current),
        Command::Material => cli::material(db),
        Command::MaterialSet {
            meso_per_run,
            sol_erda_count,
            sol_erda_price,
            runs,
        } => cli::material_set(db, meso_per_run, sol_erda_count, sol_erda_price, runs),
        Command::MaterialRuns { delta } => cli::material_runs(db, delta),
        Command::Records { month } => cli::records(db, month.as_deref()),
        Command::RecordAdd {
            kind,
            amount,
            description,
            date,
        } => cli::record_add(db, &kind, amount, description, date),
        Command::RecordRm { id } => cli::record_rm(db, id),
        Command::Contents => cli::contents(db),
        Command::ContentAdd {
            name,
            cost,
            category,
        } => cli::content_add(db, name, cost, category),
        Command::ContentRm { id } => cli::content_rm(db, id),
        Command::Spend { content_id } => cli::spend(db, content_id),
        Command::Bosses => cli::bosses(db),
        Command::BossAdd { name, reward } => cli::boss_add(db, &name, reward),
        Command::BossRm { id } => cli::boss_rm(db, id),
        Command::BossOrder { ids } => cli::boss_order(db, &ids),
        Command::BossCheck { id, reward } => cli::boss_check(db, id, reward),
        Command::BossReset => cli::boss_reset(db),
        Command::QuickIncome {
            amount,
            description,
        } => cli::quick_income(db, amount, description.as_deref()),
        Command::Summary { month } => cli::summary(db, month),
        Command::Export { path, month } => cli::export(db, path, month),
    }
}

#[cfg(test)]
mod tests;
