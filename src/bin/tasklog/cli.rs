//! Command line argument parsing for tasklog.

use clap::{Parser, Subcommand};
use tasklog::config::AppConfig;
use tasklog::task::domain::{ParseTaskStatusError, TaskStatus};

/// Top-level arguments.
#[derive(Parser, Debug)]
#[command(name = "tasklog")]
#[command(author, version, about = "Task tracker with an audited status lifecycle", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub config: AppConfig,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(flatten)]
    Task(TaskCommand),

    /// Manage the user registry
    User {
        #[command(subcommand)]
        command: UserCommand,
    },
}

/// Commands run on behalf of the acting user.
#[derive(Subcommand, Debug)]
pub enum TaskCommand {
    /// List every task
    List,

    /// Register a new task
    Create {
        /// Unique task code
        code: u32,

        /// Task name, stored exactly as given
        name: String,

        /// Code of the responsible user
        assignee: u32,
    },

    /// Advance a task to its next status
    Status {
        /// Task code
        code: u32,

        /// New status: 0/not_started, 1/in_progress or 2/done
        #[arg(value_parser = parse_status)]
        status: TaskStatus,
    },

    /// Delete a done task and its history
    Delete {
        /// Task code
        code: u32,
    },

    /// Show the audit trail of a task
    History {
        /// Task code
        code: u32,
    },
}

/// User registry commands.
#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Register a new user
    Add {
        /// Unique user code
        code: u32,

        /// Display name
        name: String,
    },
}

fn parse_status(value: &str) -> Result<TaskStatus, ParseTaskStatusError> {
    TaskStatus::try_from(value)
}
