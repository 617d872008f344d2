//! Command line front end for tasklog.
//!
//! Usage:
//!
//! ```text
//! tasklog [--data-dir DIR] [--user CODE] [--log-level LEVEL] <command>
//! ```
//!
//! Every command except `user add` runs on behalf of the user given by
//! `--user` (or `TASKLOG_USER`), who must exist in the registry.

#[path = "tasklog/cli.rs"]
mod cli;

use clap::Parser;
use cli::{Cli, Command, TaskCommand, UserCommand};
use eyre::{Result, WrapErr, eyre};
use mockable::DefaultClock;
use std::io::{self, Write};
use std::sync::Arc;
use tasklog::config::AppConfig;
use tasklog::task::{
    adapters::json::JsonTaskStore,
    domain::{TaskCode, User},
    services::{ChangeStatusRequest, CreateTaskRequest, TaskLifecycleService},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

type Service = TaskLifecycleService<JsonTaskStore, JsonTaskStore, JsonTaskStore, DefaultClock>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let Cli { config, command } = Cli::parse();
    init_tracing(&config.log_level)?;
    debug!(data_dir = %config.data_dir, "opening task store");

    let store = Arc::new(
        JsonTaskStore::open(&config.data_dir)
            .wrap_err_with(|| format!("failed to open data directory {}", config.data_dir))?,
    );
    let mut out = io::stdout().lock();

    match command {
        Command::User { command } => manage_users(&store, command, &mut out),
        Command::Task(command) => {
            let service: Service = TaskLifecycleService::new(
                Arc::clone(&store),
                Arc::clone(&store),
                store,
                Arc::new(DefaultClock),
            );
            let actor = acting_user(&service, &config).await?;
            run(&service, &actor, command, &mut out).await
        }
    }
}

fn manage_users(store: &JsonTaskStore, command: UserCommand, out: &mut impl Write) -> Result<()> {
    match command {
        UserCommand::Add { code, name } => {
            store.register_user(User::new(code, name.as_str()))?;
            writeln!(out, "{name} has been registered as user {code}.")?;
        }
    }
    Ok(())
}

async fn acting_user(service: &Service, config: &AppConfig) -> Result<User> {
    let code = config
        .user_code()
        .ok_or_else(|| eyre!("no acting user, pass --user or set TASKLOG_USER"))?;
    Ok(service.find_user(code).await?)
}

async fn run(
    service: &Service,
    actor: &User,
    command: TaskCommand,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        TaskCommand::List => {
            for listing in service.list_tasks(actor).await? {
                writeln!(out, "{listing}")?;
            }
        }
        TaskCommand::Create {
            code,
            name,
            assignee,
        } => {
            let task = service
                .create_task(CreateTaskRequest::new(code, name, assignee), actor)
                .await?;
            writeln!(out, "{} has been registered.", task.name())?;
        }
        TaskCommand::Status { code, status } => {
            service
                .change_status(ChangeStatusRequest::new(code, status), actor)
                .await?;
            writeln!(out, "The status has been changed.")?;
        }
        TaskCommand::Delete { code } => {
            let task = service.delete_task(TaskCode::new(code)).await?;
            writeln!(out, "{} has been deleted.", task.name())?;
        }
        TaskCommand::History { code } => {
            for entry in service.task_history(TaskCode::new(code)).await? {
                writeln!(
                    out,
                    "{} user {} set status: {}",
                    entry.date(),
                    entry.actor_code(),
                    entry.status().label()
                )?;
            }
        }
    }
    Ok(())
}

fn init_tracing(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .wrap_err_with(|| format!("invalid log filter '{directive}'"))?;
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| eyre!(err))
}
