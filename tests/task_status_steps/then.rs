//! Then steps for task status BDD scenarios.

use super::world::{TaskStatusWorld, parse_status, run_async};
use rstest_bdd_macros::then;
use tasklog::task::{
    domain::{TaskCode, UserCode},
    ports::TaskRepository,
    services::ErrorKind,
};

#[then(r#"task {code:u32} has status "{status}""#)]
fn task_has_status(
    world: &TaskStatusWorld,
    code: u32,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let task = run_async(world.tasks.find_by_code(TaskCode::new(code)))?
        .ok_or_else(|| eyre::eyre!("task {code} is missing"))?;

    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            task.status().as_str()
        ));
    }
    Ok(())
}

#[then("task {code:u32} does not exist")]
fn task_does_not_exist(world: &TaskStatusWorld, code: u32) -> Result<(), eyre::Report> {
    let task = run_async(world.tasks.find_by_code(TaskCode::new(code)))?;
    eyre::ensure!(task.is_none(), "task {code} should not have been stored");
    Ok(())
}

#[then("the audit log holds {count:usize} entries")]
fn audit_log_holds(world: &TaskStatusWorld, count: usize) -> Result<(), eyre::Report> {
    let entries = world.logs.entries()?;
    eyre::ensure!(
        entries.len() == count,
        "expected {count} audit entries, found {}",
        entries.len()
    );
    Ok(())
}

#[then(r#"the latest audit entry for task {code:u32} records status "{status}" by user {actor:u32}"#)]
fn latest_audit_entry(
    world: &TaskStatusWorld,
    code: u32,
    status: String,
    actor: u32,
) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let entries = world.logs.entries()?;
    let entry = entries
        .iter()
        .rev()
        .find(|entry| entry.task_code() == TaskCode::new(code))
        .ok_or_else(|| eyre::eyre!("no audit entry for task {code}"))?;

    eyre::ensure!(entry.status() == expected, "unexpected status {:?}", entry.status());
    eyre::ensure!(
        entry.actor_code() == UserCode::new(actor),
        "unexpected actor {}",
        entry.actor_code()
    );
    Ok(())
}

fn last_error_kind(world: &TaskStatusWorld) -> Result<ErrorKind, eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(err)) => Ok(err.kind()),
        Some(Ok(task)) => Err(eyre::eyre!("expected a failure, got {task:?}")),
        None => Err(eyre::eyre!("missing request result")),
    }
}

#[then("the request fails with a reference not found error")]
fn fails_with_reference_not_found(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let kind = last_error_kind(world)?;
    eyre::ensure!(
        kind == ErrorKind::ReferenceNotFound,
        "expected reference not found, got {kind:?}"
    );
    Ok(())
}

#[then("the request fails with an invalid transition error")]
fn fails_with_invalid_transition(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let kind = last_error_kind(world)?;
    eyre::ensure!(
        kind == ErrorKind::InvalidTransition,
        "expected invalid transition, got {kind:?}"
    );
    Ok(())
}
