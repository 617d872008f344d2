//! When steps for task status BDD scenarios.

use super::world::{TaskStatusWorld, parse_status, run_async};
use rstest_bdd_macros::when;
use tasklog::task::services::{ChangeStatusRequest, CreateTaskRequest};

#[when(r#"task {code:u32} named "{name}" is created for user {assignee:u32}"#)]
fn create_task(
    world: &mut TaskStatusWorld,
    code: u32,
    name: String,
    assignee: u32,
) -> Result<(), eyre::Report> {
    let actor = world.actor()?.clone();
    let result = run_async(
        world
            .service
            .create_task(CreateTaskRequest::new(code, name, assignee), &actor),
    );
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"task {code:u32} is moved to "{status}""#)]
fn move_task(world: &mut TaskStatusWorld, code: u32, status: String) -> Result<(), eyre::Report> {
    let actor = world.actor()?.clone();
    let target = parse_status(&status)?;
    let result = run_async(
        world
            .service
            .change_status(ChangeStatusRequest::new(code, target), &actor),
    );
    world.last_result = Some(result);
    Ok(())
}
