//! Given steps for task status BDD scenarios.

use super::world::{TaskStatusWorld, parse_status, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tasklog::task::{
    domain::{User, UserCode},
    services::{ChangeStatusRequest, CreateTaskRequest},
};

#[given(r#"a registered user {code:u32} named "{name}""#)]
fn registered_user(
    world: &mut TaskStatusWorld,
    code: u32,
    name: String,
) -> Result<(), eyre::Report> {
    world
        .users
        .register(User::new(code, name))
        .wrap_err("register scenario user")
}

#[given("the acting user is {code:u32}")]
fn acting_user(world: &mut TaskStatusWorld, code: u32) -> Result<(), eyre::Report> {
    let actor = run_async(world.service.find_user(UserCode::new(code)))
        .wrap_err("resolve acting user")?;
    world.actor = Some(actor);
    Ok(())
}

#[given(r#"task {code:u32} named "{name}" has been created for user {assignee:u32}"#)]
fn task_created(
    world: &mut TaskStatusWorld,
    code: u32,
    name: String,
    assignee: u32,
) -> Result<(), eyre::Report> {
    let actor = world.actor()?.clone();
    run_async(
        world
            .service
            .create_task(CreateTaskRequest::new(code, name, assignee), &actor),
    )
    .wrap_err("create task in scenario setup")?;
    Ok(())
}

#[given(r#"task {code:u32} has been moved to "{status}""#)]
fn task_moved(
    world: &mut TaskStatusWorld,
    code: u32,
    status: String,
) -> Result<(), eyre::Report> {
    let actor = world.actor()?.clone();
    let target = parse_status(&status)?;
    run_async(
        world
            .service
            .change_status(ChangeStatusRequest::new(code, target), &actor),
    )
    .wrap_err("change task status in scenario setup")?;
    Ok(())
}
