//! When steps for task lifecycle BDD scenarios.

use super::world::TaskLifecycleWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskpad::task::domain::{TaskDraft, TaskId, TaskPatch};

#[when(r#"a task titled "{title}" due "{due_date}" is added"#)]
fn task_is_added(
    world: &mut TaskLifecycleWorld,
    title: String,
    due_date: String,
) -> Result<(), eyre::Report> {
    let draft = TaskDraft::parse(&title, "", &due_date).wrap_err("parse added task")?;
    let task = world.repository.create(draft).wrap_err("add task")?;
    world.last_task = Some(task);
    Ok(())
}

#[when("the last task is toggled")]
fn last_task_is_toggled(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let id = world
        .last_task
        .as_ref()
        .map(|task| task.id().clone())
        .ok_or_else(|| eyre::eyre!("missing last task in scenario world"))?;
    let toggled = world
        .repository
        .toggle_complete(&id)
        .wrap_err("toggle task")?
        .ok_or_else(|| eyre::eyre!("toggled task should exist"))?;
    world.last_task = Some(toggled);
    Ok(())
}

#[when(r#"an unknown task is renamed to "{title}""#)]
fn unknown_task_is_renamed(
    world: &mut TaskLifecycleWorld,
    title: String,
) -> Result<(), eyre::Report> {
    world.blob_snapshot = Some(world.stored_blob()?);
    let result = world
        .repository
        .update(&TaskId::new(), TaskPatch::new().with_title(title))
        .wrap_err("update unknown task")?;
    world.last_update = Some(result);
    Ok(())
}

#[when(r#"the task titled "{title}" is deleted"#)]
fn task_is_deleted(world: &mut TaskLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let id = world
        .repository
        .get_all()
        .wrap_err("load task list")?
        .into_iter()
        .find(|task| task.title() == title)
        .map(|task| task.id().clone())
        .ok_or_else(|| eyre::eyre!("no task titled '{title}'"))?;

    if !world.repository.delete(&id).wrap_err("delete task")? {
        return Err(eyre::eyre!("delete reported no removal for '{title}'"));
    }
    world.deleted_id = Some(id);
    Ok(())
}

#[when(r#"a task with a blank title due "{due_date}" is submitted"#)]
fn blank_title_is_submitted(
    world: &mut TaskLifecycleWorld,
    due_date: String,
) -> Result<(), eyre::Report> {
    let submission = match TaskDraft::parse("   ", "", &due_date) {
        Ok(draft) => Ok(world.repository.create(draft).wrap_err("create task")?),
        Err(err) => Err(err),
    };
    world.last_submission = Some(submission);
    Ok(())
}
