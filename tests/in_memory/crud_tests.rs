//! CRUD integration tests through the public repository API.

use super::helpers::{create_task, repository_over, store, stored_blob};
use rstest::rstest;
use taskpad::task::{
    adapters::memory::InMemorySlotStore,
    domain::{DueDate, TaskId, TaskPatch},
};

#[rstest]
fn add_increases_count_by_one(store: InMemorySlotStore) -> Result<(), eyre::Report> {
    let repository = repository_over(&store);
    create_task(&repository, "First", "2025-01-10")?;
    let before = repository.get_all()?.len();

    let added = create_task(&repository, "Second", "2025-01-11")?;

    let all = repository.get_all()?;
    eyre::ensure!(all.len() == before + 1, "expected {} tasks", before + 1);
    eyre::ensure!(all.last() == Some(&added), "added task must be last");
    eyre::ensure!(!added.completed(), "new tasks start pending");
    Ok(())
}

#[rstest]
fn update_changes_fields_but_not_identity(store: InMemorySlotStore) -> Result<(), eyre::Report> {
    let repository = repository_over(&store);
    let created = create_task(&repository, "Draft", "2025-01-10")?;
    let new_due = DueDate::parse("2025-02-14")?;

    let updated = repository
        .update(
            created.id(),
            TaskPatch::new()
                .with_description("with details")
                .with_due_date(new_due),
        )?
        .ok_or_else(|| eyre::eyre!("task should exist"))?;

    eyre::ensure!(updated.id() == created.id(), "id must not change");
    eyre::ensure!(
        updated.created_at() == created.created_at(),
        "created_at must not change"
    );
    eyre::ensure!(
        updated.updated_at() >= created.updated_at(),
        "updated_at must not move backwards"
    );
    eyre::ensure!(updated.title() == "Draft", "title was not patched");
    eyre::ensure!(updated.description() == Some("with details"), "description patched");
    eyre::ensure!(updated.due_date() == new_due, "due date patched");
    Ok(())
}

#[rstest]
fn update_nonexistent_returns_none_and_keeps_blob(
    store: InMemorySlotStore,
) -> Result<(), eyre::Report> {
    let repository = repository_over(&store);
    create_task(&repository, "A", "2025-01-10")?;
    let before = stored_blob(&store)?;

    let result = repository.update(&TaskId::new(), TaskPatch::new().with_title("X"))?;

    eyre::ensure!(result.is_none(), "unknown id must return None");
    eyre::ensure!(stored_blob(&store)? == before, "blob must be unchanged");
    Ok(())
}

#[rstest]
fn delete_then_lookup_returns_none(store: InMemorySlotStore) -> Result<(), eyre::Report> {
    let repository = repository_over(&store);
    let task = create_task(&repository, "A", "2025-01-10")?;

    eyre::ensure!(repository.delete(task.id())?, "delete should report removal");
    eyre::ensure!(
        repository.get_by_id(task.id())?.is_none(),
        "deleted task must not be found"
    );
    eyre::ensure!(!repository.delete(task.id())?, "second delete finds nothing");
    Ok(())
}

#[rstest]
fn repositories_over_one_store_see_each_others_writes(
    store: InMemorySlotStore,
) -> Result<(), eyre::Report> {
    let writer = repository_over(&store);
    let reader = repository_over(&store);

    let task = create_task(&writer, "Shared", "2025-01-10")?;

    eyre::ensure!(
        reader.get_by_id(task.id())? == Some(task),
        "reader must load the writer's collection"
    );
    Ok(())
}
