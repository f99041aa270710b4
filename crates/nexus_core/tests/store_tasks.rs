use nexus_core::{
    MemoryStorage, PersistenceAdapter, Store, TaskPriority, TaskStatus, TaskStatusCounts,
};
use std::collections::HashSet;

fn memory_store() -> Store<MemoryStorage> {
    Store::load(PersistenceAdapter::new(MemoryStorage::default()))
}

#[test]
fn add_update_delete_scenario() {
    let mut store = memory_store();

    let id = store
        .add_task("Buy milk", "", TaskPriority::Medium)
        .id
        .clone();
    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].status, TaskStatus::Todo);
    assert_eq!(store.tasks()[0].title, "Buy milk");
    assert_eq!(store.tasks()[0].priority, TaskPriority::Medium);

    store.update_task_status(&id, TaskStatus::Done);
    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].status, TaskStatus::Done);
    assert_eq!(store.tasks()[0].title, "Buy milk");

    store.delete_task(&id);
    assert!(store.tasks().is_empty());
}

#[test]
fn add_prepends_newest_first() {
    let mut store = memory_store();

    store.add_task("A", "first", TaskPriority::Low);
    store.add_task("B", "second", TaskPriority::High);

    assert_eq!(store.tasks()[0].title, "B");
    assert_eq!(store.tasks()[1].title, "A");
}

#[test]
fn status_update_leaves_other_fields_untouched() {
    let mut store = memory_store();

    let created = store
        .add_task("Write report", "quarterly numbers", TaskPriority::High)
        .clone();

    store.update_task_status(&created.id, TaskStatus::InProgress);

    let updated = &store.tasks()[0];
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.priority, created.priority);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.status, TaskStatus::InProgress);
}

#[test]
fn consecutive_adds_generate_distinct_ids() {
    let mut store = memory_store();

    for index in 0..100 {
        store.add_task(format!("task {index}"), "", TaskPriority::Low);
    }

    let ids: HashSet<&str> = store.tasks().iter().map(|task| task.id.as_str()).collect();
    assert_eq!(ids.len(), 100);
}

#[test]
fn update_with_unknown_id_is_a_noop() {
    let mut store = memory_store();
    store.add_task("keep me", "", TaskPriority::Low);
    let snapshot = store.tasks().to_vec();

    store.update_task_status("not-a-real-id", TaskStatus::Done);

    assert_eq!(store.tasks(), snapshot.as_slice());
}

#[test]
fn delete_with_unknown_id_is_a_noop() {
    let mut store = memory_store();
    store.add_task("keep me", "", TaskPriority::Low);
    let snapshot = store.tasks().to_vec();

    store.delete_task("not-a-real-id");

    assert_eq!(store.tasks(), snapshot.as_slice());
}

#[test]
fn reset_on_empty_workspace_is_idempotent() {
    let mut store = memory_store();

    store.reset_workspace();
    store.reset_workspace();

    assert!(store.tasks().is_empty());
    assert!(store.notes().is_empty());
}

#[test]
fn status_counts_tally_each_bucket() {
    let mut store = memory_store();

    let a = store.add_task("a", "", TaskPriority::Low).id.clone();
    let b = store.add_task("b", "", TaskPriority::Low).id.clone();
    store.add_task("c", "", TaskPriority::Low);

    store.update_task_status(&a, TaskStatus::InProgress);
    store.update_task_status(&b, TaskStatus::Done);

    assert_eq!(
        store.task_status_counts(),
        TaskStatusCounts {
            todo: 1,
            in_progress: 1,
            done: 1,
        }
    );
}

#[test]
fn estimator_grows_with_content() {
    let mut store = memory_store();

    let empty = store.estimated_storage_bytes();
    store.add_task("measure me", "some description", TaskPriority::Medium);
    let one_task = store.estimated_storage_bytes();
    store.add_note();
    let with_note = store.estimated_storage_bytes();

    assert!(one_task > empty);
    assert!(with_note > one_task);
}
