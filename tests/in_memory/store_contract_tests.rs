//! Task store contract behaviour for the in-memory adapter.

use super::helpers::init_tracing;
use rstest::{fixture, rstest};
use taskboard::adapters::memory::InMemoryTaskStore;
use taskboard::domain::{NewTask, StageGroup, Task, TaskId, TaskPatch, TaskTitle};
use taskboard::ports::{TaskStore, TaskStoreError};

#[fixture]
fn store() -> InMemoryTaskStore {
    init_tracing();
    InMemoryTaskStore::new()
}

fn new_task(title: &str, group: u32) -> NewTask {
    NewTask {
        title: TaskTitle::new(title).expect("valid title"),
        description: "contract test".to_owned(),
        persona: "Intern".to_owned(),
        group: StageGroup::new(group).expect("valid stage group"),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_sequential_identifiers(store: InMemoryTaskStore) {
    let first = store.create(new_task("First", 1)).await.expect("create");
    let second = store.create(new_task("Second", 2)).await.expect("create");

    assert_eq!(first.id().value(), 1);
    assert_eq!(second.id().value(), 2);
    assert!(!first.is_completed());
    assert_eq!(first.created_at(), first.updated_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listings_split_on_the_completed_flag(store: InMemoryTaskStore) {
    let open = store.create(new_task("Open", 1)).await.expect("create");
    let closed = store.create(new_task("Closed", 2)).await.expect("create");
    store.complete(closed.id()).await.expect("complete");

    let active = store.list_active().await.expect("list active");
    let completed = store.list_completed().await.expect("list completed");

    assert_eq!(active.len(), 1);
    assert_eq!(active.first().map(Task::id), Some(open.id()));
    assert_eq!(completed.len(), 1);
    assert_eq!(completed.first().map(Task::id), Some(closed.id()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listings_ascend_by_identifier(store: InMemoryTaskStore) {
    for index in 0..5 {
        store
            .create(new_task(&format!("Task {index}"), 1))
            .await
            .expect("create");
    }

    let active = store.list_active().await.expect("list active");
    let ids: Vec<i64> = active.iter().map(|task| task.id().value()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_patches_only_requested_fields(store: InMemoryTaskStore) {
    let task = store.create(new_task("Patch me", 1)).await.expect("create");

    store
        .update(task.id(), TaskPatch::group(StageGroup::IN_PROGRESS))
        .await
        .expect("update");

    let active = store.list_active().await.expect("list active");
    let updated = active.first().expect("updated task");
    assert_eq!(updated.group(), StageGroup::IN_PROGRESS);
    assert_eq!(updated.title().as_str(), "Patch me");
    assert_eq!(updated.description(), "contract test");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_missing_task_reports_not_found(store: InMemoryTaskStore) {
    let missing = TaskId::new(41).expect("valid task id");
    let result = store
        .update(missing, TaskPatch::group(StageGroup::IN_PROGRESS))
        .await;

    assert!(matches!(result, Err(TaskStoreError::NotFound(id)) if id == missing));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_patch_is_a_no_op_even_for_missing_tasks(store: InMemoryTaskStore) {
    let missing = TaskId::new(77).expect("valid task id");
    store
        .update(missing, TaskPatch::default())
        .await
        .expect("empty patch accepted");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn complete_is_idempotent(store: InMemoryTaskStore) {
    let task = store.create(new_task("Done twice", 2)).await.expect("create");

    store.complete(task.id()).await.expect("first completion");
    store.complete(task.id()).await.expect("second completion");

    let completed = store.list_completed().await.expect("list completed");
    assert_eq!(completed.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn complete_missing_task_reports_not_found(store: InMemoryTaskStore) {
    let missing = TaskId::new(13).expect("valid task id");
    let result = store.complete(missing).await;
    assert!(matches!(result, Err(TaskStoreError::NotFound(id)) if id == missing));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn complete_titled_sweeps_only_active_exact_matches(store: InMemoryTaskStore) {
    let already_done = store
        .create(new_task("Weekly digest", 1))
        .await
        .expect("create");
    store.complete(already_done.id()).await.expect("complete");
    store.create(new_task("Weekly digest", 1)).await.expect("create");
    store.create(new_task("Weekly digest", 2)).await.expect("create");
    store.create(new_task("Other work", 1)).await.expect("create");

    let title = TaskTitle::new("Weekly digest").expect("valid title");
    let changed = store.complete_titled(&title).await.expect("bulk complete");

    assert_eq!(changed, 2);
    let active = store.list_active().await.expect("list active");
    assert_eq!(active.len(), 1);
    assert_eq!(
        active.first().map(|task| task.title().as_str()),
        Some("Other work")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn complete_titled_with_no_match_changes_nothing(store: InMemoryTaskStore) {
    store.create(new_task("Untouched", 1)).await.expect("create");

    let title = TaskTitle::new("No such card").expect("valid title");
    let changed = store.complete_titled(&title).await.expect("bulk complete");

    assert_eq!(changed, 0);
    assert_eq!(store.list_active().await.expect("list active").len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_record(store: InMemoryTaskStore) {
    let task = store.create(new_task("Doomed", 1)).await.expect("create");

    store.delete(task.id()).await.expect("delete");

    assert!(store.list_active().await.expect("list active").is_empty());
    let again = store.delete(task.id()).await;
    assert!(matches!(again, Err(TaskStoreError::NotFound(_))));
}
