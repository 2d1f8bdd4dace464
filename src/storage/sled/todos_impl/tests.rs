use super::*;

use crate::storage::sled::test_util::TestStorageBuilder;

#[tokio::test]
async fn test_save_and_find_one() {
    let builder = TestStorageBuilder::new();
    let storage = builder.build_todo().await;

    let saved = storage.save(NewTodo::new("aaa")).await.unwrap();
    assert_eq!(saved.title, "aaa");
    assert!(saved.is_active);
    assert_eq!(saved.created_at, saved.updated_at);

    let found = storage
        .find_one(TodoFilter::by_id(saved.id))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found, saved);

    let missing = storage
        .find_one(TodoFilter::by_id(TodoId::new()))
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_find_one_active_filter() {
    let builder = TestStorageBuilder::new();
    let storage = builder.build_todo().await;

    let saved = storage.save(NewTodo::new("aaa")).await.unwrap();

    storage
        .update(TodoFilter::by_id(saved.id), TodoChanges::deactivate())
        .await
        .unwrap()
        .unwrap();

    // Filtered by activity the record is invisible, unfiltered it is not.
    let found = storage
        .find_one(TodoFilter::by_id(saved.id).active())
        .await
        .unwrap();
    assert!(found.is_none());

    let found = storage.find_one(TodoFilter::by_id(saved.id)).await.unwrap();
    assert!(found.is_some());
}

#[tokio::test]
async fn test_update_sets_title_and_bumps_updated_at() {
    let builder = TestStorageBuilder::new();
    let storage = builder.build_todo().await;

    let saved = storage.save(NewTodo::new("aaa")).await.unwrap();

    let updated = storage
        .update(TodoFilter::by_id(saved.id), TodoChanges::set_title("bbb"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "bbb");
    assert!(updated.updated_at >= saved.updated_at);
    assert_eq!(updated.created_at, saved.created_at);

    let found = storage
        .find_one(TodoFilter::by_id(saved.id))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.title, "bbb");
}

#[tokio::test]
async fn test_update_no_match_returns_none() {
    let builder = TestStorageBuilder::new();
    let storage = builder.build_todo().await;

    let result = storage
        .update(
            TodoFilter::by_id(TodoId::new()),
            TodoChanges::set_title("bbb"),
        )
        .await
        .unwrap();
    assert!(result.is_none());

    // An already-inactive record does not match an active-only filter.
    let saved = storage.save(NewTodo::new("aaa")).await.unwrap();
    storage
        .update(TodoFilter::by_id(saved.id), TodoChanges::deactivate())
        .await
        .unwrap()
        .unwrap();

    let result = storage
        .update(
            TodoFilter::by_id(saved.id).active(),
            TodoChanges::deactivate(),
        )
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_get_all_filters_by_activity() {
    let todos_count = 5;
    let builder = TestStorageBuilder::new().with_todos(todos_count);
    let storage = builder.build_todo().await;

    let all = storage.get_all(TodoFilter::default()).await.unwrap();
    assert_eq!(all.len(), todos_count);

    let victim = all[0].id;
    storage
        .update(
            TodoFilter::by_id(victim).active(),
            TodoChanges::deactivate(),
        )
        .await
        .unwrap()
        .unwrap();

    let active = storage
        .get_all(TodoFilter::default().active())
        .await
        .unwrap();
    assert_eq!(active.len(), todos_count - 1);
    assert!(active.iter().all(|todo| todo.is_active));
    assert!(active.iter().all(|todo| todo.id != victim));

    let all = storage.get_all(TodoFilter::default()).await.unwrap();
    assert_eq!(all.len(), todos_count);
}

#[tokio::test]
async fn test_flush() {
    let builder = TestStorageBuilder::new();
    let storage = builder.build_todo().await;
    let flush = builder.build_flush().await;

    storage.save(NewTodo::new("aaa")).await.unwrap();
    flush.flush().await.unwrap();
}
