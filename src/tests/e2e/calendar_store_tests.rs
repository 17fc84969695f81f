use crate::modules::calendar::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::modules::calendar::core::event_store::{EventStore, EventStoreError};
use crate::tests::fixtures::events::{EventBuilder, at};
use std::sync::Arc;
use tokio::task::JoinSet;

#[tokio::test]
async fn walks_an_event_through_its_lifecycle() {
    let store = InMemoryEventStore::new();
    let user = 123;
    let date = at(2024, 1, 17, 0, 0, 0);

    let id = store
        .create(user, date, "Planning".into(), Some("Q1".into()))
        .await
        .unwrap();
    assert_eq!(store.get_for_week(user, date).await.unwrap().len(), 1);

    store
        .update(
            EventBuilder::new()
                .id(id)
                .user_id(user)
                .date(at(2024, 1, 31, 23, 59, 59))
                .title("Planning (moved)")
                .content(None)
                .build(),
        )
        .await
        .unwrap();
    assert!(store.get_for_week(user, date).await.unwrap().is_empty());
    let month = store.get_for_month(user, date).await.unwrap();
    assert_eq!(month.len(), 1);
    assert_eq!(month[0].id, id);
    assert_eq!(month[0].user_id, user);
    assert_eq!(month[0].title, "Planning (moved)");
    assert_eq!(month[0].content, None);

    store.delete(user, id).await.unwrap();
    assert_eq!(store.get_for_month(user, date).await, Ok(vec![]));
    assert_eq!(
        store.delete(user, id).await,
        Err(EventStoreError::event_not_found(id))
    );
    assert_eq!(
        store.get_for_day(user + 1, date).await,
        Err(EventStoreError::user_not_found(user + 1))
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn keeps_ids_unique_while_readers_and_writers_interleave() {
    let store = Arc::new(InMemoryEventStore::new());
    let date = at(2024, 1, 17, 0, 0, 0);
    store.create(1, date, "seed".into(), None).await.unwrap();

    let mut writers = JoinSet::new();
    for n in 0..50_i64 {
        let store = store.clone();
        writers.spawn(async move {
            let user = n % 5 + 1;
            store
                .create(user, date, format!("event {n}"), None)
                .await
        });
    }

    let mut readers = JoinSet::new();
    for _ in 0..20 {
        let store = store.clone();
        readers.spawn(async move { store.get_for_week(1, date).await });
    }

    let mut ids = Vec::new();
    while let Some(joined) = writers.join_next().await {
        ids.push(joined.unwrap().unwrap());
    }
    while let Some(joined) = readers.join_next().await {
        let seen = joined.unwrap().unwrap();
        assert!(!seen.is_empty(), "the seeded event is always visible");
    }

    ids.sort_unstable();
    assert_eq!(ids, (2..=51).collect::<Vec<i64>>());

    let mut total = 0;
    for user in 1..=5 {
        let events = store.get_for_day(user, date).await.unwrap();
        assert!(events.iter().all(|event| event.user_id == user));
        total += events.len();
    }
    assert_eq!(total, 51);
}
