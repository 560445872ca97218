use mockall::Sequence;
use bookboard_core::{
    errors::BoardError,
    models::location::default_locations,
    persistence::RESERVATIONS_KEY,
    store::ReservationStore,
};
use bookboard_storage::mock::MockKvStore;

fn defaults_json() -> String {
    serde_json::to_string(&default_locations()).unwrap()
}

#[test_log::test]
fn test_read_failure_falls_back_to_defaults() {
    let mut storage = MockKvStore::new();
    storage
        .expect_get()
        .times(1)
        .returning(|_| Err(BoardError::Storage(eyre::eyre!("device unavailable"))));
    storage.expect_set().times(1).returning(|key, value| {
        assert_eq!(key, RESERVATIONS_KEY);
        assert!(value.contains("CN Tower"));
        Ok(())
    });

    let store = ReservationStore::initialize(storage);

    assert_eq!(&store.locations()[..], &default_locations()[..]);
}

#[test]
fn test_every_mutation_writes_once() {
    let mut storage = MockKvStore::new();
    let mut seq = Sequence::new();
    storage
        .expect_get()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(Some(defaults_json())));
    // Start-up write, create, toggle
    storage
        .expect_set()
        .times(3)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(()));

    let mut store = ReservationStore::initialize(storage);
    store.create_location("Paris").unwrap();
    store.create_location("Paris").unwrap();
    store.toggle_slot("Paris", "9am-12pm").unwrap();
}

#[test]
fn test_write_failure_is_reported_and_not_committed() {
    let mut storage = MockKvStore::new();
    storage.expect_get().returning(|_| Ok(None));
    let mut writes = 0;
    storage.expect_set().returning(move |_, _| {
        writes += 1;
        if writes == 1 {
            Ok(())
        } else {
            Err(BoardError::Storage(eyre::eyre!("quota exceeded")))
        }
    });

    let mut store = ReservationStore::initialize(storage);
    let result = store.toggle_slot("CN Tower", "9am-12pm");

    let err = result.unwrap_err();
    assert!(err.to_string().contains("quota exceeded"));
    assert_eq!(store.reservations(true).count(), 0);
}

#[test]
fn test_reset_clears_key_before_writing_defaults() {
    let mut storage = MockKvStore::new();
    let mut seq = Sequence::new();
    storage
        .expect_get()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(Some("[]".to_string())));
    storage
        .expect_set()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, value| {
            assert_eq!(value, "[]");
            Ok(())
        });
    storage
        .expect_remove()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|key| {
            assert_eq!(key, RESERVATIONS_KEY);
            Ok(())
        });
    storage
        .expect_set()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, value| {
            assert!(value.contains("Grand Canyon"));
            Ok(())
        });

    let mut store = ReservationStore::initialize(storage);
    assert!(store.locations().is_empty());

    let snapshot = store.reset().unwrap();
    assert_eq!(snapshot.len(), 2);
}
