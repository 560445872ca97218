use bookboard_core::{errors::BoardResult, persistence::KeyValueStore};
use mockall::mock;

// Mock key-value store for exercising failure paths
mock! {
    pub KvStore {}

    impl KeyValueStore for KvStore {
        fn get(&self, key: &str) -> BoardResult<Option<String>>;
        fn set(&mut self, key: &str, value: &str) -> BoardResult<()>;
        fn remove(&mut self, key: &str) -> BoardResult<()>;
    }
}
