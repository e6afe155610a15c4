use anyhow;

use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use serde::{Deserialize, Serialize};

// Small key-value port over the browser's local storage.  The stores are
// generic over it so their logic runs against an in-memory substitute in
// unit tests, where no window exists.
pub trait KeyValueStore {
    fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: for<'a> Deserialize<'a>;

    fn set<T>(&self, key: &str, value: T)
    where
        T: Serialize;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: for<'a> Deserialize<'a>,
    {
        LocalStorage::get(key).map_err(|err| {
            console_error!(format!("Failed to fetch local storage {key}: {err}"));
            anyhow::Error::msg("Local storage failure, see console log")
        })
    }

    fn set<T>(&self, key: &str, value: T)
    where
        T: Serialize,
    {
        LocalStorage::set(key, value)
            .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
    }
}

#[cfg(test)]
pub mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use serde::{Deserialize, Serialize};

    use super::KeyValueStore;

    // clones share the same cells so tests can inspect what a store wrote
    #[derive(Clone, Debug, Default)]
    pub struct MemoryStore {
        cells: Rc<RefCell<HashMap<String, String>>>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn raw_get(&self, key: &str) -> Option<String> {
            self.cells.borrow().get(key).cloned()
        }

        pub fn raw_set(&self, key: &str, value: &str) {
            self.cells
                .borrow_mut()
                .insert(key.to_owned(), value.to_owned());
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get<T>(&self, key: &str) -> anyhow::Result<T>
        where
            T: for<'a> Deserialize<'a>,
        {
            let cells = self.cells.borrow();
            let raw = cells
                .get(key)
                .ok_or_else(|| anyhow::Error::msg(format!("no value for {key}")))?;

            Ok(serde_json::from_str(raw)?)
        }

        fn set<T>(&self, key: &str, value: T)
        where
            T: Serialize,
        {
            if let Ok(raw) = serde_json::to_string(&value) {
                self.cells.borrow_mut().insert(key.to_owned(), raw);
            }
        }
    }
}
