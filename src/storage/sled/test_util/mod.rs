#![allow(dead_code)]
use std::sync::Arc;

use crate::storage::{
    sled::{BINCODE_CONFIG, SLED_TODO_TREE},
    FlushStorage, NewTodo, Todo, TodoStorage,
};
use sled::Config;

use super::SledStorage;

pub struct TestStorageBuilder {
    titles: Vec<String>,
    todo_storage: Arc<dyn TodoStorage>,
    flush_storage: Arc<dyn FlushStorage>,
}

impl TestStorageBuilder {
    pub fn new() -> Self {
        let config = Config::new().temporary(true);
        let db = config.open().unwrap();
        let sled_storage = Arc::new(SledStorage {
            todo_tree: db.open_tree(SLED_TODO_TREE).unwrap(),
            bincode_config: BINCODE_CONFIG,
        });
        Self {
            titles: Vec::new(),
            todo_storage: sled_storage.clone() as Arc<dyn TodoStorage>,
            flush_storage: sled_storage as Arc<dyn FlushStorage>,
        }
    }

    pub fn with_todos(mut self, count: usize) -> Self {
        self.titles = (0..count).map(|i| format!("todo {}", i)).collect();
        self
    }

    pub async fn build_todo(&self) -> Arc<dyn TodoStorage> {
        for title in &self.titles {
            self.todo_storage.save(NewTodo::new(title)).await.unwrap();
        }

        self.todo_storage.clone()
    }

    pub async fn build_flush(&self) -> Arc<dyn FlushStorage> {
        self.flush_storage.clone()
    }

    pub async fn seed(&self, title: &str) -> Todo {
        self.todo_storage.save(NewTodo::new(title)).await.unwrap()
    }
}

impl Default for TestStorageBuilder {
    fn default() -> Self {
        Self::new()
    }
}
