//! In-memory todo storage.
//!
//! Stands in for the persistence layer, which is outside the framework's
//! scope: providers only ever read it, interactions only ever write it.

use chrono::{DateTime, Utc};
use lattice_core::UserId;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

#[derive(Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

pub struct TodoStore {
    todos: RwLock<HashMap<UserId, Vec<Todo>>>,
    next_id: AtomicI64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            todos: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// A store pre-seeded with a few todos for the given user.
    pub fn with_demo_data(user: UserId) -> Self {
        let store = Self::new();
        store.add(user, "Water the plants".to_string());
        store.add(user, "Read the mail".to_string());
        let done = store.add(user, "Take out the trash".to_string());
        store.toggle(user, done.id);
        store
    }

    pub fn todos_for(&self, user: UserId) -> Vec<Todo> {
        self.todos.read().get(&user).cloned().unwrap_or_default()
    }

    pub fn add(&self, user: UserId, title: String) -> Todo {
        let todo = Todo {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title,
            done: false,
            created_at: Utc::now(),
        };
        self.todos
            .write()
            .entry(user)
            .or_default()
            .push(todo.clone());
        todo
    }

    /// Flip a todo's completion state. Returns false when the id does not
    /// belong to this user.
    pub fn toggle(&self, user: UserId, id: i64) -> bool {
        let mut todos = self.todos.write();
        match todos
            .get_mut(&user)
            .and_then(|list| list.iter_mut().find(|t| t.id == id))
        {
            Some(todo) => {
                todo.done = !todo.done;
                true
            }
            None => false,
        }
    }

    /// Remove a todo. Returns false when the id does not belong to this
    /// user.
    pub fn remove(&self, user: UserId, id: i64) -> bool {
        let mut todos = self.todos.write();
        match todos.get_mut(&user) {
            Some(list) => {
                let before = list.len();
                list.retain(|t| t.id != id);
                list.len() != before
            }
            None => false,
        }
    }
}
