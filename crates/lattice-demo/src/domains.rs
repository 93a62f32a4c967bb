//! Domains, contexts and providers of the todo application.
//!
//! Each domain is defined once as a `const` and referenced from its
//! provider and from every interaction that mutates it; views pick the
//! domain up through their context-type dependency.

use crate::store::{Todo, TodoStore};
use async_trait::async_trait;
use lattice_core::{Domain, DomainContext, DomainProvider, UserId};
use std::sync::Arc;

pub const TODOS: Domain = Domain::new("todos");
pub const TODO_ANALYTICS: Domain = Domain::new("todoAnalytics");

/// View-model for the todo list, counts included.
pub struct TodoListContext {
    pub todos: Vec<Todo>,
    pub total: usize,
    pub completed: usize,
}

impl DomainContext for TodoListContext {
    fn context_name() -> &'static str {
        "todo list"
    }
}

/// Independent analytics summary over the same underlying store.
pub struct TodoAnalyticsContext {
    pub total: usize,
    pub completed: usize,
    pub completion_percent: u32,
}

impl DomainContext for TodoAnalyticsContext {
    fn context_name() -> &'static str {
        "todo analytics"
    }
}

pub struct TodoListProvider {
    store: Arc<TodoStore>,
}

impl TodoListProvider {
    pub fn new(store: Arc<TodoStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DomainProvider for TodoListProvider {
    type Context = TodoListContext;

    fn domain(&self) -> Domain {
        TODOS
    }

    async fn fetch(&self, user: &UserId) -> anyhow::Result<TodoListContext> {
        let todos = self.store.todos_for(*user);
        let total = todos.len();
        let completed = todos.iter().filter(|t| t.done).count();
        Ok(TodoListContext {
            todos,
            total,
            completed,
        })
    }
}

pub struct TodoAnalyticsProvider {
    store: Arc<TodoStore>,
}

impl TodoAnalyticsProvider {
    pub fn new(store: Arc<TodoStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DomainProvider for TodoAnalyticsProvider {
    type Context = TodoAnalyticsContext;

    fn domain(&self) -> Domain {
        TODO_ANALYTICS
    }

    async fn fetch(&self, user: &UserId) -> anyhow::Result<TodoAnalyticsContext> {
        let todos = self.store.todos_for(*user);
        let total = todos.len();
        let completed = todos.iter().filter(|t| t.done).count();
        let completion_percent = if total == 0 {
            0
        } else {
            (completed * 100 / total) as u32
        };
        Ok(TodoAnalyticsContext {
            total,
            completed,
            completion_percent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: UserId = UserId::new(1);

    #[tokio::test]
    async fn todo_list_context_counts_completions() {
        let store = Arc::new(TodoStore::with_demo_data(USER));
        let ctx = TodoListProvider::new(store).fetch(&USER).await.unwrap();
        assert_eq!(ctx.total, 3);
        assert_eq!(ctx.completed, 1);
        assert_eq!(ctx.todos.len(), 3);
    }

    #[tokio::test]
    async fn analytics_rounds_completion_down() {
        let store = Arc::new(TodoStore::with_demo_data(USER));
        let ctx = TodoAnalyticsProvider::new(store)
            .fetch(&USER)
            .await
            .unwrap();
        assert_eq!(ctx.completion_percent, 33);
    }

    #[tokio::test]
    async fn analytics_handles_empty_store() {
        let store = Arc::new(TodoStore::new());
        let ctx = TodoAnalyticsProvider::new(store)
            .fetch(&USER)
            .await
            .unwrap();
        assert_eq!(ctx.total, 0);
        assert_eq!(ctx.completion_percent, 0);
    }
}
