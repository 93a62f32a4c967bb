//! Views of the todo application.
//!
//! Each view is a pure function from the request's data context to a node
//! tree. Interactive elements declare their server actions; which views get
//! refreshed after a mutation is decided entirely by the orchestrator.

use crate::domains::{TodoAnalyticsContext, TodoListContext};
use lattice_core::{ContextKey, DataContext, DataError};
use lattice_ui::{
    button, checkbox, form, heading, list, list_item, metric, panel, text, text_field, FieldKind,
    HeadingLevel, Node, Purpose, ServerAction, Tone,
};
use lattice_web::View;

pub struct TodoListView;

impl View for TodoListView {
    fn id(&self) -> &str {
        "todo-list"
    }

    fn type_name(&self) -> &'static str {
        "TodoList"
    }

    fn dependency(&self) -> Option<ContextKey> {
        Some(ContextKey::of::<TodoListContext>())
    }

    fn render(&self, data: &DataContext) -> Result<Node, DataError> {
        let ctx = data.get::<TodoListContext>()?;

        let items = ctx.todos.iter().map(|todo| {
            list_item([
                checkbox("done", &todo.title)
                    .checked(todo.done)
                    .action(ServerAction::post(format!("/todos/{}/toggle", todo.id)))
                    .into(),
                button("Remove")
                    .purpose(Purpose::Ghost)
                    .action(ServerAction::post(format!("/todos/{}/delete", todo.id)))
                    .into(),
            ])
            .id(format!("todo-{}", todo.id))
        });

        let body: Node = if ctx.todos.is_empty() {
            text("Nothing to do.").muted().into()
        } else {
            list().items(items).into()
        };

        Ok(panel()
            .header(heading(HeadingLevel::H2, "Todos"))
            .child(body)
            .footer(metric(
                "Done",
                format!("{} of {}", ctx.completed, ctx.total),
            ))
            .into())
    }
}

pub struct TodoAnalyticsView;

impl View for TodoAnalyticsView {
    fn id(&self) -> &str {
        "todo-analytics"
    }

    fn type_name(&self) -> &'static str {
        "TodoAnalytics"
    }

    fn dependency(&self) -> Option<ContextKey> {
        Some(ContextKey::of::<TodoAnalyticsContext>())
    }

    fn render(&self, data: &DataContext) -> Result<Node, DataError> {
        let ctx = data.get::<TodoAnalyticsContext>()?;
        let tone = if ctx.completion_percent >= 50 {
            Tone::Success
        } else {
            Tone::Warning
        };

        Ok(panel()
            .header(heading(HeadingLevel::H3, "Progress"))
            .child(metric("Total", ctx.total.to_string()))
            .child(metric("Completed", ctx.completed.to_string()))
            .child(metric("Completion", format!("{}%", ctx.completion_percent)).tone(tone))
            .into())
    }
}

/// Static view: depends on nothing, never refreshed by mutations.
pub struct NewTodoForm;

impl View for NewTodoForm {
    fn id(&self) -> &str {
        "new-todo"
    }

    fn type_name(&self) -> &'static str {
        "NewTodoForm"
    }

    fn render(&self, _data: &DataContext) -> Result<Node, DataError> {
        Ok(form()
            .field(text_field("title").placeholder("What needs doing?"))
            .submit(button("Add").purpose(Purpose::Primary))
            .action(ServerAction::post("/todos"))
            .into())
    }
}

/// Static view: the login form. Authentication itself lives outside the
/// framework.
pub struct LoginFormView;

impl View for LoginFormView {
    fn id(&self) -> &str {
        "login-form"
    }

    fn type_name(&self) -> &'static str {
        "LoginForm"
    }

    fn render(&self, _data: &DataContext) -> Result<Node, DataError> {
        Ok(panel()
            .header(heading(HeadingLevel::H2, "Sign in"))
            .child(
                form()
                    .field(
                        text_field("email")
                            .label("Email")
                            .kind(FieldKind::Email)
                            .placeholder("you@example.com"),
                    )
                    .field(text_field("password").label("Password").kind(FieldKind::Password))
                    .submit(button("Sign in").purpose(Purpose::Primary))
                    .action(ServerAction::post("/login")),
            )
            .into())
    }
}
