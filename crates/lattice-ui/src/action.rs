//! Declarative "act on the server" payloads.
//!
//! Interactive nodes (buttons, forms, checkboxes, tabs) carry a
//! [`ServerAction`] describing the request a thin client-side behavior layer
//! should issue and how to apply the response. The renderer serializes the
//! action to `data-action`, `data-target`, `data-swap` and `data-vals`
//! attributes; it never performs I/O itself.

use serde_json::Value;

/// HTTP method the client script should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    Get,
    #[default]
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// How the response fragment replaces the target element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Swap {
    /// Replace the target element itself.
    #[default]
    Outer,
    /// Replace the target's children.
    Inner,
    /// Append to the target's children.
    Append,
    /// Remove the target element; the response body is ignored.
    Delete,
}

impl Swap {
    pub fn as_str(&self) -> &'static str {
        match self {
            Swap::Outer => "outer",
            Swap::Inner => "inner",
            Swap::Append => "append",
            Swap::Delete => "delete",
        }
    }
}

/// A declarative server interaction attached to an interactive node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServerAction {
    pub method: Method,
    pub path: String,
    /// CSS selector of the main swap target. When absent the interactive
    /// element itself is the target.
    pub target: Option<String>,
    pub swap: Swap,
    /// JSON payload injected into the request body alongside form values.
    pub vals: Option<Value>,
}

impl ServerAction {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn target(mut self, selector: impl Into<String>) -> Self {
        self.target = Some(selector.into());
        self
    }

    pub fn swap(mut self, swap: Swap) -> Self {
        self.swap = swap;
        self
    }

    pub fn vals(mut self, vals: Value) -> Self {
        self.vals = Some(vals);
        self
    }
}
