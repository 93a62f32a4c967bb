//! Declarative view vocabulary and HTML renderer.
//!
//! A closed set of immutable UI primitives, composed as value trees and
//! compiled to HTML by a single exhaustive dispatch. Key concepts:
//!
//! - **Closed vocabulary**: every primitive is a [`Node`] variant; the
//!   renderer matches all of them with no fallback, so a missed kind is a
//!   compile error rather than silent output.
//! - **Slot capabilities**: containers declare what their slots accept via
//!   marker traits; a footer cannot hold a text field by construction.
//! - **Semantic styling**: visual decisions are CSS class names derived
//!   from enums ([`Purpose`], [`Tone`], [`Emphasis`]); no inline styles.
//! - **Server actions**: interactive nodes carry declarative
//!   [`ServerAction`] payloads emitted as `data-*` attributes for a thin
//!   client behavior layer; the renderer performs no I/O.
//!
//! ## Example
//!
//! ```rust
//! use lattice_ui::{button, heading, panel, render, HeadingLevel, Node, Purpose, ServerAction};
//!
//! let tree: Node = panel()
//!     .header(heading(HeadingLevel::H2, "Todos"))
//!     .child(button("Add").purpose(Purpose::Primary).action(ServerAction::post("/todos")))
//!     .into();
//! let html = render(&tree);
//! assert!(html.starts_with("<section class=\"panel\">"));
//! ```

mod action;
mod escape;
mod node;
mod render;
mod slot;
mod style;

pub use action::{Method, ServerAction, Swap};
pub use escape::{attr as escape_attr, text as escape_text};
pub use node::{
    button, checkbox, form, fragment, heading, list, list_item, metric, panel, row, section, tab,
    tab_bar, text, text_field, AttrList, ButtonNode, CheckboxNode, Direction, FormNode,
    HeadingNode, ListItem, ListNode, MetricNode, Node, PanelNode, SectionNode, Tab, TabBarNode,
    TextFieldNode, TextNode,
};
pub use render::render;
pub use slot::{FieldContent, FlowContent, FooterContent, HeaderContent};
pub use style::{Emphasis, FieldKind, HeadingLevel, Purpose, Tone};
