//! The closed vocabulary of view nodes.
//!
//! Every UI primitive is one variant of [`Node`], an immutable value object
//! built through free constructor functions and consuming builder methods.
//! "Mutation" always produces a modified copy; trees are created fresh per
//! render and discarded once HTML has been produced.
//!
//! Container slots constrain what they accept through the marker traits in
//! [`crate::slot`]: a panel footer only takes footer-capable kinds, a form
//! only takes field-capable kinds. Violations fail to compile.

use crate::action::ServerAction;
use crate::style::{Emphasis, FieldKind, HeadingLevel, Purpose, Tone};

/// Extra attributes stamped onto an element before serialization.
///
/// Insertion order is emission order.
pub type AttrList = Vec<(String, String)>;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    #[default]
    Empty,
    Text(TextNode),
    Heading(HeadingNode),
    Section(SectionNode),
    Panel(PanelNode),
    Form(FormNode),
    TextField(TextFieldNode),
    Checkbox(CheckboxNode),
    Button(ButtonNode),
    List(ListNode),
    TabBar(TabBarNode),
    Metric(MetricNode),
    Fragment(Vec<Node>),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextNode {
    pub content: String,
    pub tone: Option<Tone>,
    pub emphasis: Option<Emphasis>,
    pub id: Option<String>,
    pub attrs: AttrList,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeadingNode {
    pub level: HeadingLevel,
    pub content: String,
    pub id: Option<String>,
    pub attrs: AttrList,
}

/// Layout direction for a [`SectionNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Column,
    Row,
}

/// Generic block container. Children render in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionNode {
    pub children: Vec<Node>,
    pub direction: Direction,
    pub id: Option<String>,
    pub attrs: AttrList,
}

/// A titled container with header/body/footer slots.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelNode {
    pub header: Vec<Node>,
    pub body: Vec<Node>,
    pub footer: Vec<Node>,
    pub id: Option<String>,
    pub attrs: AttrList,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormNode {
    pub fields: Vec<Node>,
    pub submit: Option<ButtonNode>,
    pub action: Option<ServerAction>,
    pub id: Option<String>,
    pub attrs: AttrList,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextFieldNode {
    pub name: String,
    pub label: Option<String>,
    pub value: String,
    pub placeholder: Option<String>,
    pub kind: FieldKind,
    pub id: Option<String>,
    pub attrs: AttrList,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckboxNode {
    pub name: String,
    pub label: String,
    pub checked: bool,
    pub action: Option<ServerAction>,
    pub id: Option<String>,
    pub attrs: AttrList,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ButtonNode {
    pub label: String,
    pub purpose: Purpose,
    pub action: Option<ServerAction>,
    pub id: Option<String>,
    pub attrs: AttrList,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListNode {
    pub items: Vec<ListItem>,
    pub id: Option<String>,
    pub attrs: AttrList,
}

/// One entry of a [`ListNode`]. Not a `Node` variant: items exist only
/// inside a list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListItem {
    pub children: Vec<Node>,
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabBarNode {
    pub tabs: Vec<Tab>,
    pub id: Option<String>,
    pub attrs: AttrList,
}

/// One entry of a [`TabBarNode`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tab {
    pub label: String,
    pub active: bool,
    pub action: Option<ServerAction>,
}

/// A labelled figure, e.g. "Completed: 3 of 5".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricNode {
    pub label: String,
    pub value: String,
    pub tone: Option<Tone>,
    pub id: Option<String>,
    pub attrs: AttrList,
}

// --- free constructors ---

pub fn text(content: impl Into<String>) -> TextNode {
    TextNode {
        content: content.into(),
        ..Default::default()
    }
}

pub fn heading(level: HeadingLevel, content: impl Into<String>) -> HeadingNode {
    HeadingNode {
        level,
        content: content.into(),
        id: None,
        attrs: AttrList::new(),
    }
}

pub fn section() -> SectionNode {
    SectionNode::default()
}

pub fn row() -> SectionNode {
    SectionNode {
        direction: Direction::Row,
        ..Default::default()
    }
}

pub fn panel() -> PanelNode {
    PanelNode::default()
}

pub fn form() -> FormNode {
    FormNode::default()
}

pub fn text_field(name: impl Into<String>) -> TextFieldNode {
    TextFieldNode {
        name: name.into(),
        ..Default::default()
    }
}

pub fn checkbox(name: impl Into<String>, label: impl Into<String>) -> CheckboxNode {
    CheckboxNode {
        name: name.into(),
        label: label.into(),
        ..Default::default()
    }
}

pub fn button(label: impl Into<String>) -> ButtonNode {
    ButtonNode {
        label: label.into(),
        ..Default::default()
    }
}

pub fn list() -> ListNode {
    ListNode::default()
}

pub fn list_item(children: impl IntoIterator<Item = Node>) -> ListItem {
    ListItem {
        children: children.into_iter().collect(),
        id: None,
    }
}

pub fn tab_bar() -> TabBarNode {
    TabBarNode::default()
}

pub fn tab(label: impl Into<String>) -> Tab {
    Tab {
        label: label.into(),
        ..Default::default()
    }
}

pub fn metric(label: impl Into<String>, value: impl Into<String>) -> MetricNode {
    MetricNode {
        label: label.into(),
        value: value.into(),
        ..Default::default()
    }
}

pub fn fragment(children: impl IntoIterator<Item = Node>) -> Node {
    Node::Fragment(children.into_iter().collect())
}

// --- builder methods on the kinds ---

impl TextNode {
    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    pub fn emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = Some(emphasis);
        self
    }

    pub fn muted(self) -> Self {
        self.emphasis(Emphasis::Muted)
    }
}

impl SectionNode {
    pub fn child(mut self, child: impl crate::slot::FlowContent) -> Self {
        self.children.push(child.into());
        self
    }
}

impl PanelNode {
    pub fn header(mut self, child: impl crate::slot::HeaderContent) -> Self {
        self.header.push(child.into());
        self
    }

    pub fn child(mut self, child: impl crate::slot::FlowContent) -> Self {
        self.body.push(child.into());
        self
    }

    pub fn footer(mut self, child: impl crate::slot::FooterContent) -> Self {
        self.footer.push(child.into());
        self
    }
}

impl FormNode {
    pub fn field(mut self, child: impl crate::slot::FieldContent) -> Self {
        self.fields.push(child.into());
        self
    }

    pub fn submit(mut self, button: ButtonNode) -> Self {
        self.submit = Some(button);
        self
    }

    pub fn action(mut self, action: ServerAction) -> Self {
        self.action = Some(action);
        self
    }
}

impl TextFieldNode {
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }
}

impl CheckboxNode {
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn action(mut self, action: ServerAction) -> Self {
        self.action = Some(action);
        self
    }
}

impl ButtonNode {
    pub fn purpose(mut self, purpose: Purpose) -> Self {
        self.purpose = purpose;
        self
    }

    pub fn action(mut self, action: ServerAction) -> Self {
        self.action = Some(action);
        self
    }
}

impl ListNode {
    pub fn item(mut self, item: ListItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = ListItem>) -> Self {
        self.items.extend(items);
        self
    }
}

impl ListItem {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl TabBarNode {
    pub fn tab(mut self, tab: Tab) -> Self {
        self.tabs.push(tab);
        self
    }
}

impl Tab {
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn action(mut self, action: ServerAction) -> Self {
        self.action = Some(action);
        self
    }
}

impl MetricNode {
    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }
}

// --- conversions into Node ---

macro_rules! impl_into_node {
    ($($kind:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$kind> for Node {
                fn from(value: $kind) -> Self {
                    Node::$variant(value)
                }
            }
        )*
    };
}

impl_into_node! {
    TextNode => Text,
    HeadingNode => Heading,
    SectionNode => Section,
    PanelNode => Panel,
    FormNode => Form,
    TextFieldNode => TextField,
    CheckboxNode => Checkbox,
    ButtonNode => Button,
    ListNode => List,
    TabBarNode => TabBar,
    MetricNode => Metric,
}

impl Node {
    /// Set the DOM id on the node's root element. Variants without an
    /// element of their own (fragments, empty) are wrapped in a section
    /// first so the id has something to attach to.
    pub fn with_id(self, id: impl Into<String>) -> Self {
        let id = id.into();
        match self {
            Node::Text(mut n) => {
                n.id = Some(id);
                Node::Text(n)
            }
            Node::Heading(mut n) => {
                n.id = Some(id);
                Node::Heading(n)
            }
            Node::Section(mut n) => {
                n.id = Some(id);
                Node::Section(n)
            }
            Node::Panel(mut n) => {
                n.id = Some(id);
                Node::Panel(n)
            }
            Node::Form(mut n) => {
                n.id = Some(id);
                Node::Form(n)
            }
            Node::TextField(mut n) => {
                n.id = Some(id);
                Node::TextField(n)
            }
            Node::Checkbox(mut n) => {
                n.id = Some(id);
                Node::Checkbox(n)
            }
            Node::Button(mut n) => {
                n.id = Some(id);
                Node::Button(n)
            }
            Node::List(mut n) => {
                n.id = Some(id);
                Node::List(n)
            }
            Node::TabBar(mut n) => {
                n.id = Some(id);
                Node::TabBar(n)
            }
            Node::Metric(mut n) => {
                n.id = Some(id);
                Node::Metric(n)
            }
            other => Node::Section(SectionNode {
                children: vec![other],
                id: Some(id),
                ..Default::default()
            }),
        }
    }

    /// Append an attribute to the node's root element before serialization.
    /// Wraps element-less variants in a section, like [`Node::with_id`].
    pub fn with_attr(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let pair = (name.into(), value.into());
        match self {
            Node::Text(mut n) => {
                n.attrs.push(pair);
                Node::Text(n)
            }
            Node::Heading(mut n) => {
                n.attrs.push(pair);
                Node::Heading(n)
            }
            Node::Section(mut n) => {
                n.attrs.push(pair);
                Node::Section(n)
            }
            Node::Panel(mut n) => {
                n.attrs.push(pair);
                Node::Panel(n)
            }
            Node::Form(mut n) => {
                n.attrs.push(pair);
                Node::Form(n)
            }
            Node::TextField(mut n) => {
                n.attrs.push(pair);
                Node::TextField(n)
            }
            Node::Checkbox(mut n) => {
                n.attrs.push(pair);
                Node::Checkbox(n)
            }
            Node::Button(mut n) => {
                n.attrs.push(pair);
                Node::Button(n)
            }
            Node::List(mut n) => {
                n.attrs.push(pair);
                Node::List(n)
            }
            Node::TabBar(mut n) => {
                n.attrs.push(pair);
                Node::TabBar(n)
            }
            Node::Metric(mut n) => {
                n.attrs.push(pair);
                Node::Metric(n)
            }
            other => Node::Section(SectionNode {
                children: vec![other],
                attrs: vec![pair],
                ..Default::default()
            }),
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::HeadingLevel;

    #[test]
    fn builders_produce_modified_copies() {
        let base = button("Save");
        let primary = base.clone().purpose(Purpose::Primary);
        let danger = base.clone().purpose(Purpose::Danger);
        assert_ne!(primary, danger);
        assert_eq!(base.purpose, Purpose::Primary); // default untouched
    }

    #[test]
    fn with_id_attaches_to_element_variants() {
        let node = Node::from(panel()).with_id("todo-list");
        match node {
            Node::Panel(p) => assert_eq!(p.id.as_deref(), Some("todo-list")),
            other => panic!("expected panel, got {other:?}"),
        }
    }

    #[test]
    fn with_id_wraps_fragments_in_a_section() {
        let node = fragment([text("a").into(), text("b").into()]).with_id("frag");
        match node {
            Node::Section(s) => {
                assert_eq!(s.id.as_deref(), Some("frag"));
                assert_eq!(s.children.len(), 1);
            }
            other => panic!("expected section wrapper, got {other:?}"),
        }
    }

    #[test]
    fn with_attr_preserves_insertion_order() {
        let node = Node::from(section())
            .with_attr("data-view", "TodoList")
            .with_attr("data-domain", "todos");
        match node {
            Node::Section(s) => {
                assert_eq!(s.attrs[0].0, "data-view");
                assert_eq!(s.attrs[1].0, "data-domain");
            }
            other => panic!("expected section, got {other:?}"),
        }
    }

    #[test]
    fn panel_slots_collect_in_order() {
        let p = panel()
            .header(heading(HeadingLevel::H2, "Todos"))
            .child(text("first"))
            .child(text("second"))
            .footer(metric("Done", "3 of 5"));
        assert_eq!(p.header.len(), 1);
        assert_eq!(p.body.len(), 2);
        assert_eq!(p.footer.len(), 1);
    }
}
