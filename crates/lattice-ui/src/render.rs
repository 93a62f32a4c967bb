//! The tree -> HTML compiler.
//!
//! One exhaustive dispatch over the closed [`Node`] set; every presentation
//! decision lives here, centralized and auditable. The enum has no wildcard
//! arm, so a new vocabulary kind that is not handled fails to compile
//! instead of silently rendering nothing.
//!
//! Rendering is pure: no I/O, no ambient state, children in insertion
//! order, all text and attribute values escaped, styling emitted only as
//! CSS class names.

use crate::action::ServerAction;
use crate::escape;
use crate::node::{
    AttrList, ButtonNode, CheckboxNode, Direction, FormNode, HeadingNode, ListNode, MetricNode,
    Node, PanelNode, SectionNode, Tab, TabBarNode, TextFieldNode, TextNode,
};

/// Render a node and its subtree to an HTML fragment.
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    render_node(node, &mut out);
    out
}

fn render_node(node: &Node, out: &mut String) {
    match node {
        Node::Empty => {}
        Node::Text(text) => render_text(text, out),
        Node::Heading(heading) => render_heading(heading, out),
        Node::Section(section) => render_section(section, out),
        Node::Panel(panel) => render_panel(panel, out),
        Node::Form(form) => render_form(form, out),
        Node::TextField(field) => render_text_field(field, out),
        Node::Checkbox(checkbox) => render_checkbox(checkbox, out),
        Node::Button(button) => render_button(button, "button", out),
        Node::List(list) => render_list(list, out),
        Node::TabBar(tabs) => render_tab_bar(tabs, out),
        Node::Metric(metric) => render_metric(metric, out),
        Node::Fragment(children) => {
            for child in children {
                render_node(child, out);
            }
        }
    }
}

fn render_text(text: &TextNode, out: &mut String) {
    let mut classes = vec!["text"];
    if let Some(tone) = text.tone {
        classes.push(tone.css_class());
    }
    if let Some(emphasis) = text.emphasis {
        classes.push(emphasis.css_class());
    }
    open_tag(out, "p", &classes, &text.id, &text.attrs, &[]);
    out.push_str(&escape::text(&text.content));
    close_tag(out, "p");
}

fn render_heading(heading: &HeadingNode, out: &mut String) {
    let tag = heading.level.tag();
    open_tag(out, tag, &["heading"], &heading.id, &heading.attrs, &[]);
    out.push_str(&escape::text(&heading.content));
    close_tag(out, tag);
}

fn render_section(section: &SectionNode, out: &mut String) {
    let classes: &[&str] = match section.direction {
        Direction::Column => &["stack"],
        Direction::Row => &["stack", "stack--row"],
    };
    open_tag(out, "div", classes, &section.id, &section.attrs, &[]);
    for child in &section.children {
        render_node(child, out);
    }
    close_tag(out, "div");
}

fn render_panel(panel: &PanelNode, out: &mut String) {
    open_tag(out, "section", &["panel"], &panel.id, &panel.attrs, &[]);
    if !panel.header.is_empty() {
        open_tag(out, "header", &["panel__header"], &None, &[], &[]);
        for child in &panel.header {
            render_node(child, out);
        }
        close_tag(out, "header");
    }
    if !panel.body.is_empty() {
        open_tag(out, "div", &["panel__body"], &None, &[], &[]);
        for child in &panel.body {
            render_node(child, out);
        }
        close_tag(out, "div");
    }
    if !panel.footer.is_empty() {
        open_tag(out, "footer", &["panel__footer"], &None, &[], &[]);
        for child in &panel.footer {
            render_node(child, out);
        }
        close_tag(out, "footer");
    }
    close_tag(out, "section");
}

fn render_form(form: &FormNode, out: &mut String) {
    let action_attrs = form.action.as_ref().map(action_attrs).unwrap_or_default();
    open_tag(out, "form", &["form"], &form.id, &form.attrs, &action_attrs);
    for field in &form.fields {
        render_node(field, out);
    }
    if let Some(submit) = &form.submit {
        render_button(submit, "submit", out);
    }
    close_tag(out, "form");
}

fn render_text_field(field: &TextFieldNode, out: &mut String) {
    open_tag(out, "label", &["field"], &field.id, &field.attrs, &[]);
    if let Some(label) = &field.label {
        open_tag(out, "span", &["field__label"], &None, &[], &[]);
        out.push_str(&escape::text(label));
        close_tag(out, "span");
    }
    out.push_str("<input class=\"field__input\"");
    push_attr(out, "type", field.kind.input_type());
    push_attr(out, "name", &field.name);
    if !field.value.is_empty() {
        push_attr(out, "value", &field.value);
    }
    if let Some(placeholder) = &field.placeholder {
        push_attr(out, "placeholder", placeholder);
    }
    out.push('>');
    close_tag(out, "label");
}

fn render_checkbox(checkbox: &CheckboxNode, out: &mut String) {
    open_tag(out, "label", &["checkbox"], &checkbox.id, &checkbox.attrs, &[]);
    out.push_str("<input class=\"checkbox__input\" type=\"checkbox\"");
    push_attr(out, "name", &checkbox.name);
    if checkbox.checked {
        out.push_str(" checked");
    }
    if let Some(action) = &checkbox.action {
        for (name, value) in action_attrs(action) {
            push_attr(out, &name, &value);
        }
    }
    out.push('>');
    open_tag(out, "span", &["checkbox__label"], &None, &[], &[]);
    out.push_str(&escape::text(&checkbox.label));
    close_tag(out, "span");
    close_tag(out, "label");
}

fn render_button(button: &ButtonNode, button_type: &str, out: &mut String) {
    let classes = ["btn", button.purpose.css_class()];
    let action_attrs = button.action.as_ref().map(action_attrs).unwrap_or_default();
    out.push_str("<button");
    push_attr(out, "type", button_type);
    push_class_and_common(out, &classes, &button.id, &button.attrs, &action_attrs);
    out.push('>');
    out.push_str(&escape::text(&button.label));
    close_tag(out, "button");
}

fn render_list(list: &ListNode, out: &mut String) {
    open_tag(out, "ul", &["list"], &list.id, &list.attrs, &[]);
    for item in &list.items {
        open_tag(out, "li", &["list__item"], &item.id, &[], &[]);
        for child in &item.children {
            render_node(child, out);
        }
        close_tag(out, "li");
    }
    close_tag(out, "ul");
}

fn render_tab_bar(tabs: &TabBarNode, out: &mut String) {
    open_tag(out, "nav", &["tabs"], &tabs.id, &tabs.attrs, &[]);
    for tab in &tabs.tabs {
        render_tab(tab, out);
    }
    close_tag(out, "nav");
}

fn render_tab(tab: &Tab, out: &mut String) {
    let mut classes = vec!["tab"];
    if tab.active {
        classes.push("tab--active");
    }
    let action_attrs = tab.action.as_ref().map(action_attrs).unwrap_or_default();
    out.push_str("<button type=\"button\"");
    push_class_and_common(out, &classes, &None, &[], &action_attrs);
    out.push('>');
    out.push_str(&escape::text(&tab.label));
    close_tag(out, "button");
}

fn render_metric(metric: &MetricNode, out: &mut String) {
    let mut classes = vec!["metric"];
    if let Some(tone) = metric.tone {
        classes.push(tone.css_class());
    }
    open_tag(out, "div", &classes, &metric.id, &metric.attrs, &[]);
    open_tag(out, "span", &["metric__label"], &None, &[], &[]);
    out.push_str(&escape::text(&metric.label));
    close_tag(out, "span");
    open_tag(out, "span", &["metric__value"], &None, &[], &[]);
    out.push_str(&escape::text(&metric.value));
    close_tag(out, "span");
    close_tag(out, "div");
}

// --- attribute emission ---

fn action_attrs(action: &ServerAction) -> AttrList {
    let mut attrs = vec![(
        "data-action".to_string(),
        format!("{} {}", action.method.as_str(), action.path),
    )];
    if let Some(target) = &action.target {
        attrs.push(("data-target".to_string(), target.clone()));
    }
    attrs.push(("data-swap".to_string(), action.swap.as_str().to_string()));
    if let Some(vals) = &action.vals {
        // serde_json maps serialize with sorted keys, keeping output stable.
        attrs.push(("data-vals".to_string(), vals.to_string()));
    }
    attrs
}

fn open_tag(
    out: &mut String,
    tag: &str,
    classes: &[&str],
    id: &Option<String>,
    attrs: &[(String, String)],
    action_attrs: &[(String, String)],
) {
    out.push('<');
    out.push_str(tag);
    push_class_and_common(out, classes, id, attrs, action_attrs);
    out.push('>');
}

fn push_class_and_common(
    out: &mut String,
    classes: &[&str],
    id: &Option<String>,
    attrs: &[(String, String)],
    action_attrs: &[(String, String)],
) {
    if !classes.is_empty() {
        push_attr(out, "class", &classes.join(" "));
    }
    if let Some(id) = id {
        push_attr(out, "id", id);
    }
    for (name, value) in attrs {
        push_attr(out, name, value);
    }
    for (name, value) in action_attrs {
        push_attr(out, name, value);
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape::attr(value));
    out.push('"');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Swap;
    use crate::node::{
        button, checkbox, fragment, heading, list, list_item, metric, panel, row, section, tab,
        tab_bar, text, text_field,
    };
    use crate::style::{HeadingLevel, Purpose, Tone};
    use serde_json::json;

    #[test]
    fn empty_renders_nothing() {
        assert_eq!(render(&Node::Empty), "");
    }

    #[test]
    fn text_escapes_content() {
        let html = render(&text("<script>alert(1)</script>").into());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn heading_uses_level_tag() {
        let html = render(&heading(HeadingLevel::H1, "Todos").into());
        assert_eq!(html, "<h1 class=\"heading\">Todos</h1>");
    }

    #[test]
    fn section_children_keep_insertion_order() {
        let html = render(&section().child(text("first")).child(text("second")).into());
        let first = html.find("first").unwrap();
        let second = html.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn row_section_gets_modifier_class() {
        let html = render(&row().child(text("x")).into());
        assert!(html.starts_with("<div class=\"stack stack--row\">"));
    }

    #[test]
    fn panel_emits_only_populated_slots() {
        let html = render(&panel().child(text("body only")).into());
        assert!(html.contains("panel__body"));
        assert!(!html.contains("panel__header"));
        assert!(!html.contains("panel__footer"));
    }

    #[test]
    fn panel_slots_render_in_header_body_footer_order() {
        let html = render(
            &panel()
                .footer(metric("Done", "1"))
                .header(heading(HeadingLevel::H2, "Todos"))
                .child(text("item"))
                .into(),
        );
        let header = html.find("panel__header").unwrap();
        let body = html.find("panel__body").unwrap();
        let footer = html.find("panel__footer").unwrap();
        assert!(header < body && body < footer);
    }

    #[test]
    fn button_emits_purpose_class_and_action() {
        let html = render(
            &button("Delete")
                .purpose(Purpose::Danger)
                .action(
                    ServerAction::post("/todos/3/delete")
                        .target("#todo-list")
                        .swap(Swap::Outer)
                        .vals(json!({"id": 3})),
                )
                .into(),
        );
        assert!(html.contains("class=\"btn btn--danger\""));
        assert!(html.contains("data-action=\"POST /todos/3/delete\""));
        assert!(html.contains("data-target=\"#todo-list\""));
        assert!(html.contains("data-swap=\"outer\""));
        assert!(html.contains("data-vals=\"{&quot;id&quot;:3}\""));
    }

    #[test]
    fn checkbox_marks_checked_state() {
        let checked = render(&checkbox("done", "Buy milk").checked(true).into());
        let unchecked = render(&checkbox("done", "Buy milk").into());
        assert!(checked.contains(" checked"));
        assert!(!unchecked.contains(" checked"));
    }

    #[test]
    fn form_renders_fields_then_submit() {
        let html = render(
            &form_with_submit()
                .action(ServerAction::post("/login"))
                .into(),
        );
        assert!(html.contains("data-action=\"POST /login\""));
        let field = html.find("name=\"email\"").unwrap();
        let submit = html.find("type=\"submit\"").unwrap();
        assert!(field < submit);
    }

    fn form_with_submit() -> crate::node::FormNode {
        crate::node::form()
            .field(text_field("email").label("Email"))
            .submit(button("Sign in"))
    }

    #[test]
    fn text_field_omits_empty_value() {
        let html = render(&text_field("title").placeholder("What needs doing?").into());
        assert!(!html.contains("value="));
        assert!(html.contains("placeholder=\"What needs doing?\""));
    }

    #[test]
    fn list_items_carry_ids() {
        let html = render(
            &list()
                .item(list_item([text("a").into()]).id("todo-1"))
                .item(list_item([text("b").into()]))
                .into(),
        );
        assert!(html.contains("<li class=\"list__item\" id=\"todo-1\">"));
    }

    #[test]
    fn tab_bar_marks_active_tab() {
        let html = render(
            &tab_bar()
                .tab(tab("All").active(true))
                .tab(tab("Open").action(ServerAction::get("/todos?filter=open")))
                .into(),
        );
        assert!(html.contains("class=\"tab tab--active\""));
        assert!(html.contains("data-action=\"GET /todos?filter=open\""));
    }

    #[test]
    fn metric_renders_label_and_value_spans() {
        let html = render(&metric("Completion", "60%").tone(Tone::Success).into());
        assert!(html.contains("class=\"metric tone--success\""));
        assert!(html.contains("<span class=\"metric__label\">Completion</span>"));
        assert!(html.contains("<span class=\"metric__value\">60%</span>"));
    }

    #[test]
    fn fragment_splices_children_without_wrapper() {
        let html = render(&fragment([text("a").into(), text("b").into()]));
        assert!(html.starts_with("<p class=\"text\">a</p>"));
        assert!(html.ends_with("<p class=\"text\">b</p>"));
    }

    #[test]
    fn stamped_attrs_render_after_id() {
        let html = render(
            &Node::from(panel().child(text("x")))
                .with_id("v1")
                .with_attr("data-view", "TodoList")
                .with_attr("data-domain", "todos"),
        );
        assert!(html.contains("id=\"v1\" data-view=\"TodoList\" data-domain=\"todos\""));
    }

    #[test]
    fn rendering_is_deterministic() {
        let node: Node = panel()
            .header(heading(HeadingLevel::H2, "Todos"))
            .child(
                list().item(list_item([checkbox("done", "Buy milk").checked(true).into()])),
            )
            .footer(metric("Done", "1 of 1"))
            .into();
        assert_eq!(render(&node), render(&node));
    }

    #[test]
    fn no_inline_styles_are_emitted() {
        let node: Node = panel()
            .header(heading(HeadingLevel::H2, "T"))
            .child(button("Go").purpose(Purpose::Ghost))
            .footer(metric("m", "v").tone(Tone::Warning))
            .into();
        assert!(!render(&node).contains("style="));
    }
}
