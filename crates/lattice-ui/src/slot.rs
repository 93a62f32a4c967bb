//! Slot-capability markers.
//!
//! Each container slot accepts only node kinds carrying the matching marker.
//! The markers are implemented per kind, so placing a non-capable kind in a
//! slot is a type error at the call site, not a runtime check in the
//! renderer.

use crate::node::{
    ButtonNode, CheckboxNode, FormNode, HeadingNode, ListNode, MetricNode, Node, PanelNode,
    SectionNode, TabBarNode, TextFieldNode, TextNode,
};

/// General block content: what a section or a panel body accepts.
pub trait FlowContent: Into<Node> {}

/// What a panel header accepts.
pub trait HeaderContent: Into<Node> {}

/// What a panel footer accepts.
pub trait FooterContent: Into<Node> {}

/// What a form accepts as a field.
pub trait FieldContent: Into<Node> {}

impl FlowContent for TextNode {}
impl FlowContent for HeadingNode {}
impl FlowContent for SectionNode {}
impl FlowContent for PanelNode {}
impl FlowContent for FormNode {}
impl FlowContent for TextFieldNode {}
impl FlowContent for CheckboxNode {}
impl FlowContent for ButtonNode {}
impl FlowContent for ListNode {}
impl FlowContent for TabBarNode {}
impl FlowContent for MetricNode {}
// Pre-assembled trees (fragments included) may be spliced into flow
// positions; the constrained slots stay strict.
impl FlowContent for Node {}

impl HeaderContent for HeadingNode {}
impl HeaderContent for TextNode {}
impl HeaderContent for TabBarNode {}

impl FooterContent for TextNode {}
impl FooterContent for ButtonNode {}
impl FooterContent for MetricNode {}

impl FieldContent for TextFieldNode {}
impl FieldContent for CheckboxNode {}

#[cfg(test)]
mod tests {
    use crate::node::{checkbox, heading, metric, panel, text, text_field};
    use crate::style::HeadingLevel;

    // The interesting property here is what does NOT compile:
    //
    //   panel().footer(text_field("email"))   // TextFieldNode: !FooterContent
    //   panel().header(checkbox("a", "b"))    // CheckboxNode: !HeaderContent
    //   form().field(heading(H2, "nope"))     // HeadingNode: !FieldContent
    //
    // Below only demonstrates that capable kinds are accepted.

    #[test]
    fn capable_kinds_fill_their_slots() {
        let p = panel()
            .header(heading(HeadingLevel::H3, "Account"))
            .child(text_field("email"))
            .child(checkbox("remember", "Remember me"))
            .footer(metric("Status", "ok"))
            .footer(text("fine print"));
        assert_eq!(p.header.len(), 1);
        assert_eq!(p.body.len(), 2);
        assert_eq!(p.footer.len(), 2);
    }
}
