//! Semantic styling enums.
//!
//! All visual decisions are expressed as CSS class names derived from these
//! enums. The renderer never emits inline styles, so the entire look lives
//! in an external stylesheet that can be swapped without touching views.

/// What a button (or tab) is for. Maps to `btn--*` modifier classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Purpose {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl Purpose {
    pub fn css_class(&self) -> &'static str {
        match self {
            Purpose::Primary => "btn--primary",
            Purpose::Secondary => "btn--secondary",
            Purpose::Danger => "btn--danger",
            Purpose::Ghost => "btn--ghost",
        }
    }
}

/// Emotional register of a piece of text or a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Danger,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Info => "tone--info",
            Tone::Success => "tone--success",
            Tone::Warning => "tone--warning",
            Tone::Danger => "tone--danger",
        }
    }
}

/// Visual weight of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Strong,
    Muted,
}

impl Emphasis {
    pub fn css_class(&self) -> &'static str {
        match self {
            Emphasis::Strong => "em--strong",
            Emphasis::Muted => "em--muted",
        }
    }
}

/// Heading levels. The vocabulary stops at `h4`; deeper nesting is a sign
/// the view should be split instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingLevel {
    H1,
    #[default]
    H2,
    H3,
    H4,
}

impl HeadingLevel {
    pub fn tag(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
        }
    }
}

/// Kind of a text input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Password,
    Email,
}

impl FieldKind {
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Password => "password",
            FieldKind::Email => "email",
        }
    }
}
