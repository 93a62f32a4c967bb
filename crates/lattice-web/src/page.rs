//! Full HTML document assembly.

use crate::error::Result;
use crate::orchestrator::Orchestrator;
use crate::view::View;
use lattice_core::UserId;
use lattice_ui::escape_text;
use std::sync::Arc;

/// A full page: an ordered set of views wrapped in the document shell.
///
/// Views render in insertion order; the shell links the external stylesheet
/// and the thin client behavior script.
pub struct Page {
    title: String,
    views: Vec<Arc<dyn View>>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            views: Vec::new(),
        }
    }

    pub fn view(mut self, view: Arc<dyn View>) -> Self {
        self.views.push(view);
        self
    }

    pub fn views(&self) -> &[Arc<dyn View>] {
        &self.views
    }

    /// Render the complete document for the given user.
    pub async fn render(&self, orchestrator: &Orchestrator, user: Option<&UserId>) -> Result<String> {
        let rendered = orchestrator.render_views(user, &self.views).await?;

        let mut out = String::with_capacity(1024);
        out.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        out.push_str("<title>");
        out.push_str(&escape_text(&self.title));
        out.push_str("</title>\n");
        out.push_str("<link rel=\"stylesheet\" href=\"/assets/lattice.css\">\n");
        out.push_str("<script src=\"/assets/lattice.js\" defer></script>\n");
        out.push_str("</head>\n<body>\n<main class=\"page\">\n");
        for view in &rendered {
            out.push_str(&view.html);
            out.push('\n');
        }
        out.push_str("</main>\n</body>\n</html>\n");
        Ok(out)
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<_> = self.views.iter().map(|v| v.id()).collect();
        f.debug_struct("Page")
            .field("title", &self.title)
            .field("views", &ids)
            .finish()
    }
}
