use folio_model::{ProjectCatalog, ProjectId, ProjectRecord};

/// Detail overlay for a single project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectModal {
    current: Option<&'static ProjectRecord>,
}

impl ProjectModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the modal on `id`. Unknown ids leave the modal untouched and
    /// return false.
    pub fn open(&mut self, id: &ProjectId, catalog: &ProjectCatalog) -> bool {
        match catalog.get(id.as_str()) {
            Some(record) => {
                self.current = Some(record);
                true
            }
            None => false,
        }
    }

    /// Returns true if the modal was open.
    pub fn close(&mut self) -> bool {
        self.current.take().is_some()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&'static ProjectRecord> {
        self.current
    }

    /// Page scrolling is suppressed while the modal is up.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    /// Body markup for the open record, if any.
    pub fn body(&self) -> Option<String> {
        self.current.map(render_body)
    }
}

/// Modal body markup. `details` is authored HTML and is emitted verbatim;
/// the title and category are plain text.
pub fn render_body(record: &ProjectRecord) -> String {
    format!(
        "<span class=\"project-category\">{}</span>\n<h2>{}</h2>\n{}",
        escape_html(record.category),
        escape_html(record.title),
        record.details,
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
