/// A documentation section imported from a Markdown file.
#[derive(Debug, Clone)]
pub struct Section {
    pub filename: String,
    pub content: String,
}

/// An architecture decision record imported from a Markdown file.
#[derive(Debug, Clone)]
pub struct Decision {
    pub filename: String,
    pub content: String,
}

/// Documentation and decision records attached to a workspace or to a
/// software system.
#[derive(Debug, Default)]
pub struct Documentation {
    sections: Vec<Section>,
    decisions: Vec<Decision>,
}

impl Documentation {
    pub fn add_section(&mut self, filename: &str, content: String) {
        self.sections.push(Section {
            filename: filename.to_owned(),
            content,
        });
    }

    pub fn add_decision(&mut self, filename: &str, content: String) {
        self.decisions.push(Decision {
            filename: filename.to_owned(),
            content,
        });
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.decisions.is_empty()
    }
}
