use super::branding::{Branding, Terminology};
use super::styles::Styles;
use super::view::{FilteredView, View, ViewId, ViewKind};

/// All views of a workspace, plus the styling and branding that apply
/// to them.
#[derive(Debug, Default)]
pub struct ViewSet {
    views: Vec<View>,
    filtered: Vec<FilteredView>,
    styles: Styles,
    branding: Branding,
    terminology: Terminology,
    themes: Vec<String>,
}

impl ViewSet {
    /// Creates a view, generating a key when the DSL did not supply one.
    /// Keys are unique across regular and filtered views.
    pub fn create_view(&mut self, kind: ViewKind, key: Option<&str>) -> Result<ViewId, String> {
        let key = match key {
            Some(key) => {
                self.assert_unique_key(key)?;
                key.to_owned()
            }
            None => self.generate_key(kind),
        };

        let id = ViewId(self.views.len());
        self.views.push(View::new(id, kind, key));
        Ok(id)
    }

    pub fn add_filtered_view(&mut self, view: FilteredView) -> Result<(), String> {
        self.assert_unique_key(&view.key)?;
        self.filtered.push(view);
        Ok(())
    }

    pub fn view(&self, id: ViewId) -> &View {
        &self.views[id.0]
    }

    pub fn view_mut(&mut self, id: ViewId) -> &mut View {
        &mut self.views[id.0]
    }

    pub fn views(&self) -> impl Iterator<Item = &View> {
        self.views.iter()
    }

    pub fn filtered_views(&self) -> &[FilteredView] {
        &self.filtered
    }

    pub fn find_view_by_key(&self, key: &str) -> Option<&View> {
        self.views.iter().find(|v| v.key == key)
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    pub fn styles_mut(&mut self) -> &mut Styles {
        &mut self.styles
    }

    pub fn branding(&self) -> &Branding {
        &self.branding
    }

    pub fn branding_mut(&mut self) -> &mut Branding {
        &mut self.branding
    }

    pub fn terminology(&self) -> &Terminology {
        &self.terminology
    }

    pub fn terminology_mut(&mut self) -> &mut Terminology {
        &mut self.terminology
    }

    pub fn add_theme(&mut self, url: &str) {
        self.themes.push(url.to_owned());
    }

    pub fn themes(&self) -> &[String] {
        &self.themes
    }

    fn generate_key(&self, kind: ViewKind) -> String {
        let count = self.views.iter().filter(|v| v.kind == kind).count();
        format!("{}-{:03}", kind.key_prefix(), count + 1)
    }

    fn assert_unique_key(&self, key: &str) -> Result<(), String> {
        let taken = self.views.iter().any(|v| v.key == key)
            || self.filtered.iter().any(|v| v.key == key);
        if taken {
            Err(format!("A view with the key \"{key}\" already exists"))
        } else {
            Ok(())
        }
    }
}
