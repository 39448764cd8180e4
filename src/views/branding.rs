/// A font referenced by name and optional web-font URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    pub name: String,
    pub url: Option<String>,
}

/// Workspace branding: a logo and a font.
#[derive(Debug, Clone, Default)]
pub struct Branding {
    logo: Option<String>,
    font: Option<Font>,
}

impl Branding {
    pub fn logo(&self) -> Option<&str> {
        self.logo.as_deref()
    }

    pub fn set_logo(&mut self, path: &str) {
        self.logo = Some(path.to_owned());
    }

    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    pub fn set_font(&mut self, name: &str, url: Option<&str>) {
        self.font = Some(Font {
            name: name.to_owned(),
            url: url.map(str::to_owned),
        });
    }
}

/// Replacement terms for the standard element and relationship nouns,
/// used when rendering diagram keys and metadata.
#[derive(Debug, Clone, Default)]
pub struct Terminology {
    pub enterprise: Option<String>,
    pub person: Option<String>,
    pub software_system: Option<String>,
    pub container: Option<String>,
    pub component: Option<String>,
    pub deployment_node: Option<String>,
    pub infrastructure_node: Option<String>,
    pub relationship: Option<String>,
}
