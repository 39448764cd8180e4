//! The workspace root: a named model-and-views pair, with the DSL source
//! it was built from attached after parsing.

use crate::model::Model;
use crate::views::{Configuration, Documentation, ViewSet};

#[derive(Debug)]
pub struct Workspace {
    name: String,
    description: String,
    model: Model,
    views: ViewSet,
    configuration: Configuration,
    documentation: Documentation,
    dsl: Option<String>,
}

impl Workspace {
    pub fn new(name: &str, description: &str) -> Self {
        Workspace {
            name: name.to_owned(),
            description: description.to_owned(),
            model: Model::new(),
            views: ViewSet::default(),
            configuration: Configuration::default(),
            documentation: Documentation::default(),
            dsl: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_owned();
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }

    pub fn views(&self) -> &ViewSet {
        &self.views
    }

    pub fn views_mut(&mut self) -> &mut ViewSet {
        &mut self.views
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn configuration_mut(&mut self) -> &mut Configuration {
        &mut self.configuration
    }

    pub fn documentation(&self) -> &Documentation {
        &self.documentation
    }

    pub fn documentation_mut(&mut self) -> &mut Documentation {
        &mut self.documentation
    }

    /// The DSL source this workspace was built from, if it came from the
    /// parser.
    pub fn dsl(&self) -> Option<&str> {
        self.dsl.as_deref()
    }

    pub(crate) fn set_dsl(&mut self, dsl: String) {
        self.dsl = Some(dsl);
    }
}
