//! Tag registry: widgets are defined once under a tag and created by name

use crate::converter::platform::Platform;
use crate::converter::template::Template;
use eframe::egui;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, PoisonError};
use thiserror::Error;
use tracing::debug;

/// Anything the host can mount into a panel
pub trait Widget {
    fn tag(&self) -> &'static str;
    fn show(&mut self, ui: &mut egui::Ui);
}

/// What a factory gets to build a widget from
#[derive(Clone)]
pub struct WidgetEnv {
    pub platform: Platform,
    pub template: Template,
}

pub type Factory = fn(&WidgetEnv) -> Box<dyn Widget>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("tag already defined: {0}")]
    AlreadyDefined(String),
}

#[derive(Default)]
pub struct Registry {
    factories: HashMap<String, Factory>,
}

impl Registry {
    pub fn define(&mut self, tag: &str, factory: Factory) -> Result<(), RegistryError> {
        if self.factories.contains_key(tag) {
            return Err(RegistryError::AlreadyDefined(tag.to_owned()));
        }
        debug!(tag, "Widget defined");
        self.factories.insert(tag.to_owned(), factory);
        Ok(())
    }

    pub fn create(&self, tag: &str, env: &WidgetEnv) -> Option<Box<dyn Widget>> {
        self.factories.get(tag).map(|factory| factory(env))
    }
}

fn global() -> &'static Mutex<Registry> {
    static REGISTRY: OnceLock<Mutex<Registry>> = OnceLock::new();
    REGISTRY.get_or_init(|| Mutex::new(Registry::default()))
}

/// Define `tag` in the process-wide registry.
pub fn define(tag: &str, factory: Factory) -> Result<(), RegistryError> {
    global()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .define(tag, factory)
}

/// Create a widget by tag from the process-wide registry.
pub fn create(tag: &str, env: &WidgetEnv) -> Option<Box<dyn Widget>> {
    global()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .create(tag, env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::test_support::env;

    struct Dummy;

    impl Widget for Dummy {
        fn tag(&self) -> &'static str {
            "dummy-widget"
        }
        fn show(&mut self, _ui: &mut egui::Ui) {}
    }

    fn dummy(_: &WidgetEnv) -> Box<dyn Widget> {
        Box::new(Dummy)
    }

    struct Impostor;

    impl Widget for Impostor {
        fn tag(&self) -> &'static str {
            "impostor"
        }
        fn show(&mut self, _ui: &mut egui::Ui) {}
    }

    fn impostor(_: &WidgetEnv) -> Box<dyn Widget> {
        Box::new(Impostor)
    }

    #[test]
    fn defining_a_tag_twice_fails() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let (env, _) = env(rt.handle().clone());

        let mut registry = Registry::default();
        assert!(registry.define("dummy-widget", dummy).is_ok());
        assert_eq!(
            registry.define("dummy-widget", impostor),
            Err(RegistryError::AlreadyDefined("dummy-widget".into()))
        );
        // The first factory stays in place
        assert_eq!(registry.create("dummy-widget", &env).map(|w| w.tag()), Some("dummy-widget"));
    }

    #[test]
    fn create_by_tag() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let (env, _) = env(rt.handle().clone());

        let mut registry = Registry::default();
        registry.define("dummy-widget", dummy).unwrap();

        assert_eq!(registry.create("dummy-widget", &env).map(|w| w.tag()), Some("dummy-widget"));
        assert!(registry.create("unknown-tag", &env).is_none());
    }
}
