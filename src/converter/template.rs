//! Structural template for the converter and the slots bound from it

use super::dialog::Dialog;
use serde::Deserialize;

/// Markup-level description of the widget. Labels can be overridden from config.json.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Template {
    pub title: String,
    pub filename_placeholder: String,
    pub select_label: String,
    pub convert_label: String,
    pub download_label: String,
    /// No dialog means notifications are dropped
    pub dialog: Option<DialogTemplate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DialogTemplate {
    pub title: String,
    pub close_label: String,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            title: "Convert to WebP".to_owned(),
            filename_placeholder: "No file selected".to_owned(),
            select_label: "Select image".to_owned(),
            convert_label: "Convert".to_owned(),
            download_label: "Download".to_owned(),
            dialog: Some(DialogTemplate::default()),
        }
    }
}

impl Default for DialogTemplate {
    fn default() -> Self {
        Self {
            title: "Notice".to_owned(),
            close_label: "Close".to_owned(),
        }
    }
}

/// A clickable action in the widget
#[derive(Debug, Clone)]
pub struct ActionSlot {
    pub label: String,
    pub icon: &'static str,
    pub enabled: bool,
}

/// Read-only field showing the chosen file name
#[derive(Debug, Clone)]
pub struct FileNameSlot {
    pub value: String,
    pub placeholder: String,
}

/// Slots resolved once at construction and owned by the widget
#[derive(Debug, Clone)]
pub struct Slots {
    pub title: String,
    pub file_name: FileNameSlot,
    pub select: ActionSlot,
    pub convert: ActionSlot,
    pub download: ActionSlot,
}

impl Slots {
    pub fn bind(template: &Template) -> (Self, Option<Dialog>) {
        use egui_phosphor::regular as icons;

        let slots = Self {
            title: template.title.clone(),
            file_name: FileNameSlot {
                value: String::new(),
                placeholder: template.filename_placeholder.clone(),
            },
            select: ActionSlot {
                label: template.select_label.clone(),
                icon: icons::FOLDER_OPEN,
                enabled: true,
            },
            convert: ActionSlot {
                label: template.convert_label.clone(),
                icon: icons::ARROWS_CLOCKWISE,
                enabled: true,
            },
            download: ActionSlot {
                label: template.download_label.clone(),
                icon: icons::DOWNLOAD_SIMPLE,
                enabled: false,
            },
        };
        let dialog = template
            .dialog
            .as_ref()
            .map(|d| Dialog::new(d.title.clone(), d.close_label.clone()));
        (slots, dialog)
    }
}
