use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, Window};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingElement(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn element_by_id(id: &str) -> Result<Element, DomError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))
}

/// Smooth-scrolls the page so the section with `id` comes into view.
pub fn scroll_to_section(id: &str) -> Result<(), DomError> {
    let element = element_by_id(id)?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

pub fn open_external(url: &str) -> Result<(), DomError> {
    window()?.open_with_url_and_target(url, "_blank")?;
    Ok(())
}

/// Inner width and height of the viewport in CSS pixels.
pub fn viewport_size() -> Result<(f64, f64), DomError> {
    let window = window()?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width, height))
}

pub fn scroll_to_top() {
    if let Ok(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DomError::MissingElement("booking".to_string()).to_string(),
            "no element with id `booking`"
        );
        assert_eq!(DomError::NoWindow.to_string(), "no global window available");
    }
}
