//! `Page` over the live document via web-sys.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlFormElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement,
    Window,
};

use crate::config::{PageConfig, Selectors};
use crate::error::PageError;
use crate::page::{Page, Role, SelectOption};

pub struct DomPage {
    window: Window,
    document: Document,
    selectors: Selectors,
    max_pages_attribute: String,
}

impl DomPage {
    pub fn new(config: &PageConfig) -> Result<Self, PageError> {
        let window = web_sys::window().ok_or(PageError::NoWindow)?;
        let document = window.document().ok_or(PageError::NoWindow)?;
        Ok(Self {
            window,
            document,
            selectors: config.selectors.clone(),
            max_pages_attribute: config.max_pages_attribute.clone(),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// First element matching the role's selector. Invalid selectors read as absent.
    pub fn element(&self, role: Role) -> Option<Element> {
        self.document
            .query_selector(self.selectors.for_role(role))
            .ok()
            .flatten()
    }

    fn require(&self, role: Role) -> Result<Element, PageError> {
        self.element(role).ok_or(PageError::MissingElement(role))
    }
}

impl Page for DomPage {
    fn has(&self, role: Role) -> bool {
        self.element(role).is_some()
    }

    fn value(&self, role: Role) -> Result<String, PageError> {
        let element = self.require(role)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Ok(input.value());
        }
        if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            return Ok(select.value());
        }
        Ok(element.get_attribute("value").unwrap_or_default())
    }

    fn set_value(&self, role: Role, value: &str) -> Result<(), PageError> {
        let element = self.require(role)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
            return Ok(());
        }
        if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
            return Ok(());
        }
        element.set_attribute("value", value).map_err(dom_error)
    }

    fn submit_form(&self) -> Result<(), PageError> {
        let form = self
            .require(Role::FilterForm)?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| PageError::Dom("filter form is not a <form>".into()))?;
        form.submit().map_err(dom_error)
    }

    fn max_pages(&self) -> Result<String, PageError> {
        self.require(Role::MaxPagesHolder)?
            .get_attribute(&self.max_pages_attribute)
            .ok_or(PageError::MissingMaxPages)
    }

    fn replace_options(&self, role: Role, options: &[SelectOption]) -> Result<(), PageError> {
        let select = self.require(role)?;
        select.set_inner_html("");
        for option in options {
            let element = HtmlOptionElement::new_with_text_and_value_and_default_selected_and_selected(
                &option.label,
                &option.value,
                false,
                option.selected,
            )
            .map_err(dom_error)?;
            select.append_child(&element).map_err(dom_error)?;
        }
        Ok(())
    }

    fn set_html(&self, role: Role, html: &str) -> Result<(), PageError> {
        self.require(role)?.set_inner_html(html);
        Ok(())
    }

    fn current_url(&self) -> Result<String, PageError> {
        self.window.location().href().map_err(dom_error)
    }

    fn navigate(&self, url: &str) -> Result<(), PageError> {
        self.window.location().set_href(url).map_err(dom_error)
    }

    fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            tracing::error!(error = %js_error_message(err, "alert failed"), "alert failed");
        }
    }
}

pub(crate) fn dom_error(err: JsValue) -> PageError {
    PageError::Dom(js_error_message(err, "unknown DOM error"))
}

pub(crate) fn js_error_message(err: JsValue, fallback: &str) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    if let Ok(error) = err.dyn_into::<js_sys::Error>() {
        return error.message().into();
    }
    fallback.to_string()
}
