//! Page-ready wiring: Enter in the search box filters, Enter in the jump
//! box jumps, changing the season reloads its dates.
//!
//! Handlers live as long as the page, so their closures are leaked.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::BrowserController;
use crate::error::report;
use crate::page::Role;

pub fn attach(controller: &Rc<BrowserController>) {
    let page = controller.page();

    if let Some(input) = page.element(Role::SearchInput) {
        let controller = controller.clone();
        on_enter(&input, move || {
            report("applyFilter", controller.apply_filter());
        });
    }

    if let Some(input) = page.element(Role::JumpInput) {
        let controller = controller.clone();
        on_enter(&input, move || {
            report("goToPage", controller.jump_from_input());
        });
    }

    if let Some(select) = page.element(Role::SeasonSelect) {
        let controller = controller.clone();
        listen(&select, "change", move |_event| {
            let controller = controller.clone();
            spawn_local(async move {
                let _ = controller.refresh_selected_dates().await;
            });
        });
    }
}

fn on_enter(target: &Element, mut action: impl FnMut() + 'static) {
    listen(target, "keypress", move |event| {
        let key_event = match event.dyn_into::<web_sys::KeyboardEvent>() {
            Ok(event) => event,
            Err(_) => return,
        };
        if key_event.key() == "Enter" {
            action();
        }
    });
}

fn listen(target: &Element, event_name: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let handler = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if let Err(err) =
        target.add_event_listener_with_callback(event_name, handler.as_ref().unchecked_ref())
    {
        tracing::error!(event_name, ?err, "could not attach listener");
    }
    handler.forget();
}
