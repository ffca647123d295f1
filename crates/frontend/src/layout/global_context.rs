use crate::config;
use crate::routes::Page;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::Dashboard),
            left_open: RwSignal::new(true),
        }
    }

    /// Syncs the active page with the browser location.
    ///
    /// Reads the initial page from the pathname and follows back/forward
    /// navigation through `popstate`.
    pub fn init_router_integration(&self) {
        let base_path = &config::current().routing.base_path;
        if let Some(pathname) = current_pathname() {
            self.active.set(Page::from_path(&pathname, base_path));
        }

        let Some(w) = window() else {
            return;
        };
        let active = self.active;
        let handler = Closure::wrap(Box::new(move |_: web_sys::PopStateEvent| {
            if let Some(pathname) = current_pathname() {
                let page = Page::from_path(&pathname, &config::current().routing.base_path);
                log::debug!("popstate -> {:?}", page);
                let _ = active.try_set(page);
            }
        }) as Box<dyn FnMut(_)>);

        let _ = w.add_event_listener_with_callback("popstate", handler.as_ref().unchecked_ref());
        // the listener lives as long as the app
        handler.forget();
    }

    /// Switches to `page` and records it in browser history
    pub fn navigate(&self, page: Page) {
        if self.active.get_untracked() == page {
            return;
        }
        log::debug!("navigate -> {:?}", page);

        let href = page.href(&config::current().routing.base_path);
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&href));
            }
        }
        self.active.set(page);
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.active.get() == page
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn current_pathname() -> Option<String> {
    window().and_then(|w| w.location().pathname().ok())
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
