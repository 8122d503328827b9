use crate::config::GalleryConfig;
use crate::dom::{self, Listener};
use crate::error::{GalleryError, Result};
use crate::gallery::initialize_thumbnails;
use crate::modal::ModalController;
use crate::state::{copyright_label, GalleryItem};
use leptos::ev;
use leptos::logging::{error, log, warn};
use leptos::prelude::*;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent};

thread_local! {
    static PAGE: RefCell<Option<GalleryPage>> = const { RefCell::new(None) };
}

/// Attach the gallery to the current document, waiting for
/// `DOMContentLoaded` if the markup is still being parsed.
pub fn start() {
    let document = document();
    if document.ready_state() != "loading" {
        mount_page();
        return;
    }

    let on_ready = Closure::once_into_js(mount_page);
    if let Err(err) =
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
    {
        error!("gallery: {}", GalleryError::from(err));
    }
}

/// Detach everything `start` attached.
pub fn stop() {
    if let Some(page) = PAGE.with(|slot| slot.borrow_mut().take()) {
        page.destroy();
    }
}

fn mount_page() {
    let document = document();
    let config = GalleryConfig::load(&document);
    let page = GalleryPage::mount(&document, config);
    if let Some(previous) = PAGE.with(|slot| slot.borrow_mut().replace(page)) {
        previous.destroy();
    }
}

/// Everything the gallery has attached to one document.
pub struct GalleryPage {
    modal: Option<ModalController>,
    listeners: Vec<Listener>,
    window_listeners: Vec<WindowListenerHandle>,
}

impl GalleryPage {
    /// Populate thumbnails, wire the lightbox and the incidental page
    /// behaviors. Missing pieces are logged and skipped; the rest still runs.
    pub fn mount(document: &Document, config: GalleryConfig) -> Self {
        match initialize_thumbnails(document, &config) {
            Ok(count) => log!("gallery: {count} thumbnails initialized"),
            Err(err) => warn!("gallery: thumbnails skipped: {err}"),
        }

        let mut page = Self {
            modal: None,
            listeners: Vec::new(),
            window_listeners: Vec::new(),
        };

        match ModalController::locate(document, config.clone()) {
            Ok(modal) => {
                if let Err(err) = page.wire_modal(document, &config, &modal) {
                    warn!("gallery: lightbox partially wired: {err}");
                }
                page.modal = Some(modal);
            }
            Err(err) => error!("gallery: lightbox disabled: {err}"),
        }

        if config.suppress_context_menu {
            page.window_listeners
                .push(window_event_listener(ev::contextmenu, |event| event.prevent_default()));
        }

        render_year_label(document, &config);
        page
    }

    pub fn modal(&self) -> Option<&ModalController> {
        self.modal.as_ref()
    }

    pub fn destroy(self) {
        self.listeners.into_iter().for_each(Listener::detach);
        self.window_listeners
            .into_iter()
            .for_each(WindowListenerHandle::remove);
        if let Some(modal) = self.modal {
            modal.destroy();
        }
    }

    fn wire_modal(
        &mut self,
        document: &Document,
        config: &GalleryConfig,
        modal: &ModalController,
    ) -> Result<()> {
        self.listeners.extend(modal.bind_controls()?);

        for element in dom::query_all(document, &config.selectors.item)? {
            let on_click = {
                let modal = modal.clone();
                move |event: web_sys::Event| {
                    if let Some(item) = activated_item(&event) {
                        modal.open(item);
                    }
                }
            };
            self.listeners.push(Listener::attach(&element, "click", on_click)?);

            let on_keydown = {
                let modal = modal.clone();
                let config = config.clone();
                move |event: web_sys::Event| {
                    let activated = event
                        .dyn_ref::<KeyboardEvent>()
                        .is_some_and(|key| config.is_activation_key(&key.key()));
                    if !activated {
                        return;
                    }
                    if let Some(item) = activated_item(&event) {
                        modal.open(item);
                    }
                }
            };
            self.listeners.push(Listener::attach(&element, "keydown", on_keydown)?);
        }
        Ok(())
    }
}

/// The item the listener is registered on, read fresh from its attributes.
fn activated_item(event: &web_sys::Event) -> Option<GalleryItem> {
    event
        .current_target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .map(|element| GalleryItem::from_element(&element))
}

fn render_year_label(document: &Document, config: &GalleryConfig) {
    let Some(label) = document.get_element_by_id(&config.selectors.years_id) else {
        return;
    };
    let current = js_sys::Date::new_0().get_full_year() as i32;
    label.set_text_content(Some(&copyright_label(config.start_year, current)));
}
