use crate::components::ActionLinkRow;
use crate::config::GalleryConfig;
use crate::dom::{self, Listener};
use crate::error::{GalleryError, Result};
use crate::schedule::{after_next_paint, Deferred};
use crate::state::{GalleryItem, Lightbox, ModalPhase, OpenEffect};
use leptos::ev;
use leptos::mount::mount_to;
use leptos::prelude::*;
use std::any::Any;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys::{Document, Element, HtmlAnchorElement, HtmlElement, HtmlImageElement};

const OPEN_CLASS: &str = "open";

/// Handles to the modal markup the host page provides.
#[derive(Clone)]
pub struct ModalElements {
    pub container: HtmlElement,
    pub dialog: Option<HtmlElement>,
    pub image: HtmlImageElement,
    pub title: HtmlElement,
    pub description: HtmlElement,
    pub link: HtmlAnchorElement,
    pub caption: HtmlElement,
    pub focus_target: HtmlElement,
    pub body: HtmlElement,
}

impl ModalElements {
    pub fn locate(document: &Document, config: &GalleryConfig) -> Result<Self> {
        let s = &config.selectors;
        let container: HtmlElement = dom::element_by_id(document, &s.modal_id)?;
        let caption = dom::query_in::<HtmlElement>(&container, &s.caption)?
            .ok_or_else(|| GalleryError::MissingElement(s.caption.clone()))?;
        let focus_target = match dom::query_in::<HtmlElement>(&container, &s.close)? {
            Some(control) => control,
            None => dom::query_in::<HtmlElement>(&container, "button")?
                .ok_or_else(|| GalleryError::MissingElement(format!("#{} button", s.modal_id)))?,
        };
        let body = document
            .body()
            .ok_or_else(|| GalleryError::MissingElement("body".to_string()))?;

        Ok(Self {
            dialog: dom::query_in::<HtmlElement>(&container, &s.dialog)?,
            image: dom::element_by_id(document, &s.image_id)?,
            title: dom::element_by_id(document, &s.title_id)?,
            description: dom::element_by_id(document, &s.description_id)?,
            link: dom::element_by_id(document, &s.link_id)?,
            container,
            caption,
            focus_target,
            body,
        })
    }
}

/// The mounted action-link row. Dropping it unmounts the row.
struct MountedRow(#[allow(dead_code)] Box<dyn Any>);

struct Inner {
    elements: ModalElements,
    config: GalleryConfig,
    lightbox: Lightbox,
    mounted_row: Option<MountedRow>,
    dismiss_listener: Option<WindowListenerHandle>,
    teardown: Option<Deferred>,
    destroyed: bool,
}

/// Owns the single lightbox: its content, visibility, focus and the
/// keyboard listener that dismisses it.
#[derive(Clone)]
pub struct ModalController {
    inner: Rc<RefCell<Inner>>,
}

impl ModalController {
    pub fn new(elements: ModalElements, config: GalleryConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                elements,
                config,
                lightbox: Lightbox::new(),
                mounted_row: None,
                dismiss_listener: None,
                teardown: None,
                destroyed: false,
            })),
        }
    }

    pub fn locate(document: &Document, config: GalleryConfig) -> Result<Self> {
        let elements = ModalElements::locate(document, &config)?;
        Ok(Self::new(elements, config))
    }

    pub fn phase(&self) -> ModalPhase {
        self.inner.borrow().lightbox.phase()
    }

    pub fn has_action_row(&self) -> bool {
        self.inner.borrow().lightbox.has_action_row()
    }

    pub fn open(&self, item: GalleryItem) {
        let mut inner = self.inner.borrow_mut();
        if inner.destroyed {
            return;
        }

        let effect = inner.lightbox.open(item);
        inner.sync_content();
        let OpenEffect::Reveal { epoch } = effect else {
            return;
        };

        if let Some(pending) = inner.teardown.take() {
            pending.cancel();
        }
        dom::set_style(&inner.elements.container, "display", "flex");
        inner.sync_scroll();
        let _ = inner.elements.container.set_attribute("aria-hidden", "false");
        if inner.dismiss_listener.is_none() {
            inner.dismiss_listener = Some(self.listen_for_dismissal());
        }

        let weak = Rc::downgrade(&self.inner);
        after_next_paint(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().reveal(epoch);
            }
        });
    }

    pub fn close(&self) {
        let mut inner = self.inner.borrow_mut();
        let Some(epoch) = inner.lightbox.close() else {
            return;
        };
        inner.hide();

        let delay = inner.config.transition();
        let weak = Rc::downgrade(&self.inner);
        inner.teardown = Some(Deferred::new(delay, move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().finish_close(epoch);
            }
        }));
    }

    /// Hide immediately and stop reacting to anything. Later calls to
    /// `open` are ignored.
    pub fn destroy(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.destroyed = true;
        if let Some(pending) = inner.teardown.take() {
            pending.cancel();
        }
        inner.lightbox.reset();
        inner.hide();
        inner.clear_content();
    }

    /// Wire the close controls and keep clicks inside the dialog from
    /// reaching the rest of the page.
    pub fn bind_controls(&self) -> Result<Vec<Listener>> {
        let (container, dialog, close_selector) = {
            let inner = self.inner.borrow();
            (
                inner.elements.container.clone(),
                inner.elements.dialog.clone(),
                inner.config.selectors.close.clone(),
            )
        };

        let mut listeners = Vec::new();
        if let Some(dialog) = dialog {
            listeners.push(Listener::attach(&dialog, "click", |event| event.stop_propagation())?);
        }
        for control in dom::query_all_in(&container, &close_selector)? {
            let modal = self.clone();
            listeners.push(Listener::attach(&control, "click", move |_| modal.close())?);
        }
        Ok(listeners)
    }

    fn listen_for_dismissal(&self) -> WindowListenerHandle {
        let weak: Weak<RefCell<Inner>> = Rc::downgrade(&self.inner);
        window_event_listener(ev::keydown, move |event| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let dismiss = inner.borrow().config.is_dismiss_key(&event.key());
            if dismiss {
                ModalController { inner }.close();
            }
        })
    }
}

impl Inner {
    /// Show what the lightbox currently holds, with at most one action row.
    fn sync_content(&mut self) {
        self.remove_action_row();
        let Some(item) = self.lightbox.current().cloned() else {
            return;
        };
        self.populate(&item);
        if self.lightbox.has_action_row() {
            if let Some(href) = item.link_url {
                self.mount_action_row(href);
            }
        }
    }

    fn sync_scroll(&self) {
        let overflow = if self.lightbox.is_scroll_locked() { "hidden" } else { "" };
        dom::set_style(&self.elements.body, "overflow", overflow);
    }

    /// The immediate half of closing: drop the open state, give scroll back
    /// and stop listening for the dismissal key.
    fn hide(&mut self) {
        let _ = self.elements.container.class_list().remove_1(OPEN_CLASS);
        self.sync_scroll();
        let _ = self.elements.container.set_attribute("aria-hidden", "true");
        if let Some(listener) = self.dismiss_listener.take() {
            listener.remove();
        }
    }

    fn populate(&self, item: &GalleryItem) {
        let e = &self.elements;
        e.image.set_src(&item.image_src);
        e.image.set_alt(&item.title);
        e.title.set_text_content(Some(&item.title));
        e.description.set_text_content(Some(&item.description));
        e.link.set_href(item.link_url.as_deref().unwrap_or_default());
    }

    fn mount_action_row(&mut self, href: String) {
        let label = self.config.link_label.clone();
        let row_class = self.config.selectors.action_row_class.clone();
        let link_class = self.config.selectors.action_link_class.clone();
        let handle = mount_to(self.elements.caption.clone(), move || {
            view! {
                <ActionLinkRow href=href label=label row_class=row_class link_class=link_class/>
            }
        });
        self.mounted_row = Some(MountedRow(Box::new(handle)));
    }

    fn remove_action_row(&mut self) {
        self.mounted_row = None;
        // Rows left anywhere in the modal by the host page itself.
        let selector = format!(".{}", self.config.selectors.action_row_class);
        if let Ok(stray) = dom::query_all_in(&self.elements.container, &selector) {
            stray.iter().for_each(Element::remove);
        }
    }

    fn reveal(&mut self, epoch: u64) {
        if self.lightbox.reveal(epoch) {
            let _ = self.elements.container.class_list().add_1(OPEN_CLASS);
            let _ = self.elements.focus_target.focus();
        }
    }

    fn finish_close(&mut self, epoch: u64) {
        if self.lightbox.finish_close(epoch) {
            self.teardown = None;
            self.clear_content();
        }
    }

    fn clear_content(&mut self) {
        dom::set_style(&self.elements.container, "display", "none");
        self.elements.image.set_src("");
        self.elements.link.set_href("");
        self.remove_action_row();
    }
}
