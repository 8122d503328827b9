/// One thumbnail's lightbox data, read from the item's `data-*` attributes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryItem {
    pub image_src: String,
    pub title: String,
    pub description: String,
    pub link_url: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// What the DOM side has to do after [`Lightbox::open`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenEffect {
    /// The modal was hidden or fading out: show it and schedule the reveal
    /// for `epoch`. Any pending teardown is stale.
    Reveal { epoch: u64 },
    /// Already visible, only the content changed.
    Repopulate,
}

/// Lifecycle of the single modal, independent of the DOM.
///
/// Every effective `open`/`close` bumps the epoch. Work scheduled for a later
/// frame or timer carries the epoch it was created in and is ignored once the
/// epoch has moved on, so a teardown from an earlier close can never clear
/// content shown by a newer open.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lightbox {
    phase: ModalPhase,
    current: Option<GalleryItem>,
    action_row: bool,
    scroll_locked: bool,
    epoch: u64,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn current(&self) -> Option<&GalleryItem> {
        self.current.as_ref()
    }

    pub fn has_action_row(&self) -> bool {
        self.action_row
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Show `item`. Re-entry while opening or open only swaps the content.
    pub fn open(&mut self, item: GalleryItem) -> OpenEffect {
        self.action_row = item.link_url.is_some();
        self.current = Some(item);

        match self.phase {
            ModalPhase::Opening | ModalPhase::Open => OpenEffect::Repopulate,
            ModalPhase::Closed | ModalPhase::Closing => {
                self.epoch += 1;
                self.phase = ModalPhase::Opening;
                self.scroll_locked = true;
                OpenEffect::Reveal { epoch: self.epoch }
            }
        }
    }

    /// The reveal scheduled for `epoch` has fired. Returns whether it applies.
    pub fn reveal(&mut self, epoch: u64) -> bool {
        if self.phase != ModalPhase::Opening || epoch != self.epoch {
            return false;
        }
        self.phase = ModalPhase::Open;
        true
    }

    /// Start hiding. Returns the epoch the deferred teardown must carry, or
    /// `None` if the modal is already closing or closed.
    pub fn close(&mut self) -> Option<u64> {
        match self.phase {
            ModalPhase::Closed | ModalPhase::Closing => None,
            ModalPhase::Opening | ModalPhase::Open => {
                self.epoch += 1;
                self.phase = ModalPhase::Closing;
                self.scroll_locked = false;
                Some(self.epoch)
            }
        }
    }

    /// The teardown scheduled for `epoch` has fired. Returns whether content
    /// should be cleared.
    pub fn finish_close(&mut self, epoch: u64) -> bool {
        if self.phase != ModalPhase::Closing || epoch != self.epoch {
            return false;
        }
        self.phase = ModalPhase::Closed;
        self.current = None;
        self.action_row = false;
        true
    }

    /// Drop straight to `Closed`, invalidating anything still scheduled.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.phase = ModalPhase::Closed;
        self.current = None;
        self.action_row = false;
        self.scroll_locked = false;
    }
}

/// Footer year text: a single year, or an en-dash range once the current
/// year has moved past `start`.
pub fn copyright_label(start: i32, current: i32) -> String {
    if current <= start {
        start.to_string()
    } else {
        format!("{start}–{current}")
    }
}
