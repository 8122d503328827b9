pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod gallery;
pub mod modal;
pub mod schedule;
pub mod state;

pub use app::{start, stop, GalleryPage};
pub use config::GalleryConfig;
pub use error::GalleryError;
pub use modal::ModalController;
pub use state::{copyright_label, GalleryItem, Lightbox, ModalPhase};
