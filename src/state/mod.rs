//! Page state types.

mod form;
mod navigation;
mod project;
mod toast;

pub use form::{ContactForm, FormField};
pub use navigation::{Extent, NavigationState, Section};
pub use project::{outbound_links, PROJECTS, SOCIAL_LINKS};
pub use toast::{Toast, ToastType};
