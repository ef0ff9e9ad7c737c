//! Page-level toggles. Each behavior is independent of the others and keeps
//! no state beyond the element classes it flips.

pub mod consent;
pub mod nav;
pub mod scroll;

pub use consent::{CONSENT_KEY, ConsentBanner};
pub use nav::NavMenu;
pub use scroll::ScrollToTop;

/// Class that hides the cookie banner.
pub const HIDDEN_CLASS: &str = "hidden";
