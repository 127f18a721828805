//! Controller State
//!
//! Plain data for each page behaviour. Nothing here touches the DOM; the
//! `dom` layer reads events, feeds them in, and applies the result.

pub mod header;
pub mod inquiry;
pub mod menu;
pub mod reveal;
pub mod scroll;
pub mod tabs;

pub use header::HeaderMode;
pub use inquiry::{
    Feedback, FeedbackKind, FormSubmission, InquiryController, InquiryFields, SubmissionGuard,
    SubmitOutcome,
};
pub use menu::{MenuPresentation, MenuState};
pub use reveal::RevealSet;
pub use scroll::{AnchorRef, ScrollAction};
pub use tabs::{TabChange, TabSelection};
