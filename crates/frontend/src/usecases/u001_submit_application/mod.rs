//! Application submission
//!
//! Simplified MVVM pattern implementation:
//! - api.rs: `SubmitApi` port and its HTTP implementation
//! - model.rs: top-level form fields and payload assembly
//! - pipeline.rs: submit flow and response routing
//! - feedback.rs: feedback panel state machine and component
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod api;
mod feedback;
mod model;
mod pipeline;
mod view;
mod view_model;

pub use api::{HttpSubmitApi, SubmitApi};
pub use feedback::{FeedbackController, FeedbackPanel};
pub use model::{build_payload, ContactField, ContactForm};
pub use pipeline::{
    failure_message, route_outcome, submit_application, SubmitReaction, SubmitState,
};
pub use view::ApplicationForm;
pub use view_model::ApplicationFormViewModel;
