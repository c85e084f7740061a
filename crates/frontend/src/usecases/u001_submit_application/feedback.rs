use leptos::prelude::*;

/// Feedback panel state
///
/// `Hidden --show--> Shown --dismiss--> Hidden`. The first dismiss of the page
/// asks for the container to close; later ones never do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackController {
    message: Option<String>,
    close_requested: bool,
}

impl FeedbackController {
    pub fn show(&mut self, message: String) {
        self.message = Some(message);
    }

    /// Hide the panel; returns `true` if the caller must close the container
    pub fn dismiss(&mut self) -> bool {
        if self.message.take().is_none() || self.close_requested {
            return false;
        }
        self.close_requested = true;
        true
    }

    pub fn is_shown(&self) -> bool {
        self.message.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Overlay with the server message and a close button
#[component]
pub fn FeedbackPanel(
    state: RwSignal<FeedbackController>,
    /// Called when the user presses "Закрыть"
    on_dismiss: Callback<()>,
) -> impl IntoView {
    let display = move || {
        if state.with(|s| s.is_shown()) {
            "display: flex;"
        } else {
            "display: none;"
        }
    };

    view! {
        <div id="popup" class="popup" style=display>
            <div class="popup-content">
                <p id="popupMessage">
                    {move || state.with(|s| s.message().unwrap_or_default().to_string())}
                </p>
                <button
                    id="closePopup"
                    type="button"
                    class="btn btn-primary"
                    on:click=move |_| on_dismiss.run(())
                >
                    {"Закрыть"}
                </button>
            </div>
        </div>
    }
}
