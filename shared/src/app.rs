use crate::capabilities::Capabilities;
use crate::event::Event;
use crate::model::{Model, ToastKind};
use crate::profile::SubmitOutcome;
use crate::view::ViewModel;
use crate::{SUBMIT_FAILED_MESSAGE, SUBMIT_SAVED_MESSAGE};

#[derive(Default)]
pub struct App;

impl App {
    fn submit_profile(model: &mut Model) {
        match model.profile.on_submit() {
            SubmitOutcome::Saved => {
                // No backend: a saved profile ends with a log line.
                tracing::info!(profile = ?model.profile.snapshot(), "profile submitted");
                model.show_toast(SUBMIT_SAVED_MESSAGE, ToastKind::Success);
            }
            SubmitOutcome::Rejected { error_count } => {
                tracing::info!(error_count, "profile submit rejected");
                model.show_toast(SUBMIT_FAILED_MESSAGE, ToastKind::Error);
            }
        }
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        tracing::debug!(event = event.name(), field = ?event.field(), "update");

        match event {
            Event::Noop => return,

            Event::FieldChanged { field, value } => {
                model.profile.on_change(field, value);
            }

            Event::FieldBlurred { field, value } => {
                model.profile.on_blur(field, &value);
            }

            Event::ShowProfileToggled { checked } => {
                model.profile.set_show_profile(checked);
            }

            Event::ProfileSubmitted => Self::submit_profile(model),

            Event::SearchQueryChanged { text } => {
                model.sidebar.set_query(text);
            }

            Event::SearchFocusChanged { focused } => {
                model.sidebar.set_focused(focused);
            }

            Event::SearchSubmitted { text } => {
                if model.sidebar.submit_search(&text) {
                    tracing::debug!(history_len = model.sidebar.history.len(), "search saved");
                }
            }

            Event::HistoryItemSelected { item } => {
                model.sidebar.select_history_item(item);
            }

            Event::HistoryItemRemoved { index } => {
                if model.sidebar.remove_history_item(index).is_none() {
                    tracing::warn!(
                        index,
                        history_len = model.sidebar.history.len(),
                        "history index out of range"
                    );
                    return;
                }
            }

            Event::DismissToast { id } => {
                if !model.dismiss_toast(&id) {
                    tracing::debug!(toast_id = %id, "stale toast dismissal ignored");
                    return;
                }
            }
        }

        caps.render.render();
    }

    fn view(&self, model: &Model) -> ViewModel {
        ViewModel::from(model)
    }
}
