use crate::command::Command;
use crate::scheduler::Scheduler;

use super::messages::ProjectsMessage;
use super::state::ProjectsState;

/// Handle project grid messages.
pub fn update_projects<S: Scheduler>(
    state: &mut ProjectsState<S::Handle>,
    scheduler: &mut S,
    message: ProjectsMessage,
) -> Vec<Command> {
    match message {
        ProjectsMessage::FilterSelected { button, filter } => {
            state.selected_button = Some(button);
            state.filter.apply(filter, scheduler);
        }
        ProjectsMessage::CardActivated(id) => {
            if state.modal.open(&id, &state.catalog) {
                log::debug!("projects: showing details for {id}");
            }
        }
        ProjectsMessage::CloseRequested | ProjectsMessage::BackdropClicked => {
            state.modal.close();
        }
    }
    Vec::new()
}
