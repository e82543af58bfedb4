use folio_model::{FilterTag, ProjectId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectsMessage {
    /// The filter button at `button` (document order) was pressed.
    FilterSelected { button: usize, filter: FilterTag },
    /// A project card was clicked.
    CardActivated(ProjectId),
    CloseRequested,
    /// Click landed on the modal backdrop rather than its content.
    BackdropClicked,
}
