//! Navigation-related state types.

/// Specifying the different foci.
///
/// `Edit` only receives keys while a task is still open for editing; once a
/// reload closes the edit box it falls back to the list.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Focus {
    #[default]
    Input,
    List,
    Edit,
}
