use super::draft::StepField;

/// All messages that can be sent through the FLTK channel.
/// Widget and menu callbacks send one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Navigation
    GoHome,
    NextStep,
    PreviousStep,
    /// A row in the sidebar list was picked (0-based).
    SidebarActivated(usize),

    // View
    ToggleSidebar,
    ToggleDarkMode,

    // Composer
    StartComposing,
    DraftTitleChanged(String),
    DraftStepChanged {
        index: usize,
        field: StepField,
        value: String,
    },
    DraftAddStep,
    DraftRemoveStep(usize),
    DraftSubmit,

    // Application
    Quit,
    WindowClose,
}
