use super::tutorial::TutorialId;

/// What the main window is pointed at.
///
/// `current_step` is only meaningful while a tutorial is selected and is kept
/// at 0 otherwise. A selected tutorial and an active composer never coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub selected_tutorial: Option<TutorialId>,
    pub current_step: usize,
    pub sidebar_visible: bool,
    pub composer_active: bool,
}

impl NavigationState {
    pub fn new(sidebar_visible: bool) -> Self {
        Self {
            selected_tutorial: None,
            current_step: 0,
            sidebar_visible,
            composer_active: false,
        }
    }

    pub fn is_home(&self) -> bool {
        self.selected_tutorial.is_none() && !self.composer_active
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(true)
    }
}
