//! Pure projections of navigation state onto what the window shows.
//!
//! Nothing here owns state; the UI layer calls these after every
//! transition and paints the result.

use crate::app::domain::{Catalog, NavigationState, Step};

/// What the main content pane displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentView<'a> {
    Welcome,
    Composer,
    Step(StepView<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView<'a> {
    pub tutorial_title: &'a str,
    pub step: &'a Step,
    pub index: usize,
    pub total: usize,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl StepView<'_> {
    /// "Step 2 of 5"
    pub fn position_label(&self) -> String {
        format!("Step {} of {}", self.index + 1, self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub label: String,
    pub highlighted: bool,
}

/// Rows of the side list. `Hidden` when the sidebar is toggled off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarView {
    Hidden,
    Tutorials(Vec<SidebarEntry>),
    Steps(Vec<SidebarEntry>),
}

impl SidebarView {
    pub fn entries(&self) -> &[SidebarEntry] {
        match self {
            SidebarView::Hidden => &[],
            SidebarView::Tutorials(entries) | SidebarView::Steps(entries) => entries,
        }
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.entries().iter().position(|e| e.highlighted)
    }
}

pub fn derive_content<'a>(state: &NavigationState, catalog: &'a Catalog) -> ContentView<'a> {
    if state.composer_active {
        return ContentView::Composer;
    }

    let Some(tutorial) = state
        .selected_tutorial
        .as_ref()
        .and_then(|id| catalog.get(id))
    else {
        return ContentView::Welcome;
    };

    match tutorial.step(state.current_step) {
        Some(step) => ContentView::Step(StepView {
            tutorial_title: &tutorial.title,
            step,
            index: state.current_step,
            total: tutorial.step_count(),
            previous_enabled: state.current_step > 0,
            next_enabled: state.current_step < tutorial.last_index(),
        }),
        None => ContentView::Welcome,
    }
}

pub fn derive_sidebar(state: &NavigationState, catalog: &Catalog) -> SidebarView {
    if !state.sidebar_visible {
        return SidebarView::Hidden;
    }

    match state.selected_tutorial.as_ref().and_then(|id| catalog.get(id)) {
        Some(tutorial) => SidebarView::Steps(
            tutorial
                .steps
                .iter()
                .enumerate()
                .map(|(i, step)| SidebarEntry {
                    label: format!("{}. {}", i + 1, step.title),
                    highlighted: i == state.current_step,
                })
                .collect(),
        ),
        None => SidebarView::Tutorials(
            catalog
                .tutorials()
                .iter()
                .map(|t| SidebarEntry {
                    label: t.title.clone(),
                    highlighted: false,
                })
                .collect(),
        ),
    }
}
