use std::rc::Rc;

use crate::app::domain::{Catalog, NavigationState, Tutorial, TutorialId};
use crate::app::services::view::{self, ContentView, SidebarView};

/// Owns the navigation state and routes every change to it.
///
/// Boundary requests (stepping past either end, unknown ids, out-of-range
/// indices) are ignored. Each operation reports whether anything changed.
pub struct NavigationController {
    state: NavigationState,
    catalog: Rc<Catalog>,
}

impl NavigationController {
    pub fn new(catalog: Rc<Catalog>, sidebar_visible: bool) -> Self {
        Self {
            state: NavigationState::new(sidebar_visible),
            catalog,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected_tutorial(&self) -> Option<&Tutorial> {
        self.state
            .selected_tutorial
            .as_ref()
            .and_then(|id| self.catalog.get(id))
    }

    pub fn select_tutorial(&mut self, id: &TutorialId) -> bool {
        if !self.catalog.contains(id) {
            tracing::warn!(%id, "ignoring selection of unknown tutorial");
            return false;
        }
        let next = NavigationState {
            selected_tutorial: Some(id.clone()),
            current_step: 0,
            composer_active: false,
            ..self.state.clone()
        };
        tracing::debug!(%id, "select tutorial");
        self.replace(next)
    }

    pub fn go_home(&mut self) -> bool {
        let next = NavigationState {
            selected_tutorial: None,
            current_step: 0,
            composer_active: false,
            ..self.state.clone()
        };
        self.replace(next)
    }

    pub fn start_composing(&mut self) -> bool {
        let next = NavigationState {
            selected_tutorial: None,
            current_step: 0,
            composer_active: true,
            ..self.state.clone()
        };
        self.replace(next)
    }

    pub fn advance_step(&mut self) -> bool {
        let Some(last) = self.selected_tutorial().map(Tutorial::last_index) else {
            return false;
        };
        if self.state.current_step >= last {
            return false;
        }
        self.state.current_step += 1;
        true
    }

    pub fn retreat_step(&mut self) -> bool {
        if self.selected_tutorial().is_none() || self.state.current_step == 0 {
            return false;
        }
        self.state.current_step -= 1;
        true
    }

    pub fn jump_to_step(&mut self, index: usize) -> bool {
        let Some(count) = self.selected_tutorial().map(Tutorial::step_count) else {
            return false;
        };
        if index >= count || index == self.state.current_step {
            return false;
        }
        self.state.current_step = index;
        true
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.state.sidebar_visible = !self.state.sidebar_visible;
        true
    }

    /// Act on a click on the `position`-th sidebar row: a step when a tutorial
    /// is open, otherwise a tutorial from the catalog listing.
    pub fn activate_sidebar_entry(&mut self, position: usize) -> bool {
        if self.state.selected_tutorial.is_some() {
            return self.jump_to_step(position);
        }
        match self.catalog.nth(position).map(|t| t.id.clone()) {
            Some(id) => self.select_tutorial(&id),
            None => false,
        }
    }

    pub fn content(&self) -> ContentView<'_> {
        view::derive_content(&self.state, &self.catalog)
    }

    pub fn sidebar(&self) -> SidebarView {
        view::derive_sidebar(&self.state, &self.catalog)
    }

    fn replace(&mut self, next: NavigationState) -> bool {
        if next == self.state {
            return false;
        }
        self.state = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::Step;

    fn weather_catalog() -> Rc<Catalog> {
        let steps = (0..5)
            .map(|i| Step::new(format!("S{}", i), format!("content {}", i)))
            .collect();
        Rc::new(
            Catalog::new(vec![
                Tutorial {
                    id: TutorialId::new("weather-app"),
                    title: "React Weather App".into(),
                    steps,
                },
                Tutorial {
                    id: TutorialId::new("todo"),
                    title: "Todo List".into(),
                    steps: vec![Step::new("Only", "one")],
                },
            ])
            .unwrap(),
        )
    }

    fn weather() -> TutorialId {
        TutorialId::new("weather-app")
    }

    fn displayed_title(nav: &NavigationController) -> Option<String> {
        match nav.content() {
            ContentView::Step(view) => Some(view.step.title.clone()),
            _ => None,
        }
    }

    #[test]
    fn test_jump_displays_requested_step() {
        let catalog = weather_catalog();
        let mut nav = NavigationController::new(catalog.clone(), true);
        for tutorial in catalog.tutorials() {
            nav.select_tutorial(&tutorial.id);
            for (i, step) in tutorial.steps.iter().enumerate() {
                nav.jump_to_step(i);
                match nav.content() {
                    ContentView::Step(view) => assert_eq!(view.step, step),
                    other => panic!("expected step view, got {:?}", other),
                }
            }
        }
    }

    #[test]
    fn test_advance_at_last_step_is_noop() {
        let mut nav = NavigationController::new(weather_catalog(), true);
        nav.select_tutorial(&weather());
        nav.jump_to_step(4);
        let before = nav.state().clone();
        assert!(!nav.advance_step());
        assert_eq!(nav.state(), &before);
    }

    #[test]
    fn test_retreat_at_first_step_is_noop() {
        let mut nav = NavigationController::new(weather_catalog(), true);
        nav.select_tutorial(&weather());
        let before = nav.state().clone();
        assert!(!nav.retreat_step());
        assert_eq!(nav.state(), &before);
    }

    #[test]
    fn test_stepping_without_selection_is_noop() {
        let mut nav = NavigationController::new(weather_catalog(), true);
        let before = nav.state().clone();
        assert!(!nav.advance_step());
        assert!(!nav.retreat_step());
        assert!(!nav.jump_to_step(1));
        assert_eq!(nav.state(), &before);
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let mut nav = NavigationController::new(weather_catalog(), true);
        nav.select_tutorial(&weather());
        nav.jump_to_step(2);
        assert!(!nav.jump_to_step(5));
        assert_eq!(nav.state().current_step, 2);
    }

    #[test]
    fn test_select_resets_step_and_composer() {
        let mut nav = NavigationController::new(weather_catalog(), true);
        nav.select_tutorial(&weather());
        nav.advance_step();
        nav.advance_step();
        nav.select_tutorial(&TutorialId::new("todo"));
        assert_eq!(nav.state().current_step, 0);

        nav.start_composing();
        nav.select_tutorial(&weather());
        assert_eq!(nav.state().current_step, 0);
        assert!(!nav.state().composer_active);
    }

    #[test]
    fn test_reselecting_same_tutorial_returns_to_first_step() {
        let mut nav = NavigationController::new(weather_catalog(), true);
        nav.select_tutorial(&weather());
        nav.advance_step();
        assert!(nav.select_tutorial(&weather()));
        assert_eq!(nav.state().current_step, 0);
    }

    #[test]
    fn test_composer_and_selection_are_exclusive() {
        let mut nav = NavigationController::new(weather_catalog(), true);

        nav.start_composing();
        assert!(nav.state().composer_active);
        assert!(nav.state().selected_tutorial.is_none());

        nav.select_tutorial(&weather());
        assert!(!nav.state().composer_active);
        assert_eq!(nav.state().selected_tutorial, Some(weather()));

        nav.start_composing();
        assert!(nav.state().composer_active);
        assert!(nav.state().selected_tutorial.is_none());
        assert_eq!(nav.state().current_step, 0);
    }

    #[test]
    fn test_home_and_compose_are_idempotent() {
        let mut nav = NavigationController::new(weather_catalog(), true);
        assert!(!nav.go_home());
        assert!(nav.start_composing());
        assert!(!nav.start_composing());
        assert!(nav.go_home());
        assert!(nav.state().is_home());
    }

    #[test]
    fn test_unknown_tutorial_is_ignored() {
        let mut nav = NavigationController::new(weather_catalog(), true);
        nav.start_composing();
        let before = nav.state().clone();
        assert!(!nav.select_tutorial(&TutorialId::new("missing")));
        assert_eq!(nav.state(), &before);
    }

    #[test]
    fn test_toggle_sidebar_keeps_selection() {
        let mut nav = NavigationController::new(weather_catalog(), true);
        nav.select_tutorial(&weather());
        nav.advance_step();
        nav.toggle_sidebar();
        assert!(!nav.state().sidebar_visible);
        assert_eq!(nav.sidebar(), SidebarView::Hidden);
        assert_eq!(nav.state().current_step, 1);
        nav.toggle_sidebar();
        assert!(nav.state().sidebar_visible);
    }

    #[test]
    fn test_sidebar_activation_follows_projection() {
        let mut nav = NavigationController::new(weather_catalog(), true);

        assert!(nav.activate_sidebar_entry(1));
        assert_eq!(nav.state().selected_tutorial, Some(TutorialId::new("todo")));

        nav.select_tutorial(&weather());
        assert!(nav.activate_sidebar_entry(3));
        assert_eq!(nav.state().current_step, 3);
        assert_eq!(nav.sidebar().highlighted(), Some(3));

        nav.go_home();
        assert!(!nav.activate_sidebar_entry(7));
        assert!(nav.state().is_home());
    }

    #[test]
    fn test_weather_app_walkthrough() {
        let mut nav = NavigationController::new(weather_catalog(), true);

        nav.select_tutorial(&weather());
        let ContentView::Step(view) = nav.content() else {
            panic!("expected step view");
        };
        assert_eq!(view.step.title, "S0");
        assert!(!view.previous_enabled);
        assert!(view.next_enabled);

        for _ in 0..4 {
            assert!(nav.advance_step());
        }
        let ContentView::Step(view) = nav.content() else {
            panic!("expected step view");
        };
        assert_eq!(view.step.title, "S4");
        assert!(!view.next_enabled);
        assert!(view.previous_enabled);

        nav.go_home();
        assert!(nav.state().selected_tutorial.is_none());
        assert_eq!(nav.content(), ContentView::Welcome);
        assert_eq!(displayed_title(&nav), None);
    }
}
