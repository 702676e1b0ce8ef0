use std::rc::Rc;

use fltk::{app::Sender, dialog, prelude::*};

use super::controllers::composer::TutorialComposer;
use super::controllers::navigation::NavigationController;
use super::domain::{AppSettings, Catalog, Message};
use super::services::submission::SubmissionSink;
use super::services::view::ContentView;
use crate::ui::main_window::MainWidgets;
use crate::ui::menu::sync_sidebar_toggle;
use crate::ui::sidebar::render_sidebar;
use crate::ui::theme::{apply_theme, palette};

/// Main application coordinator: owns the widgets and both controllers and
/// turns each received `Message` into a controller call plus a repaint.
pub struct AppState {
    pub widgets: MainWidgets,
    pub navigation: NavigationController,
    pub composer: TutorialComposer,
    pub settings: AppSettings,
    pub sender: Sender<Message>,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        catalog: Rc<Catalog>,
        settings: AppSettings,
        sink: Box<dyn SubmissionSink>,
        sender: Sender<Message>,
    ) -> Self {
        let navigation = NavigationController::new(catalog, settings.sidebar_visible);
        let composer = TutorialComposer::new(sink);

        let mut state = Self {
            widgets,
            navigation,
            composer,
            settings,
            sender,
        };
        apply_theme(&mut state.widgets, state.settings.theme_mode.is_dark());
        state.rebuild_composer_form();
        state.refresh();
        state
    }

    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::GoHome => {
                if self.navigation.go_home() {
                    self.refresh();
                }
            }
            Message::NextStep => {
                if self.navigation.advance_step() {
                    self.refresh();
                }
            }
            Message::PreviousStep => {
                if self.navigation.retreat_step() {
                    self.refresh();
                }
            }
            Message::SidebarActivated(position) => {
                self.navigation.activate_sidebar_entry(position);
                // Repaint even on a no-op so the browser selection snaps back.
                self.refresh();
            }
            Message::ToggleSidebar => {
                self.navigation.toggle_sidebar();
                let visible = self.navigation.state().sidebar_visible;
                self.settings.sidebar_visible = visible;
                sync_sidebar_toggle(&mut self.widgets.menu, visible);
                self.refresh();
            }
            Message::ToggleDarkMode => {
                self.settings.theme_mode = self.settings.theme_mode.toggled();
                apply_theme(&mut self.widgets, self.settings.theme_mode.is_dark());
                self.rebuild_composer_form();
            }
            Message::StartComposing => {
                if self.navigation.start_composing() {
                    self.refresh();
                }
            }
            Message::DraftTitleChanged(text) => self.composer.set_title(text),
            Message::DraftStepChanged { index, field, value } => {
                self.composer.set_step_field(index, field, value);
            }
            Message::DraftAddStep => {
                self.composer.add_step();
                self.rebuild_composer_form();
            }
            Message::DraftRemoveStep(index) => {
                if self.composer.remove_step(index) {
                    self.rebuild_composer_form();
                }
            }
            Message::DraftSubmit => self.submit_draft(),
            Message::Quit | Message::WindowClose => self.quit(),
        }
    }

    /// Repaint sidebar and content pane from the current navigation state.
    pub fn refresh(&mut self) {
        let sidebar = self.navigation.sidebar();
        render_sidebar(&mut self.widgets.sidebar, &sidebar);

        let w = &mut self.widgets;
        match self.navigation.content() {
            ContentView::Welcome => {
                w.step.group.hide();
                w.composer.hide();
                w.welcome.group.show();
            }
            ContentView::Composer => {
                w.welcome.group.hide();
                w.step.group.hide();
                w.composer.show();
            }
            ContentView::Step(view) => {
                w.welcome.group.hide();
                w.composer.hide();
                w.step.group.show();
                w.step.show_step(&view);
            }
        }

        w.body.layout();
        w.content.layout();
        w.wind.redraw();
    }

    fn rebuild_composer_form(&mut self) {
        let can_remove = self.composer.can_remove_steps();
        let colors = palette(self.settings.theme_mode.is_dark());
        self.widgets
            .composer
            .rebuild(self.composer.draft(), can_remove, &colors);
    }

    fn submit_draft(&mut self) {
        match self.composer.submit() {
            Ok(submission) => {
                self.rebuild_composer_form();
                dialog::message_default(&format!(
                    "Created codelab \"{}\" with {} step(s).",
                    submission.title,
                    submission.steps.len()
                ));
            }
            Err(e) => {
                tracing::debug!("submission blocked: {e}");
                dialog::alert_default(&e.to_string());
            }
        }
    }

    fn quit(&mut self) {
        self.settings.sidebar_visible = self.navigation.state().sidebar_visible;
        self.settings.window_width = self.widgets.wind.w().max(0) as u32;
        self.settings.window_height = self.widgets.wind.h().max(0) as u32;
        if let Err(e) = self.settings.save() {
            tracing::error!("failed to save settings: {e}");
        }
        tracing::info!("shutting down");
        // The event loop ends once no window is shown.
        self.widgets.wind.hide();
    }
}
