use std::path::PathBuf;
use std::rc::Rc;

use fltk::{app, dialog, prelude::*};

use codelabs::app::domain::{AppSettings, Catalog, Message};
use codelabs::app::infrastructure::logging::init_logging;
use codelabs::app::services::submission::LogSink;
use codelabs::app::state::AppState;
use codelabs::ui::main_window::build_main_window;
use codelabs::ui::menu::build_menu;

fn main() {
    init_logging();

    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    let settings = AppSettings::load();

    // A catalog path on the command line wins over the configured one.
    let catalog_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| settings.catalog_path.clone());
    let (catalog, failure) = Catalog::load_or_builtin(catalog_path.as_deref());
    if let Some(e) = failure {
        dialog::alert_default(&format!("Could not load catalog, using the built-in one.\n{}", e));
    }

    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(&settings, &sender);
    build_menu(&mut widgets.menu, &sender, &settings);

    let mut state = AppState::new(
        widgets,
        Rc::new(catalog),
        settings,
        Box::new(LogSink::new()),
        sender,
    );
    state.widgets.wind.show();
    tracing::info!("codelabs started");

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            state.handle(msg);
        }
    }
}
