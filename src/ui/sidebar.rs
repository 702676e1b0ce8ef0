use fltk::{browser::HoldBrowser, prelude::*};

use crate::app::services::view::SidebarView;

/// Browser line for one row. `@.` stops FLTK from reading the rest as format codes.
fn browser_line(label: &str, highlighted: bool) -> String {
    if highlighted {
        format!("@b@.{}", label)
    } else {
        format!("@.{}", label)
    }
}

pub fn render_sidebar(browser: &mut HoldBrowser, view: &SidebarView) {
    if matches!(view, SidebarView::Hidden) {
        browser.hide();
        return;
    }

    browser.clear();
    for entry in view.entries() {
        browser.add(&browser_line(&entry.label, entry.highlighted));
    }
    if let Some(row) = view.highlighted() {
        browser.select(row as i32 + 1);
    }
    browser.show();
    browser.redraw();
}
