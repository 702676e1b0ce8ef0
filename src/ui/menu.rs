use fltk::{
    app::Sender,
    enums::{Key, Shortcut},
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::{AppSettings, Message};

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, settings: &AppSettings) {
    let s = sender;

    // File
    menu.add("File/New Codelab", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::StartComposing) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Quit) });

    // Go
    menu.add("Go/Home", Shortcut::Alt | Key::Home, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::GoHome) });
    menu.add("Go/Previous Step", Shortcut::Alt | Key::Left, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::PreviousStep) });
    menu.add("Go/Next Step", Shortcut::Alt | Key::Right, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::NextStep) });

    // View
    let sb_flag = if settings.sidebar_visible { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Toggle Sidebar", Shortcut::Ctrl | 'b', sb_flag, { let s = *s; move |_| s.send(Message::ToggleSidebar) });
    let dm_flag = if settings.theme_mode.is_dark() { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Toggle Dark Mode", Shortcut::None, dm_flag, { let s = *s; move |_| s.send(Message::ToggleDarkMode) });
}

/// Keep the sidebar toggle's check mark in sync when the header button is used.
pub fn sync_sidebar_toggle(menu: &mut MenuBar, visible: bool) {
    if let Some(mut item) = menu.find_item("View/Toggle Sidebar") {
        if visible {
            item.set();
        } else {
            item.clear();
        }
    }
}
