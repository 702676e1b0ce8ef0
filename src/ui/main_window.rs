use fltk::{
    app::{self, Sender},
    browser::HoldBrowser,
    button::Button,
    enums::{Align, Event, Font, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use super::composer_form::ComposerForm;
use super::content::{StepPane, WelcomePane};
use crate::app::domain::{AppSettings, Message};

pub const MENU_HEIGHT: i32 = 30;
pub const HEADER_HEIGHT: i32 = 44;
pub const SIDEBAR_WIDTH: i32 = 280;

pub struct HeaderBar {
    pub group: Flex,
    pub sidebar_toggle: Button,
    pub title: Frame,
    pub home: Button,
    pub new_codelab: Button,
}

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub header: HeaderBar,
    pub body: Flex,
    pub sidebar: HoldBrowser,
    pub content: Flex,
    pub welcome: WelcomePane,
    pub step: StepPane,
    pub composer: ComposerForm,
}

fn build_header(sender: &Sender<Message>) -> HeaderBar {
    let mut group = Flex::default();
    group.set_type(FlexType::Row);
    group.set_margin(6);
    group.set_frame(FrameType::FlatBox);
    group.set_pad(6);

    let mut sidebar_toggle = Button::default().with_label("@menu");
    sidebar_toggle.set_tooltip("Show or hide the sidebar");
    sidebar_toggle.set_callback({ let s = *sender; move |_| s.send(Message::ToggleSidebar) });
    group.fixed(&sidebar_toggle, 36);

    let mut title = Frame::default().with_label("Codelabs");
    title.set_align(Align::Left | Align::Inside);
    title.set_label_font(Font::HelveticaBold);
    title.set_label_size(18);

    let mut home = Button::default().with_label("Home");
    home.set_callback({ let s = *sender; move |_| s.send(Message::GoHome) });
    group.fixed(&home, 70);

    let mut new_codelab = Button::default().with_label("@+  New Codelab");
    new_codelab.set_callback({ let s = *sender; move |_| s.send(Message::StartComposing) });
    group.fixed(&new_codelab, 130);

    group.end();

    HeaderBar {
        group,
        sidebar_toggle,
        title,
        home,
        new_codelab,
    }
}

pub fn build_main_window(settings: &AppSettings, sender: &Sender<Message>) -> MainWidgets {
    let width = settings.window_width as i32;
    let height = settings.window_height as i32;

    let mut wind = Window::new(100, 100, width, height, "Codelabs");
    wind.set_xclass("Codelabs");
    wind.size_range(640, 480, 0, 0);

    let mut root = Flex::new(0, 0, width, height, None);
    root.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    root.fixed(&menu, MENU_HEIGHT);

    let header = build_header(sender);
    root.fixed(&header.group, HEADER_HEIGHT);

    let mut body = Flex::default();
    body.set_type(FlexType::Row);

    let mut sidebar = HoldBrowser::default();
    sidebar.set_text_size(settings.font_size as i32 - 2);
    sidebar.set_callback({
        let s = *sender;
        move |b| {
            // Rows are 1-based; 0 means nothing is selected.
            let line = b.value();
            if line > 0 {
                s.send(Message::SidebarActivated((line - 1) as usize));
            }
        }
    });
    body.fixed(&sidebar, SIDEBAR_WIDTH);
    if !settings.sidebar_visible {
        sidebar.hide();
    }

    let mut content = Flex::default();
    content.set_type(FlexType::Column);
    content.set_margin(24);
    content.set_frame(FrameType::FlatBox);

    let welcome = WelcomePane::new(sender);
    let step = StepPane::new(sender, settings.font_size as i32);
    let composer = ComposerForm::new(sender);

    content.end();
    body.end();
    root.end();

    wind.resizable(&root);
    wind.end();

    wind.set_callback({
        let s = *sender;
        move |_| {
            // Escape also fires the window callback; only a real close should quit.
            if app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });

    MainWidgets {
        wind,
        menu,
        header,
        body,
        sidebar,
        content,
        welcome,
        step,
        composer,
    }
}
