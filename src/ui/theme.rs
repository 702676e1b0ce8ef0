use fltk::{enums::Color, prelude::*};

use super::main_window::MainWidgets;

/// Colours for one theme. `text` is drawn on `window` and `body`.
pub struct Palette {
    pub window: Color,
    pub header: Color,
    pub text: Color,
    pub sidebar: Color,
    pub selection: Color,
    pub body: Color,
    pub body_text: Color,
}

pub fn palette(is_dark: bool) -> Palette {
    if is_dark { dark() } else { light() }
}

fn light() -> Palette {
    Palette {
        window: Color::from_rgb(249, 250, 251),
        header: Color::from_rgb(255, 255, 255),
        text: Color::from_rgb(17, 24, 39),
        sidebar: Color::from_rgb(255, 255, 255),
        selection: Color::from_rgb(219, 234, 254),
        body: Color::from_rgb(255, 255, 255),
        body_text: Color::from_rgb(31, 41, 55),
    }
}

fn dark() -> Palette {
    Palette {
        window: Color::from_rgb(25, 25, 25),
        header: Color::from_rgb(35, 35, 35),
        text: Color::from_rgb(220, 220, 220),
        sidebar: Color::from_rgb(30, 30, 30),
        selection: Color::from_rgb(50, 70, 110),
        body: Color::from_rgb(30, 30, 30),
        body_text: Color::from_rgb(220, 220, 220),
    }
}

pub fn apply_theme(widgets: &mut MainWidgets, is_dark: bool) {
    let p = palette(is_dark);

    widgets.wind.set_color(p.window);
    widgets.wind.set_label_color(p.text);

    widgets.menu.set_color(p.header);
    widgets.menu.set_text_color(p.text);

    widgets.header.group.set_color(p.header);
    widgets.header.title.set_label_color(p.text);

    widgets.sidebar.set_color(p.sidebar);
    widgets.sidebar.set_text_color(p.text);
    widgets.sidebar.set_selection_color(p.selection);

    widgets.content.set_color(p.window);
    widgets.welcome.heading.set_label_color(p.text);
    widgets.welcome.blurb.set_label_color(p.text);

    widgets.step.position.set_label_color(p.text);
    widgets.step.title.set_label_color(p.text);
    widgets.step.body.set_color(p.body);
    widgets.step.body.set_text_color(p.body_text);

    widgets.composer.scroll.set_color(p.window);

    widgets.wind.redraw();
}
