use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Font},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
    text::{TextBuffer, TextDisplay, WrapMode},
};

use crate::app::domain::Message;
use crate::app::services::view::StepView;

/// Landing view shown when nothing is selected.
pub struct WelcomePane {
    pub group: Flex,
    pub heading: Frame,
    pub blurb: Frame,
    pub create: Button,
}

impl WelcomePane {
    pub fn new(sender: &Sender<Message>) -> Self {
        let mut group = Flex::default();
        group.set_type(FlexType::Column);
        group.set_pad(16);

        Frame::default();

        let mut heading = Frame::default().with_label("Welcome to Codelabs");
        heading.set_label_font(Font::HelveticaBold);
        heading.set_label_size(26);
        group.fixed(&heading, 48);

        let mut blurb = Frame::default().with_label(
            "Select a codelab from the sidebar to get started or create a new one.",
        );
        blurb.set_label_size(16);
        group.fixed(&blurb, 32);

        let mut row = Flex::default();
        row.set_type(FlexType::Row);
        Frame::default();
        let mut create = Button::default().with_label("@+  Create New Codelab");
        create.set_callback({ let s = *sender; move |_| s.send(Message::StartComposing) });
        row.fixed(&create, 220);
        Frame::default();
        row.end();
        group.fixed(&row, 40);

        Frame::default();
        group.end();

        Self {
            group,
            heading,
            blurb,
            create,
        }
    }
}

/// One step of the selected tutorial with Previous/Next controls.
pub struct StepPane {
    pub group: Flex,
    pub position: Frame,
    pub title: Frame,
    pub body: TextDisplay,
    pub buffer: TextBuffer,
    pub previous: Button,
    pub next: Button,
}

impl StepPane {
    pub fn new(sender: &Sender<Message>, font_size: i32) -> Self {
        let mut group = Flex::default();
        group.set_type(FlexType::Column);
        group.set_pad(10);

        let mut position = Frame::default();
        position.set_align(Align::Left | Align::Inside);
        position.set_label_size(13);
        group.fixed(&position, 20);

        let mut title = Frame::default();
        title.set_align(Align::Left | Align::Inside);
        title.set_label_font(Font::HelveticaBold);
        title.set_label_size(26);
        group.fixed(&title, 44);

        let buffer = TextBuffer::default();
        let mut body = TextDisplay::default();
        body.set_buffer(buffer.clone());
        body.wrap_mode(WrapMode::AtBounds, 0);
        body.set_text_font(Font::Courier);
        body.set_text_size(font_size);

        let mut nav = Flex::default();
        nav.set_type(FlexType::Row);
        let mut previous = Button::default().with_label("@<-  Previous");
        previous.set_callback({ let s = *sender; move |_| s.send(Message::PreviousStep) });
        nav.fixed(&previous, 130);
        Frame::default();
        let mut next = Button::default().with_label("Next  @->");
        next.set_callback({ let s = *sender; move |_| s.send(Message::NextStep) });
        nav.fixed(&next, 130);
        nav.end();
        group.fixed(&nav, 36);

        group.end();

        Self {
            group,
            position,
            title,
            body,
            buffer,
            previous,
            next,
        }
    }

    pub fn show_step(&mut self, view: &StepView<'_>) {
        self.position
            .set_label(&format!("{}  \u{2022}  {}", view.tutorial_title, view.position_label()));
        self.title.set_label(&view.step.title);
        self.buffer.set_text(view.step.content.trim());
        self.body.scroll(0, 0);

        // Controls that would be no-ops are not offered.
        if view.previous_enabled {
            self.previous.show();
        } else {
            self.previous.hide();
        }
        if view.next_enabled {
            self.next.show();
        } else {
            self.next.hide();
        }
        self.group.layout();
        self.group.redraw();
    }
}
