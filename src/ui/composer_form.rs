//! The "Create New Codelab" form.
//!
//! The form is a vertical pack inside a scroll area. It is rebuilt from the
//! draft whenever the number of steps changes; keystrokes only send messages
//! and never trigger a rebuild, so the focused input keeps its cursor.

use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, CallbackTrigger, Color, Font},
    frame::Frame,
    group::{Flex, FlexType, Pack, PackType, Scroll, ScrollType},
    input::{Input, MultilineInput},
    prelude::*,
};

use super::theme::Palette;
use crate::app::domain::{Draft, Message, StepField};

const STEP_CARD_HEIGHT: i32 = 250;
const SCROLLBAR_ALLOWANCE: i32 = 20;

pub struct ComposerForm {
    pub scroll: Scroll,
    pub pack: Pack,
    sender: Sender<Message>,
}

fn field_label(text: &str, color: Color) -> Frame {
    let mut label = Frame::default().with_label(text);
    label.set_align(Align::Left | Align::Inside);
    label.set_label_size(13);
    label.set_label_color(color);
    label
}

impl ComposerForm {
    pub fn new(sender: &Sender<Message>) -> Self {
        let mut scroll = Scroll::default();
        scroll.set_type(ScrollType::Vertical);

        let mut pack = Pack::default();
        pack.set_type(PackType::Vertical);
        pack.set_spacing(12);
        pack.end();
        scroll.end();

        // Keep the form as wide as the visible area.
        scroll.resize_callback({
            let mut pack = pack.clone();
            move |_, x, y, w, _| {
                let h = pack.h();
                pack.resize(x, y, (w - SCROLLBAR_ALLOWANCE).max(0), h);
            }
        });

        Self {
            scroll,
            pack,
            sender: *sender,
        }
    }

    pub fn show(&mut self) {
        self.scroll.show();
    }

    pub fn hide(&mut self) {
        self.scroll.hide();
    }

    /// Recreate every field from `draft` in the colours of `palette`. The
    /// remove button on each step is only offered while `can_remove` holds.
    pub fn rebuild(&mut self, draft: &Draft, can_remove: bool, palette: &Palette) {
        let width = (self.scroll.w() - SCROLLBAR_ALLOWANCE).max(0);
        let s = self.sender;

        self.pack.clear();
        self.pack.resize(self.scroll.x(), self.scroll.y(), width, 0);
        self.pack.begin();

        let text = palette.text;

        let mut heading = Frame::default()
            .with_size(width, 44)
            .with_label("Create New Codelab");
        heading.set_align(Align::Left | Align::Inside);
        heading.set_label_font(Font::HelveticaBold);
        heading.set_label_size(24);
        heading.set_label_color(text);

        field_label("Codelab Title", text).set_size(width, 22);
        let mut title = Input::default().with_size(width, 30);
        title.set_value(&draft.title);
        title.set_trigger(CallbackTrigger::Changed);
        title.set_callback(move |i| s.send(Message::DraftTitleChanged(i.value())));

        for (index, step) in draft.steps.iter().enumerate() {
            let mut card = Flex::default().with_size(width, STEP_CARD_HEIGHT);
            card.set_type(FlexType::Column);
            card.set_margin(8);
            card.set_pad(4);
            card.set_frame(fltk::enums::FrameType::BorderBox);
            card.set_color(palette.body);

            let mut header = Flex::default();
            header.set_type(FlexType::Row);
            let mut step_heading = Frame::default().with_label(&format!("Step {}", index + 1));
            step_heading.set_align(Align::Left | Align::Inside);
            step_heading.set_label_font(Font::HelveticaBold);
            step_heading.set_label_size(16);
            step_heading.set_label_color(text);
            if can_remove {
                let mut remove = Button::default().with_label("Remove");
                remove.set_label_color(Color::from_rgb(200, 40, 40));
                remove.set_callback(move |_| s.send(Message::DraftRemoveStep(index)));
                header.fixed(&remove, 100);
            }
            header.end();
            card.fixed(&header, 28);

            let step_title_label = field_label("Step Title", text);
            card.fixed(&step_title_label, 20);
            let mut step_title = Input::default();
            step_title.set_value(&step.title);
            step_title.set_trigger(CallbackTrigger::Changed);
            step_title.set_callback(move |i| {
                s.send(Message::DraftStepChanged {
                    index,
                    field: StepField::Title,
                    value: i.value(),
                })
            });
            card.fixed(&step_title, 30);

            let step_content_label = field_label("Step Content (Markdown)", text);
            card.fixed(&step_content_label, 20);
            let mut step_content = MultilineInput::default();
            step_content.set_wrap(true);
            step_content.set_value(&step.content);
            step_content.set_trigger(CallbackTrigger::Changed);
            step_content.set_callback(move |i| {
                s.send(Message::DraftStepChanged {
                    index,
                    field: StepField::Content,
                    value: i.value(),
                })
            });

            card.end();
        }

        let mut add_step = Button::default().with_size(width, 32).with_label("@+  Add Step");
        add_step.set_callback(move |_| s.send(Message::DraftAddStep));

        let mut submit = Button::default().with_size(width, 36).with_label("Create Codelab");
        submit.set_label_font(Font::HelveticaBold);
        submit.set_callback(move |_| s.send(Message::DraftSubmit));

        self.pack.end();
        self.scroll.scroll_to(0, 0);
        self.scroll.redraw();
    }
}
