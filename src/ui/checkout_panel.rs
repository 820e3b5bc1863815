use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, CallbackTrigger, Color, Event, Font, FrameType},
    frame::Frame,
    group::Group,
    input::{Input, MultilineInput},
    prelude::*,
};

use super::theme::{self, ACCENT, BACKDROP};
use crate::app::controllers::customizer::{Customizer, ModalState};
use crate::app::domain::messages::Message;

/// Checkout overlay: a backdrop covering the window plus the form card.
pub struct CheckoutPanel {
    pub overlay: Group,
    pub content: Group,
    pub name_input: Input,
    pub phone_input: Input,
    pub address_input: MultilineInput,
    pub file_button: Button,
    pub file_label: Frame,
    pub submit_button: Button,
    pub close_button: Button,
}

fn text_input<I: InputExt + WidgetBase>(
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    label: &'static str,
    sender: &Sender<Message>,
    msg: fn(String) -> Message,
) -> I {
    let mut input = I::new(x, y, w, h, None);
    input.set_label(label);
    input.set_align(Align::TopLeft);
    input.set_trigger(CallbackTrigger::Changed);
    let s = *sender;
    input.set_callback(move |i| s.send(msg(i.value())));
    input
}

impl CheckoutPanel {
    pub fn build(w: i32, h: i32, sender: &Sender<Message>) -> Self {
        let mut overlay = Group::new(0, 0, w, h, None);

        let mut backdrop = Frame::new(0, 0, w, h, None);
        backdrop.set_frame(FrameType::FlatBox);
        backdrop.set_color(theme::to_color(BACKDROP));
        let s = *sender;
        backdrop.handle(move |_, ev| match ev {
            Event::Push => {
                s.send(Message::BackdropClicked);
                true
            }
            _ => false,
        });

        let (cx, cy, cw, ch) = (40, 70, w - 80, 470);
        let mut content = Group::new(cx, cy, cw, ch, None);

        // Swallows clicks on the card so they never reach the backdrop
        let mut card = Frame::new(cx, cy, cw, ch, None);
        card.set_frame(FrameType::FlatBox);
        card.set_color(Color::White);
        card.handle(|_, ev| matches!(ev, Event::Push));

        let mut title = Frame::new(cx + 20, cy + 15, cw - 80, 30, "Thông tin đặt hàng");
        title.set_label_font(Font::HelveticaBold);
        title.set_label_size(18);
        title.set_align(Align::Left | Align::Inside);

        let mut close_button = Button::new(cx + cw - 45, cy + 15, 30, 30, "X");
        close_button.set_frame(FrameType::FlatBox);
        close_button.set_color(Color::White);
        let s = *sender;
        close_button.set_callback(move |_| s.send(Message::CloseCheckout));

        let fx = cx + 20;
        let fw = cw - 40;
        let name_input: Input = text_input(fx, cy + 80, fw, 30, "Họ và tên", sender, Message::NameEdited);
        let phone_input: Input = text_input(fx, cy + 140, fw, 30, "Số điện thoại", sender, Message::PhoneEdited);
        let address_input: MultilineInput =
            text_input(fx, cy + 200, fw, 60, "Địa chỉ giao hàng", sender, Message::AddressEdited);

        let mut proof_caption = Frame::new(fx, cy + 275, fw, 20, "Ảnh chuyển khoản");
        proof_caption.set_align(Align::Left | Align::Inside);

        let mut file_button = Button::new(fx, cy + 300, 110, 30, "Chọn file");
        let s = *sender;
        file_button.set_callback(move |_| s.send(Message::BrowseProof));

        let mut file_label = Frame::new(fx + 120, cy + 300, fw - 120, 30, None);
        file_label.set_align(Align::Left | Align::Inside | Align::Clip);
        file_label.set_label_color(Color::from_rgb(110, 110, 110));

        let mut submit_button = Button::new(fx, cy + ch - 70, fw, 44, None);
        submit_button.set_color(theme::to_color(ACCENT));
        submit_button.set_label_color(Color::White);
        submit_button.set_label_font(Font::HelveticaBold);
        let s = *sender;
        submit_button.set_callback(move |_| s.send(Message::SubmitOrder));

        content.end();
        overlay.end();
        overlay.hide();

        Self {
            overlay,
            content,
            name_input,
            phone_input,
            address_input,
            file_button,
            file_label,
            submit_button,
            close_button,
        }
    }

    pub fn render(&mut self, customizer: &Customizer) {
        match customizer.modal() {
            ModalState::Closed => self.overlay.hide(),
            ModalState::Open => {
                self.overlay.show();
                self.content.activate();
            }
            ModalState::Closing => {
                self.overlay.show();
                self.content.deactivate();
            }
        }

        // Only push values back when the controller diverges (after a reset)
        let form = customizer.form();
        sync_value(&mut self.name_input, &form.name);
        sync_value(&mut self.phone_input, &form.phone);
        sync_value(&mut self.address_input, &form.address);

        let proof_label = theme::escape_label(customizer.proof_label());
        if self.file_label.label() != proof_label {
            self.file_label.set_label(&proof_label);
        }

        let submit = customizer.submit_button();
        self.submit_button.set_label(submit.label);
        if submit.enabled {
            self.submit_button.activate();
        } else {
            self.submit_button.deactivate();
        }

        self.overlay.redraw();
    }
}

fn sync_value<I: InputExt>(input: &mut I, value: &str) {
    if input.value() != value {
        input.set_value(value);
    }
}
