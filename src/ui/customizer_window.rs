use fltk::{
    app::{self, Sender},
    button::Button,
    enums::{Align, CallbackTrigger, Color, Event, Font, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    input::Input,
    menu::Choice,
    prelude::*,
    window::Window,
};

use super::checkout_panel::CheckoutPanel;
use super::theme::{self, ACCENT, ADDED_GREEN, PREVIEW_BG};
use crate::app::controllers::customizer::{AddToCartButton, Customizer};
use crate::app::domain::customization::Opacity;
use crate::app::domain::messages::Message;
use crate::app::domain::settings::StoreSettings;

const WIDTH: i32 = 480;
const HEIGHT: i32 = 620;

const ADD_LABEL: &str = "Thêm vào giỏ  @+";
const ADDED_LABEL: &str = "Đã thêm!  @circle";

pub struct CustomizerWidgets {
    pub window: Window,
    pub overlay: Frame,
    pub text_input: Input,
    pub color_buttons: Vec<Button>,
    pub font_choice: Choice,
    pub add_to_cart: Button,
    pub cart_icon: Button,
    pub checkout: CheckoutPanel,
}

pub fn build_customizer_window(settings: &StoreSettings, sender: &Sender<Message>) -> CustomizerWidgets {
    let mut window = Window::new(100, 100, WIDTH, HEIGHT, "ToteCraft");
    window.set_xclass("ToteCraft");

    let mut flex = Flex::new(0, 0, WIDTH, HEIGHT, None);
    flex.set_type(FlexType::Column);
    flex.set_margin(20);
    flex.set_spacing(10);

    // Header: shop name + cart icon
    let mut header = Flex::default();
    header.set_type(FlexType::Row);
    let mut brand = Frame::default().with_label("ToteCraft - Túi vải in tên");
    brand.set_label_font(Font::HelveticaBold);
    brand.set_label_size(18);
    brand.set_align(Align::Left | Align::Inside);
    let mut cart_icon = Button::default();
    cart_icon.set_frame(FrameType::RoundUpBox);
    let s = *sender;
    cart_icon.set_callback(move |_| s.send(Message::OpenCheckout));
    header.fixed(&cart_icon, 90);
    header.end();
    flex.fixed(&header, 36);

    // Tote canvas with the live overlay text
    let mut overlay = Frame::default();
    overlay.set_frame(FrameType::FlatBox);
    overlay.set_color(theme::to_color(PREVIEW_BG));
    overlay.set_label_size(32);
    flex.fixed(&overlay, 220);

    let mut text_caption = Frame::default().with_label("Nội dung in");
    text_caption.set_align(Align::Left | Align::Inside);
    flex.fixed(&text_caption, 20);

    let mut text_input = Input::default();
    text_input.set_trigger(CallbackTrigger::Changed);
    let s = *sender;
    text_input.set_callback(move |i| s.send(Message::TextEdited(i.value())));
    flex.fixed(&text_input, 32);

    let mut color_caption = Frame::default().with_label("Màu chữ");
    color_caption.set_align(Align::Left | Align::Inside);
    flex.fixed(&color_caption, 20);

    let mut color_row = Flex::default();
    color_row.set_type(FlexType::Row);
    color_row.set_spacing(8);
    let mut color_buttons = Vec::with_capacity(settings.palette.len());
    for (index, option) in settings.palette.iter().enumerate() {
        let mut btn = Button::default();
        btn.set_color(theme::overlay_color(&option.hex, Opacity::Full));
        btn.set_tooltip(&option.name);
        let s = *sender;
        btn.set_callback(move |_| s.send(Message::ColorPicked(index)));
        color_row.fixed(&btn, 36);
        color_buttons.push(btn);
    }
    color_row.end();
    flex.fixed(&color_row, 36);

    let mut font_caption = Frame::default().with_label("Phông chữ");
    font_caption.set_align(Align::Left | Align::Inside);
    flex.fixed(&font_caption, 20);

    let mut font_choice = Choice::default();
    for family in &settings.fonts {
        // '/' and '|' are menu path separators
        font_choice.add_choice(&family.replace(['/', '|'], " "));
    }
    let s = *sender;
    font_choice.set_callback(move |c| {
        if c.value() >= 0 {
            s.send(Message::FontPicked(c.value() as usize));
        }
    });
    flex.fixed(&font_choice, 32);

    // Filler keeps the add button at the bottom
    Frame::default();

    let mut add_to_cart = Button::default();
    add_to_cart.set_label_font(Font::HelveticaBold);
    add_to_cart.set_label_color(Color::White);
    let s = *sender;
    add_to_cart.set_callback(move |_| s.send(Message::AddToCart));
    flex.fixed(&add_to_cart, 48);

    flex.end();

    // Added last so it stacks above the form when shown
    let checkout = CheckoutPanel::build(WIDTH, HEIGHT, sender);

    window.end();

    let s = *sender;
    window.set_callback(move |_| {
        if app::event() == Event::Close {
            s.send(Message::Quit);
        }
    });

    CustomizerWidgets {
        window,
        overlay,
        text_input,
        color_buttons,
        font_choice,
        add_to_cart,
        cart_icon,
        checkout,
    }
}

impl CustomizerWidgets {
    /// Push the controller state onto every widget.
    pub fn render(&mut self, customizer: &Customizer) {
        let preview = customizer.preview();
        self.overlay.set_label(&theme::escape_label(&preview.text));
        self.overlay
            .set_label_color(theme::overlay_color(&preview.color, preview.opacity));
        self.overlay.set_label_font(theme::resolve_font(&preview.font));

        let active = customizer.active_color();
        for (index, btn) in self.color_buttons.iter_mut().enumerate() {
            let frame = if active == Some(index) {
                FrameType::DownBox
            } else {
                FrameType::UpBox
            };
            btn.set_frame(frame);
        }

        if let Some(font) = customizer.active_font() {
            if self.font_choice.value() != font as i32 {
                self.font_choice.set_value(font as i32);
            }
        }

        match customizer.add_button() {
            AddToCartButton::Idle => {
                self.add_to_cart.set_label(ADD_LABEL);
                self.add_to_cart.set_color(theme::to_color(ACCENT));
            }
            AddToCartButton::Added => {
                self.add_to_cart.set_label(ADDED_LABEL);
                self.add_to_cart.set_color(theme::to_color(ADDED_GREEN));
            }
        }

        self.cart_icon
            .set_label(&format!("\u{1f6d2} {}", customizer.cart_count()));

        self.checkout.render(customizer);
        self.window.redraw();
    }
}
