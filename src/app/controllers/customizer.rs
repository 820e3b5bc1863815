use std::path::PathBuf;
use std::time::Duration;

use crate::app::domain::cart::CartState;
use crate::app::domain::customization::{CustomizationState, Preview};
use crate::app::domain::effects::{Effect, Notice};
use crate::app::domain::messages::{Message, SubmissionOutcome};
use crate::app::domain::order::{self, OrderForm, OrderPayload, Product, ProofFile};
use crate::app::domain::settings::StoreSettings;

pub const SUBMIT_LABEL: &str = "Hoàn tất đặt hàng";
pub const SUBMITTING_LABEL: &str = "Đang gửi đơn hàng...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open,
    /// Still visible while the close animation runs; a scheduled
    /// `HideCheckout` finishes the transition.
    Closing,
}

impl ModalState {
    pub fn is_visible(self) -> bool {
        self != ModalState::Closed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddToCartButton {
    Idle,
    Added,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: &'static str,
    pub enabled: bool,
}

/// Owns every piece of customizer state. Widgets only ever see it through
/// the getters below; all changes go through `dispatch`.
pub struct Customizer {
    settings: StoreSettings,
    customization: CustomizationState,
    cart: CartState,
    form: OrderForm,
    modal: ModalState,
    add_button: AddToCartButton,
    submitting: bool,
}

impl Customizer {
    pub fn new(settings: StoreSettings) -> Self {
        Self {
            settings,
            customization: CustomizationState::new(),
            cart: CartState::new(),
            form: OrderForm::default(),
            modal: ModalState::Closed,
            add_button: AddToCartButton::Idle,
            submitting: false,
        }
    }

    /// Apply one message and return the effects the shell must run.
    pub fn dispatch(&mut self, msg: Message) -> Vec<Effect> {
        log::debug!("dispatch {:?}", msg);
        match msg {
            Message::TextEdited(text) => {
                self.customization.set_text(text);
                Vec::new()
            }
            Message::ColorPicked(index) => {
                self.pick_color(index);
                Vec::new()
            }
            Message::FontPicked(index) => {
                self.pick_font(index);
                Vec::new()
            }
            Message::AddToCart => self.add_to_cart(),
            Message::AddToCartFeedbackElapsed => {
                self.add_button = AddToCartButton::Idle;
                Vec::new()
            }
            Message::OpenCheckout => self.open_checkout(),
            Message::CloseCheckout | Message::BackdropClicked => self.close_checkout(),
            Message::HideCheckout => {
                self.hide_checkout();
                Vec::new()
            }
            Message::NameEdited(name) => {
                self.form.name = name;
                Vec::new()
            }
            Message::PhoneEdited(phone) => {
                self.form.phone = phone;
                Vec::new()
            }
            Message::AddressEdited(address) => {
                self.form.address = address;
                Vec::new()
            }
            Message::BrowseProof => vec![Effect::PickProofFile],
            Message::ProofSelected(path) => {
                self.attach_proof(path);
                Vec::new()
            }
            Message::SubmitOrder => self.submit_order(),
            Message::OrderSettled(outcome) => self.order_settled(outcome),
            // Handled by the event loop
            Message::Quit => Vec::new(),
        }
    }

    fn pick_color(&mut self, index: usize) {
        if !self.customization.select_color(index, self.settings.palette.len()) {
            log::warn!("Ignoring color index {} outside the palette", index);
        }
    }

    fn pick_font(&mut self, index: usize) {
        if !self.customization.select_font(index, self.settings.fonts.len()) {
            log::warn!("Ignoring font index {} outside the font list", index);
        }
    }

    fn add_to_cart(&mut self) -> Vec<Effect> {
        let count = self.cart.add();
        self.add_button = AddToCartButton::Added;
        log::debug!("cart now holds {} item(s)", count);

        // Every click gets its own revert; an earlier one may land first
        vec![Effect::Schedule {
            delay: Duration::from_millis(self.settings.cart_feedback_ms),
            message: Message::AddToCartFeedbackElapsed,
        }]
    }

    fn open_checkout(&mut self) -> Vec<Effect> {
        if self.cart.is_empty() {
            return vec![Effect::Notify(Notice::EmptyCart)];
        }
        self.modal = ModalState::Open;
        Vec::new()
    }

    fn close_checkout(&mut self) -> Vec<Effect> {
        if self.modal != ModalState::Open {
            return Vec::new();
        }
        self.modal = ModalState::Closing;
        vec![Effect::Schedule {
            delay: Duration::from_millis(self.settings.modal_close_ms),
            message: Message::HideCheckout,
        }]
    }

    fn hide_checkout(&mut self) {
        // A reopen during the close window leaves the panel open
        if self.modal == ModalState::Closing {
            self.modal = ModalState::Closed;
        }
    }

    fn attach_proof(&mut self, path: Option<PathBuf>) {
        self.form.proof = path.map(ProofFile::from_path);
    }

    fn submit_order(&mut self) -> Vec<Effect> {
        if self.submitting || !self.form.is_valid() {
            return Vec::new();
        }
        self.submitting = true;

        let payload = self.build_payload();
        log::info!("Submitting order {}", payload.order_id);
        vec![Effect::SendOrder(payload)]
    }

    fn build_payload(&self) -> OrderPayload {
        let product = Product {
            text: self.customization.display_text().to_string(),
            color: self.customization.color_hex(&self.settings).to_string(),
            font: self.customization.font_family(&self.settings).to_string(),
        };
        OrderPayload::new(order::generate_order_id(), &self.form, product)
    }

    fn order_settled(&mut self, outcome: SubmissionOutcome) -> Vec<Effect> {
        self.submitting = false;
        match outcome {
            SubmissionOutcome::Delivered => {
                log::info!("Order delivered to intake endpoint");
                let mut effects = vec![Effect::Notify(Notice::OrderPlaced)];
                effects.extend(self.close_checkout());
                self.cart.reset();
                self.form.clear();
                effects
            }
            SubmissionOutcome::Failed(reason) => {
                log::error!("Order submission failed: {}", reason);
                vec![Effect::Notify(Notice::OrderFailed)]
            }
        }
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    pub fn preview(&self) -> Preview {
        self.customization.preview(&self.settings)
    }

    pub fn active_color(&self) -> Option<usize> {
        self.customization.active_color()
    }

    pub fn active_font(&self) -> Option<usize> {
        self.customization.active_font()
    }

    pub fn cart_count(&self) -> u32 {
        self.cart.item_count()
    }

    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    pub fn proof_label(&self) -> &str {
        self.form.proof_label()
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn add_button(&self) -> AddToCartButton {
        self.add_button
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_button(&self) -> SubmitButton {
        if self.submitting {
            SubmitButton {
                label: SUBMITTING_LABEL,
                enabled: false,
            }
        } else {
            SubmitButton {
                label: SUBMIT_LABEL,
                enabled: self.form.is_valid(),
            }
        }
    }
}
