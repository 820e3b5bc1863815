use std::sync::Arc;

use fltk::{app, app::Sender, dialog};

use super::file_dialogs::native_proof_dialog;
use crate::app::domain::effects::{Effect, Notice};
use crate::app::domain::messages::Message;
use crate::app::services::order_intake::{deliver_in_background, OrderTransport};

fn show_notice(notice: Notice) {
    if notice.is_error() {
        dialog::alert_default(notice.text());
    } else {
        dialog::message_default(notice.text());
    }
}

/// Carry out one controller effect. Results come back as messages.
pub fn run_effect(effect: Effect, sender: &Sender<Message>, transport: &Arc<dyn OrderTransport>) {
    match effect {
        Effect::Schedule { delay, message } => {
            let s = *sender;
            app::add_timeout3(delay.as_secs_f64(), move |_| {
                s.send(message.clone());
            });
        }
        Effect::Notify(notice) => show_notice(notice),
        Effect::PickProofFile => {
            sender.send(Message::ProofSelected(native_proof_dialog()));
        }
        Effect::SendOrder(payload) => {
            let s = *sender;
            deliver_in_background(Arc::clone(transport), payload, move |outcome| {
                s.send(Message::OrderSettled(outcome));
                app::awake();
            });
        }
    }
}
