use std::sync::Arc;

use fltk::{app, prelude::*};

use tote_craft::app::services::order_intake::{HttpOrderIntake, OrderTransport};
use tote_craft::app::{Customizer, Message, StoreSettings};
use tote_craft::ui::customizer_window::build_customizer_window;
use tote_craft::ui::effects::run_effect;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = StoreSettings::load();
    log::info!("Orders go to {}", settings.order_endpoint);
    let transport: Arc<dyn OrderTransport> = Arc::new(HttpOrderIntake::from_settings(&settings));

    let mut widgets = build_customizer_window(&settings, &sender);
    let mut customizer = Customizer::new(settings);
    widgets.render(&customizer);
    widgets.window.show();

    while app.wait() {
        let Some(msg) = receiver.recv() else {
            continue;
        };
        if msg == Message::Quit {
            app.quit();
            break;
        }
        for effect in customizer.dispatch(msg) {
            run_effect(effect, &sender, &transport);
        }
        widgets.render(&customizer);
    }
}
