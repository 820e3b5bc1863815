pub mod checkout_panel;
pub mod customizer_window;
pub mod effects;
pub mod file_dialogs;
pub mod theme;
