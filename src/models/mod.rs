// Module exports for models

pub mod category;
pub mod event;
pub mod event_form;
pub mod settings;
pub mod ui;
