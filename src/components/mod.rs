pub mod app;
pub mod browse_view;
pub mod chat_panel;
pub mod create_view;
pub mod game_card;
pub mod game_modal;
pub mod game_preview;
pub mod publish_bar;
pub mod template_gallery;
