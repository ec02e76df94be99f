pub mod chat_input_bar;
pub mod chat_message;
pub mod chat_panel;
pub mod games_panel;
pub mod hub_panel;
pub mod language_selector;
pub mod memory_game;
pub mod quiz_battle;
pub mod reaction_speed;
