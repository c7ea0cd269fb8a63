//! Terminal UI: renders the game and forwards key presses to the
//! [`Game`](crate::game::Game) controller.

mod app;
mod game_view;

pub use app::App;
pub use game_view::{title, PlayerStyle, Players};
