mod blackjack;
mod deal;
mod poker;

pub use blackjack::handle_blackjack_command;
pub use deal::handle_deal_command;
pub use poker::handle_poker_command;
