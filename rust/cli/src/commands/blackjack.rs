//! Blackjack command handler: play one full seeded round.
//!
//! Deals, runs the player's and dealer's draw-until-threshold turns, and
//! prints the final hands with an outcome line. `--json` emits the same
//! information as a single JSON object.

use std::io::Write;

use parlor_engine::blackjack::Blackjack;

use crate::error::CliError;

pub fn handle_blackjack_command(
    seed: Option<u64>,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut game = Blackjack::new(Some(seed));
    game.deal()?;
    let player_ok = game.player_turn()?;
    let dealer_ok = game.dealer_turn()?;

    let player_total = game.player_hand().blackjack_value();
    let dealer_total = game.dealer_hand().blackjack_value();
    // a busted player loses before the dealer is considered
    let outcome = if !player_ok {
        "Dealer wins"
    } else if !dealer_ok {
        "Player wins"
    } else if player_total > dealer_total {
        "Player wins"
    } else if dealer_total > player_total {
        "Dealer wins"
    } else {
        "Push"
    };

    if json {
        let value = serde_json::json!({
            "seed": seed,
            "player": game.player_hand().cards(),
            "player_total": player_total,
            "dealer": game.dealer_hand().cards(),
            "dealer_total": dealer_total,
            "outcome": outcome,
        });
        writeln!(out, "{}", value)?;
    } else {
        write!(out, "{}", game)?;
        writeln!(out)?;
        writeln!(out, "Outcome: {}", outcome)?;
    }
    Ok(())
}
