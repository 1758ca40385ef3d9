//! Deal command handler: shuffle a fresh deck and list its top cards.
//!
//! A quick smoke test for the deck substrate; with a seed the listing is
//! fully reproducible.

use std::io::Write;

use parlor_engine::deck::Deck;

use crate::error::CliError;

pub fn handle_deal_command(
    seed: Option<u64>,
    count: usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if count == 0 || count > 52 {
        return Err(CliError::InvalidInput(format!(
            "count must be between 1 and 52, got {}",
            count
        )));
    }
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();
    for i in 1..=count {
        let card = deck.deal()?;
        writeln!(out, "{:2}. {}", i, card)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_the_requested_number_of_cards() {
        let mut out = Vec::new();
        handle_deal_command(Some(42), 5, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.lines().count(), 5);
        assert!(output.contains(" of "));
    }

    #[test]
    fn same_seed_lists_the_same_cards() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        handle_deal_command(Some(12345), 10, &mut out1).unwrap();
        handle_deal_command(Some(12345), 10, &mut out2).unwrap();
        assert_eq!(out1, out2);
    }

    #[test]
    fn rejects_a_count_beyond_the_deck() {
        let mut out = Vec::new();
        let err = handle_deal_command(Some(1), 53, &mut out).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn rejects_a_zero_count() {
        let mut out = Vec::new();
        let err = handle_deal_command(Some(1), 0, &mut out).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
    }
}
