use std::fmt;

use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{Hand, BLACKJACK_LIMIT};

/// The player draws while strictly below this total.
pub const PLAYER_STAND: u32 = 16;
/// The dealer draws while strictly below this total (stands on 17).
pub const DEALER_STAND: u32 = 17;

/// One-deck Blackjack engine for a player against a dealer.
/// Callers drive it in phases: `reset` → `deal` → `player_turn` →
/// `dealer_turn`, then inspect the hands.
///
/// # Examples
///
/// ```
/// use parlor_engine::blackjack::Blackjack;
///
/// let mut game = Blackjack::new(Some(42));
/// game.deal().unwrap();
/// assert_eq!(game.player_hand().len(), 2);
/// assert_eq!(game.dealer_hand().len(), 2);
///
/// let player_ok = game.player_turn().unwrap();
/// let dealer_ok = game.dealer_turn().unwrap();
/// // a finished turn either stands at its threshold or busts
/// assert_eq!(player_ok, game.player_hand().blackjack_value() <= 21);
/// assert_eq!(dealer_ok, game.dealer_hand().blackjack_value() <= 21);
/// ```
#[derive(Debug)]
pub struct Blackjack {
    deck: Deck,
    player_hand: Hand,
    dealer_hand: Hand,
}

impl Blackjack {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or(0xB1AC_4ACC);
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        Self {
            deck,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
        }
    }

    /// Engine over a caller-fixed deck, for deterministic scenarios.
    pub fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
        }
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Clears both hands; with `new_deck` the deck is also restocked to a
    /// fresh shuffled 52. The deck otherwise persists across hands.
    pub fn reset(&mut self, new_deck: bool) {
        if new_deck {
            self.deck.clear();
            self.deck.build();
            self.deck.shuffle();
        }
        self.player_hand.clear();
        self.dealer_hand.clear();
    }

    /// Deals two cards each, alternating player/dealer. A deck with fewer
    /// than 4 cards forces a full reset with a new shuffled deck first; that
    /// is the designed recovery policy, not an error.
    pub fn deal(&mut self) -> Result<(), GameError> {
        if self.deck.len() < 4 {
            self.reset(true);
        }
        self.player_hand.clear();
        self.dealer_hand.clear();
        for _ in 0..2 {
            self.player_hand.add_card(self.deck.deal()?);
            self.dealer_hand.add_card(self.deck.deal()?);
        }
        Ok(())
    }

    /// Player draws until reaching 16. `Ok(true)` iff the hand did not bust.
    pub fn player_turn(&mut self) -> Result<bool, GameError> {
        take_turn(&mut self.deck, &mut self.player_hand, PLAYER_STAND)
    }

    /// Dealer draws until reaching 17. `Ok(true)` iff the hand did not bust.
    pub fn dealer_turn(&mut self) -> Result<bool, GameError> {
        take_turn(&mut self.deck, &mut self.dealer_hand, DEALER_STAND)
    }
}

/// Shared draw-until-threshold loop. Exhausting the deck mid-draw is a
/// reported failure; the partial hand is kept so the caller can inspect it.
fn take_turn(deck: &mut Deck, hand: &mut Hand, threshold: u32) -> Result<bool, GameError> {
    while hand.blackjack_value() < threshold {
        hand.add_card(deck.deal()?);
    }
    Ok(hand.blackjack_value() <= BLACKJACK_LIMIT)
}

impl fmt::Display for Blackjack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Player's Hand:")?;
        write!(f, "{}", self.player_hand)?;
        writeln!(f, "Player's Total: {}", self.player_hand.blackjack_value())?;
        writeln!(f)?;
        writeln!(f, "Dealer's Hand:")?;
        write!(f, "{}", self.dealer_hand)?;
        writeln!(f, "Dealer's Total: {}", self.dealer_hand.blackjack_value())?;
        Ok(())
    }
}
