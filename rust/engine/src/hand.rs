use std::fmt;

use crate::cards::{Card, Rank};

/// Blackjack bust limit; hands above this value lose outright.
pub const BLACKJACK_LIMIT: u32 = 21;

/// An ordered set of cards held by one participant: a Blackjack player or
/// dealer, one of the poker players, or the transient poker pool.
#[derive(Debug, Default, Clone)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the first card structurally equal to `card`. Returns whether
    /// a match was found.
    pub fn remove_card(&mut self, card: &Card) -> bool {
        match self.cards.iter().position(|c| c == card) {
            Some(i) => {
                self.cards.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Takes every card out of the hand, leaving it empty.
    pub fn drain(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    /// Blackjack total. Non-Ace cards contribute their face value; each Ace
    /// then contributes 11 if the running total stays within the limit, else
    /// 1, applied one Ace at a time. Two otherwise-bare Aces therefore score
    /// 12, never 22.
    pub fn blackjack_value(&self) -> u32 {
        let mut value = 0;
        let mut aces = 0;
        for card in &self.cards {
            if card.rank == Rank::Ace {
                aces += 1;
            } else {
                value += card.value();
            }
        }
        for _ in 0..aces {
            value += if value + 11 <= BLACKJACK_LIMIT { 11 } else { 1 };
        }
        value
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            writeln!(f, "{}", card)?;
        }
        Ok(())
    }
}
