use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// An ordered stack of cards with an owned, seeded RNG for shuffling.
/// Cards are dealt from the front; recycling pushes cards back on the end
/// before the next shuffle.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Fresh 52-card deck in build order. Call [`shuffle`](Self::shuffle)
    /// before dealing for actual play.
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            cards: full_deck(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Deck with a caller-fixed card order, for deterministic scenarios.
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Appends the full 52-card population in fixed suit-then-rank order.
    pub fn build(&mut self) {
        self.cards.extend(full_deck());
    }

    /// Uniformly permutes the current contents. Unlike a fresh build this
    /// never adds or removes cards, so it is safe mid-game on a partial deck.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the front card.
    pub fn deal(&mut self) -> Result<Card, GameError> {
        if self.cards.is_empty() {
            return Err(GameError::EmptyDeck);
        }
        Ok(self.cards.remove(0))
    }

    /// Removes and returns the card at an arbitrary position.
    pub fn pick(&mut self, index: usize) -> Result<Card, GameError> {
        if index >= self.cards.len() {
            return Err(GameError::OutOfRange {
                index,
                len: self.cards.len(),
            });
        }
        Ok(self.cards.remove(index))
    }

    /// Returns a card to the bottom of the deck (used by recycling).
    pub fn put_back(&mut self, card: Card) {
        self.cards.push(card);
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

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// An unordered bag of out-of-play cards. Deliberately not a [`Deck`]: it
/// never deals and carries no ordering guarantee, it only accumulates cards
/// until they are drained back into a deck for reshuffling.
#[derive(Debug, Default)]
pub struct DiscardPile {
    cards: Vec<Card>,
}

impl DiscardPile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn add_all<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
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

    /// Moves every card into the deck, leaving the pile empty. The caller
    /// decides when to shuffle.
    pub fn drain_into(&mut self, deck: &mut Deck) {
        for card in self.cards.drain(..) {
            deck.put_back(card);
        }
    }
}
