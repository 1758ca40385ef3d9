use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::Card;
use crate::deck::{Deck, DiscardPile};
use crate::errors::GameError;
use crate::hand::Hand;

/// Cards dealt to each player at the start of a game.
pub const HAND_INITIAL_SIZE: usize = 4;
/// Cards dealt into the pool at the start of each turn.
pub const POOL_SIZE: usize = 4;
/// A hand of this size stops growing; the game ends when both reach it.
pub const HAND_MAX_SIZE: usize = 7;

/// Lamarckian Poker engine for two players.
///
/// Each turn a fresh pool is dealt, both players reveal one random "duel"
/// card, and the higher card (rank index first, suit index as tie-break)
/// wins. Winner then loser trade their duel card for every pool card sharing
/// its rank or suit; what remains of the pool is discarded, and the discard
/// pile is recycled into the deck whenever the deck runs low. Play continues
/// while either hand holds fewer than seven cards.
///
/// # Examples
///
/// ```
/// use parlor_engine::lamarckian::LamarckianPoker;
///
/// let mut game = LamarckianPoker::new(Some(7));
/// assert_eq!(game.player1_hand().len(), 4);
/// assert_eq!(game.player2_hand().len(), 4);
///
/// game.turn().unwrap();
/// // every card stays in exactly one of the five zones
/// let total = game.player1_hand().len()
///     + game.player2_hand().len()
///     + game.pool().len()
///     + game.discard_len()
///     + game.deck_remaining();
/// assert_eq!(total, 52);
/// ```
#[derive(Debug)]
pub struct LamarckianPoker {
    deck: Deck,
    discard: DiscardPile,
    player1_hand: Hand,
    player2_hand: Hand,
    pool: Hand,
    turn_number: u32,
    rng: ChaCha20Rng,
}

impl LamarckianPoker {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or(0x1A3A_4CC1);
        let mut game = Self {
            deck: Deck::new_with_seed(seed),
            discard: DiscardPile::new(),
            player1_hand: Hand::new(),
            player2_hand: Hand::new(),
            pool: Hand::new(),
            turn_number: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
        };
        game.reset(true);
        game
    }

    pub fn player1_hand(&self) -> &Hand {
        &self.player1_hand
    }

    pub fn player2_hand(&self) -> &Hand {
        &self.player2_hand
    }

    pub fn pool(&self) -> &Hand {
        &self.pool
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.len()
    }

    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// Restarts the game: with `new_deck` the deck is restocked and
    /// reshuffled and the discard pile emptied; the turn counter is zeroed
    /// and the initial hands are dealt.
    pub fn reset(&mut self, new_deck: bool) {
        if new_deck {
            self.deck.clear();
            self.deck.build();
            self.deck.shuffle();
            self.discard.clear();
        }
        self.pool.clear();
        self.turn_number = 0;
        self.deal();
    }

    /// Deals up to four cards each, alternating between the players. A deck
    /// that runs dry mid-deal just leaves the hands short; the initial deal
    /// is expected to run against a full deck.
    pub fn deal(&mut self) {
        self.player1_hand.clear();
        self.player2_hand.clear();
        for _ in 0..HAND_INITIAL_SIZE {
            if let Ok(card) = self.deck.deal() {
                self.player1_hand.add_card(card);
            }
            if let Ok(card) = self.deck.deal() {
                self.player2_hand.add_card(card);
            }
        }
    }

    /// Replaces the pool with up to four fresh cards from the deck.
    pub fn make_pool(&mut self) {
        self.pool.clear();
        for _ in 0..POOL_SIZE {
            if let Ok(card) = self.deck.deal() {
                self.pool.add_card(card);
            }
        }
    }

    /// Plays one turn. Returns `Ok(false)` without mutating anything once
    /// both hands hold [`HAND_MAX_SIZE`] cards.
    pub fn turn(&mut self) -> Result<bool, GameError> {
        if self.player1_hand.len() >= HAND_MAX_SIZE && self.player2_hand.len() >= HAND_MAX_SIZE {
            return Ok(false);
        }
        self.make_pool();
        replenish(&mut self.player1_hand, &mut self.deck, &mut self.discard);
        replenish(&mut self.player2_hand, &mut self.deck, &mut self.discard);

        let card1 = self.random_card(1)?;
        let card2 = self.random_card(2)?;
        // equal cards cannot coexist in one 52-card population, so the
        // comparison always produces a strict winner
        let (winner_is_p1, winner_card, loser_card) = if card1 > card2 {
            (true, card1, card2)
        } else {
            (false, card2, card1)
        };
        self.resolve_duel(winner_is_p1, winner_card, loser_card);

        self.discard.add_all(self.pool.drain());
        if self.deck.len() < POOL_SIZE {
            self.discard.drain_into(&mut self.deck);
            self.deck.shuffle();
        }
        self.turn_number += 1;
        Ok(true)
    }

    /// Picks a random card from the given player's hand without removing it.
    /// Removal is deferred until after the matching pass, which only scans
    /// the pool and so never re-matches the duel card against itself.
    fn random_card(&mut self, player: usize) -> Result<Card, GameError> {
        let len = match player {
            1 => self.player1_hand.len(),
            _ => self.player2_hand.len(),
        };
        if len == 0 {
            return Err(GameError::EmptyHand { player });
        }
        let index = self.rng.random_range(0..len);
        let hand = match player {
            1 => &self.player1_hand,
            _ => &self.player2_hand,
        };
        Ok(hand.cards()[index])
    }

    /// The two order-dependent transfer passes. The winner trades first, so
    /// the loser's pass runs against a pool that already contains the
    /// winner's surrendered duel card and can capture it.
    fn resolve_duel(&mut self, winner_is_p1: bool, winner_card: Card, loser_card: Card) {
        let (winner, loser) = if winner_is_p1 {
            (&mut self.player1_hand, &mut self.player2_hand)
        } else {
            (&mut self.player2_hand, &mut self.player1_hand)
        };
        capture_matches(&mut self.pool, winner, winner_card);
        self.pool.add_card(winner_card);
        winner.remove_card(&winner_card);
        capture_matches(&mut self.pool, loser, loser_card);
        self.pool.add_card(loser_card);
        loser.remove_card(&loser_card);
    }
}

/// Draws one card into an empty hand, recycling the discard pile into the
/// deck and retrying if the deck is dry. Gives up only when both are empty.
fn replenish(hand: &mut Hand, deck: &mut Deck, discard: &mut DiscardPile) {
    while hand.is_empty() {
        if let Ok(card) = deck.deal() {
            hand.add_card(card);
        } else if !discard.is_empty() {
            discard.drain_into(deck);
            deck.shuffle();
        } else {
            break;
        }
    }
}

/// Moves every pool card sharing the duel card's rank or suit into the
/// acting player's hand.
fn capture_matches(pool: &mut Hand, recipient: &mut Hand, duel_card: Card) {
    let matches: Vec<Card> = pool
        .cards()
        .iter()
        .copied()
        .filter(|c| c.rank == duel_card.rank || c.suit == duel_card.suit)
        .collect();
    for card in matches {
        pool.remove_card(&card);
        recipient.add_card(card);
    }
}

impl fmt::Display for LamarckianPoker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Player 1:")?;
        write!(f, "{}", self.player1_hand)?;
        writeln!(f, "Player 2:")?;
        write!(f, "{}", self.player2_hand)?;
        writeln!(f, "Pool:")?;
        write!(f, "{}", self.pool)?;
        Ok(())
    }
}
