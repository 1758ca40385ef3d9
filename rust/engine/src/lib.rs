//! # parlor-engine: Two-Game Card Engine Core
//!
//! A deterministic engine for two turn-based card games sharing one
//! deck/hand substrate: a Blackjack variant (draw-until-threshold turns
//! with Ace-flexible scoring) and Lamarckian Poker (pool formation, duel
//! resolution, and deck/discard recycling). Seeded RNG makes every game
//! reproducible for testing and debugging.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG, discard pile
//! - [`hand`] - Per-participant card sequences and Blackjack totals
//! - [`blackjack`] - Blackjack round orchestration (deal, player/dealer turns)
//! - [`lamarckian`] - Lamarckian Poker turn loop and card recycling
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use parlor_engine::blackjack::Blackjack;
//!
//! let mut game = Blackjack::new(Some(42));
//! game.deal().unwrap();
//! let survived = game.player_turn().unwrap();
//! println!("{}", game);
//! println!("busted: {}", !survived);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All game outcomes are reproducible using seeded RNG:
//!
//! ```rust
//! use parlor_engine::deck::Deck;
//!
//! let mut deck1 = Deck::new_with_seed(42);
//! let mut deck2 = Deck::new_with_seed(42);
//! deck1.shuffle();
//! deck2.shuffle();
//! assert_eq!(deck1.deal().unwrap(), deck2.deal().unwrap());
//! ```
//!
//! ## Card Conservation
//!
//! Lamarckian Poker moves cards between five zones (two hands, pool,
//! discard, deck) and never loses one:
//!
//! ```rust
//! use parlor_engine::lamarckian::LamarckianPoker;
//!
//! let mut game = LamarckianPoker::new(Some(7));
//! for _ in 0..20 {
//!     if !game.turn().unwrap() {
//!         break;
//!     }
//!     let total = game.player1_hand().len()
//!         + game.player2_hand().len()
//!         + game.pool().len()
//!         + game.discard_len()
//!         + game.deck_remaining();
//!     assert_eq!(total, 52);
//! }
//! ```

pub mod blackjack;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod lamarckian;
