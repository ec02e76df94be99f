//! Pair-matching (memory) game engine.
//!
//! DESIGN
//! ======
//! The deck is a flat vector of cards; a card's slot is its index. The host
//! flips cards one at a time. When a flip completes a pair, the engine
//! reports [`FlipOutcome::PairPending`] and the host schedules
//! [`MemoryGame::resolve_pending`] after [`REVEAL_DELAY_MS`]. Further flips
//! are rejected until the pending pair resolves, so the reveal window can
//! never hold three face-up cards.
//!
//! Shuffling uses the `rand` Fisher-Yates shuffle, injected by the caller so
//! seeding stays under host control.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// How long a completed pair stays face-up before it resolves, in milliseconds.
pub const REVEAL_DELAY_MS: u32 = 800;

/// Default number of cards dealt per distinct token.
pub const PAIR_MULTIPLICITY: usize = 2;

/// One card in the deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card<T> {
    /// The token this card shows when face-up. Two cards share each token.
    pub token: T,
    /// Permanently face-up as part of a matched pair.
    pub matched: bool,
    /// Face-up and awaiting resolution.
    pub flipped: bool,
}

/// Result of a flip attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Nothing changed: a pair is awaiting resolution, the slot is out of
    /// range, or the card is already face-up or matched.
    Rejected,
    /// The card is now face-up; the pair is still open.
    Flipped,
    /// The flip completed a pair. The host should call
    /// [`MemoryGame::resolve_pending`] after [`REVEAL_DELAY_MS`].
    PairPending,
}

/// Pair-matching game state.
#[derive(Clone, Debug)]
pub struct MemoryGame<T> {
    tokens: Vec<T>,
    multiplicity: usize,
    cards: Vec<Card<T>>,
    /// Slots currently face-up and unresolved; holds at most two entries.
    pending: Vec<usize>,
    moves: u32,
}

impl<T: Clone + Eq> MemoryGame<T> {
    /// Deal a shuffled deck with `multiplicity` cards per token.
    #[must_use]
    pub fn new(tokens: Vec<T>, multiplicity: usize, rng: &mut impl Rng) -> Self {
        let mut game = Self {
            tokens,
            multiplicity,
            cards: Vec::new(),
            pending: Vec::new(),
            moves: 0,
        };
        game.deal(rng);
        game
    }

    fn deal(&mut self, rng: &mut impl Rng) {
        let mut cards = Vec::with_capacity(self.tokens.len() * self.multiplicity);
        for token in &self.tokens {
            for _ in 0..self.multiplicity {
                cards.push(Card { token: token.clone(), matched: false, flipped: false });
            }
        }
        cards.shuffle(rng);
        self.cards = cards;
        self.pending.clear();
        self.moves = 0;
    }

    /// Turn the card at `slot` face-up.
    pub fn flip(&mut self, slot: usize) -> FlipOutcome {
        if self.pending.len() >= 2 {
            return FlipOutcome::Rejected;
        }
        let Some(card) = self.cards.get_mut(slot) else {
            return FlipOutcome::Rejected;
        };
        if card.flipped || card.matched {
            return FlipOutcome::Rejected;
        }
        card.flipped = true;
        self.pending.push(slot);
        if self.pending.len() == 2 {
            FlipOutcome::PairPending
        } else {
            FlipOutcome::Flipped
        }
    }

    /// Resolve the face-up pair once the reveal delay has elapsed.
    ///
    /// Equal tokens lock both cards as matched; unequal tokens flip both
    /// back down. Either way the move counter advances exactly once and the
    /// pending set clears. Returns `Some(matched)`, or `None` when no pair
    /// was pending.
    pub fn resolve_pending(&mut self) -> Option<bool> {
        let &[a, b] = &self.pending[..] else {
            return None;
        };
        let matched = self.cards[a].token == self.cards[b].token;
        for slot in [a, b] {
            let card = &mut self.cards[slot];
            if matched {
                card.matched = true;
            } else {
                card.flipped = false;
            }
        }
        self.pending.clear();
        self.moves += 1;
        Some(matched)
    }

    /// Reshuffle a fresh deck and zero all counters.
    pub fn restart(&mut self, rng: &mut impl Rng) {
        self.deal(rng);
    }

    /// The deck in slot order.
    #[must_use]
    pub fn cards(&self) -> &[Card<T>] {
        &self.cards
    }

    /// Slots currently face-up and awaiting resolution.
    #[must_use]
    pub fn pending(&self) -> &[usize] {
        &self.pending
    }

    /// Resolved pairs so far (one move per pair of flips).
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Whether a card at `slot` should render face-up.
    #[must_use]
    pub fn is_face_up(&self, slot: usize) -> bool {
        self.cards
            .get(slot)
            .is_some_and(|card| card.flipped || card.matched)
    }

    /// All cards matched: the game is won.
    #[must_use]
    pub fn is_won(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|card| card.matched)
    }
}
