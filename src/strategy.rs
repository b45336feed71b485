//! Card selection for the computer opponent.
//!
//! The computer prefers cards that win the table. Among several winning
//! cards, or when nothing wins, it prefers cards that share a suit (then a
//! rank) with another card under consideration, so that it keeps matching
//! cards in reserve for later tricks.
//!
//! Groups are picked in two stages: a qualifying group uniformly at random,
//! then a card uniformly from that group. This is deliberately not a flat
//! pick over every card in a qualifying group.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::card::Card;
use crate::hand::Hand;
use crate::rules::beats;

/// Chooses the computer's card and removes it from `hand`.
///
/// `top` is the current top card of the table, if any. Returns `None` only
/// when the hand is empty.
pub fn choose_card<R: Rng + ?Sized>(
    hand: &mut Hand,
    top: Option<&Card>,
    rng: &mut R,
) -> Option<Card> {
    let chosen = select_card(hand.cards(), top, rng)?;
    hand.remove(&chosen)
}

/// Picks the card to play from `cards` without removing it.
pub fn select_card<R: Rng + ?Sized>(
    cards: &[Card],
    top: Option<&Card>,
    rng: &mut R,
) -> Option<Card> {
    if let [only] = cards {
        log::trace!("computer holds a single card {only}");
        return Some(*only);
    }

    let candidates = candidates(cards, top);
    match candidates.as_slice() {
        [only] => {
            log::trace!("computer has a single winning card {only}");
            Some(*only)
        }
        [] => pick_preferred(cards, rng),
        _ => pick_preferred(&candidates, rng),
    }
}

/// Returns the cards that would win against `top`.
///
/// Nothing can win an empty table, so `None` yields no candidates.
#[must_use]
pub fn candidates(cards: &[Card], top: Option<&Card>) -> Vec<Card> {
    let Some(top) = top else {
        return Vec::new();
    };
    cards.iter().filter(|card| beats(card, top)).copied().collect()
}

fn pick_preferred<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Option<Card> {
    let chosen = if has_shared_suit(cards) {
        pick_shared_suit(cards, rng)
    } else if has_shared_rank(cards) {
        pick_shared_rank(cards, rng)
    } else {
        cards.choose(rng).copied()
    };
    log::trace!("computer picked {chosen:?} from {} cards", cards.len());
    chosen
}

/// Returns whether at least two of `cards` share a suit.
#[must_use]
pub fn has_shared_suit(cards: &[Card]) -> bool {
    !shared_groups(cards, |card| card.suit).is_empty()
}

/// Returns whether at least two of `cards` share a rank.
#[must_use]
pub fn has_shared_rank(cards: &[Card]) -> bool {
    !shared_groups(cards, |card| card.rank).is_empty()
}

/// Picks a random card from a random suit held at least twice.
pub fn pick_shared_suit<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Option<Card> {
    pick_from_groups(&shared_groups(cards, |card| card.suit), rng)
}

/// Picks a random card from a random rank held at least twice.
pub fn pick_shared_rank<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Option<Card> {
    pick_from_groups(&shared_groups(cards, |card| card.rank), rng)
}

fn pick_from_groups<R: Rng + ?Sized>(groups: &[Vec<Card>], rng: &mut R) -> Option<Card> {
    groups.choose(rng)?.choose(rng).copied()
}

/// Groups `cards` by `key` in first-seen order, keeping groups of two or more.
fn shared_groups<K: PartialEq>(cards: &[Card], key: impl Fn(&Card) -> K) -> Vec<Vec<Card>> {
    let mut groups: Vec<(K, Vec<Card>)> = Vec::new();
    for card in cards {
        let card_key = key(card);
        match groups.iter_mut().find(|(group_key, _)| *group_key == card_key) {
            Some((_, members)) => members.push(*card),
            None => groups.push((card_key, alloc::vec![*card])),
        }
    }
    groups
        .into_iter()
        .filter(|(_, members)| members.len() > 1)
        .map(|(_, members)| members)
        .collect()
}
