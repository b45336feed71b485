//! Game integration tests.

use std::collections::HashSet;

use indigo::score::{self, MOST_CARDS_BONUS};
use indigo::{
    ActionError, Card, DECK_SIZE, Deck, DrawError, FinishError, Game, GameOptions, GameState,
    HAND_SIZE, Hand, INITIAL_TABLE_CARDS, Rank, Side, StartError, Suit,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// A full deck that deals `front` first and the remaining cards after.
fn staged_deck(front: &[Card]) -> Deck {
    let mut cards = front.to_vec();
    cards.extend(
        Card::full_deck()
            .into_iter()
            .filter(|card| !front.contains(card)),
    );
    Deck::from_cards(cards)
}

/// Table 9♠ 9♥ 3♠ 9♦, player holds 9♣ first, computer holds clubs.
fn nines_deck() -> Deck {
    staged_deck(&[
        card(Rank::Nine, Suit::Spades),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Three, Suit::Spades),
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Two, Suit::Hearts),
        card(Rank::Four, Suit::Hearts),
        card(Rank::Five, Suit::Hearts),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Four, Suit::Clubs),
        card(Rank::Five, Suit::Clubs),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Eight, Suit::Clubs),
    ])
}

fn all_cards(game: &Game) -> Vec<Card> {
    let mut cards = game.deck().cards().to_vec();
    cards.extend_from_slice(game.table());
    cards.extend_from_slice(game.hand(Side::Player).cards());
    cards.extend_from_slice(game.hand(Side::Computer).cards());
    cards.extend_from_slice(game.won(Side::Player));
    cards.extend_from_slice(game.won(Side::Computer));
    cards
}

fn assert_conserved(game: &Game) {
    let cards = all_cards(game);
    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(game.card_count(), DECK_SIZE);
    let unique: HashSet<Card> = cards.into_iter().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn card_display_and_points() {
    assert_eq!(card(Rank::Ten, Suit::Hearts).to_string(), "10♥");
    assert_eq!(card(Rank::Ace, Suit::Spades).to_string(), "A♠");
    assert_eq!(card(Rank::Queen, Suit::Clubs).to_string(), "Q♣");
    assert_eq!(card(Rank::Two, Suit::Diamonds).to_string(), "2♦");

    assert_eq!(card(Rank::Nine, Suit::Hearts).score(), 0);
    assert_eq!(card(Rank::Ten, Suit::Hearts).score(), 1);
    assert_eq!(card(Rank::Jack, Suit::Clubs).score(), 1);
    assert_eq!(card(Rank::Ace, Suit::Diamonds).score(), 1);

    let total: u32 = Card::full_deck().iter().map(Card::score).sum();
    assert_eq!(total, 20);
}

#[test]
fn full_deck_holds_every_card_once() {
    let cards = Card::full_deck();
    let unique: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    assert_eq!(cards[0], card(Rank::Two, Suit::Spades));
    assert_eq!(cards[1], card(Rank::Two, Suit::Hearts));
    assert_eq!(cards[DECK_SIZE - 1], card(Rank::Ace, Suit::Clubs));
}

#[test]
fn wins_on_shared_rank_or_suit() {
    let nine_spades = card(Rank::Nine, Suit::Spades);

    assert!(card(Rank::Nine, Suit::Hearts).wins(&nine_spades));
    assert!(card(Rank::King, Suit::Spades).wins(&nine_spades));
    assert!(!card(Rank::King, Suit::Hearts).wins(&nine_spades));
    assert!(nine_spades.wins(&nine_spades));

    assert!(!indigo::rules::captures(&nine_spades, &[]));
    assert!(indigo::rules::captures(
        &nine_spades,
        &[card(Rank::Two, Suit::Hearts), card(Rank::Four, Suit::Spades)]
    ));
    assert!(!indigo::rules::captures(
        &nine_spades,
        &[card(Rank::Four, Suit::Spades), card(Rank::Two, Suit::Hearts)]
    ));
}

#[test]
fn draw_is_all_or_nothing() {
    let mut deck = Deck::from_cards(Card::full_deck()[..5].to_vec());

    assert_eq!(
        deck.draw(6).unwrap_err(),
        DrawError::InsufficientCards {
            requested: 6,
            remaining: 5,
        }
    );
    assert_eq!(deck.len(), 5);

    let drawn = deck.draw(3).unwrap();
    assert_eq!(drawn, Card::full_deck()[..3].to_vec());
    assert_eq!(deck.len(), 2);

    assert_eq!(deck.draw(2).unwrap().len(), 2);
    assert!(deck.is_empty());
    assert_eq!(deck.draw(0).unwrap(), Vec::new());
}

#[test]
fn shuffle_is_complete_and_seeded() {
    let first = Game::new(GameOptions::default(), 11);
    let again = Game::new(GameOptions::default(), 11);
    let other = Game::new(GameOptions::default(), 12);

    let unique: HashSet<Card> = first.deck().cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    assert_eq!(first.deck().cards(), again.deck().cards());
    assert_ne!(first.deck().cards(), other.deck().cards());
    assert_ne!(first.deck().cards(), Card::full_deck().as_slice());
}

#[test]
fn tally_counts_points_and_bonus() {
    let player_won = [
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Ace, Suit::Spades),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Four, Suit::Clubs),
    ];
    let computer_won = [
        card(Rank::King, Suit::Hearts),
        card(Rank::Five, Suit::Spades),
        card(Rank::Six, Suit::Clubs),
    ];

    let running = score::tally(&player_won, &computer_won, Side::Computer, false);
    assert_eq!(running.player, 2);
    assert_eq!(running.computer, 1);
    assert_eq!(running.player_cards, 5);
    assert_eq!(running.computer_cards, 3);

    // Player holds more cards, so the bonus ignores who went first.
    let endgame = score::tally(&player_won, &computer_won, Side::Computer, true);
    assert_eq!(endgame.player, 2 + MOST_CARDS_BONUS);
    assert_eq!(endgame.computer, 1);

    let reversed = score::tally(&computer_won, &player_won, Side::Player, true);
    assert_eq!(reversed.player, 1);
    assert_eq!(reversed.computer, 2 + MOST_CARDS_BONUS);
}

#[test]
fn tied_card_counts_favour_first_player() {
    let player_won = [card(Rank::Two, Suit::Hearts), card(Rank::Three, Suit::Hearts)];
    let computer_won = [card(Rank::Two, Suit::Clubs), card(Rank::Jack, Suit::Clubs)];

    let player_first = score::tally(&player_won, &computer_won, Side::Player, true);
    assert_eq!(player_first.player, MOST_CARDS_BONUS);
    assert_eq!(player_first.computer, 1);

    let computer_first = score::tally(&player_won, &computer_won, Side::Computer, true);
    assert_eq!(computer_first.player, 0);
    assert_eq!(computer_first.computer, 1 + MOST_CARDS_BONUS);
}

#[test]
fn hand_positions_are_one_based() {
    let mut hand = Hand::from_cards(vec![
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Two, Suit::Hearts),
        card(Rank::Ace, Suit::Spades),
    ]);
    assert_eq!(hand.to_string(), "1)9♣ 2)2♥ 3)A♠");

    assert_eq!(hand.get(1), Some(&card(Rank::Nine, Suit::Clubs)));
    assert_eq!(hand.get(3), Some(&card(Rank::Ace, Suit::Spades)));
    assert_eq!(hand.get(0), None);
    assert_eq!(hand.get(4), None);

    assert_eq!(hand.take(0), None);
    assert_eq!(hand.take(4), None);
    assert_eq!(hand.take(2), Some(card(Rank::Two, Suit::Hearts)));
    assert_eq!(hand.get(2), Some(&card(Rank::Ace, Suit::Spades)));
    assert_eq!(hand.len(), 2);
}

#[test]
fn start_deals_table_and_hands() {
    let mut game = Game::new(GameOptions::default(), 3);
    assert_eq!(game.state(), GameState::AwaitingFirstPlayerChoice);

    let table = game.start(Side::Computer).unwrap();
    assert_eq!(table.len(), INITIAL_TABLE_CARDS);
    assert_eq!(game.table(), table.as_slice());
    assert_eq!(game.hand(Side::Player).len(), HAND_SIZE);
    assert_eq!(game.hand(Side::Computer).len(), HAND_SIZE);
    assert_eq!(game.cards_remaining(), DECK_SIZE - INITIAL_TABLE_CARDS - 2 * HAND_SIZE);
    assert_eq!(game.state(), GameState::InPlay);
    assert_eq!(game.turn(), Side::Computer);
    assert_eq!(game.first_player(), Some(Side::Computer));
    assert_conserved(&game);

    assert_eq!(game.start(Side::Player).unwrap_err(), StartError::InvalidState);
}

#[test]
fn start_needs_enough_cards() {
    let deck = Deck::from_cards(Card::full_deck()[..15].to_vec());
    let mut game = Game::with_deck(GameOptions::default(), deck, 1);

    assert_eq!(game.start(Side::Player).unwrap_err(), StartError::NotEnoughCards);
    assert_eq!(game.cards_remaining(), 15);
    assert_eq!(game.state(), GameState::AwaitingFirstPlayerChoice);
}

#[test]
fn actions_require_the_right_turn() {
    let mut game = Game::with_deck(GameOptions::default(), nines_deck(), 1);
    assert_eq!(game.play_player_card(1).unwrap_err(), ActionError::InvalidState);

    game.start(Side::Player).unwrap();
    assert_eq!(game.play_computer_turn().unwrap_err(), ActionError::NotYourTurn);

    let hand_before = game.hand(Side::Player).clone();
    for position in [0, HAND_SIZE + 1] {
        assert_eq!(
            game.play_player_card(position).unwrap_err(),
            ActionError::InvalidSelection {
                position,
                hand_size: HAND_SIZE,
            }
        );
    }
    assert_eq!(game.hand(Side::Player), &hand_before);
    assert_eq!(game.turn(), Side::Player);
}

#[test]
fn matching_rank_captures_the_table() {
    let mut game = Game::with_deck(GameOptions::default(), nines_deck(), 1);
    game.start(Side::Player).unwrap();
    assert_eq!(game.top_card(), Some(&card(Rank::Nine, Suit::Diamonds)));

    let play = game.play_player_card(1).unwrap();
    assert_eq!(play.side, Side::Player);
    assert_eq!(play.card, card(Rank::Nine, Suit::Clubs));
    assert_eq!(play.captured, Some(5));
    assert_eq!(play.refilled, 0);

    assert!(game.table().is_empty());
    assert_eq!(game.won(Side::Player).len(), 5);
    assert!(game.won(Side::Player).contains(&card(Rank::Nine, Suit::Clubs)));
    assert_eq!(game.last_winner(), Some(Side::Player));
    assert_eq!(game.turn(), Side::Computer);
    assert_conserved(&game);

    // Nothing to win on an empty table.
    let reply = game.play_computer_turn().unwrap();
    assert!(!reply.is_capture());
    assert_eq!(game.table(), &[reply.card]);
    assert_eq!(reply.card.suit, Suit::Clubs);
}

#[test]
fn losing_card_goes_on_top() {
    let mut game = Game::with_deck(GameOptions::default(), nines_deck(), 1);
    game.start(Side::Player).unwrap();

    // 2♥ does not match 9♦.
    let play = game.play_player_card(2).unwrap();
    assert_eq!(play.card, card(Rank::Two, Suit::Hearts));
    assert_eq!(play.captured, None);
    assert_eq!(game.table().len(), 5);
    assert_eq!(game.top_card(), Some(&play.card));
    assert_eq!(game.last_winner(), None);
    assert_conserved(&game);
}

#[test]
fn computer_captures_with_its_only_winning_card() {
    let deck = staged_deck(&[
        card(Rank::Two, Suit::Spades),
        card(Rank::Three, Suit::Spades),
        card(Rank::Four, Suit::Spades),
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Two, Suit::Hearts),
        card(Rank::Three, Suit::Hearts),
        card(Rank::Four, Suit::Hearts),
        card(Rank::Five, Suit::Hearts),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Five, Suit::Spades),
        card(Rank::Six, Suit::Spades),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Seven, Suit::Spades),
        card(Rank::Eight, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
    ]);

    for seed in 0..10 {
        let mut game = Game::with_deck(GameOptions::default(), deck.clone(), seed);
        game.start(Side::Computer).unwrap();

        let play = game.play_computer_turn().unwrap();
        assert_eq!(play.card, card(Rank::Nine, Suit::Clubs));
        assert_eq!(play.captured, Some(5));
        assert_eq!(game.won(Side::Computer).len(), 5);
        assert_eq!(game.last_winner(), Some(Side::Computer));
        assert_eq!(game.turn(), Side::Player);
    }
}

#[test]
fn short_deck_refills_partially() {
    // 4 + 6 + 6 for the deal, leaving 3 for the first refill.
    let deck = Deck::from_cards(Card::full_deck()[..19].to_vec());
    let mut game = Game::with_deck(GameOptions::default(), deck, 5);
    game.start(Side::Player).unwrap();
    assert_eq!(game.cards_remaining(), 3);

    for round in 0..HAND_SIZE {
        let play = game.play_player_card(1).unwrap();
        if round + 1 == HAND_SIZE {
            assert_eq!(play.refilled, 3);
            assert_eq!(game.hand(Side::Player).len(), 3);
            assert!(game.deck().is_empty());
        } else {
            assert_eq!(play.refilled, 0);
        }

        let reply = game.play_computer_turn().unwrap();
        if round + 1 == HAND_SIZE {
            assert_eq!(reply.refilled, 0);
            assert!(game.hand(Side::Computer).is_empty());
        }
    }

    // The computer has nothing left, so the player plays out alone.
    for _ in 0..3 {
        assert_eq!(game.turn(), Side::Player);
        assert!(!game.is_exhausted());
        game.play_player_card(1).unwrap();
    }

    assert!(game.is_exhausted());
    assert_eq!(game.play_computer_turn().unwrap_err(), ActionError::EmptyHand);
    game.finish().unwrap();
    assert_eq!(game.card_count(), 19);
    assert!(game.table().is_empty());
}

#[test]
fn full_game_conserves_cards() {
    for seed in [1, 7, 42] {
        let mut game = Game::new(GameOptions::default(), seed);
        game.start(Side::Computer).unwrap();
        assert_conserved(&game);

        let mut plays = 0;
        while !game.is_exhausted() {
            match game.turn() {
                Side::Player => game.play_player_card(1).unwrap(),
                Side::Computer => game.play_computer_turn().unwrap(),
            };
            plays += 1;
            assert_conserved(&game);
        }
        assert_eq!(plays, DECK_SIZE - INITIAL_TABLE_CARDS);

        let leftover = game.table().len();
        let sweeper = game.last_winner().unwrap_or(Side::Computer);
        let sweeper_before = game.won(sweeper).len();

        let score = game.finish().unwrap();
        assert_eq!(game.state(), GameState::Terminal);
        assert!(game.table().is_empty());
        assert_eq!(game.won(sweeper).len(), sweeper_before + leftover);
        assert_conserved(&game);

        assert_eq!(score.player_cards + score.computer_cards, DECK_SIZE);
        assert_eq!(score.player + score.computer, 20 + MOST_CARDS_BONUS);
        assert_eq!(score, game.score(true));
    }
}

#[test]
fn table_goes_to_first_player_without_captures() {
    // Player holds low spades, computer holds high hearts; nothing ever
    // matches the top card.
    let deck = Deck::from_cards(vec![
        card(Rank::Two, Suit::Diamonds),
        card(Rank::Three, Suit::Diamonds),
        card(Rank::Four, Suit::Diamonds),
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Two, Suit::Spades),
        card(Rank::Three, Suit::Spades),
        card(Rank::Four, Suit::Spades),
        card(Rank::Five, Suit::Spades),
        card(Rank::Six, Suit::Spades),
        card(Rank::Seven, Suit::Spades),
        card(Rank::Eight, Suit::Hearts),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Jack, Suit::Hearts),
        card(Rank::Queen, Suit::Hearts),
        card(Rank::King, Suit::Hearts),
    ]);
    let mut game = Game::with_deck(GameOptions::default(), deck, 9);
    game.start(Side::Player).unwrap();

    assert_eq!(game.finish().unwrap_err(), FinishError::CardsRemaining);

    for _ in 0..HAND_SIZE {
        assert!(!game.play_player_card(1).unwrap().is_capture());
        assert!(!game.play_computer_turn().unwrap().is_capture());
    }
    assert_eq!(game.table().len(), 16);
    assert_eq!(game.last_winner(), None);

    let score = game.finish().unwrap();
    assert_eq!(game.won(Side::Player).len(), 16);
    assert_eq!(score.player, 5 + MOST_CARDS_BONUS);
    assert_eq!(score.computer, 0);
    assert_eq!(game.finish().unwrap_err(), FinishError::InvalidState);
}

#[test]
fn exit_skips_the_sweep() {
    let mut game = Game::with_deck(GameOptions::default(), nines_deck(), 1);
    game.start(Side::Player).unwrap();
    game.exit();

    assert_eq!(game.state(), GameState::Terminal);
    assert_eq!(game.table().len(), INITIAL_TABLE_CARDS);
    assert!(game.won(Side::Player).is_empty());
    assert_eq!(game.play_player_card(1).unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.finish().unwrap_err(), FinishError::InvalidState);
}
