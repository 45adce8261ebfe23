//! Game integration tests.

use cribrs::{
    AdvancedPlayer, BeginnerPlayer, Card, CardOrder, ContractViolation, Deck, Discards, Game, GameError,
    GameOptions, GameState, Hand, IntermediatePlayer, NotificationKind, Player, Suit,
    TurnOutcome,
};

fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank).unwrap()
}

/// A player that lays away and pegs exactly what it is told to.
struct Scripted {
    name: &'static str,
    lay_aways: (Card, Card),
    plays: Vec<Card>,
}

impl Scripted {
    fn new(name: &'static str, lay_aways: (Card, Card), plays: &[Card]) -> Box<Self> {
        Box::new(Self {
            name,
            lay_aways,
            plays: plays.to_vec(),
        })
    }
}

impl Player for Scripted {
    fn name(&self) -> &str {
        self.name
    }

    fn select_lay_aways(&mut self, _hand: &Hand, _is_dealer: bool) -> (Card, Card) {
        self.lay_aways
    }

    fn select_play(&mut self, _hand: &Hand, _starter: Card, _discards: &Discards) -> Card {
        self.plays.remove(0)
    }
}

/// Stacks a deck so that seat 1 (the pone) receives `pone`, seat 0 (the
/// dealer) receives `dealer`, and `starter` is cut after the deal.
fn stacked(pone: [Card; 6], dealer: [Card; 6], starter: Card) -> Deck {
    let mut cards = Vec::with_capacity(13);
    for (p, d) in pone.into_iter().zip(dealer) {
        cards.push(p);
        cards.push(d);
    }
    cards.push(starter);
    Deck::from_cards(&cards)
}

/// Seats two scripted players, makes seat 0 the dealer and deals `deck`.
fn start(options: GameOptions, dealer: Box<Scripted>, pone: Box<Scripted>, deck: Deck) -> Game {
    let game = Game::new(options, 1);
    game.join(dealer).unwrap();
    game.join(pone).unwrap();
    game.start_game().unwrap();
    game.set_dealer(0).unwrap();
    game.deal_from(deck).unwrap();
    game
}

/// Pone keeps 7♥ 9♣ K♠ K♥, dealer keeps 8♠ 5♣ Q♣ Q♦, starter A♥.
fn run_and_go_round(options: GameOptions) -> Game {
    let pone = [
        card(Suit::Hearts, 7),
        card(Suit::Clubs, 9),
        card(Suit::Spades, 13),
        card(Suit::Hearts, 13),
        card(Suit::Diamonds, 2),
        card(Suit::Diamonds, 3),
    ];
    let dealer = [
        card(Suit::Spades, 8),
        card(Suit::Clubs, 5),
        card(Suit::Clubs, 12),
        card(Suit::Diamonds, 12),
        card(Suit::Clubs, 4),
        card(Suit::Clubs, 6),
    ];
    let deck = stacked(pone, dealer, card(Suit::Hearts, 1));

    start(
        options,
        Scripted::new("Dealer", (dealer[4], dealer[5]), &dealer[..4]),
        Scripted::new("Pone", (pone[4], pone[5]), &pone[..4]),
        deck,
    )
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_winning_score(61)
        .with_skunk_line(30)
        .with_card_order(CardOrder::SuitFirst);

    assert_eq!(options.winning_score, 61);
    assert_eq!(options.skunk_line, 30);
    assert_eq!(options.card_order, CardOrder::SuitFirst);

    let defaults = GameOptions::default();
    assert_eq!(defaults.winning_score, 121);
    assert_eq!(defaults.skunk_line, 90);
    assert_eq!(defaults.card_order, CardOrder::RankFirst);
}

#[test]
fn steps_reject_wrong_state() {
    let game = Game::new(GameOptions::default(), 1);

    assert_eq!(game.deal().unwrap_err(), GameError::InvalidState);
    assert_eq!(game.lay_away().unwrap_err(), GameError::InvalidState);
    assert_eq!(game.draw_starter().unwrap_err(), GameError::InvalidState);
    assert_eq!(game.take_turn().unwrap_err(), GameError::InvalidState);
    assert_eq!(game.score_hands().unwrap_err(), GameError::InvalidState);
    assert_eq!(game.set_dealer(0).unwrap_err(), GameError::InvalidState);
}

#[test]
fn needs_exactly_two_players() {
    let game = Game::new(GameOptions::default(), 1);
    assert_eq!(game.start_game().unwrap_err(), GameError::PlayerCount);

    assert_eq!(game.join(Box::new(BeginnerPlayer::new())), Ok(0));
    assert_eq!(game.start_game().unwrap_err(), GameError::PlayerCount);

    assert_eq!(game.join(Box::new(BeginnerPlayer::new())), Ok(1));
    assert_eq!(
        game.join(Box::new(BeginnerPlayer::new())).unwrap_err(),
        GameError::PlayerCount
    );
}

#[test]
fn cannot_join_mid_game() {
    let game = Game::new(GameOptions::default(), 3);
    game.join(Box::new(BeginnerPlayer::new())).unwrap();
    game.join(Box::new(BeginnerPlayer::new())).unwrap();
    game.start_game().unwrap();

    assert_eq!(
        game.join(Box::new(BeginnerPlayer::new())).unwrap_err(),
        GameError::InvalidState
    );
}

#[test]
fn lowest_cut_deals_first() {
    let game = Game::new(GameOptions::default(), 11);
    game.join(Box::new(BeginnerPlayer::named("North"))).unwrap();
    game.join(Box::new(BeginnerPlayer::named("South"))).unwrap();

    let dealer = game.start_game().unwrap();
    assert_eq!(game.state(), GameState::CutForDeal);
    assert_eq!(game.dealer(), Some(dealer));
    assert_eq!(game.current_player(), Some(1 - dealer));

    let events = game.events();
    assert_eq!(events[0].kind, NotificationKind::NewGame);
    assert_eq!(events[0].data, "North, South");

    let cuts: Vec<_> = events
        .iter()
        .filter(|e| e.kind == NotificationKind::CutForDeal)
        .collect();
    assert_eq!(cuts.len(), 2);
    assert_ne!(cuts[0].data, cuts[1].data);
}

#[test]
fn deal_gives_six_cards_each() {
    let game = Game::new(GameOptions::default(), 5);
    game.join(Box::new(BeginnerPlayer::new())).unwrap();
    game.join(Box::new(BeginnerPlayer::new())).unwrap();
    game.start_game().unwrap();
    game.deal().unwrap();

    assert_eq!(game.state(), GameState::Dealt);
    assert_eq!(game.hand(0).unwrap().len(), 6);
    assert_eq!(game.hand(1).unwrap().len(), 6);
    assert_eq!(game.cards_remaining(), 40);

    game.lay_away().unwrap();
    assert_eq!(game.state(), GameState::LayAway);
    assert_eq!(game.crib().len(), 4);
    assert_eq!(game.hand(0).unwrap().len(), 4);
    assert_eq!(game.hand(1).unwrap().len(), 4);
}

#[test]
fn deal_needs_thirteen_cards() {
    let game = Game::new(GameOptions::default(), 5);
    game.join(Box::new(BeginnerPlayer::new())).unwrap();
    game.join(Box::new(BeginnerPlayer::new())).unwrap();
    game.start_game().unwrap();

    let short = Deck::from_cards(&Deck::new().cards()[..12]);
    assert_eq!(game.deal_from(short).unwrap_err(), GameError::EmptyDeck);
    assert_eq!(game.state(), GameState::Aborted);
    assert_eq!(game.deal().unwrap_err(), GameError::InvalidState);

    game.start_game().unwrap();
    game.deal().unwrap();
    assert_eq!(game.state(), GameState::Dealt);
}

#[test]
fn dealt_hands_follow_card_order() {
    let pone = [
        card(Suit::Spades, 2),
        card(Suit::Clubs, 9),
        card(Suit::Hearts, 5),
        card(Suit::Clubs, 3),
        card(Suit::Diamonds, 13),
        card(Suit::Hearts, 1),
    ];
    let dealer = [
        card(Suit::Spades, 3),
        card(Suit::Clubs, 10),
        card(Suit::Hearts, 6),
        card(Suit::Clubs, 4),
        card(Suit::Diamonds, 12),
        card(Suit::Hearts, 2),
    ];
    let deck = stacked(pone, dealer, card(Suit::Spades, 9));
    let options = GameOptions::default().with_card_order(CardOrder::SuitFirst);
    let game = start(
        options,
        Scripted::new("Dealer", (dealer[0], dealer[1]), &[]),
        Scripted::new("Pone", (pone[0], pone[1]), &[]),
        deck,
    );

    let suits: Vec<Suit> = game.hand(1).unwrap().cards().iter().map(Card::suit).collect();
    assert_eq!(
        suits,
        [
            Suit::Clubs,
            Suit::Clubs,
            Suit::Diamonds,
            Suit::Hearts,
            Suit::Hearts,
            Suit::Spades
        ]
    );
}

#[test]
fn full_round_pegs_and_counts() {
    let game = run_and_go_round(GameOptions::default());
    game.lay_away().unwrap();
    assert_eq!(game.draw_starter().unwrap(), card(Suit::Hearts, 1));
    assert_eq!(game.state(), GameState::StarterDrawn);

    // 7♥ from the pone.
    let outcome = game.take_turn().unwrap();
    assert!(matches!(outcome, TurnOutcome::Played { score, .. } if score.points() == 0));
    assert_eq!(game.state(), GameState::Pegging);

    // 8♠ makes fifteen.
    match game.take_turn().unwrap() {
        TurnOutcome::Played { card: played, score, .. } => {
            assert_eq!(played, card(Suit::Spades, 8));
            assert!(score.fifteen);
            assert_eq!(score.points(), 2);
        }
        other => panic!("unexpected outcome {other:?}"),
    }

    // 9♣ completes a run of three.
    match game.take_turn().unwrap() {
        TurnOutcome::Played { score, .. } => {
            assert_eq!(score.run, 3);
            assert_eq!(score.points(), 3);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(game.scores(), [2, 3]);

    // 5♣ to 29; the pone's kings no longer fit.
    game.take_turn().unwrap();
    assert_eq!(game.discards().sum(), 29);
    assert_eq!(
        game.take_turn().unwrap(),
        TurnOutcome::Go { awarded: Some(0) }
    );
    assert_eq!(game.scores(), [3, 3]);
    assert_eq!(game.discards().sum(), 0);
    assert_eq!(game.discards().older_discards().len(), 4);
    assert_eq!(game.current_player(), Some(1));

    // K♠, Q♣, K♥ to 30; the dealer's last queen does not fit.
    game.take_turn().unwrap();
    game.take_turn().unwrap();
    game.take_turn().unwrap();
    assert_eq!(game.discards().sum(), 30);
    assert_eq!(
        game.take_turn().unwrap(),
        TurnOutcome::Go { awarded: Some(1) }
    );
    assert_eq!(game.scores(), [3, 4]);

    // Q♦ on a fresh pile takes last card.
    match game.take_turn().unwrap() {
        TurnOutcome::Played {
            card: played,
            last_card,
            ..
        } => {
            assert_eq!(played, card(Suit::Diamonds, 12));
            assert!(last_card);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(game.scores(), [4, 4]);
    assert_eq!(game.state(), GameState::Scoring);
    assert!(game.is_round_over());

    let round = game.score_hands().unwrap();
    assert_eq!(round.dealer, 0);
    assert_eq!(round.starter, card(Suit::Hearts, 1));
    assert_eq!(round.hands.len(), 2);
    assert_eq!(round.hands[0].player, 1);
    assert_eq!(round.hands[0].value.total(), 2);
    assert_eq!(round.hands[1].player, 0);
    assert_eq!(round.hands[1].value.total(), 6);
    let crib = round.crib.unwrap();
    assert_eq!(crib.player, 0);
    assert_eq!(crib.value.total(), 6);
    assert_eq!(crib.value.run.map(|r| r.len), Some(4));

    assert_eq!(game.scores(), [16, 6]);
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.dealer(), Some(1));
    assert_eq!(game.current_player(), Some(0));
}

#[test]
fn hands_are_restored_for_the_count() {
    let game = run_and_go_round(GameOptions::default());
    game.lay_away().unwrap();
    game.draw_starter().unwrap();
    while game.state().is_pegging() {
        game.take_turn().unwrap();
    }
    assert!(game.hand(0).unwrap().is_empty());

    game.score_hands().unwrap();
    let hand = game.hand(0).unwrap();
    assert_eq!(hand.len(), 4);
    assert!(hand.played_cards().is_empty());

    let counts: Vec<_> = game
        .events()
        .into_iter()
        .filter(|e| matches!(e.kind, NotificationKind::ScoreHand | NotificationKind::ScoreCrib))
        .collect();
    assert_eq!(counts.len(), 3);
    assert_eq!(counts[0].player, Some(1));
    assert_eq!(counts[0].points, 2);
    assert!(counts[0].data.ends_with("A pair for 2"));
    assert_eq!(counts[2].kind, NotificationKind::ScoreCrib);
    assert_eq!(counts[2].score, 16);
}

#[test]
fn thirty_one_starts_a_new_pile() {
    let pone = [
        card(Suit::Hearts, 13),
        card(Suit::Clubs, 6),
        card(Suit::Hearts, 2),
        card(Suit::Diamonds, 4),
        card(Suit::Diamonds, 8),
        card(Suit::Diamonds, 7),
    ];
    let dealer = [
        card(Suit::Spades, 12),
        card(Suit::Spades, 5),
        card(Suit::Spades, 3),
        card(Suit::Clubs, 9),
        card(Suit::Clubs, 1),
        card(Suit::Diamonds, 1),
    ];
    let deck = stacked(pone, dealer, card(Suit::Clubs, 10));
    let game = start(
        GameOptions::default(),
        Scripted::new("Dealer", (dealer[4], dealer[5]), &dealer[..4]),
        Scripted::new("Pone", (pone[4], pone[5]), &pone[..4]),
        deck,
    );
    game.lay_away().unwrap();
    game.draw_starter().unwrap();

    for _ in 0..3 {
        game.take_turn().unwrap();
    }
    match game.take_turn().unwrap() {
        TurnOutcome::Played { score, last_card, .. } => {
            assert!(score.thirty_one);
            assert_eq!(score.points(), 2);
            assert!(!last_card);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(game.discards().sum(), 0);
    assert!(game.discards().is_empty());
    assert_eq!(game.current_player(), Some(1));

    let points: Vec<_> = game
        .events()
        .into_iter()
        .filter(|e| e.kind == NotificationKind::Points)
        .collect();
    assert_eq!(points.last().unwrap().data, "31 for 2");

    // 2♥, 3♠, 4♦ run; 9♣ takes last card.
    game.take_turn().unwrap();
    game.take_turn().unwrap();
    game.take_turn().unwrap();
    assert_eq!(game.scores(), [2, 3]);
    game.take_turn().unwrap();
    assert_eq!(game.scores(), [3, 3]);
    assert_eq!(game.state(), GameState::Scoring);
}

#[test]
fn jack_starter_pegs_his_heels() {
    let pone = [
        card(Suit::Hearts, 2),
        card(Suit::Hearts, 3),
        card(Suit::Hearts, 4),
        card(Suit::Hearts, 5),
        card(Suit::Hearts, 6),
        card(Suit::Hearts, 7),
    ];
    let dealer = [
        card(Suit::Clubs, 2),
        card(Suit::Clubs, 3),
        card(Suit::Clubs, 4),
        card(Suit::Clubs, 5),
        card(Suit::Clubs, 6),
        card(Suit::Clubs, 7),
    ];
    let deck = stacked(pone, dealer, card(Suit::Diamonds, 11));
    let game = start(
        GameOptions::default(),
        Scripted::new("Dealer", (dealer[4], dealer[5]), &[]),
        Scripted::new("Pone", (pone[4], pone[5]), &[]),
        deck,
    );
    game.lay_away().unwrap();
    game.draw_starter().unwrap();

    assert_eq!(game.scores(), [2, 0]);
    let last = game.events().pop().unwrap();
    assert_eq!(last.kind, NotificationKind::Points);
    assert_eq!(last.player, Some(0));
    assert_eq!(last.data, "His Heels");
}

#[test]
fn starter_comes_from_the_undealt_cards() {
    let game = run_and_go_round(GameOptions::default());
    game.lay_away().unwrap();
    assert_eq!(game.cards_remaining(), 1);
    game.draw_starter().unwrap();
    assert_eq!(game.cards_remaining(), 0);
    assert_eq!(game.draw_starter().unwrap_err(), GameError::InvalidState);
}

#[test]
fn scores_stop_at_the_winning_score() {
    let game = run_and_go_round(GameOptions::default().with_winning_score(1));
    game.lay_away().unwrap();
    game.draw_starter().unwrap();

    game.take_turn().unwrap();
    game.take_turn().unwrap();
    assert_eq!(game.scores(), [1, 0]);
    assert_eq!(game.state(), GameState::GameOver);
    assert!(game.is_game_over());
    assert_eq!(game.take_turn().unwrap_err(), GameError::InvalidState);

    let events = game.events();
    let points = events
        .iter()
        .find(|e| e.kind == NotificationKind::Points)
        .unwrap();
    assert_eq!(points.points, 1);
    assert_eq!(points.score, 1);

    let last = events.last().unwrap();
    assert_eq!(last.kind, NotificationKind::GameOver);
    assert_eq!(last.player, Some(0));
    assert_eq!(last.data, "Dealer 1, Pone 0");

    let result = game.result().unwrap();
    assert_eq!(result.winner, 0);
    assert_eq!(result.scores, [1, 0]);
    assert!(result.skunk);
}

#[test]
fn counting_stops_at_the_winning_score() {
    let game = run_and_go_round(GameOptions::default().with_winning_score(5));
    game.lay_away().unwrap();
    game.draw_starter().unwrap();
    while game.state().is_pegging() {
        game.take_turn().unwrap();
    }
    assert_eq!(game.state(), GameState::Scoring);
    assert_eq!(game.scores(), [4, 4]);

    // The pone's pair of kings needs only 1 of its 2 points.
    let round = game.score_hands().unwrap();
    assert_eq!(round.hands.len(), 1);
    let pone = &round.hands[0];
    assert_eq!(pone.player, 1);
    assert_eq!(pone.value.total(), 2);
    assert_eq!(pone.credited, 1);
    assert!(pone.credited < pone.value.total());
    assert!(round.crib.is_none());
    assert_eq!(game.scores(), [4, 5]);
    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.result().unwrap().winner, 1);

    let events = game.events();
    let over = events
        .iter()
        .position(|e| e.kind == NotificationKind::GameOver)
        .unwrap();
    assert_eq!(over, events.len() - 1);
    assert!(!events.iter().any(|e| e.kind == NotificationKind::ScoreCrib));
    let hand = &events[over - 1];
    assert_eq!(hand.kind, NotificationKind::ScoreHand);
    assert_eq!((hand.points, hand.score), (1, 5));
}

#[test]
fn events_read_as_sentences() {
    let game = run_and_go_round(GameOptions::default());
    game.lay_away().unwrap();
    game.draw_starter().unwrap();
    game.take_turn().unwrap();
    game.take_turn().unwrap();

    let events = game.events();
    let play = events
        .iter()
        .find(|e| e.kind == NotificationKind::Play)
        .unwrap();
    assert_eq!(play.name, "Pone");
    assert_eq!(play.to_string(), "Pone played the 7 of hearts");

    let fifteen = events
        .iter()
        .find(|e| e.kind == NotificationKind::Points)
        .unwrap();
    assert_eq!(
        fifteen.to_string(),
        "Dealer pegged 2 for Fifteen for 2 (score 2)"
    );
    assert_eq!(
        events[0].to_string(),
        "A new game has started between Dealer, Pone"
    );
}

#[test]
fn laying_away_a_card_not_held_aborts() {
    let pone = [
        card(Suit::Hearts, 2),
        card(Suit::Hearts, 3),
        card(Suit::Hearts, 4),
        card(Suit::Hearts, 5),
        card(Suit::Hearts, 6),
        card(Suit::Hearts, 7),
    ];
    let dealer = [
        card(Suit::Clubs, 2),
        card(Suit::Clubs, 3),
        card(Suit::Clubs, 4),
        card(Suit::Clubs, 5),
        card(Suit::Clubs, 6),
        card(Suit::Clubs, 7),
    ];
    let deck = stacked(pone, dealer, card(Suit::Spades, 9));
    let game = start(
        GameOptions::default(),
        Scripted::new("Dealer", (dealer[4], dealer[5]), &[]),
        Scripted::new("Pone", (pone[4], dealer[0]), &[]),
        deck,
    );

    assert_eq!(
        game.lay_away().unwrap_err(),
        GameError::ContractViolation {
            player: 1,
            violation: ContractViolation::LayAwayNotInHand,
        }
    );
    assert_eq!(game.state(), GameState::Aborted);
    assert_eq!(game.draw_starter().unwrap_err(), GameError::InvalidState);
}

#[test]
fn laying_away_the_same_card_twice_aborts() {
    let pone = [
        card(Suit::Hearts, 2),
        card(Suit::Hearts, 3),
        card(Suit::Hearts, 4),
        card(Suit::Hearts, 5),
        card(Suit::Hearts, 6),
        card(Suit::Hearts, 7),
    ];
    let dealer = [
        card(Suit::Clubs, 2),
        card(Suit::Clubs, 3),
        card(Suit::Clubs, 4),
        card(Suit::Clubs, 5),
        card(Suit::Clubs, 6),
        card(Suit::Clubs, 7),
    ];
    let deck = stacked(pone, dealer, card(Suit::Spades, 9));
    let game = start(
        GameOptions::default(),
        Scripted::new("Dealer", (dealer[5], dealer[5]), &[]),
        Scripted::new("Pone", (pone[4], pone[5]), &[]),
        deck,
    );

    assert_eq!(
        game.lay_away().unwrap_err(),
        GameError::ContractViolation {
            player: 0,
            violation: ContractViolation::DuplicateLayAway,
        }
    );
    assert_eq!(game.state(), GameState::Aborted);
}

#[test]
fn pegging_a_card_not_held_aborts() {
    let pone = [
        card(Suit::Hearts, 2),
        card(Suit::Hearts, 3),
        card(Suit::Hearts, 4),
        card(Suit::Hearts, 5),
        card(Suit::Hearts, 6),
        card(Suit::Hearts, 7),
    ];
    let dealer = [
        card(Suit::Clubs, 2),
        card(Suit::Clubs, 3),
        card(Suit::Clubs, 4),
        card(Suit::Clubs, 5),
        card(Suit::Clubs, 6),
        card(Suit::Clubs, 7),
    ];
    let deck = stacked(pone, dealer, card(Suit::Spades, 9));
    let game = start(
        GameOptions::default(),
        Scripted::new("Dealer", (dealer[4], dealer[5]), &[]),
        Scripted::new("Pone", (pone[4], pone[5]), &[dealer[0]]),
        deck,
    );
    game.lay_away().unwrap();
    game.draw_starter().unwrap();

    assert_eq!(
        game.take_turn().unwrap_err(),
        GameError::ContractViolation {
            player: 1,
            violation: ContractViolation::PlayNotInHand,
        }
    );
    assert_eq!(game.state(), GameState::Aborted);
    assert!(game.discards().is_empty());
}

#[test]
fn pegging_past_thirty_one_aborts() {
    let pone = [
        card(Suit::Hearts, 13),
        card(Suit::Spades, 13),
        card(Suit::Hearts, 4),
        card(Suit::Hearts, 5),
        card(Suit::Hearts, 6),
        card(Suit::Hearts, 7),
    ];
    let dealer = [
        card(Suit::Clubs, 12),
        card(Suit::Clubs, 5),
        card(Suit::Clubs, 1),
        card(Suit::Clubs, 8),
        card(Suit::Clubs, 2),
        card(Suit::Clubs, 3),
    ];
    let deck = stacked(pone, dealer, card(Suit::Spades, 9));
    let game = start(
        GameOptions::default(),
        Scripted::new(
            "Dealer",
            (dealer[4], dealer[5]),
            &[dealer[0], dealer[1]],
        ),
        Scripted::new("Pone", (pone[4], pone[5]), &[pone[0], pone[1]]),
        deck,
    );
    game.lay_away().unwrap();
    game.draw_starter().unwrap();

    game.take_turn().unwrap();
    game.take_turn().unwrap();
    game.take_turn().unwrap();
    assert_eq!(game.discards().sum(), 30);

    assert_eq!(
        game.take_turn().unwrap_err(),
        GameError::ContractViolation {
            player: 0,
            violation: ContractViolation::PlayExceeds31,
        }
    );
    assert_eq!(game.state(), GameState::Aborted);
    assert_eq!(game.discards().sum(), 30);
    assert_eq!(game.hand(0).unwrap().len(), 3);
}

#[test]
fn plays_a_full_game() {
    let game = Game::new(GameOptions::default(), 42);
    game.join(Box::new(BeginnerPlayer::new())).unwrap();
    game.join(Box::new(IntermediatePlayer::new())).unwrap();

    let result = game.play().unwrap();
    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(result.scores[result.winner], 121);
    assert!(result.scores[1 - result.winner] < 121);
    assert_eq!(
        result.skunk,
        result.scores[1 - result.winner] <= game.options.skunk_line
    );

    let events = game.events();
    assert_eq!(events.first().unwrap().kind, NotificationKind::NewGame);
    assert_eq!(events.last().unwrap().kind, NotificationKind::GameOver);
    assert_eq!(
        events
            .iter()
            .filter(|e| e.kind == NotificationKind::GameOver)
            .count(),
        1
    );
    for seat in 0..2 {
        let credited: u32 = events
            .iter()
            .filter(|e| e.player == Some(seat))
            .map(|e| u32::from(e.points))
            .sum();
        assert_eq!(credited, u32::from(result.scores[seat]));
    }
}

#[test]
fn advanced_player_finishes_a_game() {
    let game = Game::new(GameOptions::default(), 11);
    game.join(Box::new(AdvancedPlayer::new())).unwrap();
    game.join(Box::new(BeginnerPlayer::new())).unwrap();

    let result = game.play().unwrap();
    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(result.scores[result.winner], 121);
    assert!(result.scores[1 - result.winner] < 121);
    assert_eq!(game.name(0).as_deref(), Some("Advanced"));
    assert_eq!(
        game.events().last().unwrap().to_string().lines().next(),
        Some(format!("{} won the game", game.name(result.winner).unwrap()).as_str())
    );
}

#[test]
fn same_seed_replays_the_same_game() {
    let play = || {
        let game = Game::new(GameOptions::default(), 7);
        game.join(Box::new(IntermediatePlayer::new())).unwrap();
        game.join(Box::new(IntermediatePlayer::new())).unwrap();
        game.play().unwrap();
        game.events()
    };
    assert_eq!(play(), play());
}

#[test]
fn deal_alternates_between_rounds() {
    let game = Game::new(GameOptions::default(), 9);
    game.join(Box::new(BeginnerPlayer::new())).unwrap();
    game.join(Box::new(BeginnerPlayer::new())).unwrap();
    let first = game.start_game().unwrap();

    let mut dealer = first;
    for _ in 0..3 {
        if game.is_game_over() {
            break;
        }
        let Some(round) = game.play_round().unwrap() else {
            break;
        };
        assert_eq!(round.dealer, dealer);
        dealer = 1 - dealer;
        assert_eq!(game.dealer(), Some(dealer));
    }
}

#[test]
fn plays_a_match() {
    let game = Game::new(GameOptions::default().with_winning_score(61), 2024);
    game.join(Box::new(BeginnerPlayer::new())).unwrap();
    game.join(Box::new(IntermediatePlayer::new())).unwrap();

    let result = game.play_match(3).unwrap();
    assert_eq!(result.games, 3);
    assert_eq!(result.wins.iter().sum::<u32>(), 3);
    let points: u32 = result.points.iter().sum();
    assert!((3..=6).contains(&points));
    for seat in 0..2 {
        assert!(result.points[seat] >= result.wins[seat]);
        assert!(result.points[seat] <= result.wins[seat] * 2);
    }
}
