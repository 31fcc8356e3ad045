//! Round integration tests.

#![expect(clippy::float_cmp, reason = "expected counts are exactly representable")]

use std::collections::VecDeque;

use countjack::{
    Action, Autopilot, Card, CardRequest, Event, HandStatus, Input, LogSink,
    Notice, Operator, Prompt, Record, Round, RoundError, RoundState, Session, Shoe,
    TableOptions, play_round,
};

fn session(options: TableOptions) -> Session {
    Session::new(options).unwrap()
}

fn deal(player: &[Card], dealer_up: Card) -> Input {
    Input::Deal {
        player: player.to_vec(),
        dealer_up,
    }
}

fn notices(events: &[Event]) -> Vec<Notice> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Notice(notice) => Some(notice.clone()),
            Event::Record(_) => None,
        })
        .collect()
}

/// Answers prompts from a fixed script, then stops.
struct Scripted(VecDeque<Input>);

impl Scripted {
    fn new(inputs: impl IntoIterator<Item = Input>) -> Self {
        Self(inputs.into_iter().collect())
    }
}

impl Operator for Scripted {
    fn respond(&mut self, _prompt: &Prompt) -> Option<Input> {
        self.0.pop_front()
    }
}

#[test]
fn split_eights_against_six() {
    let mut session = session(TableOptions::default().with_decks(6));
    let mut round = Round::new();

    let events = round
        .step(&mut session, deal(&[Card::Eight, Card::Eight], Card::Six))
        .unwrap();
    assert_eq!(notices(&events), vec![Notice::Pair]);
    assert_eq!(
        round.prompt(),
        Some(Prompt::PairChoice {
            recommended: Action::Stand
        })
    );

    let events = round.step(&mut session, Input::action("split")).unwrap();
    assert_eq!(notices(&events), vec![Notice::Split]);
    assert_eq!(round.hands().len(), 2);
    assert_eq!(
        round.prompt(),
        Some(Prompt::Card(CardRequest::Split { hand_index: 0 }))
    );

    // first split hand: 8 + 3
    let events = round.step(&mut session, Input::card("3")).unwrap();
    assert_eq!(
        events,
        vec![Event::Record(Record::SplitHand {
            hand_index: 0,
            hand_value: 11,
            recommended: Action::Hit,
        })]
    );

    // second split hand: 8 + K, then play returns to the first hand
    round.step(&mut session, Input::card("K")).unwrap();
    assert_eq!(
        round.prompt(),
        Some(Prompt::Action {
            hand_index: 0,
            recommended: Action::Hit,
        })
    );

    round.step(&mut session, Input::action("hit")).unwrap();
    round.step(&mut session, Input::card("9")).unwrap();
    assert_eq!(round.hands()[0].value(), 20);
    assert_eq!(
        round.prompt(),
        Some(Prompt::Action {
            hand_index: 0,
            recommended: Action::Stand,
        })
    );

    round.step(&mut session, Input::action("stand")).unwrap();
    assert_eq!(
        round.prompt(),
        Some(Prompt::Action {
            hand_index: 1,
            recommended: Action::Stand,
        })
    );

    let events = round.step(&mut session, Input::action("bogus")).unwrap();
    assert_eq!(
        notices(&events),
        vec![Notice::UnrecognizedAction {
            token: "bogus".into(),
            substituted: Action::Stand,
        }]
    );
    assert_eq!(round.prompt(), Some(Prompt::OtherPlayersCards));

    let events = round
        .step(&mut session, Input::cards(["2", "Z"]))
        .unwrap();
    assert_eq!(
        notices(&events),
        vec![Notice::InvalidCard { token: "Z".into() }]
    );

    // dealer shows 6 + 10 and must draw
    round.step(&mut session, Input::cards(["10"])).unwrap();
    assert_eq!(round.prompt(), Some(Prompt::Card(CardRequest::Dealer)));

    round.step(&mut session, Input::card("x")).unwrap();
    assert_eq!(round.prompt(), Some(Prompt::Card(CardRequest::Dealer)));

    let events = round.step(&mut session, Input::card("5")).unwrap();
    assert!(round.is_settled());
    assert_eq!(round.prompt(), None);

    let settlement = round.settlement().unwrap();
    assert!(events.contains(&Event::Record(Record::Settlement(settlement.clone()))));
    assert_eq!(settlement.hands.len(), 2);
    assert_eq!(settlement.hands[0].value, 20);
    assert_eq!(settlement.hands[1].value, 18);
    assert!(!settlement.hands[0].bust && !settlement.hands[1].bust);
    assert_eq!(settlement.dealer_value, 21);
    assert_eq!(settlement.dealer_cards, vec![Card::Six, Card::Ten, Card::Five]);
    assert_eq!(settlement.cards_played, 9);
    assert_eq!(settlement.running_count, 1.5);
    assert_eq!(settlement.true_count, 1.5 / (6.0 - 9.0 / 52.0));

    assert_eq!(session.count().running_count(), 1.5);
    assert_eq!(session.history().len(), 3);
}

#[test]
fn history_records_each_decision() {
    let mut session = session(TableOptions::default());
    let mut round = Round::new();

    round
        .step(&mut session, deal(&[Card::Ten, Card::Two], Card::Seven))
        .unwrap();
    round.step(&mut session, Input::action("h")).unwrap();
    round.step(&mut session, Input::card("4")).unwrap();

    let history = session.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history.entries()[0].player_hand, vec![Card::Ten, Card::Two]);
    assert_eq!(history.entries()[0].recommended_action, Action::Hit);
    assert_eq!(history.entries()[0].dealer_up_card, Card::Seven);
    assert_eq!(
        history.entries()[1].player_hand,
        vec![Card::Ten, Card::Two, Card::Four]
    );
    assert_eq!(history.entries()[1].recommended_action, Action::Hit);
    assert_eq!(history.entries()[1].running_count, 1.0);
}

#[test]
fn insurance_offered_on_ace() {
    let mut session = session(TableOptions::default().with_insurance(true));
    let mut round = Round::new();

    round
        .step(&mut session, deal(&[Card::Ten, Card::Seven], Card::Ace))
        .unwrap();
    assert_eq!(round.state(), RoundState::InsuranceOffer);
    assert_eq!(round.prompt(), Some(Prompt::Insurance));
    assert!(session.history().is_empty());

    let events = round.step(&mut session, Input::Insurance(true)).unwrap();
    assert_eq!(notices(&events), vec![Notice::Insurance { taken: true }]);
    assert_eq!(round.insurance_taken(), Some(true));
    assert_eq!(
        round.prompt(),
        Some(Prompt::Action {
            hand_index: 0,
            recommended: Action::Stand,
        })
    );
}

#[test]
fn insurance_unavailable_goes_straight_to_play() {
    let mut session = session(TableOptions::default().with_insurance(false));
    let mut round = Round::new();

    let events = round
        .step(&mut session, deal(&[Card::Ten, Card::Seven], Card::Ace))
        .unwrap();
    assert_eq!(notices(&events), vec![Notice::InsuranceUnavailable]);
    assert!(matches!(round.state(), RoundState::PlayerAction { .. }));
    assert_eq!(round.insurance_taken(), None);
}

#[test]
fn double_takes_one_card() {
    let mut session = session(TableOptions::default());
    // a warm shoe: eight fives already seen
    for _ in 0..8 {
        session.update("5").unwrap();
    }
    let mut round = Round::new();

    round
        .step(&mut session, deal(&[Card::Six, Card::Five], Card::Six))
        .unwrap();
    assert_eq!(
        round.prompt(),
        Some(Prompt::Action {
            hand_index: 0,
            recommended: Action::Double,
        })
    );

    round.step(&mut session, Input::action("double")).unwrap();
    assert_eq!(
        round.prompt(),
        Some(Prompt::Card(CardRequest::Double { hand_index: 0 }))
    );

    round.step(&mut session, Input::card("2")).unwrap();
    assert_eq!(round.hands()[0].status(), HandStatus::Doubled);
    assert_eq!(round.prompt(), Some(Prompt::OtherPlayersCards));

    round.step(&mut session, Input::cards(Vec::<String>::new())).unwrap();
    round.step(&mut session, Input::cards(["K"])).unwrap();
    round.step(&mut session, Input::card("A")).unwrap();

    let settlement = round.settlement().unwrap();
    assert!(settlement.hands[0].doubled);
    assert_eq!(settlement.hands[0].value, 13);
    assert_eq!(settlement.dealer_value, 17);
}

#[test]
fn bust_ends_hand_but_dealer_still_draws() {
    let mut session = session(TableOptions::default());
    let mut round = Round::new();

    round
        .step(&mut session, deal(&[Card::Ten, Card::Six], Card::Ten))
        .unwrap();
    round.step(&mut session, Input::action("hit")).unwrap();
    let events = round.step(&mut session, Input::card("K")).unwrap();
    assert_eq!(
        notices(&events),
        vec![Notice::Bust {
            hand_index: 0,
            value: 26
        }]
    );
    assert_eq!(round.prompt(), Some(Prompt::OtherPlayersCards));

    round.step(&mut session, Input::cards(["4", "9"])).unwrap();
    round.step(&mut session, Input::cards(["3"])).unwrap();
    round.step(&mut session, Input::card("4")).unwrap();

    let settlement = round.settlement().unwrap();
    assert!(settlement.hands[0].bust);
    assert_eq!(settlement.dealer_value, 17);
    assert_eq!(settlement.cards_played, 8);
}

#[test]
fn split_not_allowed_in_action_loop() {
    let mut session = session(TableOptions::default());
    let mut round = Round::new();

    round
        .step(&mut session, deal(&[Card::Ten, Card::Eight], Card::Nine))
        .unwrap();
    let events = round.step(&mut session, Input::action("split")).unwrap();
    assert_eq!(
        notices(&events),
        vec![Notice::UnrecognizedAction {
            token: "split".into(),
            substituted: Action::Stand,
        }]
    );
    assert_eq!(round.hands()[0].status(), HandStatus::Stand);
}

#[test]
fn pair_hit_continues_action_loop() {
    let mut session = session(TableOptions::default());
    let mut round = Round::new();

    round
        .step(&mut session, deal(&[Card::Two, Card::Two], Card::Ten))
        .unwrap();
    round.step(&mut session, Input::action("hit")).unwrap();
    round.step(&mut session, Input::card("5")).unwrap();
    assert_eq!(
        round.prompt(),
        Some(Prompt::Action {
            hand_index: 0,
            recommended: Action::Hit,
        })
    );
    assert_eq!(round.hands().len(), 1);
}

#[test]
fn invalid_player_card_asks_again() {
    let mut session = session(TableOptions::default());
    let mut round = Round::new();

    round
        .step(&mut session, deal(&[Card::Five, Card::Four], Card::Two))
        .unwrap();
    round.step(&mut session, Input::action("hit")).unwrap();
    let played = session.count().cards_played();

    let events = round.step(&mut session, Input::card("11")).unwrap();
    assert_eq!(
        notices(&events),
        vec![Notice::InvalidCard { token: "11".into() }]
    );
    assert_eq!(session.count().cards_played(), played);
    assert_eq!(
        round.prompt(),
        Some(Prompt::Card(CardRequest::Hit { hand_index: 0 }))
    );
}

#[test]
fn unknown_pair_choice_plays_recommendation() {
    let mut session = session(TableOptions::default());
    let mut round = Round::new();

    round
        .step(&mut session, deal(&[Card::Ten, Card::Ten], Card::Five))
        .unwrap();
    assert_eq!(
        round.prompt(),
        Some(Prompt::PairChoice {
            recommended: Action::Stand
        })
    );

    let events = round.step(&mut session, Input::action("zzz")).unwrap();
    assert_eq!(
        notices(&events),
        vec![Notice::UnrecognizedAction {
            token: "zzz".into(),
            substituted: Action::Stand,
        }]
    );
    assert_eq!(round.hands().len(), 1);
    assert_eq!(round.hands()[0].status(), HandStatus::Stand);
    assert_eq!(round.prompt(), Some(Prompt::OtherPlayersCards));
}

#[test]
fn invalid_dealer_card_is_skipped() {
    let mut session = session(TableOptions::default());
    let mut round = Round::new();

    round
        .step(&mut session, deal(&[Card::Ten, Card::Nine], Card::Five))
        .unwrap();
    round.step(&mut session, Input::action("stand")).unwrap();
    round.step(&mut session, Input::cards(Vec::<String>::new())).unwrap();
    let played = session.count().cards_played();

    let events = round.step(&mut session, Input::cards(["Z", "A"])).unwrap();
    assert_eq!(
        notices(&events),
        vec![Notice::InvalidCard { token: "Z".into() }]
    );
    assert_eq!(round.dealer_hand().cards(), &[Card::Five, Card::Ace]);
    assert_eq!(session.count().cards_played(), played + 1);
    // soft 16 still draws
    assert_eq!(round.prompt(), Some(Prompt::Card(CardRequest::Dealer)));
}

#[test]
fn invalid_split_card_asks_for_same_hand() {
    let mut session = session(TableOptions::default());
    let mut round = Round::new();

    round
        .step(&mut session, deal(&[Card::Eight, Card::Eight], Card::Six))
        .unwrap();
    round.step(&mut session, Input::action("p")).unwrap();
    let played = session.count().cards_played();

    let events = round.step(&mut session, Input::card("1")).unwrap();
    assert_eq!(
        notices(&events),
        vec![Notice::InvalidCard { token: "1".into() }]
    );
    assert_eq!(session.count().cards_played(), played);
    assert_eq!(round.hands()[0].len(), 1);
    assert_eq!(
        round.prompt(),
        Some(Prompt::Card(CardRequest::Split { hand_index: 0 }))
    );

    round.step(&mut session, Input::card("3")).unwrap();
    assert_eq!(round.hands()[0].value(), 11);
    assert_eq!(
        round.prompt(),
        Some(Prompt::Card(CardRequest::Split { hand_index: 1 }))
    );
}

#[test]
fn soft_seventeen_rule_only_reports() {
    for stand_on_soft_17 in [false, true] {
        let options = TableOptions::default().with_stand_on_soft_17(stand_on_soft_17);
        let mut session = session(options);
        let mut round = Round::new();

        round
            .step(&mut session, deal(&[Card::Ten, Card::Nine], Card::Six))
            .unwrap();
        round.step(&mut session, Input::action("stand")).unwrap();
        round.step(&mut session, Input::cards(Vec::<String>::new())).unwrap();
        let events = round.step(&mut session, Input::cards(["A"])).unwrap();

        assert!(round.is_settled());
        assert_eq!(round.dealer_hand().len(), 2);
        assert_eq!(
            notices(&events).contains(&Notice::DealerStandsOnSoft17),
            stand_on_soft_17
        );
    }
}

#[test]
fn wrong_input_is_rejected_without_counting() {
    let mut session = session(TableOptions::default());
    let mut round = Round::new();

    assert_eq!(
        round.step(&mut session, Input::card("5")).unwrap_err(),
        RoundError::UnexpectedInput
    );
    assert_eq!(
        round.step(&mut session, deal(&[], Card::Five)).unwrap_err(),
        RoundError::EmptyHand
    );
    assert_eq!(session.count().cards_played(), 0);

    round
        .step(&mut session, deal(&[Card::Ten, Card::Ten], Card::Five))
        .unwrap();
    assert_eq!(
        round.step(&mut session, Input::Insurance(true)).unwrap_err(),
        RoundError::UnexpectedInput
    );
}

#[test]
fn settled_round_refuses_input() {
    let mut session = session(TableOptions::default());
    let mut operator = Scripted::new([
        deal(&[Card::Ten, Card::Queen], Card::Nine),
        Input::action("stand"),
        Input::cards(Vec::<String>::new()),
        Input::cards(["8"]),
    ]);
    let mut events = Vec::new();

    let settlement = play_round(&mut session, &mut operator, &mut events).unwrap();
    assert_eq!(settlement.dealer_value, 17);
    assert!(matches!(events.last(), Some(Event::Record(Record::Settlement(_)))));

    let mut round = Round::new();
    round
        .step(&mut session, deal(&[Card::Ten, Card::Queen], Card::Nine))
        .unwrap();
    round.step(&mut session, Input::action("s")).unwrap();
    round.step(&mut session, Input::cards(Vec::<String>::new())).unwrap();
    round.step(&mut session, Input::cards(["8"])).unwrap();
    assert_eq!(
        round.step(&mut session, Input::card("2")).unwrap_err(),
        RoundError::RoundOver
    );
}

#[test]
fn operator_that_stops_abandons_round() {
    let mut session = session(TableOptions::default());
    let mut operator = Scripted::new([deal(&[Card::Nine, Card::Two], Card::Four)]);

    let err = play_round(&mut session, &mut operator, &mut LogSink).unwrap_err();
    assert_eq!(err, RoundError::Abandoned);
}

#[test]
fn closure_operator_drives_round() {
    let mut session = session(TableOptions::default());
    let mut operator = |prompt: &Prompt| -> Option<Input> {
        Some(match prompt {
            Prompt::PlayerHand => deal(&[Card::Nine, Card::Nine], Card::Seven),
            Prompt::PairChoice { .. } => Input::action("stand"),
            Prompt::OtherPlayersCards | Prompt::DealerCards => Input::cards(["J"]),
            _ => return None,
        })
    };

    let settlement = play_round(&mut session, &mut operator, &mut LogSink).unwrap();
    assert_eq!(settlement.hands[0].value, 18);
    assert_eq!(settlement.dealer_value, 17);
    assert_eq!(settlement.running_count, -2.5);
}

#[test]
fn autopilot_count_balances_over_a_shoe() {
    let mut session = session(TableOptions::default().with_decks(2));
    let mut shoe = Shoe::new(2, 2024);
    let mut rounds = 0;

    while !shoe.needs_reshuffle(0.6) {
        let mut pilot = Autopilot::new(&mut shoe);
        play_round(&mut session, &mut pilot, &mut LogSink).unwrap();
        rounds += 1;
    }
    // burn the rest of the shoe
    while let Some(card) = shoe.draw() {
        session.record(card);
    }

    assert!(rounds > 0);
    assert_eq!(session.count().cards_played(), 104);
    assert_eq!(session.count().running_count(), 0.0);

    shoe.reshuffle();
    session.reset();
    assert!(!shoe.needs_reshuffle(0.6));

    let mut pilot = Autopilot::new(&mut shoe);
    let settlement = play_round(&mut session, &mut pilot, &mut LogSink).unwrap();
    assert_eq!(settlement.cards_played as usize, 104 - shoe.remaining());
}

#[test]
fn reset_starts_a_fresh_shoe() {
    let mut session = session(TableOptions::default().with_decks(6));
    session.update("5").unwrap();
    session.update("6").unwrap();
    assert!(session.count().true_count() > 0.0);

    session.reset();
    assert_eq!(session.count().cards_played(), 0);
    assert_eq!(session.count().true_count(), 0.0);
    assert_eq!(session.options().decks, 6);
}
