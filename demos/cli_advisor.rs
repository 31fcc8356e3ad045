//! Console advisor example.
//!
//! Run with `RUST_LOG=debug` to see every counted card.

use std::io::{self, Write};

use countjack::{
    Card, CardRequest, Event, Input, Notice, Operator, Prompt, Record, RoundError, Session, Sink,
    TableOptions, play_round,
};

fn main() {
    env_logger::init();
    println!("Blackjack count advisor (type 'exit' to quit, 'reset' for a new shoe)");

    let Some(decks) = prompt_decks() else {
        return;
    };
    let stand_on_soft_17 = matches!(
        prompt_line("Does the dealer stand on soft 17? (y/n): ").as_str(),
        "y" | "yes"
    );
    let options = TableOptions::default()
        .with_decks(decks)
        .with_stand_on_soft_17(stand_on_soft_17);

    let mut session = match Session::new(options) {
        Ok(session) => session,
        Err(err) => {
            println!("Cannot start: {err}");
            return;
        }
    };

    let mut operator = Console::default();
    let mut sink = ConsoleSink;

    loop {
        println!("\n--- New round ---");
        let line = prompt_line("Your cards (e.g. 10 A): ");
        match line.as_str() {
            "exit" | "q" => break,
            "reset" => {
                session.reset();
                println!("Count reset.");
                continue;
            }
            _ => {}
        }

        let Some(player) = parse_cards(&line) else {
            println!("Invalid hand. Use 2-10, J, Q, K, A.");
            continue;
        };
        let Ok(dealer_up) = prompt_line("Dealer up-card: ").parse::<Card>() else {
            println!("Invalid dealer card.");
            continue;
        };

        operator.pending = Some(Input::Deal { player, dealer_up });
        match play_round(&mut session, &mut operator, &mut sink) {
            Ok(_) => {}
            Err(RoundError::Abandoned) => break,
            Err(err) => println!("Round error: {err}"),
        }
    }

    println!("Decisions logged this session: {}", session.history().len());
}

#[derive(Default)]
struct Console {
    pending: Option<Input>,
}

impl Operator for Console {
    fn respond(&mut self, prompt: &Prompt) -> Option<Input> {
        let input = match *prompt {
            Prompt::PlayerHand => return self.pending.take(),
            Prompt::Insurance => {
                let answer = prompt_line("Dealer shows an Ace. Take insurance? (y/n): ");
                Input::Insurance(matches!(answer.as_str(), "y" | "yes"))
            }
            Prompt::PairChoice { recommended } => Input::Action(prompt_line(&format!(
                "You have a pair. Split (p), double (d), hit (h) or stand (s)? [{recommended}]: "
            ))),
            Prompt::Action {
                hand_index,
                recommended,
            } => Input::Action(prompt_line(&format!(
                "Hand {}: hit (h), stand (s) or double (d)? [{recommended}]: ",
                hand_index + 1
            ))),
            Prompt::Card(request) => Input::Card(prompt_line(&card_label(request))),
            Prompt::OtherPlayersCards => Input::Cards(split_tokens(&prompt_line(
                "Cards dealt to other players (Enter for none): ",
            ))),
            Prompt::DealerCards => Input::Cards(split_tokens(&prompt_line(
                "Other dealer cards already shown (Enter for none): ",
            ))),
        };

        if matches!(&input, Input::Action(token) | Input::Card(token) if token == "exit") {
            return None;
        }
        Some(input)
    }
}

struct ConsoleSink;

impl Sink for ConsoleSink {
    fn emit(&mut self, event: &Event) {
        match event {
            Event::Record(Record::Decision {
                hand_index,
                hand_value,
                recommended,
                running_count,
                true_count,
                ..
            }) => {
                println!("\nRunning count: {running_count:.1}");
                println!("True count: {true_count:.2}");
                println!("Hand {} value: {hand_value}", hand_index + 1);
                println!("Recommended: {}", colorize(recommended.name(), "32"));
            }
            Event::Record(Record::SplitHand {
                hand_index,
                hand_value,
                recommended,
            }) => {
                println!(
                    "Hand {}: {hand_value}, recommended {}",
                    hand_index + 1,
                    colorize(recommended.name(), "32")
                );
            }
            Event::Record(Record::Settlement(settlement)) => {
                println!("\nRunning count: {:.1}", settlement.running_count);
                println!("True count: {:.2}", settlement.true_count);
                println!("Dealer final value: {}", settlement.dealer_value);
                for hand in &settlement.hands {
                    let bust = if hand.bust { " (bust)" } else { "" };
                    println!("Hand {}: {}{bust}", hand.hand_index + 1, hand.value);
                }
            }
            Event::Notice(notice) => println!("{}", colorize(&describe(notice), "33")),
        }
    }
}

fn describe(notice: &Notice) -> String {
    match notice {
        Notice::InvalidCard { token } => format!("Invalid card {token:?}, not counted."),
        Notice::UnrecognizedAction { token, substituted } => {
            format!("Unknown action {token:?}, playing {substituted}.")
        }
        Notice::InsuranceUnavailable => "Insurance is not offered at this table.".to_owned(),
        Notice::Insurance { taken: true } => "Insurance taken.".to_owned(),
        Notice::Insurance { taken: false } => "Insurance declined.".to_owned(),
        Notice::Pair => "You have a pair!".to_owned(),
        Notice::Split => "Hand split; each hand is played separately.".to_owned(),
        Notice::Bust { hand_index, value } => {
            format!("Hand {} busts with {value}.", hand_index + 1)
        }
        Notice::DealerStandsOnSoft17 => "Dealer stands on soft 17.".to_owned(),
    }
}

fn card_label(request: CardRequest) -> String {
    match request {
        CardRequest::Split { hand_index } => format!("Second card for hand {}: ", hand_index + 1),
        CardRequest::Hit { hand_index } => format!("Card drawn for hand {}: ", hand_index + 1),
        CardRequest::Double { hand_index } => {
            format!("Card drawn after doubling hand {}: ", hand_index + 1)
        }
        CardRequest::Dealer => "Card drawn by the dealer: ".to_owned(),
    }
}

fn parse_cards(line: &str) -> Option<Vec<Card>> {
    let cards = line
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<Card>, _>>()
        .ok()?;
    (!cards.is_empty()).then_some(cards)
}

fn split_tokens(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_owned).collect()
}

fn prompt_decks() -> Option<u8> {
    loop {
        let input = prompt_line("How many decks are in the shoe? ");
        if input == "exit" || input == "q" {
            return None;
        }
        match input.parse::<u8>() {
            Ok(value) if value > 0 => return Some(value),
            _ => println!("Please enter a number of decks greater than 0."),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => return "exit".to_owned(),
        Ok(_) => {}
        Err(_) => return String::new(),
    }
    input.trim().to_lowercase()
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
