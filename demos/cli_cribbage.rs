//! CLI cribbage example: two automated players, one step at a time.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use cribrs::{
    AdvancedPlayer, BeginnerPlayer, Game, GameError, GameOptions, GameState, NotificationKind,
};

fn main() {
    println!("Cribbage CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    if let Err(err) = game
        .join(Box::new(BeginnerPlayer::named("Bea")))
        .and_then(|_| game.join(Box::new(AdvancedPlayer::named("Ada"))))
    {
        println!("Join error: {err}");
        return;
    }

    let mut wins = [0u32; 2];
    loop {
        let Some(games) = prompt_usize("Games to play (0 to quit): ") else {
            break;
        };
        if games == 0 {
            println!("Goodbye.");
            break;
        }

        for _ in 0..games {
            match play_game(&game) {
                Ok(()) => {
                    if let Some(result) = game.result() {
                        wins[result.winner] += 1;
                        if result.skunk {
                            println!("Skunk!");
                        }
                    }
                }
                Err(err) => {
                    println!("Game error: {err}");
                    flush_events(&game);
                    break;
                }
            }
        }
        println!(
            "\nWins: {} {}, {} {}\n",
            name(&game, 0),
            wins[0],
            name(&game, 1),
            wins[1]
        );
    }
}

fn play_game(game: &Game) -> Result<(), GameError> {
    game.start_game()?;
    flush_events(game);

    while game.state() != GameState::GameOver {
        game.deal()?;
        game.lay_away()?;
        print_hands(game);
        game.draw_starter()?;
        flush_events(game);

        while game.state().is_pegging() {
            game.take_turn()?;
            flush_events(game);
        }

        if game.state() == GameState::Scoring {
            game.score_hands()?;
            flush_events(game);
        }
        print_scores(game);
    }
    Ok(())
}

fn flush_events(game: &Game) {
    for event in game.drain_events() {
        match event.kind {
            NotificationKind::RoundOver => {}
            NotificationKind::NewGame | NotificationKind::Deal | NotificationKind::GameOver => {
                println!("\n{event}");
            }
            NotificationKind::Play | NotificationKind::Go => println!("  {event}"),
            NotificationKind::Points => println!("    {event}"),
            _ => println!("{event}"),
        }
    }
}

fn print_hands(game: &Game) {
    for seat in 0..game.player_count() {
        let cards = game
            .hand(seat)
            .map(|hand| {
                hand.cards()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default();
        println!("{} keeps {cards}", name(game, seat));
    }
}

fn print_scores(game: &Game) {
    let scores = game.scores();
    println!(
        "Score: {} {}, {} {}",
        name(game, 0),
        scores.first().copied().unwrap_or(0),
        name(game, 1),
        scores.get(1).copied().unwrap_or(0)
    );
}

fn name(game: &Game, seat: usize) -> String {
    game.name(seat).unwrap_or_else(|| format!("Seat {seat}"))
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" || input.is_empty() {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}
