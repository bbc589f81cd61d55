use anyhow::Result;
use lexigrid::{Axis, Board, Language, MoveError, PlayError, Pos};
use std::collections::HashSet;

const WORDS: &[&str] = &["rust", "rest", "tree", "trees", "st", "ex", "tax"];

fn run() -> Result<()> {
    let dictionary: HashSet<String> = WORDS.iter().map(|&word| String::from(word)).collect();
    let mut board = Board::new(Language::EN);

    let moves: &[(&str, Pos, Axis)] = &[
        ("rust", Pos::new(7, 7), Axis::Horizontal),
        ("tree", Pos::new(7, 10), Axis::Vertical),
        ("trees", Pos::new(7, 10), Axis::Vertical),
        ("ex", Pos::new(0, 0), Axis::Horizontal),
        ("tax", Pos::new(9, 9), Axis::Vertical),
    ];
    for &(word, start, axis) in moves {
        let placements = board.placements_for_word(word, start, axis)?;
        let words = board.evaluate(&placements);
        println!("evaluate {:>6} at {}: {:?}", word, start, words.map(|w| w.len()));
        match board.play(&placements, &dictionary) {
            Ok(played) => {
                for word in &played.words {
                    println!("  {} scores {}", word.span, word.score);
                }
                println!("  total {}", played.score);
            }
            Err(PlayError::Illegal(MoveError::NotConnectedToBoard)) => {
                println!("  {} is not connected", word);
            }
            Err(err) => println!("  rejected: {}", err),
        }
    }
    println!("{}", board);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}
