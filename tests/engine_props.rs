use gordle::core::{ColumnState, Feedback, Hint, Word};
use gordle::game::{Game, GameConfig, Status};
use gordle::output::{BoardRenderer, PlainPainter};
use proptest::prelude::*;
use std::collections::HashMap;

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

fn letter_counts(word: &Word) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for &c in word.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn present_letters_never_exceed_secret_occurrences(secret in "[A-D]{5}", guess in "[A-D]{5}") {
        let secret = word(&secret);
        let guess = word(&guess);
        let hint = Hint::evaluate(&guess, &secret);
        let budget = letter_counts(&secret);

        let mut used: HashMap<char, usize> = HashMap::new();
        for (letter, feedback) in hint.letters() {
            if feedback.is_present() {
                *used.entry(letter).or_insert(0) += 1;
            }
        }
        for (letter, count) in used {
            prop_assert!(count <= budget.get(&letter).copied().unwrap_or(0));
        }
    }

    #[test]
    fn perfect_iff_same_letter(secret in "[A-D]{6}", guess in "[A-D]{6}") {
        let secret = word(&secret);
        let guess = word(&guess);
        let hint = Hint::evaluate(&guess, &secret);

        for (i, &feedback) in hint.feedback().iter().enumerate() {
            prop_assert_eq!(feedback == Feedback::Perfect, guess.chars()[i] == secret.chars()[i]);
        }
        prop_assert_eq!(hint.is_solved(), guess == secret);
    }

    #[test]
    fn guessing_the_secret_solves(secret in "[A-Z]{1,12}") {
        let secret = word(&secret);
        let hint = Hint::evaluate(&secret, &secret);
        prop_assert!(hint.is_solved());
        prop_assert!(hint.feedback().iter().all(|&f| f == Feedback::Perfect));
    }

    #[test]
    fn column_knowledge_is_monotonic(secret in "[A-D]{5}", guesses in prop::collection::vec("[A-D]{5}", 1..8)) {
        let secret = word(&secret);
        let mut column = ColumnState::new();
        let letters = ['A', 'B', 'C', 'D'];

        for guess in &guesses {
            let before = column.clone();
            let hint = Hint::evaluate(&word(guess), &secret);
            column.update(&hint);

            for &letter in &letters {
                prop_assert!(column.contained_count(letter) >= before.contained_count(letter));
                prop_assert!(column.contained_count(letter) <= letter_counts(&secret).get(&letter).copied().unwrap_or(0));
                let known = column.contained_count(letter) > 0 || !column.perfect_positions(letter).is_empty();
                prop_assert!(!(known && column.is_absent(letter)));
                // confirmed positions really hold the letter
                for i in column.perfect_positions(letter).iter() {
                    prop_assert_eq!(secret.chars()[i], letter);
                }
            }
            if before.is_solved() {
                prop_assert_eq!(&column, &before);
            }
        }
    }

    #[test]
    fn absent_letters_are_not_in_secret(secret in "[A-F]{5}", guesses in prop::collection::vec("[A-F]{5}", 1..6)) {
        let secret = word(&secret);
        let mut column = ColumnState::new();
        for guess in &guesses {
            column.update(&Hint::evaluate(&word(guess), &secret));
        }
        for letter in column.absent_letters() {
            prop_assert!(!secret.chars().contains(&letter));
        }
    }

    #[test]
    fn grid_history_is_append_only(secrets in prop::collection::vec("[A-C]{4}", 1..4), guesses in prop::collection::vec("[A-C]{4}", 1..6)) {
        let config = GameConfig::new(4, secrets.len(), Some(6)).unwrap();
        let mut game = Game::new(config, secrets.iter().map(|s| word(s)).collect()).unwrap();
        let alphabet = ['A', 'B', 'C'];
        let renderer = BoardRenderer::new(config, &alphabet);

        let mut previous = renderer.render_grid(&game, &PlainPainter);
        for guess in &guesses {
            if game.status() != Status::Playing {
                break;
            }
            let played = game.round();
            game.submit_guess(word(guess)).unwrap();
            let current = renderer.render_grid(&game, &PlainPainter);

            let before: Vec<&str> = previous.lines().collect();
            let after: Vec<&str> = current.lines().collect();
            // frame line plus every earlier round
            prop_assert_eq!(&before[..=played], &after[..=played]);
            prop_assert_eq!(before.len(), after.len());
            previous = current;
        }
    }
}
