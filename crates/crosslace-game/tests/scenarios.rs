//! End-to-end flows: generation, filling, checking, scoring.

use crosslace_core::{Orientation, Position, UserGrid};
use crosslace_game::{Game, check_solution, score};
use crosslace_generator::{CandidateWord, Difficulty, GeneratedPuzzle, PlacementEngine};

fn generate(texts: &[&str]) -> GeneratedPuzzle {
    let candidates: Vec<_> = texts
        .iter()
        .map(|text| CandidateWord::new(*text, "", Difficulty::Easy, "ru").unwrap())
        .collect();
    PlacementEngine::new(8).generate(&candidates)
}

#[test]
fn four_linked_words_fill_an_eight_grid() {
    let puzzle = generate(&["КОТ", "ДОМ", "КОД", "ТОМ"]);

    assert_eq!(puzzle.words.len(), 4);

    // The seed word sits horizontally centered.
    let kot = &puzzle.words[0];
    assert_eq!(kot.text(), "КОТ");
    assert_eq!(kot.start(), Position::new(3, 2));
    assert_eq!(kot.orientation(), Orientation::Across);

    // Numbering is sequential over distinct start cells, and each word's
    // number matches its start cell's number.
    let mut seen = Vec::new();
    for word in &puzzle.words {
        let number = word.number().expect("every placed word is numbered");
        assert_eq!(puzzle.grid[word.start()].number(), Some(number));
        if !seen.contains(&number) {
            seen.push(number);
        }
    }
    assert_eq!(seen, (1..=u8::try_from(seen.len()).unwrap()).collect::<Vec<_>>());
}

#[test]
fn single_word_puzzle_is_centered_and_numbered_one() {
    let puzzle = generate(&["СЫР"]);

    assert_eq!(puzzle.words.len(), 1);
    let word = &puzzle.words[0];
    assert_eq!(word.start(), Position::new(3, 2));
    assert_eq!(word.number(), Some(1));

    // Everything outside the word stays blocked.
    assert_eq!(puzzle.grid.open_count(), 3);
    for pos in puzzle.grid.open_positions() {
        assert_eq!(pos.row, 3);
        assert!((2..=4).contains(&pos.col));
    }
}

#[test]
fn word_longer_than_the_grid_yields_an_empty_puzzle() {
    let puzzle = generate(&["ПРОГРАММИРОВАНИЕ"]);
    assert!(puzzle.words.is_empty());
    assert_eq!(puzzle.grid.open_count(), 0);
}

#[test]
fn correct_fill_checks_out_at_one_hundred() {
    let puzzle = generate(&["КОТ", "ДОМ", "КОД", "ТОМ"]);
    let user = UserGrid::solved_from(&puzzle.grid);

    assert!(check_solution(&user, &puzzle.grid));
    assert_eq!(score(&user, &puzzle.grid), 100);
}

#[test]
fn one_wrong_letter_fails_the_check_and_docks_the_score() {
    let puzzle = generate(&["КОТ", "ДОМ", "КОД", "ТОМ"]);
    let total = u32::try_from(puzzle.grid.open_count()).unwrap();

    let wrong_pos = puzzle
        .grid
        .open_positions()
        .next()
        .expect("puzzle has open cells");
    let wrong_letter = if puzzle.grid[wrong_pos].letter() == Some('Ж') {
        'Щ'
    } else {
        'Ж'
    };
    let user = UserGrid::solved_from(&puzzle.grid)
        .with_letter(wrong_pos, wrong_letter)
        .unwrap();

    assert!(!check_solution(&user, &puzzle.grid));
    let expected = u8::try_from((total - 1) * 100 / total).unwrap();
    assert_eq!(score(&user, &puzzle.grid), expected);
}

#[test]
fn empty_candidate_list_yields_a_trivially_solved_blank() {
    let puzzle = generate(&[]);
    assert!(puzzle.words.is_empty());
    assert_eq!(puzzle.grid.open_count(), 0);

    let user = UserGrid::empty(puzzle.grid.size());
    assert!(check_solution(&user, &puzzle.grid));
    assert_eq!(score(&user, &puzzle.grid), 0);
}

#[test]
fn session_tracks_progress_to_completion() {
    let mut game = Game::new(generate(&["КОТ", "ДОМ"]));
    assert_eq!(game.score(), 0);

    let positions: Vec<_> = game.grid().open_positions().collect();
    let mut last_score = 0;
    for pos in &positions {
        let letter = game.grid()[*pos].letter().unwrap();
        game.enter_letter(*pos, letter).unwrap();
        let current = game.score();
        assert!(current >= last_score, "score must not decrease while filling");
        last_score = current;
    }
    assert!(game.is_solved());
    assert_eq!(game.score(), 100);
}
