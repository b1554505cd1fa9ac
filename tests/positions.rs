//! Fixture positions checked against the detectors.

use serde::Deserialize;

use chess_rules::board::{
    classify_status, is_checkmate, is_king_in_check, legal_moves, Board, Color, GameStatus,
};

#[derive(Deserialize)]
struct PositionSet {
    positions: Vec<Position>,
}

#[derive(Deserialize)]
struct Position {
    name: String,
    placement: String,
    color: String,
    check: bool,
    checkmate: bool,
    #[serde(default)]
    legal_moves: Option<usize>,
}

fn parse_color(name: &str) -> Color {
    match name {
        "white" => Color::White,
        "black" => Color::Black,
        other => panic!("bad color in fixture: {other}"),
    }
}

fn load() -> PositionSet {
    let data = include_str!("data/positions.json");
    serde_json::from_str(data).expect("invalid positions.json")
}

#[test]
fn fixture_positions_match_detectors() {
    let set = load();
    assert!(!set.positions.is_empty());

    for position in &set.positions {
        let board = Board::from_placement(&position.placement)
            .unwrap_or_else(|err| panic!("{}: {err}", position.name));
        let color = parse_color(&position.color);

        assert_eq!(
            is_king_in_check(&board, color),
            position.check,
            "check mismatch for {}",
            position.name
        );
        assert_eq!(
            is_checkmate(&board, color),
            position.checkmate,
            "checkmate mismatch for {}",
            position.name
        );
        if let Some(expected) = position.legal_moves {
            assert_eq!(
                legal_moves(&board, color).len(),
                expected,
                "move count mismatch for {}",
                position.name
            );
        }
    }
}

#[test]
fn fixture_status_classification() {
    for position in load().positions {
        let board = Board::from_placement(&position.placement).expect("valid placement");
        let color = parse_color(&position.color);
        let expected = match (position.check, position.checkmate) {
            (_, true) => GameStatus::Checkmate(color),
            (true, false) => GameStatus::Check(color),
            (false, false) => GameStatus::Ongoing,
        };
        assert_eq!(classify_status(&board, color), expected, "{}", position.name);
    }
}

#[test]
fn fixture_placements_round_trip() {
    for position in load().positions {
        let board = Board::from_placement(&position.placement).expect("valid placement");
        assert_eq!(board.to_placement(), position.placement);
    }
}
