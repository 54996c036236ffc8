use super::*;

#[test]
fn test_color_opponent() {
    assert_eq!(Color::Black.opponent(), Color::White);
    assert_eq!(Color::White.opponent(), Color::Black);
    assert_eq!(Color::None.opponent(), Color::None);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 5);
    assert_eq!(pos.to_index(), 29);

    let pos2 = Pos::from_index(29);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, 8));
    assert!(Pos::try_new(8, 0).is_err());
    assert_eq!(Pos::try_new(2, 4).ok(), Some(Pos::new(2, 4)));
}

#[test]
fn test_pos_display() {
    assert_eq!(Pos::new(0, 0).to_string(), "a1");
    assert_eq!(Pos::new(3, 5).to_string(), "f4");
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 8);
    assert_eq!(TOTAL_CELLS, 64);
    assert_eq!(CORNERS.count(), 4);
    assert_eq!(X_SQUARES.count(), 4);
    assert_eq!(C_SQUARES.count(), 8);
    assert!((CORNERS & X_SQUARES & C_SQUARES).is_empty());
}

#[test]
fn test_initial_position() {
    let board = Board::new();
    assert_eq!(board.get_disk_color(Pos::new(3, 3)), Color::Black);
    assert_eq!(board.get_disk_color(Pos::new(4, 4)), Color::Black);
    assert_eq!(board.get_disk_color(Pos::new(3, 4)), Color::White);
    assert_eq!(board.get_disk_color(Pos::new(4, 3)), Color::White);
    assert_eq!(board.score(Color::Black), 2);
    assert_eq!(board.score(Color::White), 2);
    assert_eq!(board.empty_count(), 60);
    assert!(!board.game_ended);
    assert_eq!(board.winner, Color::None);
}

#[test]
fn test_initial_valid_moves() {
    let board = Board::new();
    let black: Vec<Pos> = board.valid_moves(Color::Black).iter_ones().collect();
    assert_eq!(
        black,
        vec![Pos::new(2, 4), Pos::new(3, 5), Pos::new(4, 2), Pos::new(5, 3)]
    );

    let white: Vec<Pos> = board.valid_moves(Color::White).iter_ones().collect();
    assert_eq!(
        white,
        vec![Pos::new(2, 3), Pos::new(3, 2), Pos::new(4, 5), Pos::new(5, 4)]
    );
    assert!(board.valid_moves(Color::None).is_empty());
}

#[test]
fn test_captures_for() {
    let board = Board::new();
    assert_eq!(board.captures_for(Pos::new(3, 5), Color::Black), vec![Pos::new(3, 4)]);
    // Occupied and non-flanking cells capture nothing
    assert!(board.captures_for(Pos::new(3, 3), Color::Black).is_empty());
    assert!(board.captures_for(Pos::new(0, 0), Color::Black).is_empty());
}

#[test]
fn test_captures_multiple_directions() {
    // Black at a1 flanks white lines towards the east and the south-east
    let mut board = Board::empty();
    board.set_disk(Pos::new(0, 1), Color::White);
    board.set_disk(Pos::new(0, 2), Color::White);
    board.set_disk(Pos::new(0, 3), Color::Black);
    board.set_disk(Pos::new(1, 1), Color::White);
    board.set_disk(Pos::new(2, 2), Color::Black);
    board.set_disk(Pos::new(1, 0), Color::White);
    board.refresh();

    let mut captures = board.captures_for(Pos::new(0, 0), Color::Black);
    captures.sort();
    assert_eq!(
        captures,
        vec![Pos::new(0, 1), Pos::new(0, 2), Pos::new(1, 1)]
    );
}

#[test]
fn test_square_classes_owned() {
    let mut board = Board::empty();
    board.set_disk(Pos::new(0, 0), Color::Black);
    board.set_disk(Pos::new(7, 7), Color::Black);
    board.set_disk(Pos::new(0, 7), Color::White);
    board.set_disk(Pos::new(1, 1), Color::Black);
    board.set_disk(Pos::new(0, 1), Color::White);
    board.set_disk(Pos::new(6, 7), Color::White);
    board.refresh();

    assert_eq!(board.corners_owned(Color::Black), 2);
    assert_eq!(board.corners_owned(Color::White), 1);
    assert_eq!(board.x_squares_owned(Color::Black), 1);
    assert_eq!(board.x_squares_owned(Color::White), 0);
    assert_eq!(board.c_squares_owned(Color::White), 2);
    assert_eq!(board.c_squares_owned(Color::None), 0);
}

#[test]
fn test_refresh_detects_game_end() {
    // Only black disks left: nobody can move
    let board = Board::from_bitboards(0b111, 0);
    assert!(board.game_ended);
    assert_eq!(board.winner, Color::Black);

    let board = Board::from_bitboards(1, 1 << 63);
    assert!(board.game_ended);
    assert_eq!(board.winner, Color::None);
}

#[test]
fn test_one_sided_pass_is_not_game_end() {
    // a1 empty, b1 black, everything else white: only White can play a1
    let black = 1u64 << 1;
    let white = u64::MAX ^ 1 ^ black;
    let board = Board::from_bitboards(black, white);

    assert!(!board.has_valid_move(Color::Black));
    assert!(board.is_valid_move(Pos::new(0, 0), Color::White));
    assert!(!board.game_ended);
}
