use slide_solver::board::Board;
use slide_solver::piece::Piece;
use slide_solver::puzzles::find_puzzle;
use slide_solver::structs::Direction;

fn square_root() -> Board {
    find_puzzle("square-root").unwrap().start_board().unwrap()
}

/// Every board within `depth` moves of `start`, start included.
fn neighbourhood(start: &Board, depth: usize) -> Vec<Board> {
    let mut boards = vec![start.clone()];
    let mut layer = vec![start.clone()];
    for _ in 0..depth {
        let mut next_layer = Vec::new();
        for board in &layer {
            for mv in board.legal_moves() {
                next_layer.push(board.apply(&mv));
            }
        }
        boards.extend(next_layer.iter().cloned());
        layer = next_layer;
    }
    boards
}

fn assert_valid(board: &Board) {
    let rebuilt = Board::new(board.width(), board.height(), board.pieces().cloned());
    assert!(rebuilt.is_ok(), "invalid board {rebuilt:?}:\n{board}");
}

#[test]
fn legal_moves_keep_boards_in_bounds_and_disjoint() {
    for board in neighbourhood(&square_root(), 5) {
        for mv in board.legal_moves() {
            assert_valid(&board.apply(&mv));
        }
    }
}

#[test]
fn a_move_and_its_inverse_restore_the_layout() {
    for board in neighbourhood(&square_root(), 4) {
        for mv in board.legal_moves() {
            let there = board.apply(&mv);
            let back = there.apply(&mv.inverse());
            assert!(back.same_layout(&board));
            assert_eq!(back.depth(), board.depth() + 2);
            assert_eq!(back.fingerprint(), board.fingerprint());
        }
    }
}

#[test]
fn start_has_expected_legal_moves() {
    let moves: Vec<String> = square_root()
        .legal_moves()
        .iter()
        .map(|m| m.to_string())
        .collect();
    assert_eq!(
        moves,
        vec!["g -> Down", "h -> Down", "i -> Right", "j -> Left"]
    );
}

#[test]
fn fingerprint_ignores_labels_of_same_shaped_pieces() {
    let start = square_root();
    let swapped = Board::new(
        start.width(),
        start.height(),
        start.pieces().map(|p| match p.id.as_str() {
            "g" => Piece::new("g", 1, 1, 2, 3),
            "h" => Piece::new("h", 1, 1, 1, 3),
            _ => p.clone(),
        }),
    )
    .unwrap();
    assert!(!swapped.same_layout(&start));
    assert_eq!(swapped.fingerprint(), start.fingerprint());
}

#[test]
fn fingerprint_distinguishes_different_layouts() {
    let start = square_root();
    let moved = start.apply(&slide_solver::structs::Move::new("g", Direction::Down));
    assert_ne!(moved.fingerprint(), start.fingerprint());
}

#[test]
fn ancestors_survive_their_children() {
    let start = square_root();
    let child = start.apply(&start.legal_moves()[0]);
    let grandchild = child.apply(&child.legal_moves()[0]);
    assert_eq!(start.depth(), 0);
    assert_eq!(child.depth(), 1);
    assert_eq!(grandchild.depth(), 2);
    assert_eq!(&grandchild.moves()[..1], child.moves());
}
