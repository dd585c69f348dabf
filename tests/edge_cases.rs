use slide_solver::board::{Board, BoardError};
use slide_solver::goal::PieceAt;
use slide_solver::piece::Piece;
use slide_solver::puzzles::find_puzzle;
use slide_solver::solve_puzzle::{solve_puzzle, Outcome, Search, SearchLimits, SearchStats, Step};
use slide_solver::structs::{Cell, Direction, Move};
use slide_solver::util::{format_moves, replay};

#[test]
fn boxed_in_piece_is_unsolvable() {
    // A single piece filling the whole board has nowhere to go.
    let board = Board::new(2, 1, [Piece::new("b", 2, 1, 0, 0)]).unwrap();
    assert!(board.legal_moves().is_empty());

    let outcome = solve_puzzle(board, PieceAt::new("b", Cell::new(1, 0)), SearchLimits::default()).unwrap();
    assert_eq!(
        outcome,
        Outcome::Unsolvable(SearchStats {
            configurations: 1,
            skipped: 0,
            expanded: 1,
            max_frontier: 1,
        })
    );
}

#[test]
fn pieces_cannot_pass_each_other() {
    //  ___
    // |ab |
    //  ~~~
    let board = Board::new(
        3,
        1,
        [Piece::new("a", 1, 1, 0, 0), Piece::new("b", 1, 1, 1, 0)],
    )
    .unwrap();
    let outcome = solve_puzzle(board, PieceAt::new("a", Cell::new(2, 0)), SearchLimits::default()).unwrap();
    let stats = outcome.stats();
    assert!(outcome.solution().is_none());
    assert_eq!(stats.configurations, 3);
    assert_eq!(stats.skipped, 2);
    assert_eq!(stats.expanded, 3);
}

#[test]
fn goal_with_no_outgoing_moves_is_recognised() {
    let board = Board::new(2, 1, [Piece::new("b", 2, 1, 0, 0)]).unwrap();
    let outcome = solve_puzzle(board, PieceAt::new("b", Cell::new(0, 0)), SearchLimits::default()).unwrap();
    let solution = outcome.solution().unwrap();
    assert!(solution.moves().is_empty());
}

#[test]
fn warmup_takes_ten_moves() {
    let puzzle = find_puzzle("warmup").unwrap();
    let start = puzzle.start_board().unwrap();
    let outcome = solve_puzzle(start, puzzle.goal(), SearchLimits::default()).unwrap();
    let solution = outcome.solution().unwrap();
    assert_eq!(solution.len(), 10);
    assert_eq!(solution.stats.configurations, 31);
    assert_eq!(solution.stats.skipped, 46);
    assert_eq!(solution.stats.expanded, 29);
    assert_eq!(
        solution.moves()[..3],
        [
            Move::new("z", Direction::Right),
            Move::new("z", Direction::Right),
            Move::new("b", Direction::Down),
        ]
    );
}

#[test]
fn search_can_be_stopped_between_steps() {
    let puzzle = find_puzzle("square-root").unwrap();
    let mut search = Search::new(puzzle.start_board().unwrap(), puzzle.goal());
    for _ in 0..100 {
        assert!(matches!(search.step().unwrap(), Step::Expanded { .. }));
    }
    assert_eq!(search.stats().expanded, 100);
    assert!(search.frontier_len() > 0);
}

#[test]
fn replay_rejects_an_illegal_move() {
    let start = find_puzzle("square-root").unwrap().start_board().unwrap();
    let moves = [Move::new("g", Direction::Down), Move::new("g", Direction::Down)];
    let err = replay(&start, &moves).unwrap_err();
    assert_eq!(err.step, 2);
    assert_eq!(err.source, BoardError::Blocked(Move::new("g", Direction::Down)));
}

#[test]
fn moves_are_listed_one_per_line() {
    let moves = [Move::new("i", Direction::Right), Move::new("d", Direction::Down)];
    assert_eq!(format_moves(&moves), "  1: i -> Right\n  2: d -> Down\n");
}
