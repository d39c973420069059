use chesscore::{fen::Fen, perft, Board, Color, Square};
use iai::black_box;

fn bench_shallow_perft() {
    let board = Board::default();
    assert_eq!(black_box(perft(black_box(&board), Color::White, 3)), 8902);
}

fn bench_kiwipete() {
    let fen: Fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w"
        .parse()
        .expect("valid fen");
    assert_eq!(perft(black_box(&fen.board), fen.turn, 2), 1865);
}

fn bench_generate_moves() {
    let fen: Fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w"
        .parse()
        .expect("valid fen");
    assert_eq!(black_box(&fen.board).all_legal_moves(fen.turn).len(), 46);
}

fn bench_in_check() -> bool {
    let board = Board::default();
    black_box(&board).in_check(Color::White)
}

fn bench_attempt_move() -> Board {
    let mut board = black_box(Board::default());
    board
        .attempt_move(Color::White, Square::new(6, 4), Square::new(4, 4))
        .expect("legal move");
    board
}

iai::main!(
    bench_shallow_perft,
    bench_kiwipete,
    bench_generate_moves,
    bench_in_check,
    bench_attempt_move,
);
