use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tap_chess::{Board, Color, Game, MatchInterface, Piece, PieceType};

fn count_all_moves(board: &Board, color: Color) -> usize {
    board
        .iter_pieces()
        .filter(|piece| piece.is_ally(color))
        .map(|piece| board.possible_moves(&piece).len())
        .sum()
}

fn open_rook_board() -> Board {
    let mut board = Board::new();
    let rook = Piece::new(PieceType::Rook, Color::White, 0x33);
    board.set(3, 3, rook.code());
    board
}

fn short_game(mut game: Game, pushes: &[(u8, u8)]) -> Game {
    for &(rank, file) in pushes {
        if let Some(moves) = game.possible_moves(rank, file) {
            game.execute_move(moves[0].clone());
        }
    }
    game
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("movegen starting position", |b| {
        b.iter(|| count_all_moves(black_box(&Board::default()), Color::White))
    });
    c.bench_function("movegen open rook", |b| {
        let board = open_rook_board();
        let rook = board.get(3, 3);
        b.iter(|| black_box(&board).possible_moves(black_box(&rook)).len())
    });
    c.bench_function("pawn exchange game", |b| {
        b.iter(|| {
            short_game(
                Game::default(),
                black_box(&[(6, 4), (1, 4), (6, 3), (1, 3), (6, 2), (1, 2)]),
            )
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
