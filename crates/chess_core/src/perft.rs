use crate::{board::Board, error::ChessResult, rules::legal_moves};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
pub fn perft(board: &mut Board, depth: u8) -> ChessResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = legal_moves(board, board.side_to_move())?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for mv in &moves {
        let undo = board.make_move(mv);
        nodes += perft(board, depth - 1)?;
        board.unmake_move(mv, undo);
    }
    Ok(nodes)
}
