use ndarray::Array1;
use shakmaty::{Board, Role, Square};

/// Number of squares, and therefore the length of every state vector and
/// square distribution.
pub const NUM_SQUARES: usize = 64;

/// Signed material encoding of a board, one entry per square.
///
/// Index `i` corresponds to `Square::ALL[i]` (a1 = 0, b1 = 1, ..., h8 = 63).
pub type StateVector = Array1<f64>;

/// Material weight of a piece role. The king carries no weight.
pub const fn piece_weight(role: Role) -> f64 {
    match role {
        Role::Pawn => 1.0,
        Role::Knight => 3.0,
        Role::Bishop => 3.2,
        Role::Rook => 5.0,
        Role::Queen => 9.0,
        Role::King => 0.0,
    }
}

/// Encode a board into its 64-entry state vector.
///
/// White pieces contribute their positive weight, black pieces the
/// negated weight, and empty squares stay at zero.
pub fn encode(board: &Board) -> StateVector {
    let mut state = Array1::<f64>::zeros(NUM_SQUARES);
    for sq in Square::ALL {
        if let Some(piece) = board.piece_at(sq) {
            let sign = if piece.color.is_white() { 1.0 } else { -1.0 };
            state[usize::from(sq)] = piece_weight(piece.role) * sign;
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::{CastlingMode, Chess, Position, fen::Fen};

    fn board_from(fen: &str) -> Board {
        let pos: Chess = fen
            .parse::<Fen>()
            .unwrap()
            .into_position(CastlingMode::Standard)
            .unwrap();
        pos.board().clone()
    }

    #[test]
    fn start_position_layout() {
        let state = encode(Chess::default().board());
        assert_eq!(state.len(), NUM_SQUARES);

        assert_eq!(state[usize::from(Square::A1)], 5.0);
        assert_eq!(state[usize::from(Square::B1)], 3.0);
        assert_eq!(state[usize::from(Square::C1)], 3.2);
        assert_eq!(state[usize::from(Square::D1)], 9.0);
        assert_eq!(state[usize::from(Square::E1)], 0.0);
        assert_eq!(state[usize::from(Square::E2)], 1.0);
        assert_eq!(state[usize::from(Square::E4)], 0.0);
        assert_eq!(state[usize::from(Square::E7)], -1.0);
        assert_eq!(state[usize::from(Square::D8)], -9.0);
        assert_eq!(state[usize::from(Square::H8)], -5.0);

        // Material is symmetric in the initial position.
        assert!(state.sum().abs() < 1e-12);
    }

    #[test]
    fn kings_only_encodes_to_zero() {
        let state = encode(&board_from("4k3/8/8/8/8/8/8/4K3 w - - 0 1"));
        assert_eq!(state.len(), NUM_SQUARES);
        assert!(state.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn empty_board_has_full_length() {
        let state = encode(&Board::empty());
        assert_eq!(state.len(), NUM_SQUARES);
        assert!(state.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn encoding_is_repeatable() {
        let board = board_from("r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3");
        assert_eq!(encode(&board), encode(&board));
    }
}
