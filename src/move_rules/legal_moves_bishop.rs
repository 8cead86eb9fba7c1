//! Bishop movement shape: diagonal slides over a clear path.

use crate::{
    board_location::BoardLocation,
    game_state::{piece_record::PieceRecord, piece_register::PieceRegister},
    move_rules::geometry::is_path_clear,
};

pub fn bishop_move_is_legal(
    piece: &PieceRecord,
    target: BoardLocation,
    register: &PieceRegister,
) -> bool {
    let (d_file, d_rank) = piece.location.delta_to(target);
    d_file.abs() == d_rank.abs()
        && d_file != 0
        && is_path_clear(register, piece.location, target)
}

#[cfg(test)]
mod tests {
    use super::bishop_move_is_legal;
    use crate::board_location::BoardLocation;
    use crate::game_state::chess_types::{PieceClass, PieceTeam};
    use crate::game_state::piece_register::PieceRegister;
    use crate::utils::algebraic::algebraic_to_location;

    fn square(name: &str) -> BoardLocation {
        algebraic_to_location(name).expect("test square should parse")
    }

    #[test]
    fn slides_diagonally_until_blocked() {
        let mut register = PieceRegister::new_empty();
        let bishop = register
            .add_piece(PieceClass::Bishop, PieceTeam::Light, square("c1"))
            .expect("c1 is vacant");
        register
            .add_piece(PieceClass::Pawn, PieceTeam::Dark, square("f4"))
            .expect("f4 is vacant");
        let bishop = *register.view_piece(bishop).expect("bishop is live");

        assert!(bishop_move_is_legal(&bishop, square("e3"), &register));
        assert!(bishop_move_is_legal(&bishop, square("f4"), &register));
        assert!(!bishop_move_is_legal(&bishop, square("g5"), &register));
        assert!(!bishop_move_is_legal(&bishop, square("c4"), &register));
        assert!(!bishop_move_is_legal(&bishop, square("d4"), &register));
    }
}
