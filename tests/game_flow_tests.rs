//! Game Flow Integration Tests
//!
//! Full games driven through the public session commands only:
//! - Cursor selection and pick/commit transitions
//! - Turn alternation and counter bookkeeping
//! - En passant lifecycle across plies
//! - Win conditions (checkmate, stalemate, move limit)

use termchess::{
    GameOverState, GameSession, Phase, PieceColor, PieceType, Position, PositionSetup,
};

/// Opt-in log capture; run with RUST_LOG=termchess=debug to trace the flows
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Drive one move through the cursor interface
fn play(session: &mut GameSession, from: (u8, u8), to: (u8, u8)) {
    init_tracing();
    session.select_cursor(from.0, from.1);
    session.confirm_selection();
    session.select_cursor(to.0, to.1);
    session.confirm_selection();
}

// ============================================================================
// Turn Alternation Tests
// ============================================================================

#[test]
fn test_white_moves_first() {
    let session = GameSession::new();
    assert_eq!(session.side_to_move(), PieceColor::White);
    assert_eq!(session.fullmoves(), 1);
    assert_eq!(session.phase(), Phase::AwaitingSelection);
}

#[test]
fn test_turns_alternate_and_counters_advance() {
    let mut session = GameSession::new();

    play(&mut session, (4, 6), (4, 4)); // e-pawn double
    assert_eq!(session.side_to_move(), PieceColor::Black);
    assert_eq!(session.halfmoves(), 1);
    assert_eq!(session.fullmoves(), 1);

    play(&mut session, (4, 1), (4, 3)); // black e-pawn double
    assert_eq!(session.side_to_move(), PieceColor::White);
    assert_eq!(session.halfmoves(), 2);
    assert_eq!(session.fullmoves(), 2);
}

#[test]
fn test_out_of_turn_piece_cannot_be_picked() {
    let mut session = GameSession::new();

    session.select_cursor(4, 1); // black pawn while White to move
    session.confirm_selection();

    assert_eq!(session.phase(), Phase::AwaitingSelection);
    assert_eq!(session.picked(), None);
    assert!(Position::coords().all(|(f, r)| !session.position().square(f, r).highlighted));
}

// ============================================================================
// Move Commit Tests
// ============================================================================

#[test]
fn test_knight_develops_over_pawns() {
    let mut session = GameSession::new();

    play(&mut session, (6, 7), (5, 5)); // kingside knight out

    assert!(session.position().is_empty(6, 7));
    let knight = session.position().piece_at(5, 5).expect("knight moved");
    assert_eq!(knight.piece_type, PieceType::Knight);
    assert_eq!(knight.moves, 1);
}

#[test]
fn test_capture_records_history() {
    // white and black pawns locked diagonally
    let setup = PositionSetup::blank()
        .with_piece(PieceColor::White, PieceType::King, 4, 7)
        .with_piece(PieceColor::Black, PieceType::King, 4, 0)
        .with_piece(PieceColor::White, PieceType::Pawn, 3, 4)
        .with_piece(PieceColor::Black, PieceType::Pawn, 4, 3);
    let mut session = GameSession::from_setup(&setup);

    play(&mut session, (3, 4), (4, 3)); // pawn takes pawn

    let record = session.history().last_move().expect("capture recorded");
    assert_eq!(record.captured, Some(PieceType::Pawn));
    assert!(!record.is_en_passant);
    assert_eq!(record.from, (3, 4));
    assert_eq!(record.to, (4, 3));
}

// ============================================================================
// En Passant Lifecycle Tests
// ============================================================================

#[test]
fn test_double_advance_marks_and_expires() {
    let mut session = GameSession::new();

    play(&mut session, (4, 6), (4, 4));
    assert!(
        session.position().square(4, 5).passant_eligible(),
        "skipped square marked after the double advance"
    );

    play(&mut session, (6, 0), (5, 2)); // unrelated black reply
    assert!(
        !session.position().square(4, 5).passant_eligible(),
        "mark expires after exactly one ply"
    );
}

#[test]
fn test_en_passant_full_sequence() {
    let mut session = GameSession::new();

    play(&mut session, (4, 6), (4, 4));
    play(&mut session, (1, 0), (0, 2));
    play(&mut session, (4, 4), (4, 3));
    play(&mut session, (3, 1), (3, 3)); // double advance beside the white pawn

    // the skipped square is offered to the white pawn
    session.select_cursor(4, 3);
    session.confirm_selection();
    assert!(session.position().square(3, 2).highlighted);

    session.select_cursor(3, 2);
    session.confirm_selection();

    assert!(session.position().is_empty(3, 3), "victim removed from behind");
    assert_eq!(
        session.position().piece_at(3, 2).map(|p| p.piece_type),
        Some(PieceType::Pawn)
    );
    let record = session.history().last_move().expect("recorded");
    assert!(record.is_en_passant);
    assert_eq!(record.captured, Some(PieceType::Pawn));
}

// ============================================================================
// Win Condition Tests
// ============================================================================

#[test]
fn test_rook_ladder_checkmate_ends_game() {
    // rook on the second rank fences the king in; the other mates behind it
    let setup = PositionSetup::blank()
        .with_piece(PieceColor::White, PieceType::King, 4, 7)
        .with_piece(PieceColor::White, PieceType::Rook, 7, 1)
        .with_piece(PieceColor::White, PieceType::Rook, 0, 5)
        .with_piece(PieceColor::Black, PieceType::King, 4, 0);
    let mut session = GameSession::from_setup(&setup);

    play(&mut session, (0, 5), (0, 0));

    assert_eq!(
        session.game_over(),
        GameOverState::Checkmate {
            winner: PieceColor::White
        }
    );
    assert_eq!(session.phase(), Phase::GameEnded);
    assert_eq!(session.game_over().winner(), Some(PieceColor::White));
    assert!(!session.game_over().is_draw());
}

#[test]
fn test_queen_smother_stalemate_ends_game() {
    let setup = PositionSetup::blank()
        .with_piece(PieceColor::Black, PieceType::King, 0, 0)
        .with_piece(PieceColor::White, PieceType::King, 1, 2)
        .with_piece(PieceColor::White, PieceType::Queen, 2, 4);
    let mut session = GameSession::from_setup(&setup);

    play(&mut session, (2, 4), (2, 1)); // queen seals the corner without check

    assert_eq!(session.game_over(), GameOverState::Stalemate);
    assert_eq!(session.phase(), Phase::GameEnded);
    assert!(session.game_over().is_draw());
}

#[test]
fn test_move_limit_ends_game_regardless_of_position() {
    let mut setup = PositionSetup::blank()
        .with_piece(PieceColor::White, PieceType::King, 4, 7)
        .with_piece(PieceColor::White, PieceType::Queen, 0, 6)
        .with_piece(PieceColor::Black, PieceType::King, 4, 0)
        .with_piece(PieceColor::Black, PieceType::Queen, 7, 1);
    setup.side_to_move = PieceColor::Black;
    setup.fullmoves = 49;
    let mut session = GameSession::from_setup(&setup);

    play(&mut session, (7, 1), (7, 2)); // any quiet black move

    assert_eq!(session.fullmoves(), 50);
    assert_eq!(session.game_over(), GameOverState::MoveLimit);
    assert_eq!(session.phase(), Phase::GameEnded);
}

#[test]
fn test_finished_game_ignores_further_input() {
    let setup = PositionSetup::blank()
        .with_piece(PieceColor::White, PieceType::King, 4, 7)
        .with_piece(PieceColor::White, PieceType::Rook, 7, 1)
        .with_piece(PieceColor::White, PieceType::Rook, 0, 5)
        .with_piece(PieceColor::Black, PieceType::King, 4, 0);
    let mut session = GameSession::from_setup(&setup);
    play(&mut session, (0, 5), (0, 0));
    assert_eq!(session.phase(), Phase::GameEnded);

    let halfmoves = session.halfmoves();
    play(&mut session, (7, 1), (7, 4)); // attempt after the end

    assert_eq!(session.halfmoves(), halfmoves, "no ply committed");
    assert_eq!(session.phase(), Phase::GameEnded);
}

// ============================================================================
// Import Tests
// ============================================================================

#[test]
fn test_imported_fields_are_exposed() {
    let mut setup = PositionSetup::blank()
        .with_piece(PieceColor::White, PieceType::King, 4, 7)
        .with_piece(PieceColor::Black, PieceType::King, 4, 0);
    setup.side_to_move = PieceColor::Black;
    setup.halfmoves = 31;
    setup.fullmoves = 16;

    let session = GameSession::from_setup(&setup);

    assert_eq!(session.side_to_move(), PieceColor::Black);
    assert_eq!(session.halfmoves(), 31);
    assert_eq!(session.fullmoves(), 16);
    assert!(!session.castling_rights(PieceColor::White).queenside);
    assert!(!session.castling_rights(PieceColor::White).kingside);
    assert_eq!(session.game_over(), GameOverState::Playing);
}

#[test]
fn test_standard_game_exposes_starting_state() {
    let session = GameSession::new();

    assert_eq!(
        session.position().piece_at(4, 7).map(|p| p.piece_type),
        Some(PieceType::King)
    );
    assert_eq!(
        session.position().piece_at(3, 0).map(|p| (p.piece_type, p.color)),
        Some((PieceType::Queen, PieceColor::Black))
    );
    assert!(session.castling_rights(PieceColor::White).kingside);
    assert!(session.castling_rights(PieceColor::Black).queenside);
    assert_eq!(session.cursor(), (0, 7));
    assert!(session.position().square(0, 7).selected);
}
