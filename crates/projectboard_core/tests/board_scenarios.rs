use projectboard_core::{
    BoardConfig, BoardService, DragOverDecision, InputError, InputField, ProjectStatus,
    StatusChange, TEXT_PLAIN,
};

fn lanes(board: &BoardService) -> (Vec<u32>, Vec<u32>) {
    (
        board.lane(ProjectStatus::Active).assigned_ids(),
        board.lane(ProjectStatus::Finished).assigned_ids(),
    )
}

#[test]
fn fresh_board_renders_seed_after_initial_notify() {
    let board = BoardService::default();

    assert_eq!(lanes(&board), (vec![999], vec![]));
    let rendered = board.lane(ProjectStatus::Active).rendered();
    assert_eq!(rendered[0].title, "Test Project");
    assert_eq!(rendered[0].assigned, "1 person assigned");
}

#[test]
fn create_through_form_rerenders_both_lanes() {
    let mut board = BoardService::default();
    let renders_before = (
        board.lane(ProjectStatus::Active).render_count(),
        board.lane(ProjectStatus::Finished).render_count(),
    );

    let project = board
        .create_project("Fix bug", "Patch the null check", "2")
        .expect("valid input");

    assert_eq!(project.id, 1);
    assert_eq!(project.status, ProjectStatus::Active);
    assert_eq!(
        board.lane(ProjectStatus::Active).render_count(),
        renders_before.0 + 1
    );
    assert_eq!(
        board.lane(ProjectStatus::Finished).render_count(),
        renders_before.1 + 1
    );
    assert_eq!(lanes(&board), (vec![999, 1], vec![]));
    assert!(board.input().title.is_empty());
}

#[test]
fn toggle_moves_project_to_finished_lane() {
    let mut board = BoardService::default();
    board
        .create_project("Fix bug", "Patch the null check", "2")
        .expect("valid input");

    let change = board.toggle(1);

    assert!(change.is_changed());
    assert_eq!(lanes(&board), (vec![999], vec![1]));
    let finished = board.lane(ProjectStatus::Finished).assigned();
    assert_eq!(finished[0].status, ProjectStatus::Finished);

    assert_eq!(
        board.toggle(1),
        StatusChange::Changed {
            from: ProjectStatus::Finished,
            to: ProjectStatus::Active,
        }
    );
    assert_eq!(lanes(&board), (vec![999, 1], vec![]));
}

#[test]
fn invalid_form_never_reaches_store() {
    let mut board = BoardService::new(BoardConfig {
        seed_demo_project: false,
    });
    let renders = board.lane(ProjectStatus::Active).render_count();

    let err = board
        .create_project("Fix bug", "tiny", "2")
        .expect_err("short description must fail");

    assert_eq!(err, InputError::Invalid(InputField::Description));
    assert!(board.store().is_empty());
    assert_eq!(board.store().next_id(), 1);
    assert_eq!(board.lane(ProjectStatus::Active).render_count(), renders);
    assert_eq!(board.input().description, "tiny");
}

#[test]
fn drag_and_drop_moves_between_lanes() {
    let mut board = BoardService::default();

    let change = board
        .drag_and_drop(999, ProjectStatus::Finished)
        .expect("payload is well formed");

    assert!(change.expect("lane accepts text payload").is_changed());
    assert_eq!(lanes(&board), (vec![], vec![999]));
    assert!(!board.lane(ProjectStatus::Finished).is_droppable());
}

#[test]
fn drag_of_unrendered_item_does_nothing() {
    let mut board = BoardService::default();
    assert_eq!(board.drag_and_drop(5, ProjectStatus::Finished), Ok(None));
    assert!(board.start_drag(5).is_none());
}

#[test]
fn foreign_payload_is_rejected_and_no_drop_follows() {
    let mut board = BoardService::default();
    let mut session = board.start_drag(999).expect("seed is rendered");
    let mut foreign = projectboard_core::DataTransfer::new();
    foreign.set_data("application/x-moz-file", "report.pdf");
    foreign.set_data(
        TEXT_PLAIN,
        session.transfer().get_data(TEXT_PLAIN).unwrap_or_default(),
    );

    let decision = board.drag_over(ProjectStatus::Finished, &foreign);

    assert_eq!(decision, DragOverDecision::Reject);
    assert!(!board.lane(ProjectStatus::Finished).is_droppable());
    board.end_drag(&mut session);
    assert_eq!(lanes(&board), (vec![999], vec![]));
}
