//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `projectboard_core` linkage without a UI host.
//! - Run one scripted board session with deterministic output.

use projectboard_core::{BoardService, ProjectStatus};

fn main() {
    println!("projectboard_core ping={}", projectboard_core::ping());
    println!("projectboard_core version={}", projectboard_core::core_version());

    let mut board = BoardService::default();
    print_board("start", &board);

    match board.create_project("Fix bug", "Patch the null check", "2") {
        Ok(project) => print_board(&format!("create id={}", project.id), &board),
        Err(err) => println!("create rejected: {err}"),
    }
    if let Err(err) = board.create_project("Oops", "tiny", "9") {
        println!("create rejected: {err}");
    }

    let change = board.toggle(1);
    print_board(&format!("toggle id=1 changed={}", change.is_changed()), &board);

    match board.drag_and_drop(999, ProjectStatus::Finished) {
        Ok(outcome) => print_board(
            &format!(
                "drag id=999 -> finished changed={}",
                outcome.is_some_and(|change| change.is_changed())
            ),
            &board,
        ),
        Err(err) => println!("drop rejected: {err}"),
    }
}

fn print_board(step: &str, board: &BoardService) {
    println!("== {step}");
    for status in [ProjectStatus::Active, ProjectStatus::Finished] {
        let lane = board.lane(status);
        println!("{}", lane.heading());
        for item in lane.rendered() {
            println!(
                "  [{}] {} ({}): {}",
                item.element_id, item.title, item.assigned, item.description
            );
        }
    }
}
