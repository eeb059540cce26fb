use leptos::*;
use roamplan_wasm::app::{LeptosLogger, set_log_paused};
use roamplan_wasm::domain::logging::{LogComponent, get_logger, init_logger};
use roamplan_wasm::global_state;

#[test]
fn pause_and_resume_notices_reach_the_page_console() {
    let runtime = create_runtime();
    init_logger(Box::new(LeptosLogger::headless()));

    set_log_paused(true);
    let lines = global_state::log_lines_signal().get_untracked();
    assert!(lines.last().is_some_and(|line| line.contains("Logging paused")));

    // While paused nothing else is recorded
    get_logger().info(LogComponent::Presentation("Test"), "dropped while paused");
    assert_eq!(global_state::log_lines_signal().get_untracked().len(), lines.len());

    set_log_paused(false);
    let lines = global_state::log_lines_signal().get_untracked();
    assert!(lines.last().is_some_and(|line| line.contains("Logging resumed")));

    runtime.dispose();
}
