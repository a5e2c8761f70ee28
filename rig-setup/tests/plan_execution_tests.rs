use rig_setup::plan::{execute_plan, CommandSpec, Step, StepAction};

fn command_step(name: &'static str, program: &str, args: &[&str]) -> Step {
    Step {
        name,
        action: StepAction::Command(CommandSpec::new(program, args.iter().copied())),
    }
}

#[test]
fn failures_do_not_halt_later_steps() {
    let steps = vec![
        command_step("fails", "sh", &["-c", "exit 7"]),
        command_step("still runs", "true", &[]),
    ];

    let outcome = execute_plan(&steps, false);

    assert_eq!(outcome.completed, 1);
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].0, "fails");
    assert!(!outcome.success());
}

#[test]
fn exit_code_is_the_last_failing_commands() {
    let steps = vec![
        command_step("first failure", "sh", &["-c", "exit 3"]),
        command_step("second failure", "sh", &["-c", "exit 5"]),
        command_step("passes", "true", &[]),
    ];

    let outcome = execute_plan(&steps, false);

    assert_eq!(outcome.failures.len(), 2);
    assert_eq!(outcome.exit_code(), 5);
}

#[test]
fn fail_fast_halts_at_the_first_failure() {
    let steps = vec![
        command_step("fails", "sh", &["-c", "exit 7"]),
        command_step("never runs", "true", &[]),
    ];

    let outcome = execute_plan(&steps, true);

    assert_eq!(outcome.completed, 0);
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.exit_code(), 7);
}

#[test]
fn all_steps_passing_reports_success() {
    let steps = vec![
        command_step("one", "true", &[]),
        command_step("two", "true", &[]),
    ];

    let outcome = execute_plan(&steps, false);

    assert!(outcome.success());
    assert_eq!(outcome.completed, 2);
    assert_eq!(outcome.exit_code(), 0);
}

#[test]
fn pipeline_steps_execute_end_to_end() {
    let steps = vec![Step {
        name: "pipeline",
        action: StepAction::Pipeline(vec![
            CommandSpec::new("echo", ["streamed"]),
            CommandSpec::new("cat", Vec::<String>::new()),
        ]),
    }];

    let outcome = execute_plan(&steps, false);

    assert!(outcome.success());
}
