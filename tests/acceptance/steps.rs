use crate::MinutesWorld;
use cucumber::gherkin::Step;
use cucumber::{given, then, when};
use regex::Regex;
use serde_json::json;

#[given(regex = r#"^a snapshot for "([^"/]+)/([^"/]+)" with issues:$"#)]
async fn given_snapshot_with_issues(
    world: &mut MinutesWorld,
    owner: String,
    name: String,
    step: &Step,
) {
    let issues_json = step
        .docstring
        .as_ref()
        .expect("Expected docstring with issue list");
    let issues: serde_json::Value =
        serde_json::from_str(issues_json).expect("Docstring must be a JSON array");

    let snapshot = json!({
        "repos": [{
            "owner": owner,
            "name": name,
            "issues": issues,
        }]
    });

    let path = world.workdir().join("corpus.json");
    std::fs::write(&path, snapshot.to_string())
        .unwrap_or_else(|e| panic!("Failed to write snapshot {:?}: {}", path, e));
}

#[given(regex = r#"^the config file content is '(.*)'$"#)]
async fn given_config_file_content(world: &mut MinutesWorld, content: String) {
    let config_dir = world
        .workdir()
        .join(minutes_data::config::PROJECT_CONFIG_DIR);
    std::fs::create_dir_all(&config_dir)
        .unwrap_or_else(|e| panic!("Failed to create config dir {:?}: {}", config_dir, e));

    let config_path = config_dir.join(minutes_data::config::PROJECT_CONFIG_FILENAME);
    std::fs::write(&config_path, content)
        .unwrap_or_else(|e| panic!("Failed to write config file {:?}: {}", config_path, e));
}

async fn run_command(world: &mut MinutesWorld, arguments: &str) {
    let workdir = world.workdir().to_path_buf();
    let args: Vec<String> = std::iter::once("minutes-data")
        .chain(arguments.split_whitespace())
        .map(str::to_string)
        .collect();

    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let result = minutes_data::run::run(args, &workdir, &mut stdout, &mut stderr).await;

    world.previous_output = Some(std::mem::take(&mut world.captured_output));
    world.captured_output = stdout;
    world.captured_error = stderr;
    world.run_result = Some(result);
}

#[when(regex = r"^I run `minutes-data(.*)`$")]
async fn when_run_minutes_data(world: &mut MinutesWorld, arguments: String) {
    run_command(world, &arguments).await;
}

#[when(regex = r"^I run `minutes-data(.*)` twice$")]
async fn when_run_minutes_data_twice(world: &mut MinutesWorld, arguments: String) {
    run_command(world, &arguments).await;
    run_command(world, &arguments).await;
}

fn assert_success(world: &MinutesWorld) {
    match &world.run_result {
        Some(Ok(())) => {}
        Some(Err(err)) => panic!("Command failed: {:#}", err),
        None => panic!("No command was run"),
    }
}

#[then(regex = r#"^the output should be '(.*)'$"#)]
async fn then_output_should_be(world: &mut MinutesWorld, expected_output: String) {
    assert_success(world);
    let output = String::from_utf8(world.captured_output.clone()).expect("Invalid UTF-8");
    assert_eq!(
        output, expected_output,
        "Expected output '{}', but got:\n---\n{}\n---",
        expected_output, output
    );
}

#[then(regex = r#"^the diagnostic should be "(.*)"$"#)]
async fn then_diagnostic_should_be(world: &mut MinutesWorld, expected: String) {
    let diagnostic = String::from_utf8(world.captured_error.clone()).expect("Invalid UTF-8");
    assert_eq!(diagnostic.trim_end(), expected);
    assert!(
        !String::from_utf8_lossy(&world.captured_output).contains(&expected),
        "Diagnostic leaked into the data module"
    );
}

#[then("both outputs should be identical")]
async fn then_both_outputs_identical(world: &mut MinutesWorld) {
    assert_success(world);
    let previous = world
        .previous_output
        .as_ref()
        .expect("Expected a previous run");
    assert!(!previous.is_empty(), "First run produced no output");
    assert_eq!(previous, &world.captured_output);
}

#[then(regex = r"^the output should list issues (.+)$")]
async fn then_output_lists_issues(world: &mut MinutesWorld, numbers: String) {
    assert_success(world);
    let expected: Vec<String> = numbers.split(',').map(|n| n.trim().to_string()).collect();

    let output = String::from_utf8(world.captured_output.clone()).expect("Invalid UTF-8");
    let number_re = Regex::new(r#""number":(\d+)"#).expect("Valid regex");
    let actual: Vec<String> = number_re
        .captures_iter(&output)
        .map(|caps| caps[1].to_string())
        .collect();

    assert_eq!(actual, expected);
}

#[then(regex = r#"^the command should fail with "(.*)"$"#)]
async fn then_command_should_fail(world: &mut MinutesWorld, message: String) {
    match &world.run_result {
        Some(Err(err)) => {
            let chain = format!("{:#}", err);
            assert!(
                chain.contains(&message),
                "Expected error containing '{}', got '{}'",
                message,
                chain
            );
        }
        Some(Ok(())) => panic!("Command succeeded, expected failure"),
        None => panic!("No command was run"),
    }
}

#[then("nothing should be written")]
async fn then_nothing_written(world: &mut MinutesWorld) {
    assert!(world.captured_output.is_empty(), "Unexpected data module output");
    assert!(world.captured_error.is_empty(), "Unexpected diagnostic output");
}
