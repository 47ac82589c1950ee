//! `sasskit --watch` driven through NDJSON output

mod common;

use std::time::Duration;

use common::*;

const TIMEOUT: Duration = Duration::from_secs(15);

fn watch_args<'a>(input: &'a str, output: &'a str) -> Vec<&'a str> {
    vec!["--watch", "--json", "--interval", "0.2", input, output]
}

#[test]
fn watch_compiles_on_start() {
    let env = TestEnv::new();
    write_test_project(&env);

    let watch = env.spawn_watch(&watch_args(TEST_SCSS_PATH, "css/test.css"));

    assert!(watch.wait_until(TIMEOUT, |w| w.count("\"compile_complete\"") >= 1));
    assert!(wait_for_file(&env.project_path("css/test.css"), TIMEOUT));

    let lines = watch.lines();
    assert!(lines[0].contains("\"watch_started\""), "lines: {lines:?}");
    assert!(lines[0].contains("\"interval_secs\":0.2"));
}

#[test]
fn watch_recompiles_after_touch() {
    let env = TestEnv::new();
    write_test_project(&env);

    let watch = env.spawn_watch(&watch_args(TEST_SCSS_PATH, "css/test.css"));
    assert!(watch.wait_until(TIMEOUT, |w| w.count("\"compile_complete\"") == 1));

    env.touch_with(
        "app2/static/app2/scss/_samedir.scss",
        "/* Tests: app2/scss/_samedir.scss */\n.samedir { margin: 4px; }\n",
        5,
    );

    assert!(watch.wait_until(TIMEOUT, |w| w.count("\"compile_complete\"") >= 2));
    assert!(env.read("css/test.css").contains("margin: 4px"));
    assert!(watch.count("\"files_changed\"") >= 2);
}

#[test]
fn watch_stays_quiet_without_changes() {
    let env = TestEnv::new();
    write_test_project(&env);

    let watch = env.spawn_watch(&watch_args(TEST_SCSS_PATH, "css/test.css"));
    assert!(watch.wait_until(TIMEOUT, |w| w.count("\"compile_complete\"") == 1));

    std::thread::sleep(Duration::from_millis(1000));

    assert_eq!(watch.count("\"compile_started\""), 1);
    assert_eq!(watch.count("\"compile_complete\""), 1);
}

#[test]
fn watch_survives_compile_errors() {
    let env = TestEnv::new();
    write_test_project(&env);

    let mut watch = env.spawn_watch(&watch_args(TEST_SCSS_PATH, "css/test.css"));
    assert!(watch.wait_until(TIMEOUT, |w| w.count("\"compile_complete\"") == 1));

    env.touch_with("app2/static/app2/scss/_samedir.scss", BROKEN_SCSS, 5);
    assert!(watch.wait_until(TIMEOUT, |w| w.count("\"compile_failed\"") >= 1));
    assert!(!watch.has_exited());

    env.touch_with("app2/static/app2/scss/_samedir.scss", SAMEDIR_SCSS, 10);
    assert!(watch.wait_until(TIMEOUT, |w| w.count("\"compile_complete\"") >= 2));
    assert!(!watch.has_exited());
}

#[test]
fn watch_ends_on_missing_source() {
    let env = TestEnv::new();
    write_test_project(&env);

    let mut watch = env.spawn_watch(&watch_args("app2/static/app2/scss/gone.scss", "css"));

    assert!(watch.wait_until(TIMEOUT, |w| w.count("\"event\":\"error\"") >= 1));
    assert!(watch.lines().iter().any(|l| l.contains("source_not_found")));

    let mut watch_exited = false;
    for _ in 0..100 {
        if watch.has_exited() {
            watch_exited = true;
            break;
        }
        std::thread::sleep(Duration::from_millis(50));
    }
    assert!(watch_exited);
    assert_eq!(watch.count("\"shutdown\""), 0);
}
