//! Test fixtures - a two-app project with static scss trees.

use super::env::TestEnv;

pub const INCLUDE_SCSS: &str = "/* Tests: app1/scss/_include.scss */\n.included { color: #333; }\n";

pub const SAMEDIR_SCSS: &str = "/* Tests: app2/scss/_samedir.scss */\n.samedir { margin: 0; }\n";

pub const SUBDIR_SCSS: &str =
    "/* Tests: app2/scss/subdir/_subdir.scss */\n.subdir { padding: 1px; }\n";

pub const TEST_SCSS: &str = r#"/* Tests: app2/scss/test.scss */
@import "app1/scss/include";
@import "samedir";
@import "subdir/subdir";

.test {
  width: (100% / 3);
}
"#;

pub const BROKEN_SCSS: &str = ".broken { color: red\n";

/// Relative path of the main stylesheet
pub const TEST_SCSS_PATH: &str = "app2/static/app2/scss/test.scss";

/// Relative path of the app2 scss directory
pub const APP2_SCSS_DIR: &str = "app2/static/app2/scss";

/// Lay out `app1/static/app1/scss` and `app2/static/app2/scss`.
pub fn write_test_project(env: &TestEnv) {
    env.write("app1/static/app1/scss/_include.scss", INCLUDE_SCSS);
    env.write("app2/static/app2/scss/_samedir.scss", SAMEDIR_SCSS);
    env.write("app2/static/app2/scss/subdir/_subdir.scss", SUBDIR_SCSS);
    env.write(TEST_SCSS_PATH, TEST_SCSS);
}
