//! Configuration resolution against the real process environment.

mod test_helpers;

use camino::Utf8PathBuf;
use clap::{Parser, error::ErrorKind};
use rstest::rstest;
use tasklog::config::{AppConfig, DATA_DIR_ENV, LOG_ENV, USER_ENV};
use tasklog::task::domain::UserCode;
use test_helpers::EnvScope;

#[derive(Parser)]
struct Options {
    #[command(flatten)]
    config: AppConfig,
}

fn env_scope(data_dir: Option<&str>, user: Option<&str>, log: Option<&str>) -> EnvScope {
    EnvScope::new(&[(DATA_DIR_ENV, data_dir), (USER_ENV, user), (LOG_ENV, log)])
}

#[test]
fn environment_fills_missing_flags() {
    let _scope = env_scope(Some("/srv/tasklog"), Some("12"), Some("info"));

    let options = Options::try_parse_from(["tasklog"]).expect("environment parses");

    assert_eq!(options.config.data_dir, Utf8PathBuf::from("/srv/tasklog"));
    assert_eq!(options.config.user_code(), Some(UserCode::new(12)));
    assert_eq!(options.config.log_level, "info");
}

#[test]
fn defaults_apply_when_environment_is_unset() {
    let _scope = env_scope(None, None, None);

    let options = Options::try_parse_from(["tasklog"]).expect("defaults parse");

    assert_eq!(options.config.data_dir, Utf8PathBuf::from("."));
    assert_eq!(options.config.user, None);
    assert_eq!(options.config.log_level, "warn");
}

#[test]
fn flags_take_precedence_over_environment() {
    let _scope = env_scope(Some("/env"), Some("7"), Some("debug"));

    let options = Options::try_parse_from([
        "tasklog",
        "--data-dir",
        "/flag",
        "--user",
        "3",
        "--log-level",
        "trace",
    ])
    .expect("flags parse");

    assert_eq!(options.config.data_dir, Utf8PathBuf::from("/flag"));
    assert_eq!(options.config.user, Some(3));
    assert_eq!(options.config.log_level, "trace");
}

#[test]
fn empty_environment_values_count_as_unset() {
    let _scope = env_scope(Some(""), Some(""), None);

    let options = Options::try_parse_from(["tasklog"]).expect("empty values parse");

    assert_eq!(options.config.data_dir, Utf8PathBuf::from("."));
    assert_eq!(options.config.user, None);
}

#[rstest]
#[case("alice")]
#[case("-1")]
#[case("4294967296")]
fn invalid_user_code_in_environment_is_rejected(#[case] raw: &str) {
    let _scope = env_scope(None, Some(raw), None);

    let result = Options::try_parse_from(["tasklog"]);

    assert_eq!(
        result.err().map(|err| err.kind()),
        Some(ErrorKind::ValueValidation)
    );
}
