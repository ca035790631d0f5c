#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn config_type_error_names_the_key() {
    let err = Error::ConfigType {
        key: "include".to_string(),
        expected: "array of strings",
        found: "string".to_string(),
    };
    let message = err.to_string();
    assert!(message.contains("'include'"));
    assert!(message.contains("array of strings"));
    assert!(message.contains("string"));
}

#[test]
fn duplicate_check_names_the_check() {
    let err = Error::DuplicateCheck("black".to_string());
    assert!(err.to_string().contains("'black'"));
}

#[test]
fn unknown_check_points_at_list() {
    let err = Error::UnknownCheck("blakc".to_string());
    assert!(err.to_string().contains("stoplight list"));
}

#[test]
fn setup_errors_map_to_config_exit_code() {
    let errors = [
        Error::Config {
            message: "bad".to_string(),
            path: None,
        },
        Error::DuplicateCheck("x".to_string()),
        Error::UnknownCheck("x".to_string()),
        Error::ConfigKeyConflict {
            key: "demo".to_string(),
        },
    ];
    for err in &errors {
        assert_eq!(ExitCode::from(err), ExitCode::ConfigError);
    }
}

#[test]
fn io_error_maps_to_internal() {
    let err = Error::Io {
        path: "x".into(),
        source: std::io::Error::other("boom"),
    };
    assert_eq!(ExitCode::from(&err), ExitCode::InternalError);
}

#[test]
fn exit_code_values_are_stable() {
    assert_eq!(ExitCode::Success as u8, 0);
    assert_eq!(ExitCode::CheckFailed as u8, 1);
    assert_eq!(ExitCode::ConfigError as u8, 2);
    assert_eq!(ExitCode::ToolMissing as u8, 127);
}
