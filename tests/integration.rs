use std::sync::Arc;

use login_check::auth::Rules;
use login_check::console;
use login_check::status::{MemorySink, StatusMessage};
use login_check::{CredentialChecker, login, logout, validate};

#[test]
fn test_fixed_rules() {
    assert!(!validate("", "anything"));
    assert!(!validate("alice", "12345"));
    assert!(validate("alice", "123456"));
    assert!(validate("alice", "longpassword"));
}

#[test]
fn test_free_functions_agree_with_validate() {
    for (user, pass) in [("", "123456"), ("alice", "12345"), ("alice", "123456")] {
        assert_eq!(login(user, pass), validate(user, pass));
    }
}

#[test]
fn test_logout_without_prior_login() {
    logout();
    logout();
    assert!(login("alice", "123456"));
    logout();
}

#[test]
fn test_shared_sink_across_checkers() {
    let sink = Arc::new(MemorySink::new());
    let strict = CredentialChecker::with_rules(
        Rules {
            min_password_length: 12,
        },
        Arc::clone(&sink),
    );
    let default = CredentialChecker::new(Arc::clone(&sink));

    assert!(!strict.login("alice", "123456"));
    assert!(default.login("alice", "123456"));
    default.logout();

    assert_eq!(
        sink.messages(),
        vec![
            StatusMessage::LoginFailed {
                username: "alice".into()
            },
            StatusMessage::LoginSucceeded {
                username: "alice".into()
            },
            StatusMessage::LoggedOut,
        ]
    );
}

#[tokio::test]
async fn test_console_session() {
    let sink = MemorySink::new();
    let checker = CredentialChecker::new(&sink);
    let input: &[u8] =
        b"LOGIN alice 12345\nLOGIN alice 123456\nLOGIN\nLOGOUT\nHELP\nLOGIN\tbob\tmy secret\n";
    let mut output = Vec::new();

    console::run(input, &mut output, &checker, 256)
        .await
        .unwrap();

    let output = String::from_utf8(output).unwrap();
    let replies: Vec<&str> = output.lines().collect();
    assert_eq!(
        replies,
        vec![
            "530 Login failed",
            "230 Login successful",
            "530 Login failed",
            "221 Logout successful",
            "500 Unknown command",
            "230 Login successful",
        ]
    );

    let failures = sink.messages().iter().filter(|m| m.is_failure()).count();
    assert_eq!(failures, 2);
}
