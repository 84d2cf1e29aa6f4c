//! Console command parser

use super::commands::Command;

/// Parses one line of input into a [`Command`].
///
/// Keywords are case-insensitive and words are separated by any whitespace.
/// For `LOGIN` the first word after the keyword is the username and the rest
/// of the line after one separator is the password, so passwords may contain
/// spaces. Missing values parse as empty strings.
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim_end_matches(['\r', '\n']).trim_start();
    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest),
        None => (trimmed, ""),
    };

    match keyword.to_ascii_uppercase().as_str() {
        "LOGIN" => {
            let rest = rest.trim_start();
            let (username, password) = rest
                .split_once(char::is_whitespace)
                .unwrap_or((rest, ""));
            Command::Login {
                username: username.to_string(),
                password: password.to_string(),
            }
        }
        "LOGOUT" if rest.trim().is_empty() => Command::Logout,
        "QUIT" | "Q" if rest.trim().is_empty() => Command::Quit,
        _ => Command::Unknown(trimmed.trim_end().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(username: &str, password: &str) -> Command {
        Command::Login {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("QUIT"), Command::Quit);
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(parse_command("LOGOUT\r\n"), Command::Logout);
        assert_eq!(parse_command("logout"), Command::Logout);
    }

    #[test]
    fn test_parse_login() {
        assert_eq!(parse_command("LOGIN alice secret1"), login("alice", "secret1"));
        assert_eq!(parse_command("login alice"), login("alice", ""));
        assert_eq!(parse_command("LOGIN"), login("", ""));
        assert_eq!(
            parse_command("LOGIN alice my pass phrase\r\n"),
            login("alice", "my pass phrase")
        );
    }

    #[test]
    fn test_password_whitespace_preserved() {
        assert_eq!(parse_command("LOGIN bob   pad  "), login("bob", "  pad  "));
    }

    #[test]
    fn test_parse_tab_separated() {
        assert_eq!(
            parse_command("LOGIN\talice\tsecret1"),
            login("alice", "secret1")
        );
        assert_eq!(parse_command("LOGIN \t alice\tpass word"), login("alice", "pass word"));
        assert_eq!(parse_command("LOGOUT\t"), Command::Logout);
    }

    #[test]
    fn test_unknown_commands() {
        assert_eq!(
            parse_command("INVALID"),
            Command::Unknown("INVALID".to_string())
        );
        assert_eq!(
            parse_command("QUIT now"),
            Command::Unknown("QUIT now".to_string())
        );
        assert_eq!(parse_command(""), Command::Unknown("".to_string()));
    }
}
