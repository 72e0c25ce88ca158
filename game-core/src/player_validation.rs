use game_types::GameError;

/// Minimum trimmed length of a player name.
pub const MIN_NAME_LENGTH: usize = 2;

/// Validates the two names entered at player setup.
///
/// Returns the trimmed names when both are acceptable. The state machine
/// accepts any strings, so callers that need unique, non-empty names must
/// run this before dispatching `RegisterPlayers`.
pub fn validate_player_names(player1: &str, player2: &str) -> Result<(String, String), GameError> {
    let name1 = player1.trim();
    let name2 = player2.trim();

    let error1 = validate_name(name1, 1);
    let mut error2 = validate_name(name2, 2);

    if !name1.is_empty() && name1 == name2 {
        error2 = Some("Player names must be different".to_string());
    }

    if error1.is_none() && error2.is_none() {
        return Ok((name1.to_string(), name2.to_string()));
    }

    Err(GameError::InvalidPlayerNames {
        player1: error1,
        player2: error2,
    })
}

fn validate_name(name: &str, position: u8) -> Option<String> {
    if name.is_empty() {
        Some(format!("Player {} name is required", position))
    } else if name.chars().count() < MIN_NAME_LENGTH {
        Some(format!("Name must be at least {} characters", MIN_NAME_LENGTH))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_errors(result: Result<(String, String), GameError>) -> (Option<String>, Option<String>) {
        match result {
            Err(GameError::InvalidPlayerNames { player1, player2 }) => (player1, player2),
            other => panic!("expected InvalidPlayerNames, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_names_are_trimmed() {
        let names = validate_player_names("  Ann ", "Bo").unwrap();
        assert_eq!(names, ("Ann".to_string(), "Bo".to_string()));
    }

    #[test]
    fn test_missing_names() {
        let (e1, e2) = field_errors(validate_player_names("   ", ""));
        assert_eq!(e1.as_deref(), Some("Player 1 name is required"));
        assert_eq!(e2.as_deref(), Some("Player 2 name is required"));
    }

    #[test]
    fn test_short_name() {
        let (e1, e2) = field_errors(validate_player_names("A", "Bo"));
        assert_eq!(e1.as_deref(), Some("Name must be at least 2 characters"));
        assert_eq!(e2, None);
    }

    #[test]
    fn test_duplicate_names_after_trim() {
        let (e1, e2) = field_errors(validate_player_names("Ann", " Ann "));
        assert_eq!(e1, None);
        assert_eq!(e2.as_deref(), Some("Player names must be different"));
    }
}
