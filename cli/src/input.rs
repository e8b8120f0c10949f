use tictactoe_engine::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(Position),
    Quit,
}

/// Parses `x y` (or `x,y`) into a move; `q` / `quit` ends the session.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    if parts.len() != 2 {
        return Err("Enter a move as `x y`, or `q` to quit".to_string());
    }

    let x = parts[0]
        .parse::<usize>()
        .map_err(|_| format!("Invalid column: {}", parts[0]))?;
    let y = parts[1]
        .parse::<usize>()
        .map_err(|_| format!("Invalid row: {}", parts[1]))?;

    Ok(Command::Place(Position::new(x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_command("2 1"), Ok(Command::Place(Position::new(2, 1))));
        assert_eq!(parse_command(" 0,2 \n"), Ok(Command::Place(Position::new(0, 2))));
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("QUIT"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("").is_err());
        assert!(parse_command("1").is_err());
        assert!(parse_command("1 2 3").is_err());
        assert_eq!(parse_command("a 1"), Err("Invalid column: a".to_string()));
        assert_eq!(parse_command("1 -1"), Err("Invalid row: -1".to_string()));
    }
}
