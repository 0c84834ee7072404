//! HUI command parser.
//!
//! HUI (Hero Universal Interface) is a line-oriented text protocol in the
//! style of UCI: the GUI or match runner sends commands on stdin and the
//! engine answers on stdout. Malformed commands are reported on stderr and
//! otherwise ignored.

/// A parsed HUI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hui,
    IsReady,
    SetOption { name: String, value: Option<String> },
    NewGame,
    Position { afen: String },
    Hero { id: u8 },
    Go,
    Quit,
}

/// Parses one input line into a command.
///
/// Returns `None` for blank lines and anything unrecognized.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (&head, rest) = tokens.split_first()?;

    match head {
        "hui" => Some(Command::Hui),
        "isready" => Some(Command::IsReady),
        "newgame" => Some(Command::NewGame),
        "go" => Some(Command::Go),
        "quit" => Some(Command::Quit),
        "setoption" => parse_setoption(rest),
        "position" => {
            if rest.is_empty() {
                eprintln!("position: missing AFEN string");
                return None;
            }
            Some(Command::Position {
                afen: rest.join(" "),
            })
        }
        "hero" => {
            let &id_str = rest.first().or_else(|| {
                eprintln!("hero: missing hero id");
                None
            })?;
            match id_str.parse::<u8>() {
                Ok(id) => Some(Command::Hero { id }),
                Err(_) => {
                    eprintln!("hero: invalid hero id '{}'", id_str);
                    None
                }
            }
        }
        _ => {
            eprintln!("unknown command: '{}'", head);
            None
        }
    }
}

fn parse_setoption(rest: &[&str]) -> Option<Command> {
    if rest.first() != Some(&"name") {
        eprintln!("setoption: expected 'name'");
        return None;
    }
    let rest = &rest[1..];
    // Option names may contain spaces; the value keyword splits them off.
    let (name_tokens, value) = match rest.iter().position(|&t| t == "value") {
        Some(i) => (&rest[..i], Some(rest[i + 1..].join(" "))),
        None => (rest, None),
    };
    if name_tokens.is_empty() {
        eprintln!("setoption: empty option name");
        return None;
    }
    Some(Command::SetOption {
        name: name_tokens.join(" "),
        value,
    })
}
