//! Shell command parsing.

/// One line of operator input, parsed.
///
/// Keywords are case-sensitive and whitespace-separated. Extra words after
/// a complete command are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `list`
    List,
    /// `add <handle> <followers_count>`
    Add { handle: String, follower_count: u64 },
    /// `update <handle> <followers_count>`
    Update { handle: String, follower_count: u64 },
    /// `save`
    Save,
    /// `exit`
    Exit,
    /// Blank input; ignored.
    Empty,
    /// Known keyword with missing or non-numeric arguments.
    Invalid { usage: &'static str },
    /// Anything else.
    Unknown(String),
}

impl Command {
    /// Parse one input line.
    pub fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            return Command::Empty;
        };

        match keyword {
            "list" => Command::List,
            "save" => Command::Save,
            "exit" => Command::Exit,
            "add" => match keyed_count(words) {
                Some((handle, follower_count)) => Command::Add {
                    handle,
                    follower_count,
                },
                None => Command::Invalid {
                    usage: "add <handle> <followers_count>",
                },
            },
            "update" => match keyed_count(words) {
                Some((handle, follower_count)) => Command::Update {
                    handle,
                    follower_count,
                },
                None => Command::Invalid {
                    usage: "update <handle> <followers_count>",
                },
            },
            _ => Command::Unknown(keyword.to_owned()),
        }
    }
}

/// `<handle> <count>` argument pair shared by `add` and `update`.
fn keyed_count(mut words: std::str::SplitWhitespace<'_>) -> Option<(String, u64)> {
    let handle = words.next()?.to_owned();
    let follower_count = words.next()?.parse().ok()?;
    Some((handle, follower_count))
}
