//! Slash command parsing for the interactive session

use studio_domain::TurnId;

/// A parsed `/command` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Quit,
    /// List models
    Models,
    /// Switch model by id
    Model(String),
    /// Stage an image for the next submission
    Attach(String),
    Detach,
    /// List base image presets
    Presets,
    /// Select a base image preset
    Base(usize),
    History,
    Save(TurnId),
    Copy(TurnId),
    Clear,
    /// Recognized command with a missing or malformed argument
    Usage(&'static str),
    Unknown(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        match name {
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/models" => ReplCommand::Models,
            "/model" if arg.is_empty() => ReplCommand::Models,
            "/model" => ReplCommand::Model(arg.to_string()),
            "/attach" if arg.is_empty() => ReplCommand::Usage("/attach <path>"),
            "/attach" => ReplCommand::Attach(arg.to_string()),
            "/detach" => ReplCommand::Detach,
            "/presets" => ReplCommand::Presets,
            "/base" if arg.is_empty() => ReplCommand::Presets,
            "/base" => arg
                .parse()
                .map(ReplCommand::Base)
                .unwrap_or(ReplCommand::Usage("/base <index>")),
            "/history" => ReplCommand::History,
            "/save" => parse_turn(arg)
                .map(ReplCommand::Save)
                .unwrap_or(ReplCommand::Usage("/save <turn>")),
            "/copy" => parse_turn(arg)
                .map(ReplCommand::Copy)
                .unwrap_or(ReplCommand::Usage("/copy <turn>")),
            "/clear" => ReplCommand::Clear,
            _ => ReplCommand::Unknown(line.to_string()),
        }
    }
}

/// Turn numbers may be written `3` or `#3`
fn parse_turn(arg: &str) -> Option<TurnId> {
    arg.trim_start_matches('#').parse().ok().map(TurnId::new)
}
