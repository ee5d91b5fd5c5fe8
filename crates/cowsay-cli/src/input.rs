use std::io::{self, BufRead, IsTerminal};

/// Message from the command line words, or from stdin when none were given.
///
/// Words are joined with single spaces. Piped input keeps its line breaks.
/// A terminal stdin is never read, so an interactive call without words
/// yields an empty message.
pub fn gather_message(words: &[String]) -> io::Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    read_message(stdin.lock())
}

pub fn read_message<R: BufRead>(reader: R) -> io::Result<String> {
    let lines = reader.lines().collect::<io::Result<Vec<_>>>()?;
    Ok(lines.join("\n"))
}
