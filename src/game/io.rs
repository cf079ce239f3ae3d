//! Collaborators the game loop talks to.
//!
//! The engine never touches stdin or stdout directly. It asks a
//! [`MoveInput`] for the next character and hands text to a [`GameOutput`].
//!
//! ## Provided implementations
//!
//! - [`LineInput`]: one move per line from any `BufRead`
//! - [`ScriptedInput`]: a fixed queue of moves, for tests and demos
//! - any `FnMut(&Player) -> Option<char>` closure
//! - [`WriterOutput`]: lines to any `Write`
//! - `Vec<String>`: an in-memory transcript

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::core::Player;

/// Source of moves.
pub trait MoveInput {
    /// The next move character for `player`, or `None` once input is
    /// exhausted. The character is not validated here.
    fn next_move(&mut self, player: &Player) -> io::Result<Option<char>>;
}

impl<F> MoveInput for F
where
    F: FnMut(&Player) -> Option<char>,
{
    fn next_move(&mut self, player: &Player) -> io::Result<Option<char>> {
        Ok(self(player))
    }
}

/// Sink for board renderings and status messages.
pub trait GameOutput {
    /// Emit one complete line.
    fn line(&mut self, text: &str) -> io::Result<()>;

    /// Emit a prompt that input will follow. Defaults to a full line.
    fn prompt(&mut self, text: &str) -> io::Result<()> {
        self.line(text)
    }
}

impl GameOutput for Vec<String> {
    fn line(&mut self, text: &str) -> io::Result<()> {
        self.push(text.to_string());
        Ok(())
    }
}

/// Reads one move per line: the first non-whitespace character.
///
/// Blank lines are skipped. End of input yields `None`. Bytes that are not
/// UTF-8 decode to `U+FFFD`, which the game rejects like any other bad move.
pub struct LineInput<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LineInput<R> {
    /// Read moves from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> MoveInput for LineInput<R> {
    fn next_move(&mut self, _player: &Player) -> io::Result<Option<char>> {
        loop {
            self.buf.clear();
            if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
                return Ok(None);
            }
            let line = String::from_utf8_lossy(&self.buf);
            if let Some(c) = line.chars().find(|c| !c.is_whitespace()) {
                return Ok(Some(c));
            }
        }
    }
}

/// A fixed sequence of moves, consumed front to back.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    moves: VecDeque<char>,
}

impl ScriptedInput {
    /// Queue `moves` in order.
    pub fn new(moves: impl IntoIterator<Item = char>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl From<&str> for ScriptedInput {
    fn from(moves: &str) -> Self {
        Self::new(moves.chars())
    }
}

impl MoveInput for ScriptedInput {
    fn next_move(&mut self, _player: &Player) -> io::Result<Option<char>> {
        Ok(self.moves.pop_front())
    }
}

/// Writes lines to any `Write`. Prompts are written without a newline and
/// flushed.
pub struct WriterOutput<W> {
    writer: W,
}

impl<W: Write> WriterOutput<W> {
    /// Write to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> GameOutput for WriterOutput<W> {
    fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.writer, "{text}")?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerId, Position};

    fn someone() -> Player {
        Player::new(PlayerId::One, Position::new(0, 0))
    }

    #[test]
    fn test_line_input_takes_first_char() {
        let mut input = LineInput::new("  r\n\n   \nUp\nx\n".as_bytes());
        let player = someone();

        assert_eq!(input.next_move(&player).unwrap(), Some('r'));
        assert_eq!(input.next_move(&player).unwrap(), Some('U'));
        assert_eq!(input.next_move(&player).unwrap(), Some('x'));
        assert_eq!(input.next_move(&player).unwrap(), None);
    }

    #[test]
    fn test_line_input_survives_invalid_utf8() {
        let bytes: &[u8] = &[0xff, b'\n', b'R', b'\n'];
        let mut input = LineInput::new(bytes);
        let player = someone();

        assert_eq!(input.next_move(&player).unwrap(), Some('\u{FFFD}'));
        assert_eq!(input.next_move(&player).unwrap(), Some('R'));
        assert_eq!(input.next_move(&player).unwrap(), None);
    }

    #[test]
    fn test_scripted_input() {
        let mut input = ScriptedInput::from("DR");
        let player = someone();

        assert_eq!(input.remaining(), 2);
        assert_eq!(input.next_move(&player).unwrap(), Some('D'));
        assert_eq!(input.next_move(&player).unwrap(), Some('R'));
        assert_eq!(input.next_move(&player).unwrap(), None);
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_closure_input_sees_player() {
        let mut input = |player: &Player| Some(if player.id() == PlayerId::One { 'R' } else { 'L' });
        let two = Player::new(PlayerId::Two, Position::new(5, 5));

        assert_eq!(input.next_move(&someone()).unwrap(), Some('R'));
        assert_eq!(input.next_move(&two).unwrap(), Some('L'));
    }

    #[test]
    fn test_transcript_output() {
        let mut out: Vec<String> = Vec::new();
        out.line("one").unwrap();
        out.prompt("two").unwrap();
        assert_eq!(out, vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn test_writer_output() {
        let mut out = WriterOutput::new(Vec::new());
        out.line("Turn 1").unwrap();
        out.prompt("Enter move: ").unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(text, "Turn 1\nEnter move: ");
    }
}
