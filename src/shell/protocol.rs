use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::tetrify::prelude::*;

/// Literal sentinel closing every protocol line on stdout.
pub const EOF_SENTINEL: &str = "<EOF>";

/// The single solve request carried on stdin.
#[derive(Clone, Debug, Deserialize)]
pub struct SolveRequest {
    pub grid: Vec<Vec<u8>>,
    pub false_positives: u32,
    pub false_negatives: u32,
    pub enforce_gravity: bool,
    #[serde(rename = "reduce_Is")]
    pub reduce_is: bool,
}

impl SolveRequest {
    /// Validates the request grid and converts it into the target image.
    pub fn target(&self) -> Result<Vec<Vec<bool>>> {
        if self.grid.is_empty() || self.grid[0].is_empty() {
            return Err(anyhow!("request grid is empty"));
        }
        let width = self.grid[0].len();
        self.grid
            .iter()
            .map(|row| {
                if row.len() != width {
                    return Err(anyhow!("request grid is not rectangular"));
                }
                row.iter()
                    .map(|&value| match value {
                        0 => Ok(false),
                        1 => Ok(true),
                        _ => Err(anyhow!("request grid holds non-binary value {value}")),
                    })
                    .collect()
            })
            .collect()
    }
}

#[derive(Serialize)]
struct LogLine<'a> {
    log: &'a str,
}

#[derive(Serialize)]
struct FramesLine<'a> {
    frames: &'a Animation,
}

/// Sentinel-framed JSON writer over any byte sink. Each message is one JSON
/// object, the sentinel, and a newline, flushed immediately so the reader on
/// the other side of the pipe never waits on a buffer.
pub struct Channel<W: Write> {
    sink: W,
}

impl<W: Write> Channel<W> {
    /// Wraps a sink in the framing.
    pub fn new(sink: W) -> Channel<W> {
        Channel { sink }
    }

    /// Ships a `{"log": …}` line.
    pub fn log(&mut self, message: &str) -> Result<()> {
        self.send(&LogLine { log: message })
    }

    /// Ships a `{"frames": …}` line.
    pub fn frames(&mut self, animation: &Animation) -> Result<()> {
        self.send(&FramesLine { frames: animation })
    }

    fn send<T: Serialize>(&mut self, message: &T) -> Result<()> {
        let line = serde_json::to_string(message)?;
        writeln!(self.sink, "{line}{EOF_SENTINEL}")?;
        self.sink.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> SolveRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn requests_parse_with_the_wire_field_names() {
        let parsed = request(
            r#"{"grid": [[0, 1], [1, 0]],
                "false_positives": 2,
                "false_negatives": 1,
                "enforce_gravity": true,
                "reduce_Is": false}"#,
        );
        assert_eq!(parsed.false_positives, 2);
        assert_eq!(parsed.false_negatives, 1);
        assert!(parsed.enforce_gravity);
        assert!(!parsed.reduce_is);
        assert_eq!(parsed.target().unwrap(), vec![vec![false, true], vec![true, false]]);
    }

    #[test]
    fn negative_tolerances_fail_to_parse() {
        let raw = r#"{"grid": [[1]], "false_positives": -1,
                      "false_negatives": 0, "enforce_gravity": true, "reduce_Is": true}"#;
        assert!(serde_json::from_str::<SolveRequest>(raw).is_err());
    }

    #[test]
    fn ragged_and_non_binary_grids_are_rejected() {
        let ragged = request(
            r#"{"grid": [[0, 1], [1]], "false_positives": 0,
                "false_negatives": 0, "enforce_gravity": true, "reduce_Is": false}"#,
        );
        assert!(ragged.target().is_err());

        let seven = request(
            r#"{"grid": [[7]], "false_positives": 0,
                "false_negatives": 0, "enforce_gravity": true, "reduce_Is": false}"#,
        );
        assert!(seven.target().is_err());

        let empty = request(
            r#"{"grid": [], "false_positives": 0,
                "false_negatives": 0, "enforce_gravity": true, "reduce_Is": false}"#,
        );
        assert!(empty.target().is_err());
    }

    #[test]
    fn every_line_ends_with_the_sentinel() {
        let mut sink: Vec<u8> = Vec::new();
        let mut channel = Channel::new(&mut sink);
        channel.log("Running...").unwrap();
        channel.frames(&vec![vec![vec![0, 4]]]).unwrap();

        let text = String::from_utf8(sink).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"log":"Running..."}<EOF>"#);
        assert_eq!(lines[1], r#"{"frames":[[[0,4]]]}<EOF>"#);
    }
}
