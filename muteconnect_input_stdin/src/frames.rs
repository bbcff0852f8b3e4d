use muteconnect_core::{FrameSource, Landmark, LandmarkSet, LANDMARK_COUNT};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Frame source that reads landmark frames as JSON, one frame per line.
///
/// Each line is an array of detected hands; each hand is an array of
/// exactly 21 landmarks `{"x": .., "y": .., "z": ..}` (`z` optional). A
/// blank line is a frame with no hands. End of input ends the stream,
/// which lets recorded landmark dumps be replayed through the pipeline.
pub struct JsonFrameSource {
    reader: Box<dyn BufRead + Send>,
}

impl JsonFrameSource {
    pub fn from_stdin() -> Self {
        Self {
            reader: Box::new(BufReader::new(io::stdin())),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let file = File::open(path)?;
        Ok(Self {
            reader: Box::new(BufReader::new(file)),
        })
    }

    #[cfg(test)]
    fn from_str(input: &str) -> Self {
        Self {
            reader: Box::new(io::Cursor::new(input.to_owned())),
        }
    }
}

impl FrameSource for JsonFrameSource {
    fn next_frame(&mut self) -> Result<Option<Vec<LandmarkSet>>, Box<dyn Error>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let line = line.trim();
        if line.is_empty() {
            return Ok(Some(vec![]));
        }

        let hands: Vec<[Landmark; LANDMARK_COUNT]> = serde_json::from_str(line)?;
        Ok(Some(hands.into_iter().map(LandmarkSet::new).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use muteconnect_core::HandJoint;

    fn frame_line(hands: usize) -> String {
        let hand: Vec<String> = (0..LANDMARK_COUNT)
            .map(|i| format!(r#"{{"x":0.5,"y":{}}}"#, i as f32 / 100.0))
            .collect();
        let hand = format!("[{}]", hand.join(","));
        format!("[{}]", vec![hand; hands].join(","))
    }

    #[test]
    fn test_reads_one_frame_per_line() {
        let input = format!("{}\n{}\n", frame_line(1), frame_line(2));
        let mut source = JsonFrameSource::from_str(&input);

        let first = source.next_frame().unwrap().unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].point(HandJoint::ThumbTip).y, 0.04);

        let second = source.next_frame().unwrap().unwrap();
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn test_blank_line_is_an_empty_frame() {
        let mut source = JsonFrameSource::from_str("\n");
        assert_eq!(source.next_frame().unwrap(), Some(vec![]));
    }

    #[test]
    fn test_end_of_input_ends_the_stream() {
        let mut source = JsonFrameSource::from_str("");
        assert_eq!(source.next_frame().unwrap(), None);
    }

    #[test]
    fn test_wrong_landmark_count_is_an_error() {
        let mut source = JsonFrameSource::from_str(r#"[[{"x":0.1,"y":0.2}]]"#);
        assert!(source.next_frame().is_err());
    }
}
