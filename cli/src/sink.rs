//! Console rendering of resolved signs.

use muteconnect_core::{OutputSink, Sign};
use std::error::Error;
use std::path::PathBuf;

/// Shows a resolved sign on the terminal: the label line plus either the
/// path of its illustration or, when the image file is missing, a large
/// text-only banner of the label.
pub struct ConsoleSink {
    images_dir: PathBuf,
}

impl ConsoleSink {
    pub fn new(images_dir: PathBuf) -> Self {
        Self { images_dir }
    }
}

impl OutputSink for ConsoleSink {
    fn display(&mut self, sign: Sign) -> Result<(), Box<dyn Error>> {
        println!("Detected Sign: {}", sign.label());
        let image = self.images_dir.join(sign.image_file());
        if image.is_file() {
            println!("  image: {}", image.display());
        } else {
            // a missing illustration degrades to text, never an error
            println!("[INFO] No image at {:?}, showing text only", image);
            print!("{}", banner(sign.label()));
        }
        Ok(())
    }
}

fn banner(label: &str) -> String {
    let inner = format!("*   {}   *", label.to_uppercase());
    let edge = "*".repeat(inner.chars().count());
    format!("{}\n{}\n{}\n", edge, inner, edge)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_is_a_closed_box() {
        let banner = banner("Go");
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], lines[2]);
        assert_eq!(lines[1], "*   GO   *");
        assert_eq!(lines[0].len(), lines[1].len());
    }

    #[test]
    fn test_display_without_images_dir_still_succeeds() {
        let mut sink = ConsoleSink::new(PathBuf::from("no-such-directory"));
        assert!(sink.display(Sign::Peace).is_ok());
    }
}
