//! Keyword matching over speech transcripts.

use muteconnect_core::Sign;
use regex::Regex;

/// Keyword vocabulary in priority order. When a transcript contains more
/// than one keyword, the earlier entry wins, mirroring the first-match-wins
/// policy of the gesture rules.
pub const KEYWORDS: [(&str, Sign); 5] = [
    ("stop", Sign::Stop),
    ("stand", Sign::Stand),
    ("good", Sign::Good),
    ("go", Sign::Go),
    ("peace", Sign::Peace),
];

lazy_static! {
    // anything that is not a letter, digit, or space
    static ref NON_WORD: Regex = Regex::new(r"[^a-z0-9 ]+").unwrap();
}

/// Find the first configured keyword contained in the transcript and return
/// it with its sign. The keyword is reported back so the speech path can
/// confirm what was recognized.
pub fn match_keyword(transcript: &str) -> Option<(&'static str, Sign)> {
    let lowered = transcript.to_lowercase();
    let normalized = NON_WORD.replace_all(&lowered, " ");
    for (keyword, sign) in KEYWORDS.iter() {
        if normalized.contains(keyword) {
            return Some((*keyword, *sign));
        }
    }
    None
}

/// Find the sign for the first configured keyword contained in the
/// transcript. Returns `None` when no keyword matches.
pub fn match_transcript(transcript: &str) -> Option<Sign> {
    match_keyword(transcript).map(|(_, sign)| sign)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_inside_sentence() {
        assert_eq!(match_transcript("please stop now"), Some(Sign::Stop));
    }

    #[test]
    fn test_no_keyword_is_no_match() {
        assert_eq!(match_transcript("hello world"), None);
        assert_eq!(match_transcript(""), None);
    }

    #[test]
    fn test_matching_ignores_case_and_punctuation() {
        assert_eq!(match_transcript("PEACE!"), Some(Sign::Peace));
        assert_eq!(match_transcript("Stand, please."), Some(Sign::Stand));
    }

    #[test]
    fn test_two_keywords_earlier_entry_wins() {
        // "go" and "peace" both present; "go" is listed earlier
        assert_eq!(match_transcript("go in peace"), Some(Sign::Go));
        // "stop" is listed before "go"
        assert_eq!(match_transcript("go and then stop"), Some(Sign::Stop));
    }

    #[test]
    fn test_good_shadows_its_go_substring() {
        // "good" contains "go" but sits earlier in the table, so a
        // transcript with "good" resolves to Good, deterministically
        assert_eq!(match_transcript("very good"), Some(Sign::Good));
        assert_eq!(match_keyword("very good"), Some(("good", Sign::Good)));
    }

    #[test]
    fn test_every_sign_reachable_from_a_keyword() {
        use muteconnect_core::Sign::*;
        for sign in [Stop, Stand, Good, Go, Peace].iter() {
            assert!(KEYWORDS.iter().any(|(_, s)| s == sign));
        }
    }
}
