//! Pre-built Test Fixtures
//!
//! Ready-to-use slips and drafts. Values are fixed so assertions can compare
//! against literal JSON.

use domain_slip::SlipDraft;

/// Fixture for slip test data
pub struct SlipFixtures;

impl SlipFixtures {
    /// The canonical create payload
    pub fn lorem_ipsum() -> SlipDraft {
        SlipDraft::new("Lorem ipsum", ["tag1", "tag2", "tag3"])
    }

    pub fn fnord() -> SlipDraft {
        SlipDraft::new("Fnord", ["all", "seeing", "eye"])
    }

    pub fn steam_train() -> SlipDraft {
        SlipDraft::new("There was a hole here. Now it's gone.", ["steam", "train"])
    }

    /// A draft with no tags at all
    pub fn untagged() -> SlipDraft {
        SlipDraft::new("nothing to see here", Vec::<String>::new())
    }

    /// Several distinct drafts, in insertion order
    pub fn drafts() -> Vec<SlipDraft> {
        vec![Self::lorem_ipsum(), Self::fnord(), Self::steam_train()]
    }

    /// The canonical create payload as JSON text
    pub const LOREM_IPSUM_JSON: &'static str = r#"{"body":"Lorem ipsum","tags":["tag1","tag2","tag3"]}"#;

    /// Same payload with the opening brace missing
    pub const MALFORMED_JSON: &'static str = r#""body":"Lorem ipsum","tags":["tag1","tag2","tag3"]}"#;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drafts_are_distinct() {
        let drafts = SlipFixtures::drafts();
        assert_ne!(drafts[0], drafts[1]);
        assert_ne!(drafts[1], drafts[2]);
    }
}
