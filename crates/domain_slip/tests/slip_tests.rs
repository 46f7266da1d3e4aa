//! Tests for the slip entity and its JSON shape

use chrono::{TimeZone, Utc};
use domain_slip::{Slip, SlipDraft, SlipError};
use proptest::prelude::*;

fn lorem_slip() -> Slip {
    let at = Utc.with_ymd_and_hms(2000, 2, 1, 12, 13, 14).unwrap()
        + chrono::Duration::nanoseconds(15);
    Slip {
        id: 1,
        body: "Lorem ipsum".to_string(),
        tags: vec!["tag1".into(), "tag2".into(), "tag3".into()],
        created_at: at,
        updated_at: at,
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_slip_json_shape() {
        let json = serde_json::to_string(&lorem_slip()).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"body":"Lorem ipsum","tags":["tag1","tag2","tag3"],"created_at":"2000-02-01T12:13:14.000000015Z","updated_at":"2000-02-01T12:13:14.000000015Z"}"#
        );
    }

    #[test]
    fn test_empty_tags_serialize_as_empty_array() {
        let mut slip = lorem_slip();
        slip.tags.clear();
        let value = serde_json::to_value(&slip).unwrap();
        assert_eq!(value["tags"], serde_json::json!([]));
    }

    #[test]
    fn test_slip_parses_from_its_own_output() {
        let json = serde_json::to_string(&lorem_slip()).unwrap();
        let parsed: Slip = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, lorem_slip());
    }
}

mod drafts {
    use super::*;

    #[test]
    fn test_draft_ignores_server_assigned_fields() {
        let draft: SlipDraft = serde_json::from_str(
            r#"{"id":99,"body":"Lorem ipsum","tags":["tag1"],"created_at":"2000-02-01T12:13:14Z"}"#,
        )
        .unwrap();
        assert_eq!(draft, SlipDraft::new("Lorem ipsum", ["tag1"]));
    }

    #[test]
    fn test_draft_tags_default_to_empty() {
        let draft: SlipDraft = serde_json::from_str(r#"{"body":"no tags"}"#).unwrap();
        assert!(draft.tags.is_empty());
    }

    #[test]
    fn test_draft_null_tags_read_as_empty() {
        let draft: SlipDraft = serde_json::from_str(r#"{"body":"nil","tags":null}"#).unwrap();
        assert_eq!(draft, SlipDraft::new("nil", Vec::<String>::new()));
    }

    #[test]
    fn test_draft_rejects_non_array_tags() {
        assert!(serde_json::from_str::<SlipDraft>(r#"{"body":"x","tags":"a"}"#).is_err());
    }

    #[test]
    fn test_draft_requires_body() {
        assert!(serde_json::from_str::<SlipDraft>(r#"{"tags":["a"]}"#).is_err());
    }

    #[test]
    fn test_draft_from_slip() {
        let slip = lorem_slip();
        assert_eq!(slip.draft(), SlipDraft::new("Lorem ipsum", ["tag1", "tag2", "tag3"]));
    }
}

mod errors {
    use super::*;

    #[test]
    fn test_not_found_message_names_id() {
        let err = SlipError::NotFound(7);
        assert_eq!(err.to_string(), "slip 7 not found");
        assert!(err.is_not_found());
        assert!(!SlipError::storage("boom").is_not_found());
    }
}

proptest! {
    #[test]
    fn prop_tag_order_survives_json(tags in prop::collection::vec("[a-zA-Z0-9 ]{0,16}", 0..10)) {
        let draft = SlipDraft::new("body", tags.clone());
        let json = serde_json::to_string(&draft).unwrap();
        let parsed: SlipDraft = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed.tags, tags);
    }
}
