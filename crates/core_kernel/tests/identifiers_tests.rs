//! Unit tests for the Identifiers module

use core_kernel::{AttachmentId, IntakeRequestId, SessionId};
use uuid::Uuid;

mod intake_request_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        assert_ne!(IntakeRequestId::new(), IntakeRequestId::new());
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let id1 = IntakeRequestId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = IntakeRequestId::new_v7();
        let uuid1: Uuid = id1.into();
        let uuid2: Uuid = id2.into();
        assert!(uuid1 < uuid2);
    }

    #[test]
    fn test_short_form() {
        let uuid = Uuid::parse_str("a1b2c3d4-0000-4000-8000-000000000000").unwrap();
        let id = IntakeRequestId::from_uuid(uuid);
        assert_eq!(id.short(), "REQ-A1B2C3D4");
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = IntakeRequestId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
    }
}

mod other_ids {
    use super::*;

    #[test]
    fn test_prefixes() {
        assert!(AttachmentId::new().to_string().starts_with("ATT-"));
        assert!(SessionId::new().to_string().starts_with("SES-"));
    }

    #[test]
    fn test_wrong_prefix_fails_to_parse() {
        let attachment = AttachmentId::new();
        let result = attachment.to_string().parse::<SessionId>();
        assert!(result.is_err());
    }
}
