use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    #[default]
    Inquiry,
    Complaint,
    Request,
    Update,
    Urgent,
}

#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum MessagePriority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

/// Where a partner's message stands on the admin side.
#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    #[default]
    Unread,
    Read,
    Replied,
    Archived,
}

impl MessageStatus {
    /// Archived messages are frozen; a second reply replaces the first.
    pub fn can_transition_to(&self, next: MessageStatus) -> bool {
        use MessageStatus::*;
        matches!(
            (self, next),
            (Unread, Read | Replied | Archived) | (Read, Replied | Archived) | (Replied, Replied | Archived)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_flow() {
        assert!(MessageStatus::Unread.can_transition_to(MessageStatus::Read));
        assert!(MessageStatus::Read.can_transition_to(MessageStatus::Replied));
        assert!(MessageStatus::Replied.can_transition_to(MessageStatus::Replied));
        assert!(!MessageStatus::Replied.can_transition_to(MessageStatus::Read));
        assert!(!MessageStatus::Archived.can_transition_to(MessageStatus::Replied));
        assert!(!MessageStatus::Archived.can_transition_to(MessageStatus::Archived));
    }

    #[test]
    fn test_wire_names() {
        let kind: MessageType = serde_json::from_str(r#""complaint""#).unwrap();
        assert_eq!(kind, MessageType::Complaint);
        assert_eq!(serde_json::to_string(&MessageStatus::Unread).unwrap(), r#""unread""#);
    }
}
