mod amount;
mod clock;
mod field;
mod message;
mod notification;
mod outcome;
mod role;
mod status;
mod status_change;
mod validation;

#[rustfmt::skip]
pub use {
    amount::parse_amount,
    clock::{Clock, FixedClock, SystemClock},
    field::TextField,
    message::{MessagePriority, MessageStatus, MessageType},
    notification::{NotificationDraft, NotificationPriority, NotificationType},
    outcome::{DevicePickup, ServiceOutcome},
    role::UserRole,
    status::{PartLocation, RemovedPartStatus, ServiceStatus, WarrantyStatus},
    status_change::{StateTransitionError, StatusChange, StatusChangeInput, TransitionContext},
    validation::{
        Checker, FieldViolation, PhoneRule, Validate, ValidationContext, ValidationErrors,
        ValidationResult,
    },
};
