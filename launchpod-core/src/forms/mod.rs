//! Form drafts, validation and outbound relays
//!
//! Newsletter sign-ups go to a spreadsheet-backed API, booking requests to
//! an email-template service. Both sit behind [`FormRelay`] so callers and
//! tests can swap the transport.

pub mod draft;
pub mod email;
pub mod relay;
pub mod schema;
pub mod sheet;
pub mod submission;

pub use draft::FormDraft;
pub use email::{EmailRelay, EmailTemplate};
pub use relay::{FormKind, FormRelay, http_client};
pub use schema::{FieldRule, FormSchema, is_valid_email, is_valid_phone};
pub use sheet::SheetRelay;
pub use submission::{FormController, SubmissionState};
