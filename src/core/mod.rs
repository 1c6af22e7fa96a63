pub mod compose;
pub mod submission;

pub use crate::domain::model::{ContactSubmission, FormType, OutgoingEmail, ValidSubmission};
pub use crate::domain::ports::{BlogStore, Mailer, SettingsSource};
pub use crate::utils::error::Result;
pub use submission::{FormReply, SubmissionHandler};
