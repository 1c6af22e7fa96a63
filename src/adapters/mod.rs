// Adapters layer: concrete clients for the external systems behind the domain ports.

pub mod blog;
pub mod email;

pub use blog::SupabaseBlogStore;
pub use email::ResendMailer;
