//! External collaborators: the signup store and the email verifier

mod apyhub;
mod error;
mod supabase;
mod traits;

pub use apyhub::{ApyHubVerifier, DEFAULT_ENDPOINT as DEFAULT_ACADEMIC_ENDPOINT};
pub use error::StoreError;
pub use supabase::SupabaseStore;
pub use traits::{AcademicEmailVerifier, SignupStore};

#[cfg(test)]
pub use error::PrecheckError;
#[cfg(test)]
pub use traits::{MockAcademicEmailVerifier, MockSignupStore};
