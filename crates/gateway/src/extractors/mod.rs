//! Request extractors.

mod validated_signup;

pub use validated_signup::ValidatedSignup;
