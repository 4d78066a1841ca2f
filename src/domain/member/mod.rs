//! Member module - candidate member profiles.

mod profile;

pub use profile::{MemberProfile, MemberProfileBuilder};
