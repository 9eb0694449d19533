//! Social network integrations for linkpost.
//!
//! Publishing goes through the [`SocialPublisher`](linkpost_interface::SocialPublisher)
//! trait; [`LinkedInClient`] is the LinkedIn implementation using the UGC posts API.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod linkedin;

pub use linkedin::LinkedInClient;
