//! # Cloud Hosting Models
//!
//! Everything the pipeline passes around: the [`candidate::Candidate`] names read
//! from input, the [`provider::Provider`] labels, the [`patterns::PatternTable`]
//! that links the two, and the [`matches::MatchResult`] reported to the user.

pub mod candidate;
pub mod matches;
pub mod patterns;
pub mod provider;
