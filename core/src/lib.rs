//! # nimbus core
//!
//! Resolution and classification of candidate hostnames.
//!
//! * [`resolver`]: the platform-resolver backed [`nimbus_common::resolving::Resolver`].
//! * [`classifier`]: pure mapping of a resolved candidate to a provider match.
//! * [`pipeline`]: the bounded concurrent run over a batch of candidates.

pub mod classifier;
pub mod pipeline;
pub mod resolver;
