use nimbus_common::cloud::{
    candidate::Candidate, matches::MatchResult, patterns::PatternTable,
};
use nimbus_common::resolving::ResolutionOutcome;

/// Turns a resolved candidate into a match when its name carries a known pattern.
///
/// Unresolved candidates never match, whatever their name looks like. Matching
/// is done on the candidate text and not on the address it resolved to, so a
/// name that merely looks cloud-hosted is reported as soon as it resolves at all.
pub fn classify(
    table: &PatternTable,
    candidate: &Candidate,
    outcome: &ResolutionOutcome,
) -> Option<MatchResult> {
    if !outcome.is_resolved() {
        return None;
    }

    table
        .provider_for(candidate.as_str())
        .map(|provider| MatchResult::new(candidate.clone(), provider))
}
