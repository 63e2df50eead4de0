use super::model::ConsentStatus;

/// Dual-consent gate: a session may only exist once both participants have
/// affirmatively agreed. Pure predicate, checked before any store mutation.
pub fn dual_consent_given(consent: &ConsentStatus) -> bool {
    consent.person_a && consent.person_b
}
