//! Section-number inference from auxiliary class identifiers.

use evalkit_model::SectionPolicy;

/// Infer a section number from an auxiliary id under the given policy.
///
/// Never fails: ids the policy cannot interpret fall back to section 1.
pub fn infer_section(policy: SectionPolicy, auxiliary_id: &str) -> u32 {
    match policy {
        SectionPolicy::LastDigit => match auxiliary_id.trim().chars().last() {
            Some('0') => 1,
            Some('1') => 2,
            _ => 1,
        },
        SectionPolicy::Modulo => {
            let Ok(id) = auxiliary_id.trim().parse::<i64>() else {
                return 1;
            };
            // Auxiliary ids encode the section as an offset from a base of 90.
            let section = id.rem_euclid(100) - 90 + 1;
            u32::try_from(section).unwrap_or(1).max(1)
        }
    }
}
