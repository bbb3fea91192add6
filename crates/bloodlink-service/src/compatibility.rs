//! Red-cell compatibility between donor and recipient blood types.

use std::collections::BTreeSet;

use bloodlink_entity::{AboGroup, BloodType, RhFactor};

/// Whether a donor type may supply a recipient type.
///
/// ABO: O gives to all, AB receives from all, otherwise groups must match.
/// Rh: negative gives to both, positive only to positive.
pub fn is_compatible(donor: BloodType, recipient: BloodType) -> bool {
    let group_ok = donor.group == AboGroup::O
        || donor.group == recipient.group
        || recipient.group == AboGroup::AB;
    let rh_ok = donor.rh == RhFactor::Negative || donor.rh == recipient.rh;
    group_ok && rh_ok
}

/// Every donor type that may supply `recipient`.
pub fn compatible_donor_types(recipient: BloodType) -> BTreeSet<BloodType> {
    BloodType::ALL
        .into_iter()
        .filter(|donor| is_compatible(*donor, recipient))
        .collect()
}

/// Like [`compatible_donor_types`] for a raw string.
///
/// A string that is not a valid blood type yields an empty set.
pub fn compatible_donor_types_raw(recipient: &str) -> BTreeSet<BloodType> {
    match recipient.parse::<BloodType>() {
        Ok(bt) => compatible_donor_types(bt),
        Err(_) => {
            tracing::debug!(recipient, "Unrecognized blood type, no compatible donors");
            BTreeSet::new()
        }
    }
}

/// Every recipient type that `donor` may supply.
pub fn compatible_recipient_types(donor: BloodType) -> BTreeSet<BloodType> {
    BloodType::ALL
        .into_iter()
        .filter(|recipient| is_compatible(donor, *recipient))
        .collect()
}
