use super::ids::{CivilDate, PersonId};
use std::collections::BTreeMap;

/// One validated line of the punch input file.
#[derive(Debug, Clone)]
pub struct PunchRecord {
    pub person: PersonId,
    pub date: CivilDate,
    pub time: String, // "HH:MM", validated at ingest
    pub code: String, // uninterpreted device code
}

/// Punch times grouped per (person, day). Only the time strings survive
/// grouping; ordering within a group is resolved by the session builder.
pub type PunchGroups = BTreeMap<(PersonId, CivilDate), Vec<String>>;

pub fn group_punches(records: Vec<PunchRecord>) -> PunchGroups {
    let mut groups: PunchGroups = BTreeMap::new();
    for rec in records {
        groups
            .entry((rec.person, rec.date))
            .or_default()
            .push(rec.time);
    }
    groups
}
