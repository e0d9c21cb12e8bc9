//! Project team-member list maintenance.

/// Append `name` to `members` unless an entry with exactly the same text
/// is already present. Returns `true` when the list changed.
///
/// Matching is plain string equality: no trimming or case folding, so
/// `"Asha Rao"` and `"asha rao"` are different members.
pub fn insert_member(members: &mut Vec<String>, name: &str) -> bool {
    if members.iter().any(|m| m == name) {
        return false;
    }
    members.push(name.to_string());
    true
}
