/// Read-only view of the channel roster.
///
/// The roster is owned and kept current by the transport; the core only
/// queries it, and never holds on to answers past a single event.
pub trait Roster: Send + Sync {
    /// Is `nick` currently in the channel?
    fn is_member(&self, nick: &str) -> bool;

    /// Does `nick` hold channel operator status?
    fn is_operator(&self, nick: &str) -> bool;

    /// Does `nick` hold voice status?
    fn is_voiced(&self, nick: &str) -> bool;

    /// Every member currently holding voice status.
    fn voiced_members(&self) -> Vec<String>;
}

/// Fold a nickname to its canonical IRC form (RFC 1459 case mapping).
pub fn fold_nick(nick: &str) -> String {
    nick.chars()
        .map(|c| match c {
            '[' => '{',
            ']' => '}',
            '\\' => '|',
            '~' => '^',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// Compare two nicknames under IRC case folding.
pub fn same_nick(a: &str, b: &str) -> bool {
    a.len() == b.len() && fold_nick(a) == fold_nick(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_nick_uses_rfc1459_mapping() {
        assert_eq!(fold_nick("Alice[Away]"), "alice{away}");
        assert_eq!(fold_nick("back\\slash~"), "back|slash^");
        assert!(same_nick("BOB", "bob"));
        assert!(!same_nick("bob", "bobby"));
    }
}
