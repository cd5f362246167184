//! Per-level node interning table (spec section 4.4): packed mate key to
//! node id, flushed once its level is fully expanded and promoted.

use hashbrown::HashMap;

use crate::node::NodeId;
use crate::predicate::PackedKey;

/// Assigns sequential node ids, starting at `base`, to packed keys seen
/// for the first time within one level's expansion.
pub struct InternTable {
    map: HashMap<PackedKey, NodeId>,
    base: u32,
}

impl InternTable {
    #[must_use]
    pub fn new(base: u32) -> Self {
        Self {
            map: HashMap::new(),
            base,
        }
    }

    /// Returns the id for `key`, claiming a fresh one if this is the first
    /// time `key` has been seen this level. The second element is `true`
    /// exactly when a fresh id was claimed, telling the caller to store the
    /// mate that produced it.
    pub fn get_or_claim(&mut self, key: PackedKey) -> (NodeId, bool) {
        if let Some(&id) = self.map.get(&key) {
            return (id, false);
        }
        let id = NodeId(self.base + self.map.len() as u32);
        self.map.insert(key, id);
        (id, true)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_key_reuses_id() {
        let mut table = InternTable::new(10);
        let key = PackedKey::new();
        let (a, fresh_a) = table.get_or_claim(key.clone());
        let (b, fresh_b) = table.get_or_claim(key);
        assert_eq!(a, b);
        assert!(fresh_a);
        assert!(!fresh_b);
    }

    #[test]
    fn distinct_keys_get_sequential_ids_from_base() {
        let mut table = InternTable::new(5);
        let mut key_a = PackedKey::new();
        key_a.push_u32(1);
        let mut key_b = PackedKey::new();
        key_b.push_u32(2);

        let (a, _) = table.get_or_claim(key_a);
        let (b, _) = table.get_or_claim(key_b);
        assert_eq!(a.0, 5);
        assert_eq!(b.0, 6);
    }
}
