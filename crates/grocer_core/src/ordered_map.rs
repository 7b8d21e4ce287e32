use std::collections::HashMap;
use std::hash::Hash;

/// Map that iterates in first-insertion order.
///
/// Lookups go through a hash index; iteration walks the backing vector, so
/// the order entries were first inserted is part of the contract.
#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Hash + Eq + Clone, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    /// Returns the value for `key`, inserting `make()` at the end if absent.
    pub fn get_or_insert_with(&mut self, key: K, make: impl FnOnce() -> V) -> &mut V {
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.index.insert(key.clone(), slot);
                self.entries.push((key, make()));
                slot
            }
        };
        &mut self.entries[slot].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

#[cfg(test)]
mod tests {
    use super::OrderedMap;

    #[test]
    fn iterates_in_first_insertion_order() {
        let mut map = OrderedMap::new();
        for key in ["zucchini", "apple", "miso", "apple"] {
            *map.get_or_insert_with(key.to_string(), || 0) += 1;
        }

        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["zucchini", "apple", "miso"]);
        assert_eq!(map.get(&"apple".to_string()), Some(&2));
        assert_eq!(map.len(), 3);
    }
}
