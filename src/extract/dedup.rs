//! Last-write-wins deduplication.

use std::collections::HashMap;
use std::hash::Hash;

/// Keep one item per distinct key.
///
/// The retained item is the **last** one seen for its key, stored at the
/// position where the key first appeared. This is the behavior of an
/// insertion-ordered map whose entries get overwritten.
///
/// The operation is idempotent: running it on its own output changes nothing.
///
/// # Example
///
/// ```
/// use figextract::extract::dedup_last_wins;
///
/// let items = vec![("a", 1), ("b", 2), ("a", 3)];
/// let unique = dedup_last_wins(items, |(k, _)| *k);
/// assert_eq!(unique, vec![("a", 3), ("b", 2)]);
/// ```
pub fn dedup_last_wins<T, K, I, F>(items: I, key: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut out: Vec<T> = Vec::new();

    for item in items {
        let k = key(&item);
        match positions.get(&k) {
            Some(&idx) => out[idx] = item,
            None => {
                positions.insert(k, out.len());
                out.push(item);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_last_wins() {
        let items = vec![
            ("#ffffff", "Background"),
            ("#000000", "Text"),
            ("#ffffff", "Card"),
            ("#ff0000", "Error"),
            ("#000000", "Icon"),
        ];
        let unique = dedup_last_wins(items, |(hex, _)| *hex);
        assert_eq!(
            unique,
            vec![("#ffffff", "Card"), ("#000000", "Icon"), ("#ff0000", "Error")]
        );
    }

    #[test]
    fn test_dedup_idempotent() {
        let items = vec![(1, 'a'), (2, 'b'), (1, 'c'), (3, 'd'), (2, 'e')];
        let once = dedup_last_wins(items, |(k, _)| *k);
        let twice = dedup_last_wins(once.clone(), |(k, _)| *k);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_dedup_empty_and_unique() {
        let empty: Vec<u8> = dedup_last_wins(Vec::<u8>::new(), |v| *v);
        assert!(empty.is_empty());

        let unique = dedup_last_wins(vec![3, 1, 2], |v| *v);
        assert_eq!(unique, vec![3, 1, 2]);
    }
}
