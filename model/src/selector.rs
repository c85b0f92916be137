//! Tab-style selection over a fixed list of sections.

/// An entry that can be picked in a [`SectionSelector`].
pub trait Section {
    type Key: Copy + Eq;

    fn key(&self) -> Self::Key;
}

/// Tracks which entry of a fixed, non-empty list is active.
///
/// The active entry always belongs to the list. A fresh selector points at
/// the first entry; nothing survives a remount.
#[derive(Debug)]
pub struct SectionSelector<'a, T> {
    items: &'a [T],
    active: usize,
}

// Manual impls: derive would require `T: Clone`/`T: Copy`.
impl<T> Clone for SectionSelector<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SectionSelector<'_, T> {}

impl<T> PartialEq for SectionSelector<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.items, other.items) && self.active == other.active
    }
}

impl<'a, T: Section> SectionSelector<'a, T> {
    /// Returns `None` for an empty list, which has no first entry to select.
    pub fn new(items: &'a [T]) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self { items, active: 0 })
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    pub fn active(&self) -> &'a T {
        &self.items[self.active]
    }

    pub fn active_key(&self) -> T::Key {
        self.active().key()
    }

    pub fn is_active(&self, key: T::Key) -> bool {
        self.active_key() == key
    }

    /// Make the entry with `key` active.
    ///
    /// Unknown keys leave the selection where it was and return `false`.
    pub fn select(&mut self, key: T::Key) -> bool {
        match self.items.iter().position(|item| item.key() == key) {
            Some(idx) => {
                self.active = idx;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SYSTEMS;
    use crate::types::SystemKey;

    #[derive(Debug)]
    struct Tab(&'static str);

    impl Section for Tab {
        type Key = &'static str;

        fn key(&self) -> &'static str {
            self.0
        }
    }

    #[test]
    fn starts_on_first_entry() {
        let selector = SectionSelector::new(SYSTEMS).unwrap();
        assert_eq!(selector.active_key(), SystemKey::Drivetrain);
        assert_eq!(selector.active_key(), SYSTEMS[0].key);
    }

    #[test]
    fn empty_list_has_no_selector() {
        let empty: &[Tab] = &[];
        assert!(SectionSelector::new(empty).is_none());
    }

    #[test]
    fn selecting_a_member_exposes_its_content() {
        let mut selector = SectionSelector::new(SYSTEMS).unwrap();
        for system in SYSTEMS {
            assert!(selector.select(system.key));
            let active = selector.active();
            assert_eq!(active.title, system.title);
            assert_eq!(active.points, system.points);
            assert!(selector.is_active(system.key));
        }
    }

    #[test]
    fn unknown_key_keeps_current_selection() {
        let tabs = [Tab("one"), Tab("two")];
        let mut selector = SectionSelector::new(&tabs).unwrap();
        assert!(selector.select("two"));
        assert!(!selector.select("three"));
        assert_eq!(selector.active_key(), "two");
    }

    #[test]
    fn copies_are_independent() {
        let mut first = SectionSelector::new(SYSTEMS).unwrap();
        let second = first;
        first.select(SystemKey::Science);
        assert_eq!(second.active_key(), SystemKey::Drivetrain);
        assert_ne!(first, second);
    }
}
