//! Item set and per-item display state.

/// Display state of a single carousel item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemState {
    /// The focused item
    Active,
    /// Item immediately before the active one (circularly)
    Previous,
    /// Item immediately after the active one (circularly)
    Next,
    /// Any other item
    Hidden,
}

impl ItemState {
    /// CSS classes toggled by this state.
    pub const CLASSES: [&'static str; 3] = ["active", "prev", "next"];

    /// Compute the state of `index` when `current` is active.
    ///
    /// With one or two items an item can be adjacent on both sides; the
    /// earlier match wins (active, then previous, then next).
    ///
    /// ## Example
    ///
    /// ```rust
    /// use media_carousel::ItemState;
    ///
    /// assert_eq!(ItemState::for_index(0, 0, 5), ItemState::Active);
    /// assert_eq!(ItemState::for_index(4, 0, 5), ItemState::Previous);
    /// assert_eq!(ItemState::for_index(1, 0, 5), ItemState::Next);
    /// assert_eq!(ItemState::for_index(2, 0, 5), ItemState::Hidden);
    /// ```
    pub fn for_index(index: usize, current: usize, count: usize) -> Self {
        if count == 0 {
            return ItemState::Hidden;
        }
        if index == current {
            ItemState::Active
        } else if index == (current + count - 1) % count {
            ItemState::Previous
        } else if index == (current + 1) % count {
            ItemState::Next
        } else {
            ItemState::Hidden
        }
    }

    /// Get the CSS class for this state, if any.
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            ItemState::Active => Some("active"),
            ItemState::Previous => Some("prev"),
            ItemState::Next => Some("next"),
            ItemState::Hidden => None,
        }
    }
}

/// Wrap a possibly negative index into `[0, count)`.
///
/// Returns `None` when `count` is zero.
#[inline]
pub fn wrap_index(index: isize, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some(index.rem_euclid(count as isize) as usize)
}

/// Fixed, ordered set of carousel items.
///
/// The set cannot grow or shrink after construction.
#[derive(Clone, Debug)]
pub struct ItemSet<T> {
    items: Vec<T>,
}

impl<T> ItemSet<T> {
    /// Create an item set from an ordered list.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for ItemSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
