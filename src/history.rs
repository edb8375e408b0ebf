//! Bounded command history.
//!
//! [`History`] is a fixed ring of `H` slots holding lines of up to `L - 1`
//! bytes. Recall offsets count backwards from the newest entry: offset 0 is
//! the line committed last.
//!
//! [`Recall`] is the navigation state used while the user walks through the
//! history with the up/down keys. It remembers the line that was being typed
//! so that walking back down past the newest entry restores it.
//!
//! ```rust
//! use picoshell::history::History;
//!
//! let mut history: History<4, 32> = History::new();
//! history.append(b"led on");
//! history.append(b"led off");
//! assert_eq!(history.get(0), Some(&b"led off"[..]));
//! assert_eq!(history.get(1), Some(&b"led on"[..]));
//! assert_eq!(history.get(2), None);
//! ```

use heapless::Vec;

/// Fixed-capacity ring of past lines.
#[derive(Debug)]
pub struct History<const H: usize, const L: usize> {
    slots: [Vec<u8, L>; H],
    write_index: usize,
    full: bool,
}

impl<const H: usize, const L: usize> Default for History<H, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const H: usize, const L: usize> History<H, L> {
    /// An empty history.
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| Vec::new()),
            write_index: 0,
            full: false,
        }
    }

    /// Maximum number of lines kept.
    pub const fn capacity(&self) -> usize {
        H
    }

    /// Number of recallable lines.
    pub fn len(&self) -> usize {
        if self.full { H } else { self.write_index }
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget every entry.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
        self.write_index = 0;
        self.full = false;
    }

    /// Record `line` as the newest entry, evicting the oldest one when full.
    ///
    /// Empty lines and lines of `L - 1` bytes or more are not recorded, and a
    /// history with no slots records nothing. Entries are not deduplicated.
    ///
    /// # Arguments
    ///
    /// * `line` - Bytes of the submitted line, without the terminating CR
    ///
    /// # Returns
    ///
    /// `true` if the line was stored, `false` if it was rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use picoshell::history::History;
    ///
    /// let mut history: History<2, 16> = History::new();
    /// assert!(history.append(b"one"));
    /// assert!(history.append(b"two"));
    /// assert!(history.append(b"three"));
    /// assert!(!history.append(b""));
    ///
    /// assert_eq!(history.get(0), Some(&b"three"[..]));
    /// assert_eq!(history.get(1), Some(&b"two"[..]));
    /// assert_eq!(history.get(2), None);
    /// ```
    pub fn append(&mut self, line: &[u8]) -> bool {
        if H == 0 || line.is_empty() || line.len() >= L.saturating_sub(1) {
            debug!("history: rejected line of {=usize} bytes", line.len());
            return false;
        }

        let slot = &mut self.slots[self.write_index];
        slot.clear();
        // Length was checked against L above.
        if slot.extend_from_slice(line).is_err() {
            return false;
        }

        if self.write_index + 1 >= H {
            self.full = true;
            self.write_index = 0;
        } else {
            self.write_index += 1;
        }
        true
    }

    /// The entry `offset` steps back from the newest one.
    pub fn get(&self, offset: usize) -> Option<&[u8]> {
        if offset >= self.len() {
            return None;
        }
        let index = (self.write_index + H - 1 - offset) % H;
        Some(&self.slots[index])
    }

    /// Entries from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.len()).filter_map(move |offset| self.get(offset))
    }
}

/// Position of the user inside the history while editing.
///
/// Offset 0 means the live line is shown; offset `n > 0` means the entry at
/// history offset `n - 1` is shown.
#[derive(Debug, Default)]
pub struct Recall<const L: usize> {
    offset: usize,
    saved: Vec<u8, L>,
}

impl<const L: usize> Recall<L> {
    /// Navigation positioned on the live line.
    pub const fn new() -> Self {
        Self {
            offset: 0,
            saved: Vec::new(),
        }
    }

    /// Current navigation offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether a history entry is currently shown instead of the live line.
    pub fn is_browsing(&self) -> bool {
        self.offset > 0
    }

    /// Return to the live line state.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Snapshot of the live line taken when browsing started.
    pub fn saved(&self) -> &[u8] {
        &self.saved
    }

    pub(crate) fn save(&mut self, line: &[u8]) {
        self.saved.clear();
        // The live line has the same capacity as the snapshot.
        let _ = self.saved.extend_from_slice(line);
    }

    pub(crate) fn set_offset(&mut self, offset: usize) {
        self.offset = offset;
    }
}
