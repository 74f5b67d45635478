// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Bounded name registries.
//!
//! A [`Registry`] is a fixed array of slots keyed by name. It never allocates. Lookups are a
//! linear scan, which is cheap at the small capacities used here. Names are stored truncated to
//! [`MAX_NAME_LENGTH`] bytes, and lookups truncate the query the same way, so a long name still
//! finds its own entry.

use crate::Color;
use crate::config::MAX_NAME_LENGTH;
use crate::str::BoundedStr;
use crate::str::truncate;

/// What a registry mutation did.
///
/// Ignoring the outcome gives the silent behavior: a full registry simply does not record the
/// new name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A free slot now holds the name.
    Inserted,
    /// The name was present and its value was replaced.
    Updated,
    /// The name was present and its slot was released.
    Removed,
    /// Nothing needed to change.
    Unchanged,
    /// The name was new but every slot is taken; nothing was stored.
    Saturated,
    /// The name was empty; nothing was stored.
    Ignored,
}

impl Outcome {
    /// Whether the request was refused because the registry is full.
    pub fn is_saturated(self) -> bool {
        self == Outcome::Saturated
    }

    /// Whether the registry contents changed.
    pub fn is_changed(self) -> bool {
        matches!(self, Outcome::Inserted | Outcome::Updated | Outcome::Removed)
    }
}

/// Name to color bindings.
pub type ColorRegistry<const N: usize> = Registry<Color, N>;

#[derive(Debug, Clone, Copy, Default)]
struct Slot<V> {
    name: BoundedStr<MAX_NAME_LENGTH>,
    value: V,
    active: bool,
}

/// A fixed-capacity map from names to `V`, holding at most `N` entries.
#[derive(Debug, Clone)]
pub struct Registry<V, const N: usize> {
    slots: [Slot<V>; N],
}

impl<V: Copy + Default + PartialEq, const N: usize> Default for Registry<V, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Copy + Default + PartialEq, const N: usize> Registry<V, N> {
    pub fn new() -> Self {
        Registry {
            slots: [Slot::default(); N],
        }
    }

    /// Bind `name` to `value`, overwriting an existing binding.
    pub fn upsert(&mut self, name: &str, value: V) -> Outcome {
        if name.is_empty() {
            return Outcome::Ignored;
        }

        if let Some(slot) = self.find_mut(name) {
            if slot.value == value {
                return Outcome::Unchanged;
            }
            slot.value = value;
            return Outcome::Updated;
        }

        match self.slots.iter_mut().find(|slot| !slot.active) {
            Some(slot) => {
                slot.name.set(name);
                slot.value = value;
                slot.active = true;
                Outcome::Inserted
            }
            None => Outcome::Saturated,
        }
    }

    /// Release the slot bound to `name`.
    pub fn remove(&mut self, name: &str) -> Outcome {
        if name.is_empty() {
            return Outcome::Ignored;
        }

        match self.find_mut(name) {
            Some(slot) => {
                slot.active = false;
                Outcome::Removed
            }
            None => Outcome::Unchanged,
        }
    }

    /// Release every slot.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.active = false;
        }
    }

    /// The value bound to `name`.
    pub fn get(&self, name: &str) -> Option<V> {
        let key = truncate(name, MAX_NAME_LENGTH);
        self.slots
            .iter()
            .find(|slot| slot.active && slot.name == *key)
            .map(|slot| slot.value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.active).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Iterate over the occupied entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, V)> + '_ {
        self.slots
            .iter()
            .filter(|slot| slot.active)
            .map(|slot| (slot.name.as_str(), slot.value))
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Slot<V>> {
        let key = truncate(name, MAX_NAME_LENGTH);
        self.slots
            .iter_mut()
            .find(|slot| slot.active && slot.name == *key)
    }
}

impl<const N: usize> Registry<Color, N> {
    /// The color bound to `name`, or [`Color::Default`].
    pub fn color(&self, name: &str) -> Color {
        self.get(name).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_overwrites_without_growing() {
        let mut colors = ColorRegistry::<4>::new();
        assert_eq!(colors.upsert("Database", Color::Red), Outcome::Inserted);
        assert_eq!(colors.upsert("Database", Color::Blue), Outcome::Updated);
        assert_eq!(colors.upsert("Database", Color::Blue), Outcome::Unchanged);
        assert_eq!(colors.color("Database"), Color::Blue);
        assert_eq!(colors.len(), 1);
    }

    #[test]
    fn unbound_names_are_default() {
        let colors = ColorRegistry::<4>::new();
        assert_eq!(colors.color("Nope"), Color::Default);
        assert!(colors.is_empty());
    }

    #[test]
    fn empty_names_are_ignored() {
        let mut colors = ColorRegistry::<4>::new();
        assert_eq!(colors.upsert("", Color::Red), Outcome::Ignored);
        assert_eq!(colors.remove(""), Outcome::Ignored);
        assert!(colors.is_empty());
        assert_eq!(colors.color(""), Color::Default);
    }

    #[test]
    fn saturation_refuses_new_names_only() {
        let mut colors = ColorRegistry::<2>::new();
        assert_eq!(colors.upsert("a", Color::Red), Outcome::Inserted);
        assert_eq!(colors.upsert("b", Color::Green), Outcome::Inserted);

        let outcome = colors.upsert("c", Color::Blue);
        assert!(outcome.is_saturated());
        assert!(!outcome.is_changed());
        assert_eq!(colors.color("c"), Color::Default);

        // existing entries stay valid and updatable
        assert_eq!(colors.upsert("a", Color::Cyan), Outcome::Updated);
        assert_eq!(colors.color("b"), Color::Green);

        // a released slot is reused
        assert_eq!(colors.remove("b"), Outcome::Removed);
        assert_eq!(colors.upsert("c", Color::Blue), Outcome::Inserted);
        assert_eq!(colors.len(), 2);
    }

    #[test]
    fn remove_and_clear() {
        let mut colors = ColorRegistry::<4>::new();
        colors.upsert("a", Color::Red);
        colors.upsert("b", Color::Red);
        assert_eq!(colors.remove("missing"), Outcome::Unchanged);
        assert_eq!(colors.remove("a"), Outcome::Removed);
        assert!(!colors.contains("a"));

        colors.clear();
        assert!(colors.is_empty());
        assert_eq!(colors.capacity(), 4);
    }

    #[test]
    fn long_names_match_their_truncated_entry() {
        let mut colors = ColorRegistry::<4>::new();
        let long = "N".repeat(MAX_NAME_LENGTH + 8);
        assert_eq!(colors.upsert(&long, Color::Magenta), Outcome::Inserted);
        assert_eq!(colors.color(&long), Color::Magenta);

        let (stored, _) = colors.iter().next().unwrap();
        assert_eq!(stored.len(), MAX_NAME_LENGTH);
    }
}
