//! Generic hash-based mathematical set.
//!
//! This module provides [`Set`], a mutable container of distinct values
//! backed by [`indexmap::IndexSet`].
//!
//! # Overview
//!
//! - O(1) average `contains`, `insert`, `delete`, `pop_any`
//! - O(1) `len` and `is_empty`
//! - `union`, `intersection`, `difference` and `symmetric_difference`
//!   return newly allocated sets that share no storage with their operands
//!
//! Iteration order is unspecified. It may differ between two sets holding
//! the same values, and between runs of the same program. `Display` output
//! and [`Set::values`] follow that same unspecified order.
//!
//! # Examples
//!
//! ```rust
//! use setalgebra::{Set, set};
//!
//! let mut primes = set![2, 3, 5, 7];
//! primes.insert(11);
//! primes.delete(&2);
//!
//! assert!(primes.contains(&11));
//! assert!(!primes.contains(&2));
//! assert_eq!(primes.len(), 4);
//! ```
//!
//! # Set Operations
//!
//! ```rust
//! use setalgebra::{Set, set};
//!
//! let set_a = set![1, 2, 3];
//! let set_b = set![1, 2, 4, 5];
//!
//! assert_eq!(set_a.union(&set_b), set![1, 2, 3, 4, 5]);
//! assert_eq!(set_a.intersection(&set_b), set![1, 2]);
//! assert_eq!(set_a.difference(&set_b), set![3]);
//! assert_eq!(set_b.difference(&set_a), set![4, 5]);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use indexmap::IndexSet;
use indexmap::set as index_set;

use crate::hasher::DefaultBuildHasher;
use crate::trace::trace_operation;

// =============================================================================
// Set Definition
// =============================================================================

/// An unordered collection of distinct values.
///
/// # Time Complexity
///
/// | Operation              | Complexity        |
/// |------------------------|-------------------|
/// | `new`                  | O(1)              |
/// | `contains`             | O(1) average      |
/// | `insert`               | O(1) amortized    |
/// | `delete`               | O(1) average      |
/// | `pop_any`              | O(1)              |
/// | `len`                  | O(1)              |
/// | `is_superset`          | O(m)              |
/// | `union`                | O(n + m)          |
/// | `intersection`         | O(min(n, m))      |
/// | `difference`           | O(n)              |
/// | `symmetric_difference` | O(n + m)          |
/// | `values`               | O(n)              |
///
/// # Examples
///
/// ```rust
/// use setalgebra::Set;
///
/// let set = Set::from_values([1, 2, 2, 3]);
/// assert_eq!(set.len(), 3);
/// assert!(set.contains(&2));
/// ```
#[derive(Clone)]
pub struct Set<V> {
    inner: IndexSet<V, DefaultBuildHasher>,
}

static_assertions::assert_impl_all!(Set<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Set<String>: Send, Sync, Clone, Default);

impl<V> Set<V> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: IndexSet::with_hasher(DefaultBuildHasher::default()),
        }
    }

    /// Creates an empty set with room for at least `capacity` values.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: IndexSet::with_capacity_and_hasher(capacity, DefaultBuildHasher::default()),
        }
    }

    /// Returns the number of values in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::set;
    ///
    /// assert_eq!(set![1, 1, 2].len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no values.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes every value, keeping the allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns an iterator over the values of the set in unspecified order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::set;
    ///
    /// let set = set![1, 2, 3];
    /// let sum: i32 = set.iter().sum();
    /// assert_eq!(sum, 6);
    /// ```
    #[inline]
    pub fn iter(&self) -> SetIterator<'_, V> {
        SetIterator {
            inner: self.inner.iter(),
        }
    }
}

impl<V: Hash + Eq> Set<V> {
    /// Creates a set from the given values, collapsing duplicates.
    ///
    /// # Arguments
    ///
    /// * `values` - The initial values; may be empty
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::Set;
    ///
    /// let set = Set::from_values(vec!["foo", "bar", "foo"]);
    /// assert_eq!(set.len(), 2);
    ///
    /// let empty: Set<u8> = Set::from_values([]);
    /// assert!(empty.is_empty());
    /// ```
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut set = Self::new();
        set.insert_all(values);
        set
    }

    /// Creates a set containing a single value.
    #[inline]
    #[must_use]
    pub fn singleton(value: V) -> Self {
        let mut set = Self::with_capacity(1);
        set.insert(value);
        set
    }

    /// Returns `true` if the set contains the specified value.
    ///
    /// The value may be any borrowed form of the set's value type,
    /// but `Hash` and `Eq` on the borrowed form must match those for
    /// the value type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::Set;
    ///
    /// let set = Set::from_values(["hello".to_string()]);
    ///
    /// // Can use &str to look up String values
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(value)
    }

    /// Returns `true` if every given value is a member.
    ///
    /// An empty argument list is vacuously contained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::Set;
    ///
    /// let set = Set::from_values(["foo".to_string(), "bar".to_string()]);
    ///
    /// assert!(set.contains_all(["foo", "bar"]));
    /// assert!(!set.contains_all(["foo", "bar", "baz"]));
    /// assert!(set.contains_all(std::iter::empty::<&str>()));
    /// ```
    #[must_use]
    pub fn contains_all<'a, Q, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a Q>,
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        values.into_iter().all(|value| self.inner.contains(value))
    }

    /// Returns `true` if at least one given value is a member.
    ///
    /// Returns `false` for an empty argument list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::set;
    ///
    /// let set = set![1, 2];
    ///
    /// assert!(set.contains_any(&[0, 2]));
    /// assert!(!set.contains_any(&[3, 4]));
    /// assert!(!set.contains_any(&[] as &[i32]));
    /// ```
    #[must_use]
    pub fn contains_any<'a, Q, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a Q>,
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        values.into_iter().any(|value| self.inner.contains(value))
    }

    /// Adds a value to the set.
    ///
    /// Inserting a value that is already present leaves the set unchanged.
    ///
    /// # Returns
    ///
    /// `true` if the value was not present, `false` otherwise. Callers that
    /// only care about the resulting membership may ignore it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    pub fn insert(&mut self, value: V) -> bool {
        self.inner.insert(value)
    }

    /// Adds every given value to the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::set;
    ///
    /// let mut set = set![1];
    /// set.insert_all([1, 2, 3]);
    /// assert_eq!(set, set![1, 2, 3]);
    /// ```
    pub fn insert_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = V>,
    {
        self.inner.extend(values);
    }

    /// Removes a value from the set.
    ///
    /// Removing an absent value is not an error; the set is left unchanged.
    ///
    /// # Returns
    ///
    /// `true` if the value was present and removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::set;
    ///
    /// let mut set = set![1, 2];
    /// assert!(set.delete(&1));
    /// assert!(!set.delete(&1));
    /// assert_eq!(set, set![2]);
    /// ```
    #[inline]
    pub fn delete<Q>(&mut self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.swap_remove(value)
    }

    /// Removes every given value that is present; absent values are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::set;
    ///
    /// let mut set = set![1, 2, 3];
    /// set.delete_all(&[1, 2, 9]);
    /// assert_eq!(set, set![3]);
    /// ```
    pub fn delete_all<'a, Q, I>(&mut self, values: I)
    where
        I: IntoIterator<Item = &'a Q>,
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        for value in values {
            self.inner.swap_remove(value);
        }
    }

    /// Returns `true` if every member of `other` is also a member of `self`.
    ///
    /// `a.is_superset(&b)` asks whether `b` is contained in `a`.
    ///
    /// # Arguments
    ///
    /// * `other` - The set whose members are looked up in `self`
    ///
    /// # Complexity
    ///
    /// O(m) where m = `other.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::set;
    ///
    /// let set_a = set![1, 2, 3];
    /// let set_b = set![1, 2];
    ///
    /// assert!(set_a.is_superset(&set_b));
    /// assert!(!set_b.is_superset(&set_a));
    /// ```
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        if other.len() > self.len() {
            return false;
        }
        other.iter().all(|value| self.contains(value))
    }

    /// Returns `true` if every member of `self` is also a member of `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        other.is_superset(self)
    }

    /// Returns `true` if `self` and `other` have no members in common.
    ///
    /// # Complexity
    ///
    /// O(min(n, m))
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::set;
    ///
    /// assert!(set![1, 2].is_disjoint(&set![3, 4]));
    /// assert!(!set![1, 2].is_disjoint(&set![2, 3]));
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (smaller, larger) = smaller_first(self, other);
        !smaller.iter().any(|value| larger.contains(value))
    }

    /// Removes and returns an arbitrary member.
    ///
    /// Which member is returned is unspecified and must not be relied upon.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Returns
    ///
    /// `None` if the set was empty, in which case it stays empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::set;
    ///
    /// let mut set = set![1, 2];
    /// let popped = set.pop_any().unwrap();
    ///
    /// assert!(popped == 1 || popped == 2);
    /// assert!(!set.contains(&popped));
    /// assert_eq!(set.len(), 1);
    ///
    /// set.pop_any();
    /// assert_eq!(set.pop_any(), None);
    /// ```
    pub fn pop_any(&mut self) -> Option<V> {
        let popped = self.inner.pop();
        if popped.is_none() {
            trace_operation!(operation = "pop_any", "pop from empty set");
        }
        popped
    }
}

impl<V: Clone + Hash + Eq> Set<V> {
    /// Returns the union of two sets.
    ///
    /// The union contains every value present in `self`, in `other`, or in
    /// both. The result is a new set; neither operand is modified.
    ///
    /// # Arguments
    ///
    /// * `other` - The other set to union with
    ///
    /// # Complexity
    ///
    /// O(n + m) where n and m are the sizes of the two sets
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::set;
    ///
    /// let set_a = set![1, 2];
    /// let set_b = set![3, 4];
    ///
    /// assert_eq!(set_a.union(&set_b), set![1, 2, 3, 4]);
    /// assert_eq!(set_b.union(&set_a), set![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.inner.reserve(other.len());
        result.inner.extend(other.iter().cloned());

        trace_operation!(
            operation = "union",
            left = self.len(),
            right = other.len(),
            result = result.len()
        );
        result
    }

    /// Returns the intersection of two sets.
    ///
    /// The intersection contains only values present in both sets. The
    /// smaller operand is walked and each of its values is looked up in the
    /// larger one.
    ///
    /// # Arguments
    ///
    /// * `other` - The other set to intersect with
    ///
    /// # Complexity
    ///
    /// O(min(n, m))
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::set;
    ///
    /// let set_a = set![1, 2];
    /// let set_b = set![2, 4];
    ///
    /// assert_eq!(set_a.intersection(&set_b), set![2]);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let (smaller, larger) = smaller_first(self, other);

        let result: Self = smaller
            .iter()
            .filter(|value| larger.contains(*value))
            .cloned()
            .collect();

        trace_operation!(
            operation = "intersection",
            left = self.len(),
            right = other.len(),
            result = result.len()
        );
        result
    }

    /// Returns the values of `self` that are not in `other`.
    ///
    /// The operation is asymmetric: `a.difference(&b)` and
    /// `b.difference(&a)` generally differ.
    ///
    /// # Arguments
    ///
    /// * `other` - The set to subtract
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::set;
    ///
    /// let set_a = set![1, 2, 3];
    /// let set_b = set![1, 2, 4, 5];
    ///
    /// assert_eq!(set_a.difference(&set_b), set![3]);
    /// assert_eq!(set_b.difference(&set_a), set![4, 5]);
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let result: Self = self
            .iter()
            .filter(|value| !other.contains(*value))
            .cloned()
            .collect();

        trace_operation!(
            operation = "difference",
            left = self.len(),
            right = other.len(),
            result = result.len()
        );
        result
    }

    /// Returns the values that are in exactly one of the two sets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::set;
    ///
    /// assert_eq!(set![1, 2, 3].symmetric_difference(&set![2, 3, 4]), set![1, 4]);
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let result: Self = self
            .iter()
            .filter(|value| !other.contains(*value))
            .chain(other.iter().filter(|value| !self.contains(*value)))
            .cloned()
            .collect();

        trace_operation!(
            operation = "symmetric_difference",
            left = self.len(),
            right = other.len(),
            result = result.len()
        );
        result
    }

    /// Returns a snapshot of the members in unspecified order.
    ///
    /// Each call allocates a fresh `Vec`; later changes to the set do not
    /// affect a snapshot already taken. Two calls on an unmodified set may
    /// return the members in different orders.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::set;
    ///
    /// let mut set = set![3, 1, 2];
    /// let mut values = set.values();
    /// set.clear();
    ///
    /// values.sort_unstable();
    /// assert_eq!(values, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn values(&self) -> Vec<V> {
        self.inner.iter().cloned().collect()
    }
}

/// Orders two sets so that the one with fewer members comes first.
fn smaller_first<'a, V>(left: &'a Set<V>, right: &'a Set<V>) -> (&'a Set<V>, &'a Set<V>) {
    if left.len() <= right.len() {
        (left, right)
    } else {
        (right, left)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A borrowing iterator over the values of a [`Set`].
pub struct SetIterator<'a, V> {
    inner: index_set::Iter<'a, V>,
}

impl<'a, V> Iterator for SetIterator<'a, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for SetIterator<'_, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An owning iterator over the values of a [`Set`].
pub struct SetIntoIterator<V> {
    inner: index_set::IntoIter<V>,
}

impl<V> Iterator for SetIntoIterator<V> {
    type Item = V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for SetIntoIterator<V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<V> Default for Set<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Hash + Eq> FromIterator<V> for Set<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut set = Self::new();
        set.inner.extend(iter);
        set
    }
}

impl<V: Hash + Eq, const N: usize> From<[V; N]> for Set<V> {
    fn from(values: [V; N]) -> Self {
        Self::from_values(values)
    }
}

impl<V: Hash + Eq> From<Vec<V>> for Set<V> {
    fn from(values: Vec<V>) -> Self {
        Self::from_values(values)
    }
}

impl<V: Hash + Eq> Extend<V> for Set<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<'a, V: Clone + Hash + Eq + 'a> Extend<&'a V> for Set<V> {
    fn extend<I: IntoIterator<Item = &'a V>>(&mut self, iter: I) {
        self.inner.extend(iter.into_iter().cloned());
    }
}

impl<V> IntoIterator for Set<V> {
    type Item = V;
    type IntoIter = SetIntoIterator<V>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIterator {
            inner: self.inner.into_iter(),
        }
    }
}

impl<'a, V> IntoIterator for &'a Set<V> {
    type Item = &'a V;
    type IntoIter = SetIterator<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two sets are equal when they have the same size and `self` contains
/// every member of `other`. Insertion order plays no part.
impl<V: Hash + Eq> PartialEq for Set<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_superset(other)
    }
}

impl<V: Hash + Eq> Eq for Set<V> {}

impl<V: fmt::Debug> fmt::Debug for Set<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

/// Renders the members as `[a b c]` in unspecified order.
///
/// Intended for debugging output only; the rendering is not parseable.
impl<V: fmt::Display> fmt::Display for Set<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, " ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Operator Implementations
// =============================================================================

impl<V: Clone + Hash + Eq> BitOr<&Set<V>> for &Set<V> {
    type Output = Set<V>;

    /// Returns `self.union(other)`.
    fn bitor(self, other: &Set<V>) -> Set<V> {
        self.union(other)
    }
}

impl<V: Clone + Hash + Eq> BitAnd<&Set<V>> for &Set<V> {
    type Output = Set<V>;

    /// Returns `self.intersection(other)`.
    fn bitand(self, other: &Set<V>) -> Set<V> {
        self.intersection(other)
    }
}

impl<V: Clone + Hash + Eq> Sub<&Set<V>> for &Set<V> {
    type Output = Set<V>;

    /// Returns `self.difference(other)`.
    fn sub(self, other: &Set<V>) -> Set<V> {
        self.difference(other)
    }
}

impl<V: Clone + Hash + Eq> BitXor<&Set<V>> for &Set<V> {
    type Output = Set<V>;

    /// Returns `self.symmetric_difference(other)`.
    fn bitxor(self, other: &Set<V>) -> Set<V> {
        self.symmetric_difference(other)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<V: serde::Serialize> serde::Serialize for Set<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SetVisitor<V> {
    marker: std::marker::PhantomData<V>,
}

#[cfg(feature = "serde")]
impl<V> SetVisitor<V> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, V> serde::de::Visitor<'de> for SetVisitor<V>
where
    V: serde::Deserialize<'de> + Hash + Eq,
{
    type Value = Set<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Size hints come from untrusted input.
        let mut set = Set::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(value) = seq.next_element()? {
            set.insert(value);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, V> serde::Deserialize<'de> for Set<V>
where
    V: serde::Deserialize<'de> + Hash + Eq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
