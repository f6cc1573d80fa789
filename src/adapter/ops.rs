//! Callable traits used by the lazy views.
//!
//! Views store their callables by value and invoke them through `&self`, so
//! closures must be `Fn`. Each trait has a blanket implementation for
//! closures and a handful of named implementations that the value-based
//! adapters (`select`, `remove`, `replace`, `unique`, ...) are built from.

use core::borrow::Borrow;

/// Unary test over items.
pub trait Predicate<T> {
    /// Returns `true` if `item` passes.
    fn test(&self, item: T) -> bool;
}

impl<T, F: Fn(T) -> bool> Predicate<T> for F {
    #[inline]
    fn test(&self, item: T) -> bool {
        self(item)
    }
}

/// Binary relation between two items.
pub trait Relation<T> {
    /// Returns `true` if `a` and `b` are related.
    fn holds(&self, a: &T, b: &T) -> bool;
}

impl<T, F: Fn(&T, &T) -> bool> Relation<T> for F {
    #[inline]
    fn holds(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Element-wise mapping.
pub trait Operation<T> {
    /// Mapped item type.
    type Output;

    /// Maps one item.
    fn apply(&self, item: T) -> Self::Output;
}

impl<T, U, F: Fn(T) -> U> Operation<T> for F {
    type Output = U;

    #[inline]
    fn apply(&self, item: T) -> U {
        self(item)
    }
}

/// Passes items equal to the held value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EqualTo<V>(pub V);

impl<T: Borrow<V>, V: PartialEq> Predicate<T> for EqualTo<V> {
    #[inline]
    fn test(&self, item: T) -> bool {
        *item.borrow() == self.0
    }
}

/// Passes items different from the held value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotEqualTo<V>(pub V);

impl<T: Borrow<V>, V: PartialEq> Predicate<T> for NotEqualTo<V> {
    #[inline]
    fn test(&self, item: T) -> bool {
        *item.borrow() != self.0
    }
}

/// Negates another predicate.
#[derive(Debug, Clone, Copy)]
pub struct Not<P>(pub P);

impl<T, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn test(&self, item: T) -> bool {
        !self.0.test(item)
    }
}

/// Equality relation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Equal;

impl<T: PartialEq> Relation<T> for Equal {
    #[inline]
    fn holds(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// Maps `old` to `new` and every other item to an owned copy of itself.
#[derive(Debug, Clone, Copy)]
pub struct ReplaceValue<V> {
    /// Value to look for.
    pub old: V,
    /// Replacement for every match.
    pub new: V,
}

impl<T: Borrow<V>, V: PartialEq + Clone> Operation<T> for ReplaceValue<V> {
    type Output = V;

    #[inline]
    fn apply(&self, item: T) -> V {
        let value = item.borrow();
        if *value == self.old {
            self.new.clone()
        } else {
            value.clone()
        }
    }
}

/// Maps items passing `pred` to `new` and every other item to an owned
/// copy of itself.
#[derive(Debug, Clone, Copy)]
pub struct ReplaceIf<P, V> {
    /// Selects the items to replace.
    pub pred: P,
    /// Replacement for every selected item.
    pub new: V,
}

impl<T, V, P> Operation<T> for ReplaceIf<P, V>
where
    T: Borrow<V>,
    V: Clone,
    P: Fn(&V) -> bool,
{
    type Output = V;

    #[inline]
    fn apply(&self, item: T) -> V {
        let value = item.borrow();
        if (self.pred)(value) {
            self.new.clone()
        } else {
            value.clone()
        }
    }
}

/// Clones borrowed items.
#[derive(Debug, Clone, Copy, Default)]
pub struct CloneItem;

impl<'a, T: Clone + 'a> Operation<&'a T> for CloneItem {
    type Output = T;

    #[inline]
    fn apply(&self, item: &'a T) -> T {
        item.clone()
    }
}
