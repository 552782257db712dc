use strand_core::Value;

use crate::{ChainError, Link, build};

/// An ordered sequence of links evaluated as one composite computation.
///
/// A chain reads left to right as a nested call: each callable takes its
/// arguments from the links that follow it. Builder methods never modify the
/// chain they are called on. They return a new chain, so a chain can be
/// shared, extended in several directions, and built any number of times.
///
/// # Example
///
/// ```
/// use strand_chain::{Chain, Link};
/// use strand_core::{Value, func};
///
/// let plus = Link::callable(func(|a: i32, b: i32| a + b));
/// let times_two = Link::callable(func(|a: i32| a * 2));
///
/// // plus(times_two(2), 3)
/// let chain = Chain::new().compose([plus, times_two, Link::value(2), Link::value(3)]);
///
/// assert_eq!(chain.build().unwrap(), [Value::from(7)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chain {
    links: Vec<Link>,
}

impl Chain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a chain with `links` appended, in the given order.
    ///
    /// `[f, g].compose([h, k])` is `[f, g, h, k]`, or `f(g(h(k)))`.
    #[must_use]
    pub fn compose<I>(&self, links: I) -> Self
    where
        I: IntoIterator<Item = Link>,
    {
        let mut composed = self.links.clone();
        composed.extend(links);
        Self { links: composed }
    }

    /// Returns a chain with `links` prepended in reverse order.
    ///
    /// `[f, g].then([h, k])` is `[k, h, f, g]`, or `k(h(f(g)))`: the links
    /// run after the current chain, in the order given.
    #[must_use]
    pub fn then<I>(&self, links: I) -> Self
    where
        I: IntoIterator<Item = Link>,
    {
        let mut prepended: Vec<Link> = links.into_iter().collect();
        prepended.reverse();
        prepended.extend(self.links.iter().cloned());
        Self { links: prepended }
    }

    /// Returns a chain with the links of each chain in `chains` appended.
    ///
    /// `[f, g].merge_compose([[h, k], [l, m]])` is `[f, g, h, k, l, m]`.
    #[must_use]
    pub fn merge_compose<'a, I>(&self, chains: I) -> Self
    where
        I: IntoIterator<Item = &'a Chain>,
    {
        chains.into_iter().fold(self.clone(), |merged, chain| {
            merged.compose(chain.links.iter().cloned())
        })
    }

    /// Returns a chain with the links of each chain in `chains` prepended.
    ///
    /// Each chain is applied with [`then`](Chain::then) in the order given, so
    /// `[f, g].merge_then([[h, k], [l, m]])` is `[m, l, k, h, f, g]`.
    #[must_use]
    pub fn merge_then<'a, I>(&self, chains: I) -> Self
    where
        I: IntoIterator<Item = &'a Chain>,
    {
        chains.into_iter().fold(self.clone(), |merged, chain| {
            merged.then(chain.links.iter().cloned())
        })
    }

    /// Evaluates the chain and returns the resulting values, left to right.
    ///
    /// See the [`build`](crate::build) module for how arguments are bound.
    ///
    /// # Errors
    ///
    /// - Returns [`ChainError::Incomplete`] if a callable needs more values
    ///   than remain for it.
    /// - Returns [`ChainError::Call`] if a callable rejects its arguments.
    pub fn build(&self) -> Result<Vec<Value>, ChainError> {
        build::evaluate(&self.links)
    }

    /// Returns the links in order.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl FromIterator<Link> for Chain {
    fn from_iter<I: IntoIterator<Item = Link>>(links: I) -> Self {
        Self {
            links: links.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: impl IntoIterator<Item = i32>) -> Vec<Link> {
        values.into_iter().map(Link::value).collect()
    }

    #[test]
    fn new_chain_is_empty() {
        let chain = Chain::new();

        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
        assert_eq!(chain, Chain::default());
    }

    #[test]
    fn compose_keeps_given_order() {
        let chain = Chain::new().compose(ints([1, 2]));

        assert_eq!(chain.links(), ints([1, 2]));
    }

    #[test]
    fn compose_twice_equals_compose_once() {
        let twice = Chain::new().compose(ints([1, 2])).compose(ints([3, 4]));
        let once = Chain::new().compose(ints([1, 2, 3, 4]));

        assert_eq!(twice, once);
    }

    #[test]
    fn then_reverses_given_order() {
        let chain = Chain::new().then(ints([1, 2]));

        assert_eq!(chain.links(), ints([2, 1]));
    }

    #[test]
    fn then_prepends_reversed_composition() {
        let base = Chain::new().compose(ints([0]));

        let then = base.then(ints([1, 2]));
        let expected = Chain::new().compose(ints([2, 1])).merge_compose([&base]);

        assert_eq!(then, expected);
    }

    #[test]
    fn merge_compose_appends_chains_in_order() {
        let first = Chain::new().compose(ints([1, 2]));
        let second = Chain::new().compose(ints([3, 4]));

        let chain = Chain::new()
            .compose(ints([0]))
            .merge_compose([&first, &second]);

        assert_eq!(chain.links(), ints([0, 1, 2, 3, 4]));
    }

    #[test]
    fn merge_then_prepends_chains_reversed() {
        let first = Chain::new().compose(ints([1, 2]));
        let second = Chain::new().compose(ints([3, 4]));

        let chain = Chain::new()
            .compose(ints([0]))
            .merge_then([&first, &second]);

        assert_eq!(chain.links(), ints([4, 3, 2, 1, 0]));
    }

    #[test]
    fn operations_leave_receiver_and_arguments_unchanged() {
        let base = Chain::new().compose(ints([1, 2]));
        let other = Chain::new().compose(ints([3]));
        let base_before = base.clone();
        let other_before = other.clone();

        let _ = base.compose(ints([9]));
        let _ = base.then(ints([9]));
        let _ = base.merge_compose([&other]);
        let _ = base.merge_then([&other]);

        assert_eq!(base, base_before);
        assert_eq!(other, other_before);
    }

    #[test]
    fn derived_chains_do_not_alias() {
        let base = Chain::new().compose(ints([1]));
        let derived = base.compose(ints([2]));

        assert_ne!(base.links().as_ptr(), derived.links().as_ptr());
        assert_eq!(base.links(), ints([1]));
        assert_eq!(derived.links(), ints([1, 2]));
    }

    #[test]
    fn empty_arguments_return_equal_copies() {
        let base = Chain::new().compose(ints([1, 2]));

        assert_eq!(base.compose([]), base);
        assert_eq!(base.then([]), base);
        assert_eq!(base.merge_compose([]), base);
        assert_eq!(base.merge_then([]), base);

        let empty = Chain::new();
        assert!(empty.compose([]).is_empty());
        assert!(empty.merge_compose([&Chain::new()]).is_empty());
        assert!(empty.merge_then([&Chain::new()]).is_empty());
    }

    #[test]
    fn nil_round_trips() {
        let composed = Chain::new().compose([Link::nil()]);
        let then = Chain::new().then([Link::nil()]);

        assert_eq!(composed.links(), [Link::nil()]);
        assert_eq!(then.links(), [Link::nil()]);
        assert!(composed.build().unwrap()[0].is_nil());
    }

    #[test]
    fn merge_compose_onto_new_is_content_equal() {
        let chain = Chain::new().compose(ints([5, 6, 7]));
        let merged = Chain::new().merge_compose([&chain]);

        assert_eq!(merged, chain);
        assert_ne!(merged.links().as_ptr(), chain.links().as_ptr());
    }

    #[test]
    fn collects_from_links() {
        let chain: Chain = ints([1, 2, 3]).into_iter().collect();

        assert_eq!(chain, Chain::new().compose(ints([1, 2, 3])));
    }
}
