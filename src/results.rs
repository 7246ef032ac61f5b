//! Diagnostics and the `ReadResult` combinator.
//!
//! Every reader handler returns a `ReadResult`: the nodes it produced, an
//! *extras* side channel for nodes that must float up to the nearest block
//! boundary (images inside `w:pict`, for instance), and the warnings it
//! emitted along the way. Concatenation and the mapping combinators carry
//! all three through the tree walk without a shared mutable collector, and
//! preserve encounter order throughout.

use crate::documents::Node;

/// Severity of a diagnostic message.
///
/// The reader never fails on malformed-but-parseable input, so warnings
/// are the only severity it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
}

/// A diagnostic emitted while reading. The text is part of the output
/// contract: downstream tooling surfaces it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub severity: Severity,
    pub text: String,
}

/// Builds a warning message.
pub fn warning(text: impl Into<String>) -> Message {
    Message {
        severity: Severity::Warning,
        text: text.into(),
    }
}

/// The value produced by reading one element (or a sequence of siblings).
///
/// `elements` preserves source order within a parent. `extra` floats
/// upward until a block-level reader calls [`ReadResult::append_extra`],
/// which reattaches the extras after the elements. Messages accumulate
/// without deduplication, in emission order.
///
/// The element type is generic so intermediate results (a resolved style
/// reference, say) can ride the same combinator as document nodes; extras
/// are always document nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadResult<T = Node> {
    pub elements: Vec<T>,
    pub extra: Vec<Node>,
    pub messages: Vec<Message>,
}

impl<T> ReadResult<T> {
    /// A result carrying a single element and nothing else.
    pub fn success(element: T) -> Self {
        Self::success_many(vec![element])
    }

    /// A result carrying the given elements and nothing else.
    pub fn success_many(elements: Vec<T>) -> Self {
        ReadResult {
            elements,
            extra: Vec::new(),
            messages: Vec::new(),
        }
    }

    /// A result with no elements, extras, or messages.
    pub fn empty() -> Self {
        Self::success_many(Vec::new())
    }

    /// A result with no elements and a single message.
    pub fn empty_with_message(message: Message) -> Self {
        Self::with_messages(Vec::new(), vec![message])
    }

    /// A result with the given elements and messages.
    pub fn with_messages(elements: Vec<T>, messages: Vec<Message>) -> Self {
        ReadResult {
            elements,
            extra: Vec::new(),
            messages,
        }
    }

    /// Concatenates results component-wise, preserving order.
    pub fn concat(results: impl IntoIterator<Item = ReadResult<T>>) -> Self {
        let mut combined = Self::empty();
        for result in results {
            combined.elements.extend(result.elements);
            combined.extra.extend(result.extra);
            combined.messages.extend(result.messages);
        }
        combined
    }

    /// Replaces the element list with a single element computed from it.
    /// Extras and messages pass through unchanged.
    pub fn map<U>(self, f: impl FnOnce(Vec<T>) -> U) -> ReadResult<U> {
        ReadResult {
            elements: vec![f(self.elements)],
            extra: self.extra,
            messages: self.messages,
        }
    }

    /// Replaces the element list wholesale. Extras and messages pass
    /// through unchanged.
    pub fn map_elements<U>(self, f: impl FnOnce(Vec<T>) -> Vec<U>) -> ReadResult<U> {
        ReadResult {
            elements: f(self.elements),
            extra: self.extra,
            messages: self.messages,
        }
    }

    /// Feeds the element list into `f` and merges the new result's extras
    /// and messages after this result's own.
    pub fn flat_map<U>(self, f: impl FnOnce(Vec<T>) -> ReadResult<U>) -> ReadResult<U> {
        let result = f(self.elements);
        let mut extra = self.extra;
        extra.extend(result.extra);
        let mut messages = self.messages;
        messages.extend(result.messages);
        ReadResult {
            elements: result.elements,
            extra,
            messages,
        }
    }

    /// Combines two results into one element, concatenating extras and
    /// messages (first's before second's).
    pub fn map_results<A, B>(
        first: ReadResult<A>,
        second: ReadResult<B>,
        f: impl FnOnce(Vec<A>, Vec<B>) -> T,
    ) -> Self {
        let mut extra = first.extra;
        extra.extend(second.extra);
        let mut messages = first.messages;
        messages.extend(second.messages);
        ReadResult {
            elements: vec![f(first.elements, second.elements)],
            extra,
            messages,
        }
    }
}

impl ReadResult<Node> {
    /// Demotes the current elements into extras (after any existing
    /// extras), leaving the element list empty.
    pub fn to_extra(self) -> Self {
        let mut extra = self.extra;
        extra.extend(self.elements);
        ReadResult {
            elements: Vec::new(),
            extra,
            messages: self.messages,
        }
    }

    /// Reattaches floating extras after the elements. Called at block
    /// boundaries (paragraphs, the document root) so promoted nodes
    /// surface in order instead of being lost.
    pub fn append_extra(self) -> Self {
        let mut elements = self.elements;
        elements.extend(self.extra);
        ReadResult {
            elements,
            extra: Vec::new(),
            messages: self.messages,
        }
    }
}

impl<T> Default for ReadResult<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// A finished read: the produced value plus every message emitted while
/// producing it. This is what leaves the reader once extras have been
/// reattached and the transient combinator state is gone.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadOutcome<T> {
    pub value: T,
    pub messages: Vec<Message>,
}

impl<T> ReadOutcome<T> {
    /// Transforms the value, keeping the messages.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ReadOutcome<U> {
        ReadOutcome {
            value: f(self.value),
            messages: self.messages,
        }
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod tests;
