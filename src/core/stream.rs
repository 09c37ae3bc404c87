//! Lazy answer streams.
//!
//! A stream is pull-driven: nothing past the next element is computed
//! until a consumer asks for it. Suspensions mark the points where a
//! producer yields control; the combinators below thread them through
//! so that infinite streams stay consumable one element at a time.

use crate::core::error::Error;
use crate::core::goal::RawGoal;
use rand::Rng;
use std::collections::VecDeque;

/// Possibly infinite sequence of values.
///
/// The `Error` variant terminates a stream with a synchronously raised
/// error; combinators re-raise it instead of recovering.
pub enum Stream<T> {
    Empty,
    Pair(T, Box<Stream<T>>),
    Suspension(Box<dyn FnOnce() -> Stream<T>>),
    Error(Error),
}

impl<T> Stream<T> {
    /// Initialize an empty stream.
    pub fn empty() -> Self {
        Stream::Empty
    }

    /// Create a stream with one element.
    pub fn singleton(x: T) -> Self {
        Stream::cons(x, Stream::Empty)
    }

    /// Prepend an element to a stream.
    pub fn cons(a: T, d: Self) -> Self {
        Stream::Pair(a, Box::new(d))
    }

    /// Create a suspended (lazily evaluated) stream.
    pub fn suspension(sup: impl 'static + FnOnce() -> Stream<T>) -> Self {
        Stream::Suspension(Box::new(sup))
    }

    /// Create a stream that raises `e` on its first pull.
    pub fn raise(e: Error) -> Self {
        Stream::Error(e)
    }

    /// Create a stream with elements from an iterator.
    pub fn from_iter(mut iter: impl Iterator<Item = T>) -> Self {
        match iter.next() {
            None => Stream::Empty,
            Some(item) => Stream::cons(item, Stream::from_iter(iter)),
        }
    }

    /// Return `true` if the stream is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Stream::Empty)
    }

    /// Return the number of elements in an unsuspended stream, or
    /// `None` if the stream contains a suspension or an error.
    pub fn len(&self) -> Option<usize> {
        match self {
            Stream::Empty => Some(0),
            Stream::Pair(_, d) => d.len().map(|l| l + 1),
            Stream::Suspension(_) => None,
            Stream::Error(_) => None,
        }
    }

    /// Truncate a stream to at most `n` elements, resolving any
    /// suspensions along the way.
    pub fn take_inf(self, n: usize) -> Stream<T> {
        if n == 0 {
            return Stream::empty();
        }
        match self {
            Stream::Empty => Stream::empty(),
            Stream::Pair(a, d) => Stream::cons(a, d.take_inf(n - 1)),
            Stream::Suspension(sup) => sup().take_inf(n),
            Stream::Error(e) => Stream::Error(e),
        }
    }

    /// Resolve all suspensions in the stream.
    /// If the stream is infinite this function will not return.
    pub fn take_inf_all(self) -> Stream<T> {
        match self {
            Stream::Empty => Stream::empty(),
            Stream::Pair(a, d) => Stream::cons(a, d.take_inf_all()),
            Stream::Suspension(sup) => sup().take_inf_all(),
            Stream::Error(e) => Stream::Error(e),
        }
    }

    /// Force the whole stream into a `Vec`, or the error it raises.
    pub fn into_vec(self) -> Result<Vec<T>, Error> {
        let mut out = Vec::new();
        let mut s = self;
        loop {
            match s {
                Stream::Empty => return Ok(out),
                Stream::Pair(a, d) => {
                    out.push(a);
                    s = *d;
                }
                Stream::Suspension(sup) => s = sup(),
                Stream::Error(e) => return Err(e),
            }
        }
    }
}

impl<T: 'static> Stream<T> {
    /// Sequential concatenation: every element of `s` is yielded before
    /// any element of `t`, suspensions included.
    pub fn append_inf(s: Stream<T>, t: Stream<T>) -> Self {
        match s {
            Stream::Empty => t,
            Stream::Pair(a, d) => Stream::cons(a, Stream::append_inf(*d, t)),
            Stream::Suspension(sup) => Stream::suspension(move || Stream::append_inf(sup(), t)),
            Stream::Error(e) => Stream::Error(e),
        }
    }

    /// For each element of the stream, splice in the stream produced by
    /// applying `g` to it before advancing.
    pub fn append_map_inf(self, g: impl 'static + Clone + RawGoal<T>) -> Self {
        match self {
            Stream::Empty => Stream::Empty,
            Stream::Pair(a, d) => Stream::append_inf(g.apply(a), d.append_map_inf(g)),
            Stream::Suspension(sup) => Stream::suspension(move || sup().append_map_inf(g)),
            Stream::Error(e) => Stream::Error(e),
        }
    }

    /// Fair n-ary concatenation: sources take strict turns, one step
    /// each. An element at finite depth in any source is yielded after
    /// finitely many pulls no matter what the other sources do.
    pub fn interleave(mut sources: VecDeque<Stream<T>>) -> Self {
        loop {
            match sources.pop_front() {
                None => return Stream::Empty,
                Some(Stream::Empty) => continue,
                Some(Stream::Error(e)) => return Stream::Error(e),
                Some(Stream::Pair(a, d)) => {
                    sources.push_back(*d);
                    return Stream::cons(a, Stream::suspension(move || Stream::interleave(sources)));
                }
                Some(Stream::Suspension(sup)) => {
                    // forcing one step uses up this source's turn
                    return Stream::suspension(move || {
                        sources.push_back(sup());
                        Stream::interleave(sources)
                    });
                }
            }
        }
    }

    /// As [`Stream::interleave`], but each step advances a uniformly
    /// random non-exhausted source. No ordering guarantees.
    pub fn interleave_random(mut sources: Vec<Stream<T>>) -> Self {
        sources.retain(|s| !s.is_empty());
        if sources.is_empty() {
            return Stream::Empty;
        }
        let i = rand::thread_rng().gen_range(0..sources.len());
        match sources.swap_remove(i) {
            Stream::Empty => Stream::interleave_random(sources),
            Stream::Error(e) => Stream::Error(e),
            Stream::Pair(a, d) => {
                sources.push(*d);
                Stream::cons(
                    a,
                    Stream::suspension(move || Stream::interleave_random(sources)),
                )
            }
            Stream::Suspension(sup) => Stream::suspension(move || {
                sources.push(sup());
                Stream::interleave_random(sources)
            }),
        }
    }

    pub fn map<U: 'static>(self, f: impl 'static + Fn(T) -> U) -> Stream<U> {
        match self {
            Stream::Empty => Stream::empty(),
            Stream::Pair(a, d) => Stream::cons(f(a), d.map(f)),
            Stream::Suspension(sup) => Stream::suspension(|| sup().map(f)),
            Stream::Error(e) => Stream::Error(e),
        }
    }
}

impl<T: PartialEq> PartialEq for Stream<T> {
    fn eq(&self, other: &Self) -> bool {
        use Stream::*;
        match (self, other) {
            (Empty, Empty) => true,
            (Pair(a, x), Pair(b, y)) => a == b && x == y,
            (Error(a), Error(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Stream::Empty => write!(f, "()"),
            Stream::Suspension(_) => write!(f, "(...)"),
            Stream::Error(e) => write!(f, "(error {:?})", e),
            Stream::Pair(x, next) => {
                let mut next = next;
                write!(f, "({:?}", x)?;
                loop {
                    match &**next {
                        Stream::Empty => break,
                        Stream::Pair(x, n) => {
                            write!(f, " {:?}", x)?;
                            next = n;
                        }
                        Stream::Suspension(_) => {
                            write!(f, "...")?;
                            break;
                        }
                        Stream::Error(e) => {
                            write!(f, " error {:?}", e)?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
        }
    }
}

impl<T> std::iter::IntoIterator for Stream<T> {
    type Item = Result<T, Error>;
    type IntoIter = StreamIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        StreamIter(self)
    }
}

/// Iterator over a `Stream`. After yielding an `Err` the iterator ends.
pub struct StreamIter<T>(Stream<T>);

impl<T> Iterator for StreamIter<T> {
    type Item = Result<T, Error>;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match std::mem::replace(&mut self.0, Stream::Empty) {
                Stream::Empty => return None,
                Stream::Pair(a, d) => {
                    self.0 = *d;
                    return Some(Ok(a));
                }
                Stream::Suspension(sup) => self.0 = sup(),
                Stream::Error(e) => return Some(Err(e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countdown(n: usize) -> Stream<usize> {
        if n == 0 {
            Stream::Empty
        } else {
            Stream::cons(n, Stream::suspension(move || countdown(n - 1)))
        }
    }

    #[test]
    fn take_inf_resolves_suspensions() {
        assert_eq!(countdown(3).take_inf(2).into_vec().unwrap(), vec![3, 2]);
        assert_eq!(countdown(3).take_inf(9).into_vec().unwrap(), vec![3, 2, 1]);
    }

    #[test]
    fn append_inf_is_sequential() {
        let s = Stream::append_inf(countdown(2), countdown(3));
        assert_eq!(s.into_vec().unwrap(), vec![2, 1, 3, 2, 1]);
    }

    #[test]
    fn interleave_takes_strict_turns() {
        let sources = vec![countdown(3), countdown(2)].into_iter().collect();
        let merged = Stream::interleave(sources);
        assert_eq!(merged.into_vec().unwrap(), vec![3, 2, 2, 1, 1]);
    }

    #[test]
    fn interleave_survives_an_unproductive_source() {
        fn stuck(rounds: usize) -> Stream<usize> {
            Stream::suspension(move || stuck(rounds + 1))
        }
        let sources = vec![stuck(0), countdown(2)].into_iter().collect();
        let merged = Stream::interleave(sources);
        assert_eq!(merged.take_inf(2).into_vec().unwrap(), vec![2, 1]);
    }

    #[test]
    fn errors_cut_the_stream_short() {
        let s = Stream::cons(1, Stream::raise(Error::instantiation("t")));
        let mut iter = s.into_iter();
        assert_eq!(iter.next(), Some(Ok(1)));
        assert_eq!(iter.next(), Some(Err(Error::instantiation("t"))));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn into_vec_reports_errors() {
        let s = Stream::cons(1, Stream::raise(Error::instantiation("t")));
        assert_eq!(s.into_vec(), Err(Error::instantiation("t")));
    }

    #[test]
    fn interleave_random_yields_everything() {
        let sources = vec![countdown(3), countdown(2), Stream::Empty];
        let mut all = Stream::interleave_random(sources).into_vec().unwrap();
        all.sort_unstable();
        assert_eq!(all, vec![1, 1, 2, 2, 3]);
    }
}
