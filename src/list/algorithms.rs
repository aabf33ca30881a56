use crate::list::List;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

/// Deep copy of a list.
///
/// The copy is built in a single pass over `self`, into a list that is not
/// observable until it is complete. If cloning an element panics, the
/// partially built nodes are released and nothing else is affected.
impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        let copy: Self = self.iter().cloned().collect();
        trace_event!(len = copy.len(), "deep copy complete");
        copy
    }

    /// Replace the contents of `self` with a deep copy of `source`.
    ///
    /// `self` is only modified once the copy is complete.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

/// Renders the list as `List(e0,e1,...)`, each element with its own
/// `Display`. An empty list renders as `List()`.
///
/// # Examples
///
/// ```
/// use tailed_list::List;
///
/// assert_eq!(List::<u8>::new().to_string(), "List()");
/// assert_eq!(List::from(["a", "b"]).to_string(), "List(a,b)");
/// ```
impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("List(")?;
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for elt in iter {
                write!(f, ",{}", elt)?;
            }
        }
        f.write_str(")")
    }
}

/// # Panics
///
/// Panics if the index is out of bounds. Use [`List::get`] for a fallible
/// access.
impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, at: usize) -> &T {
        match self.get(at) {
            Ok(elt) => elt,
            Err(err) => panic!("{}", err),
        }
    }
}

/// # Panics
///
/// Panics if the index is out of bounds. Use [`List::get_mut`] or
/// [`List::set`] for a fallible access.
impl<T> IndexMut<usize> for List<T> {
    fn index_mut(&mut self, at: usize) -> &mut T {
        match self.get_mut(at) {
            Ok(elt) => elt,
            Err(err) => panic!("{}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use expect_test::expect;
    use std::cell::Cell;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn list_display() {
        expect!["List()"].assert_eq(&List::<i32>::new().to_string());
        expect!["List(7)"].assert_eq(&List::from([7]).to_string());
        expect!["List(0,1,2)"].assert_eq(&List::from_iter(0..3).to_string());
        expect!["List(1.5,-2,x)"].assert_eq(&List::from(["1.5", "-2", "x"]).to_string());
        expect!["[0, 1, 2]"].assert_eq(&format!("{:?}", List::from_iter(0..3)));
    }

    #[test]
    fn list_clone_is_independent() {
        let mut a = List::from_iter(0..5);
        let mut b = a.clone();
        assert_eq!(a, b);

        b.set(0, 10).unwrap();
        b.remove(4).unwrap();
        b.insert(2, 20).unwrap();
        b.append(30);
        assert_eq!(a, List::from_iter(0..5));
        assert_eq!(b, List::from([10, 1, 20, 2, 3, 30]));

        a.prepend(-1);
        a.remove(3).unwrap();
        assert_eq!(a, List::from([-1, 0, 1, 3, 4]));
        assert_eq!(b, List::from([10, 1, 20, 2, 3, 30]));

        let empty = List::<i32>::new();
        let mut copy = empty.clone();
        assert!(copy.is_empty());
        copy.append(1);
        assert!(empty.is_empty());
    }

    #[test]
    fn list_clone_from() {
        let source = List::from([1, 2, 3]);
        let mut target = List::from([9, 9]);
        target.clone_from(&source);
        assert_eq!(target, source);
        assert_eq!(target.back(), Some(&3));
        target.append(4);
        assert_eq!(source.len(), 3);
    }

    #[test]
    fn list_clone_from_panicking_element() {
        #[derive(Debug, PartialEq)]
        struct Fragile<'a> {
            value: i32,
            clones_left: &'a Cell<usize>,
        }
        impl Clone for Fragile<'_> {
            fn clone(&self) -> Self {
                let left = self.clones_left.get();
                if left == 0 {
                    panic!("clone budget exhausted");
                }
                self.clones_left.set(left - 1);
                Self {
                    value: self.value,
                    clones_left: self.clones_left,
                }
            }
        }

        let budget = Cell::new(2);
        let source = List::from_iter((0..4).map(|value| Fragile {
            value,
            clones_left: &budget,
        }));
        let mut target = List::from([Fragile {
            value: 42,
            clones_left: &budget,
        }]);
        let result = catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
        assert!(result.is_err());
        assert_eq!(target.len(), 1);
        assert_eq!(target.front().map(|f| f.value), Some(42));
        assert_eq!(source.len(), 4);
    }

    #[test]
    fn list_index() {
        let mut list = List::from([1, 2, 3]);
        assert_eq!(list[0], 1);
        list[2] = 30;
        assert_eq!(list[2], 30);
        assert_eq!(list.back(), Some(&30));

        let result = catch_unwind(|| List::from([1])[1]);
        assert!(result.is_err());
    }

    #[test]
    fn list_cmp_and_hash() {
        fn hash_of<T: Hash>(t: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            t.hash(&mut hasher);
            hasher.finish()
        }
        let a = List::from([1, 2, 3]);
        let b = List::from([1, 2, 4]);
        let c = List::from([1, 2]);
        assert!(a < b);
        assert!(c < a);
        assert_ne!(a, c);
        assert_eq!(hash_of(&a), hash_of(&a.clone()));
        assert_ne!(hash_of(&a), hash_of(&b));
    }
}
