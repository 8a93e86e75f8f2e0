use toolshop_types::{Entity, fold};

/// Lazy view over the records matching a search term.
///
/// Clone it before iterating to walk the same matches more than once.
#[derive(Debug, Clone)]
pub struct Search<'a, T> {
    records: std::slice::Iter<'a, T>,
    needle: String,
}

/// Case-insensitive containment filter over `records`. An empty term matches everything.
pub fn search<'a, T: Entity>(records: &'a [T], term: &str) -> Search<'a, T> {
    Search {
        records: records.iter(),
        needle: fold(term),
    }
}

impl<'a, T: Entity> Iterator for Search<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let needle = &self.needle;
        self.records.by_ref().find(|record| record.matches(needle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.records.size_hint().1)
    }
}
