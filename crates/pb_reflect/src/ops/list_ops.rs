use crate::Reflect;

/// An ordered sequence.
pub trait List: Reflect {
    /// Returns the item at `index`.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the number of items.
    fn len(&self) -> usize;
}

impl dyn List {
    /// Iterates the items in order.
    #[inline]
    pub fn iter(&self) -> ListIter<'_> {
        ListIter::new(self)
    }
}

/// Iterator over the items of a [`List`].
pub struct ListIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> ListIter<'a> {
    #[inline]
    pub fn new(list: &'a dyn List) -> Self {
        Self { list, index: 0 }
    }
}

impl<'a> Iterator for ListIter<'a> {
    type Item = &'a dyn Reflect;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.list.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len().saturating_sub(self.index);
        (len, Some(len))
    }
}

impl ExactSizeIterator for ListIter<'_> {}
