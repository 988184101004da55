use crate::draw::Draw;
use crate::error::Result;
use crate::object::Object;
use std::io::Write;

/// An ordered sequence of [`Object`]s.
///
/// A `Document` draws as `<document>` and `</document>` markers at its own
/// indent, with each element two spaces deeper. It is itself drawable and
/// cloneable, so documents can be nested inside documents.
///
/// # Examples
///
/// ```
/// use sovran_drawable::{render_to_string, Document};
///
/// let mut inner = Document::new();
/// inner.push("nested");
///
/// let mut document = Document::new();
/// document.push(1);
/// document.push(inner);
///
/// assert_eq!(
///     render_to_string(&document, 0).unwrap(),
///     "<document>\n  1\n  <document>\n    nested\n  </document>\n</document>\n"
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct Document {
    items: Vec<Object>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Wraps `value` in an [`Object`] and appends it.
    pub fn push<T>(&mut self, value: T)
    where
        T: Draw + Clone + 'static,
    {
        self.items.push(Object::new(value));
    }

    /// Appends an already wrapped object.
    pub fn push_object(&mut self, object: Object) {
        self.items.push(object);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Object> {
        self.items.iter()
    }

    /// Reverses the order of the elements in place.
    pub fn reverse(&mut self) {
        self.items.reverse();
    }
}

impl Draw for Document {
    fn draw(&self, out: &mut dyn Write, position: usize) -> Result<()> {
        writeln!(out, "{:position$}<document>", "")?;
        for item in &self.items {
            item.draw(out, position + 2)?;
        }
        writeln!(out, "{:position$}</document>", "")?;
        Ok(())
    }
}

impl FromIterator<Object> for Document {
    fn from_iter<I: IntoIterator<Item = Object>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<Object> for Document {
    fn extend<I: IntoIterator<Item = Object>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Object;
    type IntoIter = std::slice::Iter<'a, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
