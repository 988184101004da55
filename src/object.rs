use crate::cast;
use crate::draw::Draw;
use crate::error::{DrawError, Result};
use std::fmt;
use std::io::Write;

/// The hidden interface every wrapped value is adapted to
trait Concept: cast::AsAny {
    fn clone_box(&self) -> Box<dyn Concept>;
    fn draw_at(&self, out: &mut dyn Write, position: usize) -> Result<()>;
    fn type_name(&self) -> &'static str;
}

/// Adapts a concrete drawable value to `Concept`
struct Model<T> {
    data: T,
}

impl<T> Concept for Model<T>
where
    T: Draw + Clone + 'static,
{
    fn clone_box(&self) -> Box<dyn Concept> {
        log::trace!("copy: model ({})", std::any::type_name::<T>());
        Box::new(Model {
            data: self.data.clone(),
        })
    }

    fn draw_at(&self, out: &mut dyn Write, position: usize) -> Result<()> {
        self.data.draw(out, position)
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// A value-semantic wrapper around any drawable, cloneable value.
///
/// Values of unrelated types can live side by side in one collection of
/// `Object`s without sharing a trait object type of their own. Cloning an
/// `Object` deep-copies the wrapped value through its own `Clone` impl.
///
/// An `Object` always holds a value unless it was moved out with
/// [`Object::take`] or [`Object::take_from`]. Drawing an empty object returns
/// [`DrawError::Empty`].
///
/// # Examples
///
/// ```
/// use sovran_drawable::{render_to_string, Object};
///
/// let mut objects = vec![Object::new(1), Object::new("two".to_string())];
/// objects.push(objects[0].clone());
///
/// let mut text = String::new();
/// for object in &objects {
///     text += &render_to_string(object, 0).unwrap();
/// }
/// assert_eq!(text, "1\ntwo\n1\n");
/// ```
pub struct Object {
    inner: Option<Box<dyn Concept>>,
}

impl Object {
    /// Wraps `value`, taking ownership of it.
    pub fn new<T>(value: T) -> Self
    where
        T: Draw + Clone + 'static,
    {
        let inner: Box<dyn Concept> = Box::new(Model { data: value });
        log::trace!("ctor: object ({:p})", inner);
        Self { inner: Some(inner) }
    }

    /// Moves `source`'s value into `self`, dropping whatever `self` held.
    ///
    /// `source` is left empty. It can be dropped or assigned again, but
    /// drawing it fails until then.
    pub fn take_from(&mut self, source: &mut Object) {
        log::trace!("move: object ({:p})", source.addr());
        self.inner = source.inner.take();
    }

    /// Moves the value out into a new `Object`, leaving `self` empty.
    pub fn take(&mut self) -> Object {
        let mut moved = Object { inner: None };
        moved.take_from(self);
        moved
    }

    /// Returns true if the value has been moved out.
    pub fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    /// The type name of the wrapped value, if any.
    pub fn type_name(&self) -> Option<&'static str> {
        self.inner.as_deref().map(|concept| concept.type_name())
    }

    /// Returns true if the wrapped value is a `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }

    /// Borrows the wrapped value if it is a `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        let concept = self.inner.as_deref()?;
        cast::downcast_ref::<Model<T>, dyn Concept>(concept).map(|model| &model.data)
    }

    /// Mutably borrows the wrapped value if it is a `T`.
    pub fn downcast_mut<T: 'static>(&mut self) -> Option<&mut T> {
        let concept = self.inner.as_deref_mut()?;
        cast::downcast_mut::<Model<T>, dyn Concept>(concept).map(|model| &mut model.data)
    }

    /// Unwraps the value if it is a `T`.
    ///
    /// # Errors
    ///
    /// Gives the object back unchanged if it is empty or holds another type.
    pub fn into_inner<T: 'static>(mut self) -> std::result::Result<T, Object> {
        let Some(concept) = self.inner.take() else {
            return Err(self);
        };
        match cast::downcast_box::<Model<T>, dyn Concept>(concept) {
            Ok(model) => Ok(model.data),
            Err(concept) => Err(Object {
                inner: Some(concept),
            }),
        }
    }

    fn addr(&self) -> *const () {
        match self.inner.as_deref() {
            Some(concept) => concept as *const dyn Concept as *const (),
            None => std::ptr::null(),
        }
    }
}

impl Clone for Object {
    fn clone(&self) -> Self {
        log::trace!("copy: object ({:p})", self.addr());
        Self {
            inner: self.inner.as_deref().map(|concept| concept.clone_box()),
        }
    }

    /// Copy-assigns from `source`.
    ///
    /// The clone is made before `self` is touched, so if cloning panics `self`
    /// still holds its previous value.
    fn clone_from(&mut self, source: &Self) {
        log::trace!("asgn: object ({:p})", source.addr());
        let mut copy = source.clone();
        self.take_from(&mut copy);
    }
}

impl Draw for Object {
    fn draw(&self, out: &mut dyn Write, position: usize) -> Result<()> {
        match self.inner.as_deref() {
            Some(concept) => concept.draw_at(out, position),
            None => Err(DrawError::Empty),
        }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("type", &self.type_name())
            .finish()
    }
}
