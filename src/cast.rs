//! Checked conversions from a base trait object to a concrete type.
//!
//! A "base" here is any trait with [`AsAny`] as a supertrait. Owning
//! conversions only hand over the allocation once the runtime type has been
//! confirmed, so a mismatch always leaves the original owner intact.
//!
//! ```
//! use sovran_drawable::cast::{self, AsAny};
//!
//! trait Shape: AsAny {
//!     fn area(&self) -> f64;
//! }
//!
//! struct Square(f64);
//! struct Circle(f64);
//!
//! impl Shape for Square {
//!     fn area(&self) -> f64 { self.0 * self.0 }
//! }
//!
//! impl Shape for Circle {
//!     fn area(&self) -> f64 { 3.0 * self.0 * self.0 }
//! }
//!
//! let mut base: Option<Box<dyn Shape>> = Some(Box::new(Square(2.0)));
//!
//! // Wrong type: nothing moves
//! assert!(cast::release_as::<Circle, _>(&mut base).is_none());
//! assert!(base.is_some());
//!
//! // Right type: ownership moves to the derived pointer
//! let square = cast::release_as::<Square, _>(&mut base).unwrap();
//! assert!(base.is_none());
//! assert_eq!(square.area(), 4.0);
//! ```

use std::any::{type_name, Any};

/// Upcast to `Any`, usable as a supertrait of object-safe base traits.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Borrows `base` as a `D` if that is its runtime type.
pub fn downcast_ref<D, B>(base: &B) -> Option<&D>
where
    D: Any,
    B: AsAny + ?Sized,
{
    base.as_any().downcast_ref::<D>()
}

/// Mutably borrows `base` as a `D` if that is its runtime type.
pub fn downcast_mut<D, B>(base: &mut B) -> Option<&mut D>
where
    D: Any,
    B: AsAny + ?Sized,
{
    base.as_any_mut().downcast_mut::<D>()
}

/// Converts an owning base pointer into an owning `D` pointer.
///
/// On a type mismatch the original box is returned unchanged in `Err`.
pub fn downcast_box<D, B>(base: Box<B>) -> Result<Box<D>, Box<B>>
where
    D: Any,
    B: AsAny + ?Sized,
{
    if !(*base).as_any().is::<D>() {
        log::trace!("downcast to {} rejected", type_name::<D>());
        return Err(base);
    }
    match base.into_any().downcast::<D>() {
        Ok(derived) => Ok(derived),
        Err(_) => unreachable!("runtime type was checked before releasing"),
    }
}

/// Moves the value out of `slot` as a `Box<D>` if its runtime type is `D`.
///
/// When the type does not match, or the slot is already empty, `slot` is left
/// exactly as it was and `None` is returned.
pub fn release_as<D, B>(slot: &mut Option<Box<B>>) -> Option<Box<D>>
where
    D: Any,
    B: AsAny + ?Sized,
{
    let base = slot.take()?;
    match downcast_box::<D, B>(base) {
        Ok(derived) => Some(derived),
        Err(base) => {
            *slot = Some(base);
            None
        }
    }
}
