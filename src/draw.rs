use crate::error::Result;
use std::fmt::Display;
use std::io::Write;

/// Something that can draw itself as indented text.
///
/// `position` is the number of spaces to indent by. Implementations write one
/// or more complete lines to `out`.
///
/// # Examples
///
/// ```
/// use sovran_drawable::{draw_display, render_to_string, Draw, DrawError};
/// use std::io::Write;
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Draw for Point {
///     fn draw(&self, out: &mut dyn Write, position: usize) -> Result<(), DrawError> {
///         draw_display(&format!("({}, {})", self.x, self.y), out, position)
///     }
/// }
///
/// let text = render_to_string(&Point { x: 1, y: 2 }, 4).unwrap();
/// assert_eq!(text, "    (1, 2)\n");
/// ```
pub trait Draw {
    fn draw(&self, out: &mut dyn Write, position: usize) -> Result<()>;
}

/// Draws any `Display` value as a single line indented by `position` spaces.
pub fn draw_display<T>(value: &T, out: &mut dyn Write, position: usize) -> Result<()>
where
    T: Display + ?Sized,
{
    writeln!(out, "{:position$}{}", "", value)?;
    Ok(())
}

/// Draws `value` into a freshly allocated `String`.
///
/// # Errors
///
/// Returns whatever error `value` reports while drawing, e.g.
/// `DrawError::Empty` for a moved-from object.
pub fn render_to_string<T>(value: &T, position: usize) -> Result<String>
where
    T: Draw + ?Sized,
{
    let mut buf = Vec::new();
    value.draw(&mut buf, position)?;
    // Every `Draw` impl in this crate writes UTF-8; user impls that don't get
    // their bytes replaced rather than an error.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

macro_rules! draw_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Draw for $ty {
                fn draw(&self, out: &mut dyn Write, position: usize) -> Result<()> {
                    draw_display(self, out, position)
                }
            }
        )*
    };
}

draw_via_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String,
);

impl<T: Draw + ?Sized> Draw for &T {
    fn draw(&self, out: &mut dyn Write, position: usize) -> Result<()> {
        (**self).draw(out, position)
    }
}

impl<T: Draw + ?Sized> Draw for Box<T> {
    fn draw(&self, out: &mut dyn Write, position: usize) -> Result<()> {
        (**self).draw(out, position)
    }
}
