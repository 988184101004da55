//! Builds a small heterogeneous document and draws it to stdout.
//!
//! Run with `RUST_LOG=trace` to see object lifecycle events.

use sovran_drawable::{draw_display, Document, Draw, DrawError};
use std::io::Write;

#[derive(Clone)]
struct MyClass;

impl Draw for MyClass {
    fn draw(&self, out: &mut dyn Write, position: usize) -> Result<(), DrawError> {
        draw_display("my_class_t", out, position)
    }
}

fn main() -> Result<(), DrawError> {
    env_logger::init();

    let mut document = Document::with_capacity(5);
    document.push(0);
    document.push(String::from("Hello!"));
    document.push(2);
    document.push(MyClass);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    document.draw(&mut out, 0)?;
    out.flush()?;

    Ok(())
}
