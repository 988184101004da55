use sovran_drawable::cast::{self, AsAny};
use sovran_drawable::{draw_display, render_to_string, Document, Draw, DrawError, Object};
use std::io::Write;

#[derive(Clone)]
struct MyClass;

impl Draw for MyClass {
    fn draw(&self, out: &mut dyn Write, position: usize) -> Result<(), DrawError> {
        draw_display("my_class_t", out, position)
    }
}

fn sample_document() -> Document {
    let mut document = Document::with_capacity(5);
    document.push(0);
    document.push("Hello!".to_string());
    document.push(2);
    document.push(MyClass);
    document
}

#[test]
fn test_sample_document() -> Result<(), DrawError> {
    let text = render_to_string(&sample_document(), 0)?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "<document>",
            "  0",
            "  Hello!",
            "  2",
            "  my_class_t",
            "</document>"
        ]
    );
    Ok(())
}

#[test]
fn test_draw_to_stream() -> Result<(), DrawError> {
    let mut out: Vec<u8> = Vec::new();
    sample_document().draw(&mut out, 2)?;
    assert_eq!(
        String::from_utf8_lossy(&out),
        "  <document>\n    0\n    Hello!\n    2\n    my_class_t\n  </document>\n"
    );
    Ok(())
}

#[test]
fn test_nested_documents() -> Result<(), DrawError> {
    let mut outer = Document::new();
    outer.push(sample_document());
    outer.push(Document::new());
    outer.push(1);

    let text = render_to_string(&outer, 0)?;
    assert_eq!(
        text,
        "<document>\n\
         \x20 <document>\n\
         \x20   0\n\
         \x20   Hello!\n\
         \x20   2\n\
         \x20   my_class_t\n\
         \x20 </document>\n\
         \x20 <document>\n\
         \x20 </document>\n\
         \x20 1\n\
         </document>\n"
    );
    Ok(())
}

#[test]
fn test_objects_of_mixed_types() -> Result<(), DrawError> {
    let objects = vec![
        Object::new(1u8),
        Object::new('z'),
        Object::new(MyClass),
        Object::new(sample_document()),
    ];
    let copies = objects.clone();

    for (object, copy) in objects.iter().zip(&copies) {
        assert_eq!(object.type_name(), copy.type_name());
        assert_eq!(render_to_string(object, 4)?, render_to_string(copy, 4)?);
    }
    assert!(copies[2].is::<MyClass>());
    assert!(copies[3].is::<Document>());
    Ok(())
}

#[test]
fn test_copy_survives_original() -> Result<(), DrawError> {
    let original = sample_document();
    let copy = original.clone();
    let expected = render_to_string(&original, 0)?;
    drop(original);
    assert_eq!(render_to_string(&copy, 0)?, expected);
    Ok(())
}

#[test]
fn test_move_chain() -> Result<(), DrawError> {
    let mut a = Object::new(MyClass);
    let mut b = Object::new(0);
    let mut c = Object::new(0);

    b.take_from(&mut a);
    c.take_from(&mut b);

    assert!(a.is_empty());
    assert!(b.is_empty());
    assert_eq!(render_to_string(&c, 0)?, "my_class_t\n");
    assert!(matches!(render_to_string(&b, 0), Err(DrawError::Empty)));
    Ok(())
}

trait Shape: AsAny {
    fn sides(&self) -> u32;
}

struct Triangle;
struct Square;

impl Shape for Triangle {
    fn sides(&self) -> u32 {
        3
    }
}

impl Shape for Square {
    fn sides(&self) -> u32 {
        4
    }
}

#[test]
fn test_owning_downcast() {
    let mut base: Option<Box<dyn Shape>> = Some(Box::new(Triangle));

    let square = cast::release_as::<Square, _>(&mut base);
    assert!(square.is_none());
    assert_eq!(base.as_ref().map(|shape| shape.sides()), Some(3));

    let triangle = cast::release_as::<Triangle, _>(&mut base);
    assert!(triangle.is_some());
    assert!(base.is_none());
}

#[test]
fn test_downcast_box_round_trip_through_base() {
    let shapes: Vec<Box<dyn Shape>> = vec![Box::new(Square), Box::new(Triangle), Box::new(Square)];

    let mut squares = Vec::new();
    let mut rest = Vec::new();
    for shape in shapes {
        match cast::downcast_box::<Square, _>(shape) {
            Ok(square) => squares.push(square),
            Err(shape) => rest.push(shape),
        }
    }

    assert_eq!(squares.len(), 2);
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].sides(), 3);
}
