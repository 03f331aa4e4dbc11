//! Find points inside a query window.
use rangetree::prelude::*;

fn main() -> Result<(), IndexError> {
    let points = vec![
        Point::new(0.0, 0.0), // inside
        Point::new(1.0, 1.0), // inside
        Point::new(2.0, 2.0), // inside
        Point::new(3.0, 3.0), // inside
        Point::new(4.0, 4.0), // above the window
    ];
    let tree = RangeTree::build(&points)?;

    let window = Window::new(0.0, 4.0, 0.0, 3.0)?;
    let inside = tree.search(&window);
    println!("Inside {window:?}: {inside:?}");

    assert_eq!(inside.len(), 4, "expected 4 points inside the window");
    assert!(!inside.contains(&Point::new(4.0, 4.0)), "(4, 4) lies above the window");
    Ok(())
}
