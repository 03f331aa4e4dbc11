//! Run the same window query through every index implementation.
use rangetree::prelude::*;

fn count(index: &impl WindowIndex, window: &Window) -> usize {
    index.search(window).len()
}

fn main() -> Result<(), IndexError> {
    let points = vec![
        Point::new(-3.0, 2.0),
        Point::new(-1.0, -1.0),
        Point::new(0.0, 0.0),
        Point::new(1.5, 3.5),
        Point::new(2.0, -2.0),
        Point::new(4.0, 1.0),
    ];
    let window = Window::new(-2.0, 2.0, -2.0, 2.0)?;

    let tree = RangeTree::build(&points)?;
    let linear = LinearScan::build(&points)?;
    let sorted_scan = SortedXScan::build(&points)?;
    let grid = GridIndex::build(&points, 20)?;
    let nested = NestedMapIndex::build(&points)?;

    let expected = count(&linear, &window);
    println!("LinearScan (oracle): {expected} points");

    for (name, found) in [
        ("RangeTree", count(&tree, &window)),
        ("SortedXScan", count(&sorted_scan, &window)),
        ("GridIndex", count(&grid, &window)),
        ("NestedMapIndex", count(&nested, &window)),
    ] {
        println!("{name}: {found} points");
        assert_eq!(found, expected, "every index must agree with the oracle");
    }
    Ok(())
}
