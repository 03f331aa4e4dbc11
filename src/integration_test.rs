//! End-to-end scenarios for the range tree public API.

#[cfg(test)]
mod tests {
    use crate::{Point, RangeTree, Window};

    fn diagonal_points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
            Point::new(3.0, 3.0),
            Point::new(4.0, 4.0),
        ]
    }

    #[test]
    fn test_diagonal_window_excludes_top_point() {
        let tree = RangeTree::build(&diagonal_points()).unwrap();
        let window = Window::new(0.0, 4.0, 0.0, 3.0).unwrap();

        let mut found = tree.search(&window);
        found.sort_by(|a, b| a.x.total_cmp(&b.x));
        assert_eq!(
            found,
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(2.0, 2.0),
                Point::new(3.0, 3.0),
            ],
            "(4.0, 4.0) lies above the window"
        );
    }

    #[test]
    fn test_full_coverage_returns_every_point_once() {
        let points = diagonal_points();
        let tree = RangeTree::build(&points).unwrap();
        let window = Window::new(-10.0, 10.0, -10.0, 10.0).unwrap();

        let mut found = tree.search(&window);
        found.sort_by(|a, b| a.x.total_cmp(&b.x));
        assert_eq!(found, points);
    }

    #[test]
    fn test_disjoint_window_is_empty() {
        let tree = RangeTree::build(&diagonal_points()).unwrap();

        // fully left, right, below and above the bounding box
        for window in [
            Window::new(-10.0, -5.0, 0.0, 4.0).unwrap(),
            Window::new(5.0, 10.0, 0.0, 4.0).unwrap(),
            Window::new(0.0, 4.0, -10.0, -5.0).unwrap(),
            Window::new(0.0, 4.0, 5.0, 10.0).unwrap(),
        ] {
            assert!(tree.search(&window).is_empty(), "disjoint window must report nothing");
        }
    }

    #[test]
    fn test_point_window() {
        let tree = RangeTree::build(&diagonal_points()).unwrap();

        let hit = Window::new(2.0, 2.0, 2.0, 2.0).unwrap();
        assert_eq!(tree.search(&hit), vec![Point::new(2.0, 2.0)]);

        let miss = Window::new(2.5, 2.5, 2.5, 2.5).unwrap();
        assert!(tree.search(&miss).is_empty(), "no point at that coordinate");
    }

    #[test]
    fn test_point_window_with_duplicates() {
        let points =
            vec![Point::new(1.0, 1.0), Point::new(1.0, 1.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
        let tree = RangeTree::build(&points).unwrap();
        let window = Window::new(1.0, 1.0, 1.0, 1.0).unwrap();
        assert_eq!(tree.search(&window).len(), 3, "every duplicate is reported");
    }

    #[test]
    fn test_single_point_tree() {
        let tree = RangeTree::build(&[Point::new(3.0, -4.0)]).unwrap();

        let containing = Window::new(0.0, 5.0, -5.0, 0.0).unwrap();
        assert_eq!(tree.search(&containing), vec![Point::new(3.0, -4.0)]);

        let excluding_x = Window::new(4.0, 5.0, -5.0, 0.0).unwrap();
        assert!(tree.search(&excluding_x).is_empty(), "window right of the point");

        let excluding_y = Window::new(0.0, 5.0, 0.0, 5.0).unwrap();
        assert!(tree.search(&excluding_y).is_empty(), "window above the point");

        let exact = Window::new(3.0, 3.0, -4.0, -4.0).unwrap();
        assert_eq!(tree.search(&exact).len(), 1);
    }

    #[test]
    fn test_two_points() {
        let points = [Point::new(-1.0, 2.0), Point::new(1.0, -2.0)];
        let tree = RangeTree::build(&points).unwrap();

        let left_only = Window::new(-2.0, 0.0, -3.0, 3.0).unwrap();
        assert_eq!(tree.search(&left_only), vec![Point::new(-1.0, 2.0)]);

        let right_only = Window::new(0.0, 2.0, -3.0, 3.0).unwrap();
        assert_eq!(tree.search(&right_only), vec![Point::new(1.0, -2.0)]);

        let both = Window::new(-2.0, 2.0, -3.0, 3.0).unwrap();
        assert_eq!(tree.search(&both).len(), 2);
    }

    #[test]
    fn test_negative_coordinates() {
        let points: Vec<Point> = (0..40).map(|i| Point::new(-20.0 + i as f64, 19.0 - i as f64)).collect();
        let tree = RangeTree::build(&points).unwrap();
        let window = Window::new(-15.0, -5.0, 0.0, 15.0).unwrap();

        let found = tree.search(&window);
        for point in &found {
            assert!(window.contains(point), "reported point outside window");
        }
        let expected =
            points.iter().filter(|p| window.contains(p)).count();
        assert_eq!(found.len(), expected);
    }

    #[test]
    fn test_window_above_all_y_values() {
        // root locate() finds no qualifying key at all
        let tree = RangeTree::build(&diagonal_points()).unwrap();
        let window = Window::new(0.0, 4.0, 100.0, 200.0).unwrap();
        assert!(tree.search(&window).is_empty(), "no point has y that large");
    }
}
