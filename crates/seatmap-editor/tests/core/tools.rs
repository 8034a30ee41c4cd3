use seatmap_editor::model::Point;
use seatmap_editor::tools::{block_rows, row_positions, Tool};

#[test]
fn test_every_tool_has_a_distinct_shortcut() {
    let keys = ['v', 's', 'r', 'b', 't', 'u', 'c', 'o', 'p', 'e', 'h'];
    let mut tools: Vec<Tool> = keys
        .iter()
        .map(|&k| Tool::from_shortcut(k).unwrap())
        .collect();
    tools.dedup();
    assert_eq!(tools.len(), keys.len());
}

#[test]
fn test_row_positions_follow_the_drag_direction() {
    let seats = row_positions(Point::new(100.0, 0.0), Point::new(0.0, 0.0), 25.0);
    assert_eq!(seats.len(), 5);
    assert_eq!(seats[0], Point::new(100.0, 0.0));
    assert_eq!(seats[4], Point::new(0.0, 0.0));
}

#[test]
fn test_vertical_row() {
    let seats = row_positions(Point::new(0.0, 0.0), Point::new(0.0, 50.0), 25.0);
    assert_eq!(seats.len(), 3);
    assert_eq!(seats[2], Point::new(0.0, 50.0));
}

#[test]
fn test_short_drag_yields_single_seat() {
    let seats = row_positions(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 25.0);
    assert_eq!(seats, vec![Point::new(0.0, 0.0)]);
}

#[test]
fn test_block_rows_share_columns() {
    let rows = block_rows(Point::new(0.0, 0.0), Point::new(50.0, 75.0), 25.0);
    assert_eq!(rows.len(), 4);
    for row in &rows {
        assert_eq!(row.len(), 3);
    }
    // Columns line up across rows.
    for row in &rows[1..] {
        for (a, b) in rows[0].iter().zip(row.iter()) {
            assert_eq!(a.x, b.x);
        }
    }
}

#[test]
fn test_zero_spacing_block_is_empty() {
    assert!(block_rows(Point::new(0.0, 0.0), Point::new(100.0, 100.0), 0.0).is_empty());
}
