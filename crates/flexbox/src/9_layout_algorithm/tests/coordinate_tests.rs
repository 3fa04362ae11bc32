//! Tests for direction, wrap reversal and physical mapping.

use super::*;

fn orientation(direction: FlexDirection, wrap: FlexWrap) -> Orientation {
    resolve_orientation(direction, wrap)
}

#[test]
/// # Panics
/// Panics if reversed axes are not mirrored inside the extent.
fn map_box_mirrors_reversed_axes() {
    let logical = LogicalBox {
        main_offset: 10,
        cross_offset: 5,
        main_size: 100,
        cross_size: 50,
    };
    assert_eq!(
        map_box(orientation(FlexDirection::Row, FlexWrap::NoWrap), 500, 80, logical),
        Rect::new(10, 5, 100, 50)
    );
    assert_eq!(
        map_box(orientation(FlexDirection::RowReverse, FlexWrap::NoWrap), 500, 80, logical),
        Rect::new(390, 5, 100, 50)
    );
    assert_eq!(
        map_box(orientation(FlexDirection::Row, FlexWrap::WrapReverse), 500, 80, logical),
        Rect::new(10, 25, 100, 50)
    );
    assert_eq!(
        map_box(orientation(FlexDirection::Column, FlexWrap::NoWrap), 500, 80, logical),
        Rect::new(5, 10, 50, 100)
    );
    assert_eq!(
        map_box(
            orientation(FlexDirection::ColumnReverse, FlexWrap::WrapReverse),
            500,
            80,
            logical
        ),
        Rect::new(25, 390, 50, 100)
    );
}

#[test]
/// # Panics
/// Panics if physical margins are not swapped under reversal.
fn margins_follow_the_flow() {
    let margins = Margins {
        main_start: 1,
        main_end: 2,
        cross_start: 3,
        cross_end: 4,
    };
    let forward = logical_margins(orientation(FlexDirection::Row, FlexWrap::Wrap), margins);
    assert_eq!(
        (forward.main_lead, forward.main_trail, forward.cross_lead, forward.cross_trail),
        (1, 2, 3, 4)
    );
    let reversed = logical_margins(
        orientation(FlexDirection::RowReverse, FlexWrap::WrapReverse),
        margins,
    );
    assert_eq!(
        (reversed.main_lead, reversed.main_trail, reversed.cross_lead, reversed.cross_trail),
        (2, 1, 4, 3)
    );
}

#[test]
/// # Panics
/// Panics if row-reverse does not place the first item at the right edge.
///
/// # Errors
/// Returns an error if the layout pass fails.
fn row_reverse_starts_at_right() -> Result<(), FlexError> {
    let (items, mut measurer) = fixed_items(&[100, 100], 50);
    let container = FlexContainer {
        direction: FlexDirection::RowReverse,
        ..FlexContainer::default()
    };
    let result = layout(
        &container,
        &items,
        MeasureSpec::Exact(500),
        MeasureSpec::Unspecified,
        &mut measurer,
    )?;
    assert_eq!(origins(&result), vec![(400, 0), (300, 0)]);
    Ok(())
}

#[test]
/// # Panics
/// Panics if column layouts do not stack along y, forward or reversed.
///
/// # Errors
/// Returns an error if the layout pass fails.
fn column_directions_stack_vertically() -> Result<(), FlexError> {
    let (items, mut measurer) = fixed_items(&[100, 100], 50);
    let column = FlexContainer {
        direction: FlexDirection::Column,
        ..FlexContainer::default()
    };
    let result = layout(
        &column,
        &items,
        MeasureSpec::Unspecified,
        MeasureSpec::Exact(300),
        &mut measurer,
    )?;
    assert_eq!(result.frame(0), Some(Rect::new(0, 0, 50, 100)));
    assert_eq!(result.frame(1), Some(Rect::new(0, 100, 50, 100)));
    assert_eq!(result.content_size, Size::new(50, 300));

    let reversed = FlexContainer {
        direction: FlexDirection::ColumnReverse,
        ..column
    };
    let reversed_result = layout(
        &reversed,
        &items,
        MeasureSpec::Unspecified,
        MeasureSpec::Exact(300),
        &mut measurer,
    )?;
    assert_eq!(origins(&reversed_result), vec![(0, 200), (0, 100)]);
    Ok(())
}

#[test]
/// # Panics
/// Panics if wrap-reverse does not stack lines from the bottom edge.
///
/// # Errors
/// Returns an error if the layout pass fails.
fn wrap_reverse_stacks_from_bottom() -> Result<(), FlexError> {
    let (items, mut measurer) = fixed_items(&[100, 200, 300, 400], 50);
    let container = FlexContainer {
        wrap: FlexWrap::WrapReverse,
        ..FlexContainer::default()
    };
    let result = layout(
        &container,
        &items,
        MeasureSpec::Exact(500),
        MeasureSpec::Unspecified,
        &mut measurer,
    )?;
    assert_eq!(
        origins(&result),
        vec![(0, 100), (100, 100), (0, 50), (0, 0)]
    );
    assert_eq!(result.index_to_line, vec![0, 0, 1, 2]);
    Ok(())
}

#[test]
/// # Panics
/// Panics if physical margins end up on the wrong side after reversal.
///
/// # Errors
/// Returns an error if the layout pass fails.
fn margins_keep_their_physical_side() -> Result<(), FlexError> {
    let (mut items, mut measurer) = fixed_items(&[100], 50);
    if let Some(item) = items.first_mut() {
        item.margins = Margins {
            main_start: 10,
            main_end: 20,
            cross_start: 5,
            cross_end: 0,
        };
    }
    for direction in [FlexDirection::Row, FlexDirection::RowReverse] {
        let container = FlexContainer {
            direction,
            ..FlexContainer::default()
        };
        let result = layout(
            &container,
            &items,
            MeasureSpec::Unspecified,
            MeasureSpec::Unspecified,
            &mut measurer,
        )?;
        assert_eq!(origins(&result), vec![(10, 5)], "{direction:?}");
        assert_eq!(result.content_size, Size::new(130, 55));
    }
    Ok(())
}

#[test]
/// # Panics
/// Panics if padding is not removed from the constraint and added back to the size.
///
/// # Errors
/// Returns an error if the layout pass fails.
fn padding_offsets_padding_box() -> Result<(), FlexError> {
    let (items, mut measurer) = fixed_items(&[100], 50);
    let container = FlexContainer {
        padding: EdgeInsets::uniform(10),
        ..FlexContainer::default()
    };
    let result = layout(
        &container,
        &items,
        MeasureSpec::Exact(520),
        MeasureSpec::Unspecified,
        &mut measurer,
    )?;
    assert_eq!(result.frame(0), Some(Rect::new(0, 0, 100, 50)));
    assert_eq!(result.frame_in_padding_box(0), Some(Rect::new(10, 10, 100, 50)));
    assert_eq!(result.content_size, Size::new(500, 50));
    assert_eq!(result.size, Size::new(520, 70));
    assert_eq!(result.frame(3), None);
    Ok(())
}
