use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(span.contains(15));
    assert!(!span.contains(20));
}

#[test]
fn test_span_merge() {
    let merged = Span::new(10, 20).merge(Span::new(15, 30));
    assert_eq!(merged, Span::new(10, 30));
}

#[test]
fn test_span_point_is_empty() {
    let point = Span::point(7);
    assert!(point.is_empty());
    assert_eq!(point.to_range(), 7..7);
}

#[test]
fn test_span_from_range_saturates() {
    let too_big = u32::MAX as usize + 1;
    assert_eq!(Span::from_range(3..too_big), Span::new(3, u32::MAX));
}

#[test]
fn test_span_display() {
    assert_eq!(Span::new(3, 9).to_string(), "3..9");
    assert_eq!(format!("{:?}", Span::new(3, 9)), "3..9");
}
