use css_position::{Position, is_valid_inset};

#[test]
fn keywords_round_trip() {
    for keyword in ["static", "relative", "absolute", "fixed", "sticky"] {
        let parsed = Position::parse(keyword);
        assert_eq!(parsed.map(Position::as_str), Some(keyword));
    }
    assert_eq!(Position::parse("ABSOLUTE"), Some(Position::Absolute));
    assert_eq!(Position::parse("center"), None);
}

#[test]
fn only_static_is_unpositioned() {
    assert!(!Position::Static.is_positioned());
    assert!(Position::Relative.is_positioned());
    assert!(Position::Fixed.is_positioned());
    assert_eq!(Position::default(), Position::Static);
}

#[test]
fn insets() {
    assert!(is_valid_inset("50%"));
    assert!(is_valid_inset("-4px"));
    assert!(is_valid_inset("auto"));
    assert!(!is_valid_inset("middle"));
}
