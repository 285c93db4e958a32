use hit_area::{ArgSpec, ArgSpecError, HitAreaConfig, RootScale};

#[test]
fn lenient_parse_dispatches_on_count() {
    assert_eq!(ArgSpec::parse_lenient("10", '*'), ArgSpec::One(10.0));
    assert_eq!(ArgSpec::parse_lenient("10*20", '*'), ArgSpec::Two(10.0, 20.0));
    assert_eq!(
        ArgSpec::parse_lenient("10*20*30", '*'),
        ArgSpec::Three(10.0, 20.0, 30.0)
    );
    assert_eq!(
        ArgSpec::parse_lenient("10*20*30*40", '*'),
        ArgSpec::Four(10.0, 20.0, 30.0, 40.0)
    );
    assert_eq!(
        ArgSpec::parse_lenient("1*2*3*4*5", '*'),
        ArgSpec::Unsupported { count: 5 }
    );
    assert_eq!(ArgSpec::parse_lenient("", '*'), ArgSpec::One(0.0));
    assert_eq!(ArgSpec::parse_lenient("1*2*3*4*5", '*').count(), 5);
}

#[test]
fn lenient_parse_keeps_nan_tokens() {
    let spec = ArgSpec::parse_lenient("10*abc", '*');
    assert!(
        matches!(spec, ArgSpec::Two(vertical, horizontal) if vertical == 10.0 && horizontal.is_nan()),
        "unexpected {spec:?}"
    );
}

#[test]
fn strict_parse_rejects_degraded_input() {
    assert_eq!("10*20".parse::<ArgSpec>(), Ok(ArgSpec::Two(10.0, 20.0)));
    assert_eq!(
        "1*2*3*4*5".parse::<ArgSpec>(),
        Err(ArgSpecError::WrongCount { count: 5 })
    );
    assert_eq!(
        "10*px".parse::<ArgSpec>(),
        Err(ArgSpecError::InvalidToken {
            index: 1,
            token: "px".to_owned()
        })
    );
    assert_eq!(
        ArgSpec::parse_strict("-1", '*'),
        Err(ArgSpecError::NegativeToken {
            index: 0,
            token: "-1".to_owned()
        })
    );
    let message = ArgSpecError::WrongCount { count: 0 }.to_string();
    assert_eq!(message, "expected 1 to 4 values, got 0");
}

#[test]
fn insets_follow_the_count_table() {
    let scale = RootScale::new(2.0);
    let three = ArgSpec::Three(1.0, 2.0, 3.0).insets(scale);
    assert_eq!(
        three,
        Some(css_box::Edges {
            top: 2.0,
            right: 4.0,
            bottom: 6.0,
            left: 4.0,
        })
    );
    assert_eq!(ArgSpec::Unsupported { count: 7 }.insets(scale), None);
}

#[test]
fn root_scale_from_attribute() {
    assert_eq!(RootScale::from_attribute(Some("100"), 100.0), RootScale::IDENTITY);
    assert_eq!(RootScale::from_attribute(Some(" 75 "), 100.0).factor(), 0.75);
    assert!(RootScale::from_attribute(None, 100.0).factor().is_nan());
    assert!(RootScale::from_attribute(Some("big"), 100.0).factor().is_nan());
    assert_eq!(RootScale::new(0.5).px(10.0), 5.0);
}

#[test]
fn config_defaults_and_json_overrides() -> anyhow::Result<()> {
    let defaults = HitAreaConfig::default();
    assert_eq!(defaults.directive, "trigger-area");
    assert_eq!(defaults.delimiter, '*');
    assert_eq!(defaults.root_scale_attribute, "data-font-size");
    assert_eq!(defaults.overlay_tag, "span");
    assert!(!defaults.strict);

    let parsed = HitAreaConfig::from_json_str(r#"{ "scale_divisor": 16, "strict": true }"#)?;
    assert_eq!(parsed.scale_divisor, 16.0);
    assert!(parsed.strict);
    assert_eq!(parsed.directive, "trigger-area");

    assert!(HitAreaConfig::from_json_str(r#"{ "unknown": 1 }"#).is_err());
    assert!(HitAreaConfig::from_json_str(r#"{ "delimiter": "ab" }"#).is_err());
    Ok(())
}

#[test]
fn config_loads_from_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("hit_area.json");
    std::fs::write(&path, r#"{ "overlay_tag": "em" }"#)?;
    assert_eq!(HitAreaConfig::load(&path)?.overlay_tag, "em");
    assert!(HitAreaConfig::load(&dir.path().join("missing.json")).is_err());
    Ok(())
}
