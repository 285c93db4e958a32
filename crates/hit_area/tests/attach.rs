use anyhow::Result;
use hit_area::{ArgSpec, HitAreaExpander, OverlayHost, RootScale};

mod common;
use common::{host_document, init_logging, paddings, prop, px};

#[test]
fn four_values_at_unit_scale() -> Result<()> {
    init_logging();
    let (mut dom, target) = host_document(Some("100"), None)?;
    let spec = ArgSpec::parse_lenient("10*20*30*40", '*');
    let handle = HitAreaExpander::default().attach(&mut dom, target, &spec, RootScale::new(1.0))?;
    let overlay = handle.overlay();

    assert_eq!(
        paddings(&dom, overlay),
        [px("10"), px("20"), px("30"), px("40")]
    );
    assert_eq!(prop(&dom, overlay, "margin-top"), px("-20"));
    assert_eq!(prop(&dom, overlay, "margin-left"), px("-30"));
    assert_eq!(handle.margins(), (-20.0, -30.0));
    assert_eq!(
        dom.get_attribute(overlay, "style"),
        Some(
            "background-color: transparent; padding-top: 10px; padding-right: 20px; \
             padding-bottom: 30px; padding-left: 40px; position: absolute; top: 50%; \
             left: 50%; box-sizing: border-box; margin-top: -20px; margin-left: -30px;"
        )
    );
    Ok(())
}

#[test]
fn one_value_at_half_scale() -> Result<()> {
    let (mut dom, target) = host_document(Some("50"), None)?;
    let scale = RootScale::from_document(&dom, "data-font-size", 100.0);
    assert_eq!(scale, RootScale::new(0.5));
    let handle =
        HitAreaExpander::default().attach(&mut dom, target, &ArgSpec::One(10.0), scale)?;
    let overlay = handle.overlay();
    assert_eq!(paddings(&dom, overlay), [px("5"), px("5"), px("5"), px("5")]);
    assert_eq!(prop(&dom, overlay, "margin-top"), px("-5"));
    assert_eq!(prop(&dom, overlay, "margin-left"), px("-5"));
    Ok(())
}

#[test]
fn one_value_pads_all_sides_and_centers() -> Result<()> {
    for (value, scale) in [(1.0, 1.0), (12.0, 2.0), (7.5, 0.4), (0.0, 1.0)] {
        let (mut dom, target) = host_document(None, None)?;
        let handle = HitAreaExpander::default().attach(
            &mut dom,
            target,
            &ArgSpec::One(value),
            RootScale::new(scale),
        )?;
        let side = value * scale;
        let padding = handle.padding().ok_or_else(|| anyhow::anyhow!("no padding"))?;
        assert_eq!(padding, css_box::Edges::uniform(side));
        assert_eq!(handle.margins(), (-side, -side));
    }
    Ok(())
}

#[test]
fn two_values_split_vertical_and_horizontal() -> Result<()> {
    for (a, b, scale) in [(10.0, 20.0, 1.0), (4.0, 1.0, 2.0), (3.0, 9.0, 0.5)] {
        let (mut dom, target) = host_document(None, None)?;
        let handle = HitAreaExpander::default().attach(
            &mut dom,
            target,
            &ArgSpec::Two(a, b),
            RootScale::new(scale),
        )?;
        let overlay = handle.overlay();
        let (vertical, horizontal) = (a * scale, b * scale);
        assert_eq!(
            paddings(&dom, overlay),
            [
                px(&vertical.to_string()),
                px(&horizontal.to_string()),
                px(&vertical.to_string()),
                px(&horizontal.to_string()),
            ]
        );
        assert_eq!(handle.margins(), (-vertical, -horizontal));
    }
    Ok(())
}

#[test]
fn three_values_top_horizontal_bottom() -> Result<()> {
    let (mut dom, target) = host_document(Some("100"), None)?;
    let spec = ArgSpec::parse_lenient("10*20*30", '*');
    let handle = HitAreaExpander::default().attach(&mut dom, target, &spec, RootScale::IDENTITY)?;
    let overlay = handle.overlay();
    assert_eq!(
        paddings(&dom, overlay),
        [px("10"), px("20"), px("30"), px("20")]
    );
    assert_eq!(prop(&dom, overlay, "margin-top"), px("-20"));
    assert_eq!(prop(&dom, overlay, "margin-left"), px("-20"));
    Ok(())
}

#[test]
fn four_values_center_on_half_sums() -> Result<()> {
    let (mut dom, target) = host_document(None, None)?;
    let handle = HitAreaExpander::default().attach(
        &mut dom,
        target,
        &ArgSpec::Four(2.0, 4.0, 6.0, 8.0),
        RootScale::new(3.0),
    )?;
    assert_eq!(handle.margins(), (-12.0, -18.0));
    let padding = handle.padding().ok_or_else(|| anyhow::anyhow!("no padding"))?;
    assert!((padding.vertical_sum() + 2.0 * handle.margins().0).abs() < f64::EPSILON);
    assert!((padding.horizontal_sum() + 2.0 * handle.margins().1).abs() < f64::EPSILON);
    Ok(())
}

#[test]
fn attaching_twice_appends_two_overlays() -> Result<()> {
    let (mut dom, target) = host_document(Some("100"), None)?;
    let expander = HitAreaExpander::default();
    let spec = ArgSpec::One(10.0);
    let first = expander.attach(&mut dom, target, &spec, RootScale::IDENTITY)?;
    let second = expander.attach(&mut dom, target, &spec, RootScale::IDENTITY)?;
    assert_ne!(first.overlay(), second.overlay());
    assert_eq!(dom.children(target), vec![first.overlay(), second.overlay()]);
    Ok(())
}

#[test]
fn static_or_unset_host_becomes_relative() -> Result<()> {
    for style in [None, Some("position: static"), Some("color: red")] {
        let (mut dom, target) = host_document(None, style)?;
        HitAreaExpander::default().attach(&mut dom, target, &ArgSpec::One(1.0), RootScale::IDENTITY)?;
        assert_eq!(prop(&dom, target, "position").as_deref(), Some("relative"));
    }
    Ok(())
}

#[test]
fn positioned_host_is_left_alone() -> Result<()> {
    for keyword in ["absolute", "fixed", "relative", "sticky"] {
        let style = format!("position: {keyword}; width: 10px");
        let (mut dom, target) = host_document(None, Some(&style))?;
        HitAreaExpander::default().attach(&mut dom, target, &ArgSpec::One(1.0), RootScale::IDENTITY)?;
        assert_eq!(prop(&dom, target, "position").as_deref(), Some(keyword));
        assert_eq!(dom.get_attribute(target, "style"), Some(style.as_str()));
    }
    Ok(())
}

#[test]
fn overlay_is_transparent_absolute_and_centered() -> Result<()> {
    let (mut dom, target) = host_document(None, None)?;
    let handle = HitAreaExpander::new("b").attach(
        &mut dom,
        target,
        &ArgSpec::Two(1.0, 2.0),
        RootScale::IDENTITY,
    )?;
    let overlay = handle.overlay();
    assert_eq!(dom.tag_name(overlay), Some("b"));
    assert_eq!(dom.parent(overlay), Some(target));
    assert_eq!(dom.children(target).last(), Some(&overlay));
    assert_eq!(prop(&dom, overlay, "background-color").as_deref(), Some("transparent"));
    assert_eq!(prop(&dom, overlay, "position").as_deref(), Some("absolute"));
    assert_eq!(prop(&dom, overlay, "top").as_deref(), Some("50%"));
    assert_eq!(prop(&dom, overlay, "left").as_deref(), Some("50%"));
    assert_eq!(prop(&dom, overlay, "box-sizing").as_deref(), Some("border-box"));
    assert!(dom.children(overlay).is_empty());
    Ok(())
}

#[test]
fn unsupported_counts_leave_an_unpadded_centered_point() -> Result<()> {
    for spec in [ArgSpec::from_tokens(&[]), ArgSpec::parse_lenient("1*2*3*4*5", '*')] {
        let (mut dom, target) = host_document(Some("100"), None)?;
        let handle =
            HitAreaExpander::default().attach(&mut dom, target, &spec, RootScale::IDENTITY)?;
        let overlay = handle.overlay();
        assert_eq!(handle.padding(), None);
        assert_eq!(paddings(&dom, overlay), [None, None, None, None]);
        assert_eq!(prop(&dom, overlay, "margin-top"), px("0"));
        assert_eq!(prop(&dom, overlay, "margin-left"), px("0"));
        assert_eq!(prop(&dom, overlay, "position").as_deref(), Some("absolute"));
    }
    Ok(())
}

#[test]
fn non_numeric_tokens_drop_only_their_declarations() -> Result<()> {
    let (mut dom, target) = host_document(Some("100"), None)?;
    let spec = ArgSpec::parse_lenient("10*abc", '*');
    let handle = HitAreaExpander::default().attach(&mut dom, target, &spec, RootScale::IDENTITY)?;
    let overlay = handle.overlay();
    assert_eq!(paddings(&dom, overlay), [px("10"), None, px("10"), None]);
    assert_eq!(prop(&dom, overlay, "margin-top"), px("-10"));
    assert_eq!(prop(&dom, overlay, "margin-left"), None);
    assert!(handle.margins().1.is_nan());
    Ok(())
}

#[test]
fn missing_root_scale_drops_every_length() -> Result<()> {
    for font_size in [None, Some("large")] {
        let (mut dom, target) = host_document(font_size, None)?;
        let scale = RootScale::from_document(&dom, "data-font-size", 100.0);
        assert!(!scale.is_finite());
        let handle = HitAreaExpander::default().attach(
            &mut dom,
            target,
            &ArgSpec::parse_lenient("10*20*30*40", '*'),
            scale,
        )?;
        let overlay = handle.overlay();
        assert_eq!(paddings(&dom, overlay), [None, None, None, None]);
        assert_eq!(prop(&dom, overlay, "margin-top"), None);
        assert_eq!(prop(&dom, overlay, "position").as_deref(), Some("absolute"));
        assert_eq!(prop(&dom, overlay, "box-sizing").as_deref(), Some("border-box"));
    }
    Ok(())
}

#[test]
fn unknown_host_is_an_error() {
    let mut dom = html::DOM::new();
    let mut other = html::DOM::new();
    let stray = other.create_element("div");
    let result =
        HitAreaExpander::default().attach(&mut dom, stray, &ArgSpec::One(1.0), RootScale::IDENTITY);
    assert!(result.is_err());
    assert!(dom.computed_position(stray).is_err());
}
