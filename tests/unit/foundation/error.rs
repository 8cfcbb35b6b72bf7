use super::*;

#[test]
fn constructors_map_to_variants() {
    assert!(matches!(
        BloomError::validation("bad"),
        BloomError::Validation(_)
    ));
    assert!(matches!(BloomError::sampling("bad"), BloomError::Sampling(_)));
    assert!(matches!(BloomError::render("bad"), BloomError::Render(_)));
}

#[test]
fn display_includes_category_and_message() {
    let e = BloomError::sampling("x coordinate 9 exceeds grid width 8");
    let s = e.to_string();
    assert!(s.contains("sampling error"));
    assert!(s.contains("exceeds grid width"));
}

#[test]
fn anyhow_errors_wrap_transparently() {
    let inner = anyhow::anyhow!("boom");
    let e = BloomError::from(inner);
    assert_eq!(e.to_string(), "boom");
}
