use super::*;

#[test]
fn apply_to_removes_then_adds() {
    let set = ClassSet::new(&["visible", "opacity-100"], &["invisible", "opacity-0"]);
    let result = set.apply_to(&["panel", "invisible", "opacity-0"]);
    assert_eq!(result, vec!["panel", "visible", "opacity-100"]);
}

#[test]
fn apply_to_is_idempotent() {
    let set = ClassSet::new(&["visible"], &["invisible"]);
    let once = set.apply_to(&["invisible"]);
    let refs: Vec<&str> = once.iter().map(String::as_str).collect();
    assert_eq!(set.apply_to(&refs), once);
}
