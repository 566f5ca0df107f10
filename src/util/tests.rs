use super::command::{COMMANDS, CommandKind};
use super::error::Error;
use super::split::*;

#[test]
fn test_find_from_skips_consumed_text() {
    let mut parts = Split::new("a,b", ',');
    assert_eq!(parts.size_hint(), (2, Some(4)));
    assert_eq!(parts.next(), Some("a"));
    assert_eq!(parts.size_hint(), (1, Some(1)));
    assert_eq!(parts.next(), Some("b"));
    assert_eq!(parts.size_hint(), (0, Some(0)));
}

#[test]
fn test_size_hint_without_delimiter() {
    let parts = Split::new("abc", ',');
    let (lower, upper) = parts.size_hint();
    assert_eq!(lower, 1);
    assert!(upper.unwrap() >= 1);
    assert_eq!(parts.count(), 1);
}

#[test]
fn test_size_hint_bounds_actual_count() {
    let inputs = ["", ",", ",,,", "a,b,c", "abc", "x,,y,", "é,ü,,ö"];
    for input in inputs {
        let parts = Split::new(input, ',');
        let (lower, upper) = parts.size_hint();
        let count = parts.count();
        assert!(lower <= count, "{input:?}");
        assert!(count <= upper.unwrap(), "{input:?}");
    }
}

#[test]
fn test_iterator_is_fused() {
    let mut parts = Split::new("a,", ',');
    assert_eq!(parts.next(), Some("a"));
    assert_eq!(parts.next(), Some(""));
    assert_eq!(parts.next(), None);
    assert_eq!(parts.next(), None);
    assert_eq!(parts.remainder(), None);
}

#[test]
fn test_remainder_tracks_scan_position() {
    let mut parts = Split::new("LS,/tmp,", ',');
    assert_eq!(parts.remainder(), Some("LS,/tmp,"));
    parts.next();
    assert_eq!(parts.remainder(), Some("/tmp,"));
    parts.next();
    assert_eq!(parts.remainder(), Some(""));
    assert_eq!(parts.next(), Some(""));
    assert_eq!(parts.remainder(), None);
}

#[test]
fn test_multibyte_delimiter() {
    let parts: BoundedTokens<'_, 4> = split("α→β→→γ", '→');
    assert_eq!(parts.as_slice(), &["α", "β", "", "γ"]);
}

#[test]
fn test_try_split_exact_capacity() {
    let parts = try_split::<3>("a,b,c", ',').unwrap();
    assert_eq!(parts.len(), 3);
    assert_eq!(try_split::<3>("a,b,c,", ','), Err(Error::CapacityExceeded));
}

#[test]
fn test_try_split_default_capacity() {
    let line = "a b c d e f g h i j k l m n o p";
    let parts: BoundedTokens<'_> = try_split(line, ' ').unwrap();
    assert_eq!(parts.len(), DEFAULT_MAX_TOKENS);

    let longer = "a b c d e f g h i j k l m n o p q";
    assert_eq!(
        try_split::<DEFAULT_MAX_TOKENS>(longer, ' '),
        Err(Error::CapacityExceeded)
    );
}

#[test]
fn test_table_entries_match_kind_names() {
    for (name, kind) in &COMMANDS {
        assert_eq!(kind.name(), name);
        assert_eq!(COMMANDS.name_of(kind), Some(name));
    }
}

#[test]
fn test_table_order_matches_discriminants() {
    for (index, (_, kind)) in COMMANDS.iter().enumerate() {
        assert_eq!(kind as usize, index);
        assert_eq!(CommandKind::try_from(index as u8), Ok(kind));
    }
}
