extern crate strsafe;

macro_rules! here { () => { &format!(concat!(file!(), ":{:?}"), line!()) } }

use strsafe::{cch, Error, Flags, Tail};

#[test]
fn test_copy_fits() {
    let mut d = *b"\xaa\xbb\xcc\xdd\xee\xff";
    let tail = cch::copy_ex(Some(&mut d[..]), 6, Some(&b"abc"[..]), Flags::empty()).expect(here!());
    assert_eq!(tail, Tail { end: 3, remaining: 3 });
    assert_eq!(&d[..4], b"abc\0");
    // Nothing past the terminator is touched.
    assert_eq!(&d[4..], b"\xee\xff");
}

#[test]
fn test_copy_truncates() {
    let mut d = [0u8; 3];
    assert_eq!(cch::copy(&mut d, 3, b"abcd"), Err(Error::InsufficientBuffer));
    assert_eq!(&d, b"ab\0");
}

#[test]
fn test_copy_exact_fit() {
    let mut d = [0xffu8; 4];
    cch::copy(&mut d, 4, b"abc").expect(here!());
    assert_eq!(&d, b"abc\0");
}

#[test]
fn test_copy_stops_at_source_terminator() {
    let mut d = [0xffu8; 8];
    cch::copy(&mut d, 8, b"ab\0cd").expect(here!());
    assert_eq!(&d[..3], b"ab\0");
    assert_eq!(cch::length(&d, 8), Ok(2));
}

#[test]
fn test_copy_zero_capacity() {
    let mut d = *b"xyz";
    assert_eq!(cch::copy(&mut d, 0, b"x"), Err(Error::InvalidParameter));
    assert_eq!(&d, b"xyz");
}

#[test]
fn test_copy_capacity_past_slice() {
    let mut d = *b"xyz";
    assert_eq!(cch::copy(&mut d, 4, b"a"), Err(Error::InvalidParameter));
    assert_eq!(&d, b"xyz");
}

#[test]
fn test_copy_capacity_above_ceiling() {
    let mut d = *b"xyz";
    assert_eq!(cch::copy(&mut d, strsafe::MAX_CCH + 1, b"a"), Err(Error::InvalidParameter));
    assert_eq!(&d, b"xyz");
}

#[test]
fn test_copy_missing_source() {
    let mut d = [0xaau8; 10];
    let tail = cch::copy_ex(Some(&mut d[..]), 10, None, Flags::IGNORE_NULLS).expect(here!());
    assert_eq!(tail, Tail { end: 0, remaining: 10 });
    assert_eq!(d[0], 0);

    let mut d = *b"keep";
    assert_eq!(cch::copy_ex(Some(&mut d[..]), 4, None, Flags::empty()), Err(Error::InvalidParameter));
    assert_eq!(&d, b"keep");
}

#[test]
fn test_copy_n() {
    let mut d = [0xffu8; 8];
    let tail = cch::copy_n_ex(Some(&mut d[..]), 8, Some(&b"abcdef"[..]), 3, Flags::empty()).expect(here!());
    assert_eq!(tail, Tail { end: 3, remaining: 5 });
    assert_eq!(&d[..4], b"abc\0");

    // A bound that is reached exactly when the destination fills is not truncation.
    let mut d = [0xffu8; 4];
    cch::copy_n(&mut d, 4, b"abcdef", 3).expect(here!());
    assert_eq!(&d, b"abc\0");

    let mut d = [0xffu8; 4];
    assert_eq!(cch::copy_n(&mut d, 4, b"abcdef", 5), Err(Error::InsufficientBuffer));
    assert_eq!(&d, b"abc\0");

    let mut d = [0xffu8; 4];
    cch::copy_n(&mut d, 4, b"abcdef", 0).expect(here!());
    assert_eq!(d[0], 0);
}

#[test]
fn test_copy_n_bound_above_ceiling() {
    let mut d = *b"xyz";
    assert_eq!(cch::copy_n(&mut d, 3, b"a", strsafe::MAX_CCH + 1), Err(Error::InvalidParameter));
    assert_eq!(&d, b"xyz");
}

#[test]
fn test_copy_round_trip_length() {
    let srcs: &[&[u8]] = &[&b""[..], &b"a"[..], &b"hello"[..], &b"0123456"[..]];
    for &src in srcs {
        let mut d = [0x55u8; 8];
        cch::copy(&mut d, 8, src).expect(here!());
        assert_eq!(cch::length(&d, 8), Ok(src.len()));
        assert_eq!(&d[..src.len()], src);
    }
}

#[test]
fn test_copy_never_writes_past_capacity() {
    let mut d = [0xeeu8; 16];
    assert_eq!(cch::copy(&mut d, 8, b"a string much longer than eight"), Err(Error::InsufficientBuffer));
    assert_eq!(&d[..8], b"a strin\0");
    assert!(d[8..].iter().all(|&b| b == 0xee));
}
