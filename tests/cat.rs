extern crate strsafe;

macro_rules! here { () => { &format!(concat!(file!(), ":{:?}"), line!()) } }

use strsafe::{cch, Error, Flags, Tail};

#[test]
fn test_cat_truncates() {
    let mut d = *b"Hello\0??";
    assert_eq!(cch::cat(&mut d, 8, b" World"), Err(Error::InsufficientBuffer));
    assert_eq!(&d, b"Hello W\0");
}

#[test]
fn test_cat_fits() {
    let mut d = [0u8; 16];
    cch::copy(&mut d, 16, b"Hello").expect(here!());
    let tail = cch::cat_ex(Some(&mut d[..]), 16, Some(&b", World"[..]), Flags::empty()).expect(here!());
    assert_eq!(tail, Tail { end: 12, remaining: 4 });
    assert_eq!(&d[..13], b"Hello, World\0");
}

#[test]
fn test_cat_n() {
    let mut d = *b"abc\0????";
    let tail = cch::cat_n_ex(Some(&mut d[..]), 8, Some(&b"xyzzy"[..]), 2, Flags::empty()).expect(here!());
    assert_eq!(tail, Tail { end: 5, remaining: 3 });
    assert_eq!(&d[..6], b"abcxy\0");

    let mut d = *b"abc\0????";
    assert_eq!(cch::cat_n(&mut d, 8, b"xyzzy", 10), Err(Error::InsufficientBuffer));
    assert_eq!(&d, b"abcxyzz\0");
}

#[test]
fn test_cat_no_truncation() {
    let mut d = *b"hi\0?";
    let r = cch::cat_ex(Some(&mut d[..]), 4, Some(&b"world"[..]), Flags::NO_TRUNCATION);
    assert_eq!(r, Err(Error::InsufficientBuffer));
    assert_eq!(d[0], 0);
}

#[test]
fn test_cat_unterminated_destination() {
    let mut d = *b"abcd";
    assert_eq!(cch::cat(&mut d, 4, b"x"), Err(Error::InvalidParameter));
    assert_eq!(&d, b"abcd");

    // The terminator must lie within the capacity, not merely within the slice.
    let mut d = *b"abcd\0";
    assert_eq!(cch::cat(&mut d, 4, b"x"), Err(Error::InvalidParameter));
    assert_eq!(&d, b"abcd\0");
}

#[test]
fn test_cat_full_destination() {
    let mut d = *b"abc\0";
    assert_eq!(cch::cat(&mut d, 4, b"d"), Err(Error::InsufficientBuffer));
    assert_eq!(&d, b"abc\0");

    cch::cat(&mut d, 4, b"").expect(here!());
    assert_eq!(&d, b"abc\0");
}

#[test]
fn test_cat_missing_source() {
    let mut d = *b"ab\0?";
    let tail = cch::cat_ex(Some(&mut d[..]), 4, None, Flags::IGNORE_NULLS).expect(here!());
    assert_eq!(tail, Tail { end: 2, remaining: 2 });
    assert_eq!(&d[..3], b"ab\0");
}

#[test]
fn test_cat_associative() {
    let parts: &[(&[u8], &[u8], &[u8])] = &[
        (&b""[..], &b""[..], &b""[..]),
        (&b"a"[..], &b"bc"[..], &b"def"[..]),
        (&b"left"[..], &b""[..], &b"right"[..]),
    ];

    for &(a, b, c) in parts {
        let mut chained = [0x11u8; 32];
        cch::copy(&mut chained, 32, a).expect(here!());
        cch::cat(&mut chained, 32, b).expect(here!());
        cch::cat(&mut chained, 32, c).expect(here!());

        let whole: Vec<u8> = a.iter().chain(b).chain(c).cloned().collect();
        let mut direct = [0x11u8; 32];
        cch::copy(&mut direct, 32, &whole[..]).expect(here!());

        let len = whole.len();
        assert_eq!(&chained[..len + 1], &direct[..len + 1]);
        assert_eq!(cch::length(&chained, 32), Ok(len));
    }
}
