#![cfg(feature="capi")]
extern crate libc;
extern crate strsafe;

use std::mem;
use std::ptr;
use libc::{c_char, size_t, wchar_t};
use strsafe::capi::*;
use strsafe::error::{S_OK, STRSAFE_E_INSUFFICIENT_BUFFER, STRSAFE_E_INVALID_PARAMETER};

fn cstr(s: &[u8]) -> *const c_char {
    s.as_ptr() as *const c_char
}

fn wide(s: &str) -> Vec<wchar_t> {
    s.chars().map(|c| c as wchar_t).chain(Some(0)).collect()
}

#[test]
fn test_cb_cat_a() {
    let mut d = [0u8; 8];
    let p = d.as_mut_ptr() as *mut c_char;
    unsafe {
        assert_eq!(StringCbCopyA(p, 8, cstr(b"\0")), S_OK);
        assert_eq!(StringCbCatA(p, 8, cstr(b"Hello\0")), S_OK);
        assert_eq!(StringCbCatA(p, 8, cstr(b" World\0")), STRSAFE_E_INSUFFICIENT_BUFFER);
    }
    assert_eq!(&d, b"Hello W\0");

    unsafe {
        // Already full.
        assert_eq!(StringCbCatA(p, 8, cstr(b"!\0")), STRSAFE_E_INSUFFICIENT_BUFFER);
        assert_eq!(StringCbCatA(p, 0, cstr(b"!\0")), STRSAFE_E_INVALID_PARAMETER);
    }
    assert_eq!(&d, b"Hello W\0");
}

#[test]
fn test_cch_copy_ex_a() {
    let mut d = [0xffu8; 6];
    let p = d.as_mut_ptr() as *mut c_char;
    let mut end: *mut c_char = ptr::null_mut();
    let mut remaining: size_t = 0;
    unsafe {
        let hr = StringCchCopyExA(p, 6, cstr(b"abc\0"), &mut end, &mut remaining, 0);
        assert_eq!(hr, S_OK);
        assert_eq!(end, p.offset(3));
        assert_eq!(*end, 0);
        assert_eq!(remaining, 3);

        let hr = StringCchCopyExA(p, 6, cstr(b"far too long\0"), &mut end, &mut remaining, 0);
        assert_eq!(hr, STRSAFE_E_INSUFFICIENT_BUFFER);
        assert!(end.is_null());
        assert_eq!(remaining, 0);
    }
    assert_eq!(&d, b"far t\0");
}

#[test]
fn test_ex_nulls() {
    let mut end: *mut c_char = ptr::null_mut();
    let mut remaining: size_t = 7;
    unsafe {
        let hr = StringCchCopyExA(ptr::null_mut(), 0, cstr(b"abc\0"), &mut end, &mut remaining, STRSAFE_IGNORE_NULLS);
        assert_eq!(hr, S_OK);
        assert!(end.is_null());
        assert_eq!(remaining, 0);

        assert_eq!(StringCchCopyA(ptr::null_mut(), 4, cstr(b"abc\0")), STRSAFE_E_INVALID_PARAMETER);
    }

    let mut d = [0x55u8; 10];
    let p = d.as_mut_ptr() as *mut c_char;
    unsafe {
        let hr = StringCchCopyExA(p, 10, ptr::null(), ptr::null_mut(), &mut remaining, STRSAFE_IGNORE_NULLS);
        assert_eq!(hr, S_OK);
        assert_eq!(remaining, 10);
    }
    assert_eq!(d[0], 0);
}

#[test]
fn test_failure_flags() {
    let mut d = [0x55u8; 5];
    let p = d.as_mut_ptr() as *mut c_char;
    let flags = STRSAFE_FILL_ON_FAILURE | STRSAFE_NULL_ON_FAILURE | 0xcc;
    unsafe {
        let hr = StringCchCopyExA(p, 5, cstr(b"toolong!\0"), ptr::null_mut(), ptr::null_mut(), flags);
        assert_eq!(hr, STRSAFE_E_INSUFFICIENT_BUFFER);
    }
    assert_eq!(d, [0x00, 0xcc, 0xcc, 0xcc, 0xcc]);

    let mut d = [0x55u8; 5];
    let p = d.as_mut_ptr() as *mut c_char;
    unsafe {
        // An over-ceiling capacity is rejected without writing.
        let hr = StringCchCopyExA(p, STRSAFE_MAX_CCH + 1, cstr(b"x\0"), ptr::null_mut(), ptr::null_mut(), flags);
        assert_eq!(hr, STRSAFE_E_INVALID_PARAMETER);
    }
    assert_eq!(d, [0x55; 5]);
}

#[test]
fn test_copy_n_reads_only_what_it_needs() {
    // No terminator: the bound is all that keeps the read in range.
    let src = *b"abcdef";
    let mut d = [0xffu8; 8];
    let p = d.as_mut_ptr() as *mut c_char;
    unsafe {
        assert_eq!(StringCchCopyNA(p, 8, src.as_ptr() as *const c_char, 3), S_OK);
    }
    assert_eq!(&d[..4], b"abc\0");

    let mut d = [0xffu8; 4];
    let p = d.as_mut_ptr() as *mut c_char;
    unsafe {
        assert_eq!(StringCchCopyNA(p, 4, src.as_ptr() as *const c_char, 3), S_OK);
    }
    assert_eq!(&d, b"abc\0");
}

#[test]
fn test_cat_n_ex_w() {
    let mut d = wide("abc");
    d.resize(8, 0x7f);
    let p = d.as_mut_ptr();
    let src = wide("xyzzy");
    let mut end: *mut wchar_t = ptr::null_mut();
    let mut remaining: size_t = 0;
    unsafe {
        let hr = StringCchCatNExW(p, 8, src.as_ptr(), 2, &mut end, &mut remaining, 0);
        assert_eq!(hr, S_OK);
        assert_eq!(end, p.offset(5));
        assert_eq!(remaining, 3);
    }
    assert_eq!(&d[..6], &wide("abcxy")[..]);
}

#[test]
fn test_cb_copy_ex_w() {
    let size = mem::size_of::<wchar_t>();
    let mut d = vec![0 as wchar_t; 4];
    let p = d.as_mut_ptr();
    let src = wide("hi");
    let mut remaining: size_t = 0;
    unsafe {
        let hr = StringCbCopyExW(p, 4 * size, src.as_ptr(), ptr::null_mut(), &mut remaining, 0);
        assert_eq!(hr, S_OK);
        assert_eq!(remaining, 2 * size);
    }
    assert_eq!(&d[..3], &wide("hi")[..]);
}

#[test]
fn test_length() {
    let mut len: size_t = 99;
    unsafe {
        assert_eq!(StringCchLengthA(cstr(b"hello\0"), 10, &mut len), S_OK);
        assert_eq!(len, 5);
        assert_eq!(StringCchLengthA(cstr(b"abcde"), 3, &mut len), STRSAFE_E_INVALID_PARAMETER);
        assert_eq!(StringCchLengthA(ptr::null(), 3, &mut len), STRSAFE_E_INVALID_PARAMETER);
        assert_eq!(StringCchLengthA(cstr(b"x\0"), 0, &mut len), STRSAFE_E_INVALID_PARAMETER);
        assert_eq!(StringCchLengthA(cstr(b"x\0"), 2, ptr::null_mut()), S_OK);

        let w = wide("abc");
        let size = mem::size_of::<wchar_t>();
        assert_eq!(StringCbLengthW(w.as_ptr(), 4 * size, &mut len), S_OK);
        assert_eq!(len, 3 * size);
        assert_eq!(StringCchLengthW(w.as_ptr(), 4, &mut len), S_OK);
        assert_eq!(len, 3);
    }
}
