/*!
C linkage for the strsafe entry points.

Each function here has the name and signature foreign code expects, takes raw pointers, and returns an `HRESULT`.  Narrow strings are `char *`, wide strings are `wchar_t *`.

The `Printf`/`VPrintf` family is not exported: defining a C-variadic function or consuming a `va_list` is not possible in stable Rust.  Use the Rust surface (`cch::vprintf` and friends) instead.
*/
#![allow(non_snake_case)]

use std::ptr;
use std::slice;
use libc::{c_char, size_t, wchar_t};
use capacity::{self, Capacity, Cb, Cch};
use encoding::Unit;
use engine::Mode;
use error::{Error, HRESULT, S_OK};
use ex::Tail;
use flags::Flags;
use ops;
use view::{self, RawUnits};

pub const STRSAFE_MAX_CCH: size_t = capacity::MAX_CCH;
pub const STRSAFE_IGNORE_NULLS: u32 = 0x00000100;
pub const STRSAFE_FILL_BEHIND_NULL: u32 = 0x00000200;
pub const STRSAFE_FILL_ON_FAILURE: u32 = 0x00000400;
pub const STRSAFE_NULL_ON_FAILURE: u32 = 0x00000800;
pub const STRSAFE_NO_TRUNCATION: u32 = 0x00001000;

/**
Borrows the destination buffer.

An unusable capacity yields an empty slice, which the operation will then reject without writing.
*/
unsafe fn dest_units<'a, C, U>(ptr: *mut U, cap: size_t) -> Option<&'a mut [U]> where C: Capacity, U: Unit {
    if ptr.is_null() {
        return None;
    }
    let cch = match capacity::normalize::<C, U>(cap) {
        Ok(cch) => cch,
        Err(_) => 0,
    };
    Some(slice::from_raw_parts_mut(ptr, cch))
}

unsafe fn src_units<'a, U: Unit>(ptr: *const U) -> Option<RawUnits<'a, U>> {
    if ptr.is_null() {
        None
    } else {
        Some(RawUnits::unbounded(ptr))
    }
}

/**
Stores the extended outputs, if the caller asked for them, and returns the wire code.
*/
unsafe fn report<U>(dest: *mut U, result: Result<Tail, Error>, end_out: *mut *mut U, remaining_out: *mut size_t) -> HRESULT {
    let (end, remaining, hr) = match result {
        Ok(tail) => {
            let end = if dest.is_null() { dest } else { dest.offset(tail.end as isize) };
            (end, tail.remaining, S_OK)
        },
        Err(err) => (ptr::null_mut(), 0, err.code()),
    };

    if !end_out.is_null() {
        *end_out = end;
    }
    if !remaining_out.is_null() {
        *remaining_out = remaining;
    }
    hr
}

unsafe fn compose<C, U>(
    dest: *mut U,
    cap: size_t,
    mode: Mode,
    src: *const U,
    max: Option<size_t>,
    end_out: *mut *mut U,
    remaining_out: *mut size_t,
    flags: u32,
) -> HRESULT
where
    C: Capacity,
    U: Unit,
{
    let result = ops::compose::<C, U, _>(dest_units::<C, U>(dest, cap), cap, mode, src_units(src), max, Flags::from_bits(flags));
    report(dest, result, end_out, remaining_out)
}

unsafe fn gets<C, U>(dest: *mut U, cap: size_t, end_out: *mut *mut U, remaining_out: *mut size_t, flags: u32) -> HRESULT
where
    C: Capacity,
    U: Unit,
{
    let stdin = ::std::io::stdin();
    let mut lock = stdin.lock();
    let result = ops::gets::<C, U, _>(&mut lock, dest_units::<C, U>(dest, cap), cap, Flags::from_bits(flags));
    report(dest, result, end_out, remaining_out)
}

unsafe fn length<C, U>(psz: *const U, max: size_t, len_out: *mut size_t) -> HRESULT
where
    C: Capacity,
    U: Unit,
{
    if psz.is_null() {
        return Error::InvalidParameter.code();
    }
    let result = capacity::normalize::<C, U>(max)
        .and_then(|cch| view::raw_length(psz, cch))
        .map(C::from_cch::<U>);
    match result {
        Ok(len) => {
            if !len_out.is_null() {
                *len_out = len;
            }
            S_OK
        },
        Err(err) => err.code(),
    }
}

macro_rules! export {
    ($cap:ty, $ffi:ty => $unit:ty;
        cat: $cat:ident, cat_ex: $cat_ex:ident,
        cat_n: $cat_n:ident, cat_n_ex: $cat_n_ex:ident,
        copy: $copy:ident, copy_ex: $copy_ex:ident,
        copy_n: $copy_n:ident, copy_n_ex: $copy_n_ex:ident,
        gets: $gets:ident, gets_ex: $gets_ex:ident,
        length: $length:ident,
    ) => {
        #[no_mangle]
        pub unsafe extern "C" fn $cat(psz_dest: *mut $ffi, cap_dest: size_t, psz_src: *const $ffi) -> HRESULT {
            compose::<$cap, $unit>(psz_dest as *mut $unit, cap_dest, Mode::Append, psz_src as *const $unit,
                None, ptr::null_mut(), ptr::null_mut(), 0)
        }

        #[no_mangle]
        pub unsafe extern "C" fn $cat_ex(psz_dest: *mut $ffi, cap_dest: size_t, psz_src: *const $ffi,
            ppsz_dest_end: *mut *mut $ffi, p_remaining: *mut size_t, dw_flags: u32) -> HRESULT
        {
            compose::<$cap, $unit>(psz_dest as *mut $unit, cap_dest, Mode::Append, psz_src as *const $unit,
                None, ppsz_dest_end as *mut *mut $unit, p_remaining, dw_flags)
        }

        #[no_mangle]
        pub unsafe extern "C" fn $cat_n(psz_dest: *mut $ffi, cap_dest: size_t, psz_src: *const $ffi,
            cap_max_append: size_t) -> HRESULT
        {
            compose::<$cap, $unit>(psz_dest as *mut $unit, cap_dest, Mode::Append, psz_src as *const $unit,
                Some(cap_max_append), ptr::null_mut(), ptr::null_mut(), 0)
        }

        #[no_mangle]
        pub unsafe extern "C" fn $cat_n_ex(psz_dest: *mut $ffi, cap_dest: size_t, psz_src: *const $ffi,
            cap_max_append: size_t, ppsz_dest_end: *mut *mut $ffi, p_remaining: *mut size_t, dw_flags: u32) -> HRESULT
        {
            compose::<$cap, $unit>(psz_dest as *mut $unit, cap_dest, Mode::Append, psz_src as *const $unit,
                Some(cap_max_append), ppsz_dest_end as *mut *mut $unit, p_remaining, dw_flags)
        }

        #[no_mangle]
        pub unsafe extern "C" fn $copy(psz_dest: *mut $ffi, cap_dest: size_t, psz_src: *const $ffi) -> HRESULT {
            compose::<$cap, $unit>(psz_dest as *mut $unit, cap_dest, Mode::Copy, psz_src as *const $unit,
                None, ptr::null_mut(), ptr::null_mut(), 0)
        }

        #[no_mangle]
        pub unsafe extern "C" fn $copy_ex(psz_dest: *mut $ffi, cap_dest: size_t, psz_src: *const $ffi,
            ppsz_dest_end: *mut *mut $ffi, p_remaining: *mut size_t, dw_flags: u32) -> HRESULT
        {
            compose::<$cap, $unit>(psz_dest as *mut $unit, cap_dest, Mode::Copy, psz_src as *const $unit,
                None, ppsz_dest_end as *mut *mut $unit, p_remaining, dw_flags)
        }

        #[no_mangle]
        pub unsafe extern "C" fn $copy_n(psz_dest: *mut $ffi, cap_dest: size_t, psz_src: *const $ffi,
            cap_src: size_t) -> HRESULT
        {
            compose::<$cap, $unit>(psz_dest as *mut $unit, cap_dest, Mode::Copy, psz_src as *const $unit,
                Some(cap_src), ptr::null_mut(), ptr::null_mut(), 0)
        }

        #[no_mangle]
        pub unsafe extern "C" fn $copy_n_ex(psz_dest: *mut $ffi, cap_dest: size_t, psz_src: *const $ffi,
            cap_src: size_t, ppsz_dest_end: *mut *mut $ffi, p_remaining: *mut size_t, dw_flags: u32) -> HRESULT
        {
            compose::<$cap, $unit>(psz_dest as *mut $unit, cap_dest, Mode::Copy, psz_src as *const $unit,
                Some(cap_src), ppsz_dest_end as *mut *mut $unit, p_remaining, dw_flags)
        }

        #[no_mangle]
        pub unsafe extern "C" fn $gets(psz_dest: *mut $ffi, cap_dest: size_t) -> HRESULT {
            gets::<$cap, $unit>(psz_dest as *mut $unit, cap_dest, ptr::null_mut(), ptr::null_mut(), 0)
        }

        #[no_mangle]
        pub unsafe extern "C" fn $gets_ex(psz_dest: *mut $ffi, cap_dest: size_t,
            ppsz_dest_end: *mut *mut $ffi, p_remaining: *mut size_t, dw_flags: u32) -> HRESULT
        {
            gets::<$cap, $unit>(psz_dest as *mut $unit, cap_dest, ppsz_dest_end as *mut *mut $unit, p_remaining, dw_flags)
        }

        #[no_mangle]
        pub unsafe extern "C" fn $length(psz: *const $ffi, cap_max: size_t, p_len: *mut size_t) -> HRESULT {
            length::<$cap, $unit>(psz as *const $unit, cap_max, p_len)
        }
    };
}

export! { Cch, c_char => u8;
    cat: StringCchCatA, cat_ex: StringCchCatExA,
    cat_n: StringCchCatNA, cat_n_ex: StringCchCatNExA,
    copy: StringCchCopyA, copy_ex: StringCchCopyExA,
    copy_n: StringCchCopyNA, copy_n_ex: StringCchCopyNExA,
    gets: StringCchGetsA, gets_ex: StringCchGetsExA,
    length: StringCchLengthA,
}

export! { Cch, wchar_t => wchar_t;
    cat: StringCchCatW, cat_ex: StringCchCatExW,
    cat_n: StringCchCatNW, cat_n_ex: StringCchCatNExW,
    copy: StringCchCopyW, copy_ex: StringCchCopyExW,
    copy_n: StringCchCopyNW, copy_n_ex: StringCchCopyNExW,
    gets: StringCchGetsW, gets_ex: StringCchGetsExW,
    length: StringCchLengthW,
}

export! { Cb, c_char => u8;
    cat: StringCbCatA, cat_ex: StringCbCatExA,
    cat_n: StringCbCatNA, cat_n_ex: StringCbCatNExA,
    copy: StringCbCopyA, copy_ex: StringCbCopyExA,
    copy_n: StringCbCopyNA, copy_n_ex: StringCbCopyNExA,
    gets: StringCbGetsA, gets_ex: StringCbGetsExA,
    length: StringCbLengthA,
}

export! { Cb, wchar_t => wchar_t;
    cat: StringCbCatW, cat_ex: StringCbCatExW,
    cat_n: StringCbCatNW, cat_n_ex: StringCbCatNExW,
    copy: StringCbCopyW, copy_ex: StringCbCopyExW,
    copy_n: StringCbCopyNW, copy_n_ex: StringCbCopyNExW,
    gets: StringCbGetsW, gets_ex: StringCbGetsExW,
    length: StringCbLengthW,
}
