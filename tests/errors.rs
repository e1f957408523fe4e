extern crate strsafe;

use strsafe::{cch, failed, hresult, succeeded, Error, HRESULT};
use strsafe::error::{S_OK, STRSAFE_E_END_OF_FILE, STRSAFE_E_INSUFFICIENT_BUFFER, STRSAFE_E_INVALID_PARAMETER};

#[test]
fn test_codes() {
    assert_eq!(S_OK, 0x0);
    assert_eq!(Error::EndOfFile.code(), 0x1);
    assert_eq!(Error::InvalidParameter.code(), 0x2);
    assert_eq!(Error::InsufficientBuffer.code(), 0x4);

    let hr: HRESULT = Error::InsufficientBuffer.into();
    assert_eq!(hr, STRSAFE_E_INSUFFICIENT_BUFFER);
}

#[test]
fn test_from_code() {
    assert_eq!(Error::from_code(STRSAFE_E_END_OF_FILE), Some(Error::EndOfFile));
    assert_eq!(Error::from_code(STRSAFE_E_INVALID_PARAMETER), Some(Error::InvalidParameter));
    assert_eq!(Error::from_code(STRSAFE_E_INSUFFICIENT_BUFFER), Some(Error::InsufficientBuffer));
    assert_eq!(Error::from_code(S_OK), None);
    assert_eq!(Error::from_code(0x6), None);
}

#[test]
fn test_hresult() {
    let mut d = [0u8; 4];
    let ok = cch::copy(&mut d, 4, b"abc");
    assert_eq!(hresult(&ok), S_OK);
    assert!(succeeded(hresult(&ok)));

    let truncated = cch::copy(&mut d, 4, b"abcd");
    assert_eq!(hresult(&truncated), STRSAFE_E_INSUFFICIENT_BUFFER);
    assert!(failed(hresult(&truncated)));
}

#[test]
fn test_display() {
    let err: Box<::std::error::Error + Send> = Box::new(Error::InvalidParameter);
    assert_eq!(err.to_string(), "invalid parameter");
    assert!(Error::InsufficientBuffer.to_string().contains("truncated"));
}
