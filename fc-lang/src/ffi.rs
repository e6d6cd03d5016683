//! C ABI for the language orthography database.
//!
//! The declarations matching these functions are in
//! `include/fc_lang_data.h`.

#![allow(unsafe_code)]

use std::ffi::{c_char, c_uint, CStr};
use std::ptr;

use crate::registry::{self, LangRecord, FC_LANG_DATA, FC_LANG_DATA_SZ};

/// A database record, laid out as `struct fc_lang_rec` in C.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
#[allow(non_camel_case_types)]
pub struct fc_lang_rec {
    /// NUL-terminated language code.
    pub lang_code: *const c_char,
    /// Number of slots in `char_set`.
    pub char_set_sz: c_uint,
    pub char_set: *const c_uint,
}

// SAFETY: all pointers refer to immutable static data.
unsafe impl Sync for fc_lang_rec {}

impl fc_lang_rec {
    const NULL: fc_lang_rec = fc_lang_rec {
        lang_code: ptr::null(),
        char_set_sz: 0,
        char_set: ptr::null(),
    };

    const fn new(record: &LangRecord) -> Self {
        fc_lang_rec {
            lang_code: record.c_lang_code().as_ptr(),
            char_set_sz: record.char_set_sz(),
            char_set: record.char_set().as_ptr(),
        }
    }
}

// Built from the registry static so that both point at the same tables.
static FC_LANG_RECS: [fc_lang_rec; FC_LANG_DATA_SZ] = c_records(&FC_LANG_DATA);

const fn c_records(records: &[LangRecord; FC_LANG_DATA_SZ]) -> [fc_lang_rec; FC_LANG_DATA_SZ] {
    let mut out = [fc_lang_rec::NULL; FC_LANG_DATA_SZ];
    let mut i = 0;
    while i < FC_LANG_DATA_SZ {
        out[i] = fc_lang_rec::new(&records[i]);
        i += 1;
    }
    out
}

/// Returns a pointer to the first of [`get_fc_lang_data_size`] records.
#[no_mangle]
pub extern "C" fn get_fc_lang_data() -> *const fc_lang_rec {
    FC_LANG_RECS.as_ptr()
}

#[no_mangle]
pub extern "C" fn get_fc_lang_data_size() -> c_uint {
    FC_LANG_DATA_SZ as c_uint
}

/// Finds a language by its exact code.
///
/// Returns null if the language is not found, or if `lang_code` is null or
/// not valid UTF-8.
///
/// # Safety
///
/// `lang_code` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn fc_lang_find(lang_code: *const c_char) -> *const fc_lang_rec {
    if lang_code.is_null() {
        return ptr::null();
    }
    // SAFETY: non-null, and NUL-terminated per the function contract.
    let lang_code = unsafe { CStr::from_ptr(lang_code) };
    let Ok(lang_code) = lang_code.to_str() else {
        return ptr::null();
    };
    registry::find_index(lang_code).map_or(ptr::null(), |ix| &FC_LANG_RECS[ix] as *const _)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{TK_LANG_ORTH_CHARS, TK_LANG_ORTH_SZ};

    #[test]
    fn records_match_registry() {
        let records =
            unsafe { std::slice::from_raw_parts(get_fc_lang_data(), get_fc_lang_data_size() as _) };
        assert_eq!(records.len(), crate::get_fc_lang_data_size());
        for (rec, record) in records.iter().zip(crate::get_fc_lang_data()) {
            let code = unsafe { CStr::from_ptr(rec.lang_code) };
            assert_eq!(code, record.c_lang_code());
            assert_eq!(rec.char_set_sz, record.char_set_sz());
            assert_eq!(rec.char_set, record.char_set().as_ptr());
        }
    }

    #[test]
    fn find() {
        let rec = unsafe { fc_lang_find(c"tk".as_ptr()) };
        assert!(!rec.is_null());
        let rec = unsafe { &*rec };
        assert_eq!(unsafe { CStr::from_ptr(rec.lang_code) }, c"tk");
        assert_eq!(rec.char_set_sz as usize, TK_LANG_ORTH_SZ);
        let char_set = unsafe { std::slice::from_raw_parts(rec.char_set, TK_LANG_ORTH_SZ) };
        assert_eq!(char_set, TK_LANG_ORTH_CHARS);

        let index = unsafe { (rec as *const fc_lang_rec).offset_from(get_fc_lang_data()) };
        assert_eq!(crate::get_fc_lang_data()[index as usize].lang_code(), "tk");
    }

    #[test]
    fn find_shares_generated_table() {
        let rec = unsafe { &*fc_lang_find(c"vi".as_ptr()) };
        assert_eq!(rec.char_set, crate::data::VI_LANG_ORTH_CHARS.as_ptr());
        assert_eq!(get_fc_lang_data_size(), 248);
    }

    #[test]
    fn find_missing() {
        unsafe {
            assert!(fc_lang_find(ptr::null()).is_null());
            assert!(fc_lang_find(c"".as_ptr()).is_null());
            assert!(fc_lang_find(c"__nonexistent__".as_ptr()).is_null());
            assert!(fc_lang_find(c"\xff\xfe".as_ptr()).is_null());
        }
    }
}
