use std::ffi::CString;
use std::mem;
use std::ptr;

use drop_struct_macro_derive::DropStructMacro;
use failure::Error;
use ffi_toolkit::free_c_str;

use sector_proofs::SectorInfoErr;

#[repr(C)]
#[derive(PartialEq, Debug)]
pub enum FCPResponseStatus {
    FCPNoError = 0,
    FCPUnclassifiedError = 1,
    FCPCallerError = 2,
    FCPReceiverError = 3,
}

///////////////////////////////////////////////////////////////////////////////
/// SortedSectorInfoResponse
////////////////////////////

/// Carries a JSON array of sector infos, in sorted order.
#[repr(C)]
#[derive(DropStructMacro)]
pub struct SortedSectorInfoResponse {
    pub status_code: FCPResponseStatus,
    pub error_msg: *const libc::c_char,
    pub sector_infos_json: *const libc::c_char,
}

impl Default for SortedSectorInfoResponse {
    fn default() -> SortedSectorInfoResponse {
        SortedSectorInfoResponse {
            status_code: FCPResponseStatus::FCPNoError,
            error_msg: ptr::null(),
            sector_infos_json: ptr::null(),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
/// SplitSortedSectorInfoResponse
/////////////////////////////////

#[repr(C)]
#[derive(DropStructMacro)]
pub struct SplitSortedSectorInfoResponse {
    pub status_code: FCPResponseStatus,
    pub error_msg: *const libc::c_char,
    pub sector_infos_json: *const libc::c_char,
}

impl Default for SplitSortedSectorInfoResponse {
    fn default() -> SplitSortedSectorInfoResponse {
        SplitSortedSectorInfoResponse {
            status_code: FCPResponseStatus::FCPNoError,
            error_msg: ptr::null(),
            sector_infos_json: ptr::null(),
        }
    }
}

// err_code_and_msg accepts an Error struct and produces a tuple of response
// status code and a pointer to a C string, both of which can be used to set
// fields in a response struct to be returned from an FFI call.
pub fn err_code_and_msg(err: &Error) -> (FCPResponseStatus, *const libc::c_char) {
    use crate::types::FCPResponseStatus::*;

    let msg = CString::new(format!("{}", err).replace('\0', ""))
        .unwrap_or_else(|_| CString::default());
    let ptr = msg.as_ptr();
    mem::forget(msg);

    match err.downcast_ref() {
        Some(SectorInfoErr::DecodeError(_)) => return (FCPCallerError, ptr),
        Some(SectorInfoErr::RangeError { .. }) => return (FCPCallerError, ptr),
        Some(SectorInfoErr::ZeroChunkSize) => return (FCPCallerError, ptr),
        Some(SectorInfoErr::EncodeError(_)) => return (FCPReceiverError, ptr),
        None => (),
    }

    (FCPUnclassifiedError, ptr)
}
