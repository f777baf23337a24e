use ffi_toolkit::{c_str_to_rust_str, raw_ptr, rust_str_to_c_str};
use once_cell::sync::OnceCell;
use sector_proofs::{SortedPrivateSectorInfo, SortedPublicSectorInfo};

use crate::types::{
    self, err_code_and_msg, FCPResponseStatus, SortedSectorInfoResponse,
    SplitSortedSectorInfoResponse,
};

/// Sorts a JSON array of public sector infos by sealed CID and returns the
/// sorted array.
#[no_mangle]
pub unsafe extern "C" fn sector_proofs_ffi_sort_public_sector_infos(
    sector_infos_json: *const libc::c_char,
) -> *mut types::SortedSectorInfoResponse {
    init_log();

    info!("sort_public_sector_infos: {}", "start");

    let json = c_str_to_rust_str(sector_infos_json);

    let mut response = SortedSectorInfoResponse::default();

    let result = SortedPublicSectorInfo::from_json(json.as_bytes())
        .map(|decoded| SortedPublicSectorInfo::new(decoded.into_values()))
        .and_then(|sorted| sorted.to_json());

    match result {
        Ok(sorted_json) => {
            response.status_code = FCPResponseStatus::FCPNoError;
            response.sector_infos_json = rust_str_to_c_str(String::from_utf8_lossy(&sorted_json));
        }
        Err(err) => {
            let (code, ptr) = err_code_and_msg(&err.into());
            response.status_code = code;
            response.error_msg = ptr;
        }
    }

    info!("sort_public_sector_infos: {}", "finish");

    raw_ptr(response)
}

/// Removes private sector infos with duplicate sector numbers (keeping the
/// first) and returns the remainder sorted by sector number.
#[no_mangle]
pub unsafe extern "C" fn sector_proofs_ffi_sort_private_sector_infos(
    sector_infos_json: *const libc::c_char,
) -> *mut types::SortedSectorInfoResponse {
    init_log();

    info!("sort_private_sector_infos: {}", "start");

    let json = c_str_to_rust_str(sector_infos_json);

    let mut response = SortedSectorInfoResponse::default();

    let result = SortedPrivateSectorInfo::from_json(json.as_bytes())
        .map(|decoded| SortedPrivateSectorInfo::new(decoded.into_values()))
        .and_then(|sorted| sorted.to_json());

    match result {
        Ok(sorted_json) => {
            response.status_code = FCPResponseStatus::FCPNoError;
            response.sector_infos_json = rust_str_to_c_str(String::from_utf8_lossy(&sorted_json));
        }
        Err(err) => {
            let (code, ptr) = err_code_and_msg(&err.into());
            response.status_code = code;
            response.error_msg = ptr;
        }
    }

    info!("sort_private_sector_infos: {}", "finish");

    raw_ptr(response)
}

/// Returns the sector infos at positions `[start, end)` of an already sorted
/// JSON array. The input is not re-sorted. Produces a caller error if the
/// range is out of bounds.
#[no_mangle]
pub unsafe extern "C" fn sector_proofs_ffi_split_sorted_private_sector_infos(
    sorted_sector_infos_json: *const libc::c_char,
    start: libc::size_t,
    end: libc::size_t,
) -> *mut types::SplitSortedSectorInfoResponse {
    init_log();

    info!("split_sorted_private_sector_infos: {}", "start");

    let json = c_str_to_rust_str(sorted_sector_infos_json);

    let mut response = SplitSortedSectorInfoResponse::default();

    let result = SortedPrivateSectorInfo::from_json(json.as_bytes())
        .and_then(|sorted| sorted.split(start, end))
        .and_then(|split| split.to_json());

    match result {
        Ok(split_json) => {
            response.status_code = FCPResponseStatus::FCPNoError;
            response.sector_infos_json = rust_str_to_c_str(String::from_utf8_lossy(&split_json));
        }
        Err(err) => {
            let (code, ptr) = err_code_and_msg(&err.into());
            response.status_code = code;
            response.error_msg = ptr;
        }
    }

    info!("split_sorted_private_sector_infos: {}", "finish");

    raw_ptr(response)
}

////////////////////////////////////////////////////////////////////////////////
// DESTRUCTORS
//////////////

#[no_mangle]
pub unsafe extern "C" fn sector_proofs_ffi_destroy_sorted_sector_info_response(
    ptr: *mut types::SortedSectorInfoResponse,
) {
    let _ = Box::from_raw(ptr);
}

#[no_mangle]
pub unsafe extern "C" fn sector_proofs_ffi_destroy_split_sorted_sector_info_response(
    ptr: *mut types::SplitSortedSectorInfoResponse,
) {
    let _ = Box::from_raw(ptr);
}

////////////////////////////////////////////////////////////////////////////////
// HELPER FUNCTIONS
///////////////////

/// Protects the init off the logger.
static LOG_INIT: OnceCell<bool> = OnceCell::new();

/// Ensures the logger is initialized.
fn init_log() {
    LOG_INIT.get_or_init(|| {
        let _ = pretty_env_logger::try_init_timed();
        true
    });
}

#[cfg(test)]
mod tests {
    use std::ffi::{CStr, CString};
    use std::path::PathBuf;

    use scopeguard::defer;
    use sector_proofs::{
        replica_commitment_v1_to_cid, PrivateSectorInfo, PublicSectorInfo, RegisteredPoStProof,
        RegisteredSealProof, SectorInfo, SectorNumber,
    };

    use super::*;

    fn private(sector_number: SectorNumber, tag: &str) -> PrivateSectorInfo {
        PrivateSectorInfo {
            sector_info: SectorInfo {
                seal_proof: RegisteredSealProof::StackedDrg2KiBV1_1,
                sector_number,
                sealed_cid: replica_commitment_v1_to_cid(&[sector_number as u8; 32]).unwrap(),
            },
            cache_dir_path: PathBuf::from(format!("/cache/{}", tag)),
            post_proof_type: RegisteredPoStProof::StackedDrgWindow2KiBV1,
            sealed_sector_path: PathBuf::from(format!("/sealed/{}", tag)),
        }
    }

    fn to_c_json<T: serde::Serialize>(records: &T) -> CString {
        CString::new(serde_json::to_vec(records).unwrap()).unwrap()
    }

    unsafe fn read_json(ptr: *const libc::c_char) -> Vec<u8> {
        CStr::from_ptr(ptr).to_bytes().to_vec()
    }

    #[test]
    fn test_sort_private_sector_infos() {
        let input = to_c_json(&vec![
            private(7, "first"),
            private(2, "a"),
            private(7, "second"),
        ]);

        unsafe {
            let resp = sector_proofs_ffi_sort_private_sector_infos(input.as_ptr());
            defer!(sector_proofs_ffi_destroy_sorted_sector_info_response(resp));

            assert_eq!(FCPResponseStatus::FCPNoError, (*resp).status_code);

            let sorted = SortedPrivateSectorInfo::from_json(&read_json((*resp).sector_infos_json))
                .unwrap();
            assert_eq!(vec![2, 7], sorted.sector_numbers());
            assert_eq!(PathBuf::from("/cache/first"), sorted.values()[1].cache_dir_path);
        }
    }

    #[test]
    fn test_sort_public_sector_infos() {
        let records = vec![
            PublicSectorInfo::new(
                RegisteredPoStProof::StackedDrgWindow2KiBV1,
                replica_commitment_v1_to_cid(&[2; 32]).unwrap(),
                1,
            ),
            PublicSectorInfo::new(
                RegisteredPoStProof::StackedDrgWindow2KiBV1,
                replica_commitment_v1_to_cid(&[1; 32]).unwrap(),
                2,
            ),
        ];
        let expected = SortedPublicSectorInfo::new(records);

        let mut wire = expected.clone().into_values();
        wire.reverse();
        let input = to_c_json(&wire);

        unsafe {
            let resp = sector_proofs_ffi_sort_public_sector_infos(input.as_ptr());
            defer!(sector_proofs_ffi_destroy_sorted_sector_info_response(resp));

            assert_eq!(FCPResponseStatus::FCPNoError, (*resp).status_code);

            let sorted =
                SortedPublicSectorInfo::from_json(&read_json((*resp).sector_infos_json)).unwrap();
            assert_eq!(expected, sorted);
        }
    }

    #[test]
    fn test_split_sorted_private_sector_infos() {
        let sorted = SortedPrivateSectorInfo::new((0..5).map(|i| private(i, "x")));
        let input = CString::new(sorted.to_json().unwrap()).unwrap();

        unsafe {
            let resp = sector_proofs_ffi_split_sorted_private_sector_infos(input.as_ptr(), 2, 4);
            defer!(sector_proofs_ffi_destroy_split_sorted_sector_info_response(resp));

            assert_eq!(FCPResponseStatus::FCPNoError, (*resp).status_code);

            let split =
                SortedPrivateSectorInfo::from_json(&read_json((*resp).sector_infos_json)).unwrap();
            assert_eq!(vec![2, 3], split.sector_numbers());
        }
    }

    #[test]
    fn test_split_out_of_range_is_caller_error() {
        let sorted = SortedPrivateSectorInfo::new((0..5).map(|i| private(i, "x")));
        let input = CString::new(sorted.to_json().unwrap()).unwrap();

        unsafe {
            let resp = sector_proofs_ffi_split_sorted_private_sector_infos(input.as_ptr(), 4, 2);
            defer!(sector_proofs_ffi_destroy_split_sorted_sector_info_response(resp));

            assert_eq!(FCPResponseStatus::FCPCallerError, (*resp).status_code);
            assert!((*resp).sector_infos_json.is_null());

            let msg = CStr::from_ptr((*resp).error_msg).to_string_lossy();
            assert!(msg.contains("invalid range [4, 2)"));
        }
    }

    #[test]
    fn test_malformed_json_is_caller_error() {
        let input = CString::new("[{\"SectorNumber\": ").unwrap();

        unsafe {
            let resp = sector_proofs_ffi_sort_private_sector_infos(input.as_ptr());
            defer!(sector_proofs_ffi_destroy_sorted_sector_info_response(resp));

            assert_eq!(FCPResponseStatus::FCPCallerError, (*resp).status_code);
            assert!(!(*resp).error_msg.is_null());
        }
    }
}
