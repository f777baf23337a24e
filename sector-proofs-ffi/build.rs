use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=src/");

    let crate_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(err) => {
            eprintln!("CARGO_MANIFEST_DIR not set: {:?}", err);
            std::process::exit(1);
        }
    };
    let hdr_path = crate_dir.join("include").join("sector_proofs_ffi.h");

    if let Err(err) = fs::create_dir_all(crate_dir.join("include")) {
        println!("cargo:warning=could not create include dir: {}", err);
        return;
    }

    // best-effort: a missing header only matters to the Go caller
    match cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("SECTOR_PROOFS_FFI_H")
        .generate()
    {
        Ok(bindings) => {
            bindings.write_to_file(hdr_path);
        }
        Err(err) => {
            println!("cargo:warning=unable to generate header: {}", err);
        }
    }
}
