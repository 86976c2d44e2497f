//! Embeds the trunk output: `frontend/dist` is mirrored into `static/dist`,
//! which `main.rs` bundles with `include_dir!`.

use std::fs;
use std::path::Path;

use fs_extra::dir::{copy, CopyOptions};

const FRONTEND_DIST: &str = "../frontend/dist";
const STATIC_ROOT: &str = "static";

fn main() {
    println!("cargo:rerun-if-changed={FRONTEND_DIST}");

    let static_root = Path::new(STATIC_ROOT);
    let bundle = static_root.join("dist");
    let frontend_dist = Path::new(FRONTEND_DIST);

    if frontend_dist.is_dir() {
        if let Err(err) = fs::remove_dir_all(&bundle) {
            if err.kind() != std::io::ErrorKind::NotFound {
                println!("cargo:warning=could not clear {}: {err}", bundle.display());
            }
        }
        if let Err(err) = fs::create_dir_all(static_root) {
            println!("cargo:warning=could not create {STATIC_ROOT}: {err}");
        }
        let options = CopyOptions::new().overwrite(true);
        if let Err(err) = copy(frontend_dist, static_root, &options) {
            println!("cargo:warning=frontend bundle not copied: {err}");
        }
    } else {
        println!("cargo:warning=no {FRONTEND_DIST}; the host will serve an empty bundle");
    }

    if let Err(err) = fs::create_dir_all(&bundle) {
        panic!("cannot create {}: {err}", bundle.display());
    }
}
