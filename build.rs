use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=RAYLIB_LIB_DIR");
    println!("cargo:rerun-if-env-changed=RAYLIB_STATIC");

    // Only the `raylib` feature pulls in the native library
    if env::var_os("CARGO_FEATURE_RAYLIB").is_none() {
        return;
    }

    if let Some(dir) = env::var_os("RAYLIB_LIB_DIR") {
        let dir = PathBuf::from(dir);
        println!("cargo:rustc-link-search=native={}", dir.display());
    }

    let kind = if env::var_os("RAYLIB_STATIC").is_some() { "static" } else { "dylib" };
    println!("cargo:rustc-link-lib={}=raylib", kind);

    // A static raylib needs its platform dependencies spelled out
    if kind == "static" {
        let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
        match target_os.as_str() {
            "linux" => {
                for lib in ["GL", "m", "pthread", "dl", "rt", "X11"] {
                    println!("cargo:rustc-link-lib={}", lib);
                }
            }
            "macos" => {
                for framework in ["OpenGL", "Cocoa", "IOKit", "CoreVideo"] {
                    println!("cargo:rustc-link-lib=framework={}", framework);
                }
            }
            "windows" => {
                for lib in ["opengl32", "gdi32", "winmm", "user32", "shell32"] {
                    println!("cargo:rustc-link-lib={}", lib);
                }
            }
            _ => {}
        }
    }
}
