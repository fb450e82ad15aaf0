use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    // Timing parameters are build-time constants. Values are passed through
    // unparsed; the firmware validates them at startup.

    // OutputMirror period in milliseconds (default: 1000)
    if let Ok(period) = env::var("PICO_SENSE_MIRROR_PERIOD_MS") {
        println!("cargo:rustc-env=PICO_SENSE_MIRROR_PERIOD_MS={}", period);
        println!(
            "cargo:warning=Using PICO_SENSE_MIRROR_PERIOD_MS from environment: {}",
            period
        );
    } else {
        println!("cargo:rustc-env=PICO_SENSE_MIRROR_PERIOD_MS=1000");
    }

    // Actuator delay tick in milliseconds (default: 10)
    if let Ok(tick) = env::var("PICO_SENSE_TICK_MS") {
        println!("cargo:rustc-env=PICO_SENSE_TICK_MS={}", tick);
        println!("cargo:warning=Using PICO_SENSE_TICK_MS from environment: {}", tick);
    } else {
        println!("cargo:rustc-env=PICO_SENSE_TICK_MS=10");
    }

    println!("cargo:rerun-if-env-changed=PICO_SENSE_MIRROR_PERIOD_MS");
    println!("cargo:rerun-if-env-changed=PICO_SENSE_TICK_MS");

    // Linker scripts are only needed for the RP2350 firmware image
    if env::var_os("CARGO_FEATURE_PICO2_W").is_some() {
        let out = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
        fs::copy("memory.x", out.join("memory.x")).expect("memory.x is copied to OUT_DIR");
        println!("cargo:rustc-link-search={}", out.display());
        println!("cargo:rustc-link-arg-bins=--nmagic");
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
        println!("cargo:rerun-if-changed=memory.x");
    }
}
