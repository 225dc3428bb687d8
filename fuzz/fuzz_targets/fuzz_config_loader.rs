#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Parsing, validation and sequence building must reject bad input without panicking.
    if let Ok(cfg) = rigdemo_config::load_toml(data) {
        if cfg.validate().is_ok() {
            let _ = rigdemo_core::Sequence::try_from(&cfg);
        }
    }
});
