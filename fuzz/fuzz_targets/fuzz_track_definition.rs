#![no_main]

use libfuzzer_sys::fuzz_target;
use metro_loop_track::TrackDefinition;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(definition) = TrackDefinition::from_toml_str(content) {
            let _ = definition.build(true);
        }
    }
});
