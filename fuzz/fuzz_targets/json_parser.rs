#![no_main]

use koala_json::{ParseOptions, parse};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = parse(data, &ParseOptions::quiet());
});
