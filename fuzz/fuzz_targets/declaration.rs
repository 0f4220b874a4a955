#![no_main]

use libfuzzer_sys::fuzz_target;
use propcoder::{decode_statement, encode_statement, parse, Selection};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(declaration) = parse(text) {
        let _ = encode_statement(&declaration);
        let _ = decode_statement(&declaration);
        assert_eq!(parse(&declaration.to_string()).as_ref(), Ok(&declaration));
    }
    let _ = Selection::parse(text);
});
