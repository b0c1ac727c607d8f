#![no_main]

use codec::{Decoded, Euc, EucState};
use descriptor::presets;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the descriptor; the rest is the byte stream.
    let codec = match data[0] % 4 {
        0 => Euc::new(presets::euc_jp()),
        1 => Euc::new(presets::euc_kr()),
        2 => Euc::new(presets::euc_cn()),
        _ => Euc::new(presets::euc_tw()),
    };
    let stream = &data[1..];

    let mut state = EucState::new();
    let mut pos = 0usize;
    while pos < stream.len() {
        match codec.decode(&stream[pos..], &mut state) {
            Ok(Decoded::Complete { wide, consumed }) => {
                pos += consumed.max(1);

                // Whatever decoded must re-encode within max_len.
                let mut buf = [0u8; 4];
                if let Ok(len) = codec.encode(wide, Some(&mut buf), &state) {
                    assert!(len <= codec.max_len());
                }
            }
            Ok(Decoded::Incomplete) => break,
            Err(_) => {
                state.reset();
                pos += 1;
            }
        }
    }
});
