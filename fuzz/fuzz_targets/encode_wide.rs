#![no_main]

use codec::{Euc, EucState};
use descriptor::EucDescriptor;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }

    // Bytes 0..9 shape a descriptor; the rest feeds wide values.
    let counts = [
        (data[0] as usize % 4) + 1,
        (data[1] as usize % 4) + 1,
        (data[2] as usize % 4) + 1,
        (data[3] as usize % 4) + 1,
    ];
    let bits = [
        u32::from(data[4]) << 8,
        u32::from(data[5]) << 8 | 0x80,
        u32::from(data[6]) << 8,
        u32::from(data[7]) << 8,
    ];
    let mask = u32::from(data[8]) << 8 | u32::from(data[9]);
    let Ok(desc) = EucDescriptor::new(counts, bits, mask) else {
        return;
    };
    let codec = Euc::new(desc);

    let state = EucState::new();
    let mut buf = [0u8; 4];
    for chunk in data[10..].chunks_exact(4) {
        let wide = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);

        // Reset request never touches the buffer and reports one byte.
        assert_eq!(codec.encode(wide, None, &state), Ok(1));

        if let Ok(len) = codec.encode(wide, Some(&mut buf), &state) {
            assert!(len >= 1 && len <= codec.max_len());

            // Encoded output must decode without panicking.
            let mut decode_state = EucState::new();
            let _ = codec.decode(&buf[..len], &mut decode_state);
        }

        // Undersized buffers fail cleanly instead of writing out of bounds.
        let mut tiny = [0u8; 0];
        let _ = codec.encode(wide, Some(&mut tiny), &state);
    }
});
