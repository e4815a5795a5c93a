#![no_main]
use huffman::Huffman;
use libfuzzer_sys::fuzz_target;

// Decoding arbitrary text must fail cleanly or re-encode to the same bits.
fuzz_target!(|data: (Vec<u8>, String)| {
    let (alphabet, bits) = data;
    let Ok(huffman) = Huffman::from_symbols(alphabet) else {
        return;
    };

    if let Ok(decoded) = huffman.decode(&bits) {
        assert_eq!(huffman.encode(&decoded).unwrap(), bits);
    }
});
