#![no_main]
use huffman::Huffman;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let huffman = match Huffman::from_symbols(data.iter().copied()) {
        Ok(h) => h,
        Err(_) => {
            assert!(data.is_empty());
            return;
        }
    };

    assert!(huffman.codes().is_prefix_free());
    let bits = huffman.encode(data).unwrap();
    assert_eq!(bits.len() as u64, huffman.encoded_len());
    assert_eq!(huffman.decode(&bits).unwrap(), data);
});
