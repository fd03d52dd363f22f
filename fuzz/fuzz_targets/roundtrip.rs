use bitfold::{compress, decompress, CompressionStats, Config};
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            // the search is exponential in max_sequence_length; keep the
            // fuzz iteration cheap
            if data.len() > 256 {
                return;
            }
            let cfg = Config {
                max_sequence_length: 2,
                relaxation: 0.01,
                status_interval: 0,
            };
            let mut stats = CompressionStats::new();
            let compressed = compress(data, &cfg, &mut stats).expect("compress");
            let restored = decompress(&compressed).expect("decompress");
            assert_eq!(restored, data);
        });
    }
}
