use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            // must reject or decode, never panic
            let _ = bitfold::decompress(data);
        });
    }
}
