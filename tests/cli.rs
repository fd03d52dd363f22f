use std::fs;
use std::process::Command;

#[test]
fn cli_roundtrip_compressor() {
    let comp = env!("CARGO_BIN_EXE_compressor");
    let decomp = env!("CARGO_BIN_EXE_decompressor");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.bin");
    let compressed = dir.path().join("compressed.bfd");
    let output = dir.path().join("output.bin");

    fs::write(&input, b"aaaaaaaabbbbbbbbaaaaaaaa").unwrap();

    let status = Command::new(comp)
        .args([
            input.to_str().unwrap(),
            compressed.to_str().unwrap(),
            "--max-sequence-length",
            "2",
        ])
        .status()
        .expect("compress failed");
    assert!(status.success());

    let status = Command::new(decomp)
        .args([compressed.to_str().unwrap(), output.to_str().unwrap()])
        .status()
        .expect("decompress failed");
    assert!(status.success());

    assert_eq!(fs::read(&input).unwrap(), fs::read(&output).unwrap());
}

#[test]
fn verify_flag_reports_success() {
    let comp = env!("CARGO_BIN_EXE_compressor");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.bin");
    let compressed = dir.path().join("compressed.bfd");
    fs::write(&input, vec![0u8; 32]).unwrap();

    let output = Command::new(comp)
        .args([
            input.to_str().unwrap(),
            compressed.to_str().unwrap(),
            "--max-sequence-length",
            "2",
            "--verify",
        ])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Verification passed"));
}

#[test]
fn json_report_is_well_formed() {
    let comp = env!("CARGO_BIN_EXE_compressor");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.bin");
    let compressed = dir.path().join("compressed.bfd");
    fs::write(&input, b"abababababab").unwrap();

    let output = Command::new(comp)
        .args([
            input.to_str().unwrap(),
            compressed.to_str().unwrap(),
            "--max-sequence-length",
            "2",
            "--json",
        ])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["input_bytes"], 12);
    assert!(report["output_bytes"].as_u64().is_some());
    assert_eq!(report["chunks"], 1);
}

#[test]
fn invalid_extension_error() {
    let decomp = env!("CARGO_BIN_EXE_decompressor");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, b"bad").unwrap();
    let out = dir.path().join("out.bin");
    let output = Command::new(decomp)
        .args([input.to_str().unwrap(), out.to_str().unwrap()])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid file extension"));
}

#[test]
fn truncated_file_error() {
    let decomp = env!("CARGO_BIN_EXE_decompressor");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.bfd");
    fs::write(&input, b"").unwrap();
    let out = dir.path().join("out.bin");
    let output = Command::new(decomp)
        .args([input.to_str().unwrap(), out.to_str().unwrap()])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Verify the file is intact"));
}

#[test]
fn directory_batch_roundtrip() {
    let comp = env!("CARGO_BIN_EXE_compressor");
    let decomp = env!("CARGO_BIN_EXE_decompressor");
    let dir = tempfile::tempdir().unwrap();
    let in_dir = dir.path().join("in");
    let comp_dir = dir.path().join("comp");
    let out_dir = dir.path().join("out");
    fs::create_dir(&in_dir).unwrap();
    fs::write(in_dir.join("a.bin"), vec![0u8; 32]).unwrap();
    fs::write(in_dir.join("b.bin"), b"abababababababab").unwrap();

    let status = Command::new(comp)
        .args([
            in_dir.to_str().unwrap(),
            comp_dir.to_str().unwrap(),
            "--max-sequence-length",
            "2",
        ])
        .status()
        .expect("compress failed");
    assert!(status.success());
    assert!(comp_dir.join("a.bin.bfd").exists());
    assert!(comp_dir.join("b.bin.bfd").exists());

    let status = Command::new(decomp)
        .args([comp_dir.to_str().unwrap(), out_dir.to_str().unwrap()])
        .status()
        .expect("decompress failed");
    assert!(status.success());

    assert_eq!(fs::read(out_dir.join("a.bin")).unwrap(), vec![0u8; 32]);
    assert_eq!(
        fs::read(out_dir.join("b.bin")).unwrap(),
        b"abababababababab".to_vec()
    );
}

#[test]
fn batch_continues_past_bad_file() {
    let decomp = env!("CARGO_BIN_EXE_decompressor");
    let comp = env!("CARGO_BIN_EXE_compressor");
    let dir = tempfile::tempdir().unwrap();
    let in_dir = dir.path().join("in");
    let comp_dir = dir.path().join("comp");
    let out_dir = dir.path().join("out");
    fs::create_dir(&in_dir).unwrap();
    fs::write(in_dir.join("good.bin"), b"cdcdcdcdcdcd").unwrap();

    let status = Command::new(comp)
        .args([
            in_dir.to_str().unwrap(),
            comp_dir.to_str().unwrap(),
            "--max-sequence-length",
            "2",
        ])
        .status()
        .expect("compress failed");
    assert!(status.success());

    // drop a corrupt compressed file into the batch
    fs::write(comp_dir.join("corrupt.bfd"), &[0x0F]).unwrap();

    let output = Command::new(decomp)
        .args([comp_dir.to_str().unwrap(), out_dir.to_str().unwrap()])
        .output()
        .expect("decompress failed");
    // the batch itself succeeds and the good file is restored
    assert!(output.status.success());
    assert_eq!(fs::read(out_dir.join("good.bin")).unwrap(), b"cdcdcdcdcdcd");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("corrupt.bfd"));
}
