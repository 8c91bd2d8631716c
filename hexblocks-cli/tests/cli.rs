/// Drive the built `hexblocks` binary through stdin/stdout.
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_hexblocks"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn hexblocks");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin)
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for hexblocks")
}

#[test]
fn no_arguments_prints_usage_to_stderr() {
    let out = run(&[], b"");
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
    assert!(stderr.contains("-b"));
}

#[test]
fn help_flag_prints_usage_to_stderr() {
    let out = run(&["-h"], b"");
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Decode PNG/SVG to hex"));
}

#[test]
fn png_round_trip_through_binary() {
    let png = run(&["-b", "0"], b"0102030405\n");
    assert_eq!(png.status.code(), Some(0));
    assert_eq!(&png.stdout[..8], b"\x89PNG\r\n\x1a\n");

    let hex = run(&["-d"], &png.stdout);
    assert_eq!(hex.status.code(), Some(0));
    assert_eq!(hex.stdout, b"0102030405\n");
}

#[test]
fn svg_round_trip_through_binary() {
    let svg = run(&["-v", "-b", "2"], b"de ad be ef 01");
    assert_eq!(svg.status.code(), Some(0));
    let text = String::from_utf8(svg.stdout.clone()).unwrap();
    assert!(text.contains("<svg width=\"16\" height=\"8\""));
    assert_eq!(text.matches("fill:#").count(), 2);

    let hex = run(&["-d", "-v"], &svg.stdout);
    assert_eq!(hex.status.code(), Some(0));
    assert_eq!(hex.stdout, b"deadbeef01\n");
}

#[test]
fn negative_row_width_means_single_row() {
    let svg = run(&["-v", "-b", "-3"], b"010203040506");
    assert_eq!(svg.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&svg.stdout).contains("<svg width=\"16\" height=\"8\""));
}

#[test]
fn odd_hex_fails_with_exit_1_and_no_output() {
    let out = run(&["-b", "1"], b"01020");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("Error encoding:"), "stderr: {stderr}");
}

#[test]
fn garbage_image_fails_decoding() {
    let out = run(&["-d"], b"not an image");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("Error decoding:"), "stderr: {stderr}");
}

#[test]
fn short_svg_color_fails_decoding() {
    let out = run(&["-d", "-v"], b"<rect style=\"fill:#12\" />\n");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("shorter than 6 hex digits"));
}

#[test]
fn oversized_png_row_width_fails_instead_of_dropping_blocks() {
    let out = run(&["-b", "4294967297"], b"010203040506");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("Error encoding:"), "stderr: {stderr}");
    assert!(stderr.contains("too large"), "stderr: {stderr}");

    let svg = run(&["-v", "-b", "4294967297"], b"010203040506");
    assert_eq!(svg.status.code(), Some(0));
    let hex = run(&["-d", "-v"], &svg.stdout);
    assert_eq!(hex.stdout, b"010203040506\n");
}
