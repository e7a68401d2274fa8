use checksum_calc::cli::Algorithm;
use checksum_calc::hash::{DigestSet, StreamerConfig, compute_checksums};
use checksum_calc::output::{ChecksumReport, write_json, write_report};
use serde_json::Value;

const ABC_MD5_HEX: &str = "900150983CD24FB0D6963F7D28E17F72";
const ABC_SHA1_HEX: &str = "A9993E364706816ABA3E25717850C26C9CD0D89D";
const ABC_SHA256_HEX: &str = "BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD";

fn abc_digests() -> DigestSet {
    compute_checksums(&b"abc"[..], &StreamerConfig::default()).expect("hash abc")
}

#[test]
fn text_report_has_expected_block() {
    let mut output = Vec::new();
    write_report(&mut output, &abc_digests()).expect("write text report");

    let report = String::from_utf8(output).expect("report utf8");
    let expected = format!(
        "Done.\n\
         --------------------------------------\n\
         MD5: {ABC_MD5_HEX}\n\
         SHA-1: {ABC_SHA1_HEX}\n\
         SHA-256: {ABC_SHA256_HEX}\n\n"
    );
    assert_eq!(report, expected);
}

#[test]
fn json_report_has_exact_field_set() {
    let mut output = Vec::new();
    let report = ChecksumReport::from_digests(&abc_digests());
    write_json(&mut output, &report).expect("write json report");

    let value: Value = serde_json::from_slice(&output).expect("valid json");
    let object = value.as_object().expect("json object");

    assert_eq!(object.len(), 3);
    assert_eq!(object["Md5"], ABC_MD5_HEX);
    assert_eq!(object["Sha1"], ABC_SHA1_HEX);
    assert_eq!(object["Sha256"], ABC_SHA256_HEX);
}

#[test]
fn json_output_is_newline_terminated() {
    let mut output = Vec::new();
    let report = ChecksumReport::from_digests(&abc_digests());
    write_json(&mut output, &report).expect("write json report");

    assert_eq!(output.last(), Some(&b'\n'));
}

#[test]
fn missing_algorithm_renders_as_empty_string() {
    let config = StreamerConfig {
        algorithms: vec![Algorithm::Sha256],
        ..StreamerConfig::default()
    };
    let digests = compute_checksums(&b"abc"[..], &config).expect("hash sha256 only");

    let report = ChecksumReport::from_digests(&digests);
    assert_eq!(report.md5, "");
    assert_eq!(report.sha1, "");
    assert_eq!(report.sha256, ABC_SHA256_HEX);
}
