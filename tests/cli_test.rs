// Integration tests for the scalarmap binary
// Runs the built executable and checks stdout, stderr and exit codes.

use std::io::Write;
use std::process::Command;

/// Run scalarmap with arguments and return (stdout, stderr, exit_code)
fn run_scalarmap(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_scalarmap"))
        .args(args)
        .output()
        .expect("Failed to execute scalarmap");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Test helper: assert successful execution with exact output
fn assert_success(args: &[&str], expected_stdout: &str) {
    let (stdout, stderr, exit_code) = run_scalarmap(args);

    assert_eq!(
        exit_code, 0,
        "\nExpected success for {:?} but got exit code {}\nStdout: {}\nStderr: {}",
        args, exit_code, stdout, stderr
    );

    assert_eq!(
        stdout.trim(),
        expected_stdout.trim(),
        "\nOutput mismatch for {:?}\nExpected:\n{}\nGot:\n{}",
        args,
        expected_stdout,
        stdout
    );
}

/// Test helper: assert failure with an exit code and a fragment on stderr
fn assert_failure(args: &[&str], expected_exit_code: i32, expected_stderr: &str) {
    let (stdout, stderr, exit_code) = run_scalarmap(args);

    assert_eq!(
        exit_code, expected_exit_code,
        "\nExit code mismatch for {:?}\nStdout: {}\nStderr: {}",
        args, stdout, stderr
    );
    assert!(
        stderr.contains(expected_stderr),
        "\nStderr for {:?} should contain {:?}\nStderr: {}",
        args,
        expected_stderr,
        stderr
    );
}

// ==========================================
// map / real
// ==========================================

#[test]
fn test_map_closed_set() {
    assert_success(
        &[
            "map",
            "float32",
            "float64",
            "longdouble",
            "intc",
            "complex64",
            "complex128",
        ],
        "float32 -> float\n\
         float64 -> double\n\
         longdouble -> long double\n\
         intc -> int\n\
         complex64 -> float _Complex\n\
         complex128 -> double _Complex",
    );
}

#[test]
fn test_map_aliases() {
    assert_success(&["map", "<f8", "np.dtype('F')"], "<f8 -> double\nnp.dtype('F') -> float _Complex");
}

#[test]
fn test_real_component() {
    assert_success(
        &["real", "complex128", "complex64", "float32"],
        "complex128 -> float64 (double)\n\
         complex64 -> float32 (float)\n\
         float32 -> float32 (float)",
    );
}

#[test]
fn test_map_unsupported_type() {
    assert_failure(&["map", "float16"], 110, "E110");
}

#[test]
fn test_real_unsupported_type() {
    assert_failure(&["real", "int64"], 110, "Unsupported type descriptor 'int64'");
}

#[test]
fn test_map_stops_at_first_failure() {
    let (stdout, _, exit_code) = run_scalarmap(&["map", "float64", "uint8", "float32"]);
    assert_eq!(exit_code, 110);
    assert_eq!(stdout.trim(), "float64 -> double");
}

#[test]
fn test_map_syntax_error() {
    assert_failure(&["map", "float64 float32"], 2, "E001");
}

#[test]
fn test_map_requires_argument() {
    let (_, _, exit_code) = run_scalarmap(&["map"]);
    assert_eq!(exit_code, 2);
}

// ==========================================
// signature
// ==========================================

#[test]
fn test_signature_c_prototype() {
    assert_success(
        &["signature", "float64", "float64"],
        "void tabulate_tensor(double* restrict A, const double* restrict w, \
         const double* restrict c, const double* restrict coordinate_dofs, \
         const int* restrict entity_local_index, \
         const uint8_t* restrict quadrature_permutation);",
    );
}

#[test]
fn test_signature_custom_symbol() {
    let (stdout, stderr, exit_code) =
        run_scalarmap(&["signature", "complex64", "float32", "--symbol", "kernel_7"]);
    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.starts_with("void kernel_7(float _Complex* restrict A"));
}

#[test]
fn test_signature_invalid_symbol() {
    let (_, stderr, exit_code) =
        run_scalarmap(&["signature", "float64", "float64", "--symbol", "1bad"]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("not a valid C identifier"), "stderr: {}", stderr);
}

#[test]
fn test_signature_complex_geometry() {
    let args = ["signature", "float64", "np.complex64"];
    assert_failure(&args, 110, "Unsupported type descriptor 'np.complex64'");

    let (_, stderr, _) = run_scalarmap(&args);
    assert!(
        stderr.contains("Geometry must be a real floating type"),
        "stderr: {}",
        stderr
    );
}

#[cfg(not(feature = "jit"))]
#[test]
fn test_signature_jit_unavailable() {
    assert_failure(&["signature", "float64", "float64", "--jit"], 111, "E111");
}

#[cfg(feature = "jit")]
#[test]
fn test_signature_jit_ir() {
    let (stdout, stderr, exit_code) = run_scalarmap(&["signature", "float64", "float64", "--jit"]);
    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("declare void @tabulate_tensor("), "stdout: {}", stdout);
}

// ==========================================
// options
// ==========================================

#[test]
fn test_default_options() {
    assert_success(
        &["options"],
        "{\n  \"optimize\": false,\n  \"blas\": false,\n  \"precision\": \"15\"\n}",
    );
}

#[test]
fn test_options_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"optimize": true, "precision=": "10"}}"#).unwrap();
    let path = file.path().to_str().unwrap();
    assert_success(
        &["options", "--file", path],
        "{\n  \"optimize\": true,\n  \"blas\": false,\n  \"precision\": \"10\"\n}",
    );
}

#[test]
fn test_options_bad_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{\"tensor\": true}}").unwrap();
    let path = file.path().to_str().unwrap();
    assert_failure(&["options", "--file", path], 112, "E112");
}

// ==========================================
// logging
// ==========================================

#[test]
fn test_quiet_by_default() {
    let (_, stderr, exit_code) = run_scalarmap(&["map", "float64"]);
    assert_eq!(exit_code, 0);
    assert!(stderr.is_empty(), "stderr: {}", stderr);
}

#[test]
fn test_verbose_logs_to_stderr() {
    let (stdout, stderr, exit_code) = run_scalarmap(&["-vv", "map", "float64"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "float64 -> double");
    assert!(stderr.contains("classified"), "stderr: {}", stderr);
}
