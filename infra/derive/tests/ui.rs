#[test]
fn featdeck_error_expands() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/error_pass.rs");
}
