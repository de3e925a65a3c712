#[test]
fn roster_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/roster_error_pass.rs");
    t.pass("tests/ui/roster_error_context.rs");
}
