use lds_gen::{generate, Config};
use proptest::prelude::*;

/// One line of C-ish input: declarations, markers, and noise.
fn line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z_]{1,6}[a-z0-9_]{0,8}".prop_map(|n| format!("int serdes_{}(int x) {{", n)),
        "[a-z_]{1,6}".prop_map(|n| format!("static void *serdes_{} (void *p);", n)),
        "[a-z_]{1,8}".prop_map(|n| format!("void helper_{}(void) {{", n)),
        Just("SERDES_UNUSED".to_string()),
        Just("__attribute__((unused))".to_string()),
        Just("  SERDES_UNUSED".to_string()),
        Just(String::new()),
        "[ -~]{0,30}",
    ]
}

fn render(lines: &[String]) -> String {
    let input = lines.join("\n") + "\n";
    let mut out = Vec::new();
    generate(&Config::default(), input.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// Symbol entries between `global:` and `local:`, without indentation or `;`.
fn exported(script: &str) -> Vec<String> {
    if !script.contains("\nlocal:\n") {
        return Vec::new();
    }
    script
        .lines()
        .skip_while(|l| *l != " global:")
        .skip(1)
        .take_while(|l| *l != "local:")
        .map(|l| {
            let entry = l.strip_prefix("    ").unwrap_or(l);
            entry.strip_suffix(';').unwrap_or(entry).to_string()
        })
        .collect()
}

proptest! {
    #[test]
    fn exported_names_carry_prefix(lines in prop::collection::vec(line(), 0..40)) {
        let script = render(&lines);
        for name in exported(&script) {
            prop_assert!(name.starts_with("serdes_"), "unexpected export {}", name);
        }
    }

    #[test]
    fn exported_names_are_sorted(lines in prop::collection::vec(line(), 0..40)) {
        let names = exported(&render(&lines));
        for pair in names.windows(2) {
            prop_assert!(pair[0] <= pair[1], "{} > {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn marked_declarations_never_exported(
        lines in prop::collection::vec(line(), 0..40),
        name in "[a-z]{4,10}",
        at in 0usize..40,
    ) {
        // The marked name is unique to this test, so no other line can export it.
        let symbol = format!("serdes_marked_{}", name);
        let mut lines = lines;
        let at = at.min(lines.len());
        lines.insert(at, format!("int {}(int x) {{", symbol));
        lines.insert(at, "SERDES_UNUSED".to_string());

        let names = exported(&render(&lines));
        prop_assert!(!names.contains(&symbol));
    }

    #[test]
    fn no_matches_means_wildcard(lines in prop::collection::vec("[a-z ;{}()]{0,20}", 0..20)) {
        let script = render(&lines);
        prop_assert!(!script.contains("local:"));
        prop_assert!(script.contains(" global:\n    *;\n};\n"), "assertion failed; script = {:?}", script);
    }

    #[test]
    fn script_is_well_formed(lines in prop::collection::vec(line(), 0..40)) {
        let script = render(&lines);
        prop_assert!(script.starts_with("# Automatically generated by lds-gen - DO NOT EDIT\n{\n global:\n"), "assertion failed; script = {:?}", script);
        prop_assert!(script.ends_with("    *;\n};\n"), "assertion failed; script = {:?}", script);
    }
}
