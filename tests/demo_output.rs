use em_fields::demo::{self, DemoConfig};

const EXPECTED: [&str; 8] = [
    "Electric Field e1: Components: (1, 2, 3)",
    "Electric Field e2: Components: (4, 5, 6)",
    "Calculated Electric Field: 898.755 N/C",
    "e3 = e1 + e2: Electric Field Components: (5, 7, 9)",
    "Magnetic Field b1: Components: (7, 8, 9)",
    "Magnetic Field b2: Components: (10, 11, 12)",
    "Calculated Magnetic Field: 2e-06 T",
    "b3 = b1 + b2: Magnetic Field Components: (17, 19, 21)",
];

#[test]
fn default_demo_prints_eight_lines_in_order() {
    let mut out = Vec::new();
    demo::run(&DemoConfig::default(), &mut out).expect("writing to a Vec cannot fail");
    let text = String::from_utf8(out).expect("demo output is UTF-8");

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, EXPECTED);
    assert!(text.ends_with('\n'));
}
